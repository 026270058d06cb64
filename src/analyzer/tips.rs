use crate::models::{EntityKind, MedicalEntity};

/// Fixed lifestyle tips keyed off the detected entities, one per matching
/// entity, with a generic checkup tip when nothing matched.
pub fn health_tips(entities: &[MedicalEntity]) -> Vec<String> {
    let mut tips = Vec::new();

    for entity in entities {
        let text = entity.text.to_lowercase();
        match entity.kind {
            EntityKind::Test => {
                if text.contains("crp") {
                    tips.push(
                        "💡 CRP 수치가 높다면 염증을 줄이기 위해 금연, 규칙적인 운동, 건강한 식단을 유지하세요."
                            .to_string(),
                    );
                } else if text.contains("hba1c") || text.contains("glucose") {
                    tips.push(
                        "💡 혈당 관리를 위해 탄수화물 섭취를 조절하고 정기적인 운동을 하세요."
                            .to_string(),
                    );
                } else if text.contains("cholesterol") {
                    tips.push(
                        "💡 콜레스테롤 관리를 위해 포화지방 섭취를 줄이고 오메가-3가 풍부한 음식을 섭취하세요."
                            .to_string(),
                    );
                } else if text.contains("bp") {
                    tips.push(
                        "💡 혈압 관리를 위해 나트륨 섭취를 줄이고 스트레스를 관리하세요."
                            .to_string(),
                    );
                }
            }
            EntityKind::Disease => {
                if text.contains("당뇨병") || text.contains("diabetes") {
                    tips.push(
                        "💡 당뇨병 관리: 정기적인 혈당 측정, 균형잡힌 식단, 규칙적인 운동이 중요합니다."
                            .to_string(),
                    );
                } else if text.contains("고혈압") || text.contains("hypertension") {
                    tips.push(
                        "💡 고혈압 관리: 염분 섭취 제한, 정기적인 혈압 측정, 금연이 필요합니다."
                            .to_string(),
                    );
                }
            }
            _ => {}
        }
    }

    if tips.is_empty() {
        tips.push("💡 정기적인 건강검진과 의사와의 상담을 통해 건강을 관리하세요.".to_string());
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::recognize::recognize;

    #[test]
    fn crp_entity_yields_inflammation_tip() {
        let tips = health_tips(&recognize("CRP 12.5"));
        assert_eq!(tips.len(), 1);
        assert!(tips[0].contains("염증"));
    }

    #[test]
    fn diabetes_entities_yield_glucose_tips() {
        let tips = health_tips(&recognize("당뇨병 HbA1c 7.8"));
        assert!(tips.iter().any(|t| t.contains("혈당 관리")));
        assert!(tips.iter().any(|t| t.contains("당뇨병 관리")));
    }

    #[test]
    fn no_entities_yield_generic_tip() {
        let tips = health_tips(&[]);
        assert_eq!(tips.len(), 1);
        assert!(tips[0].contains("건강검진"));
    }
}
