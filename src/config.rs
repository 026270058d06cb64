use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "MedScout";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum admission score for a paper in a general search.
pub const ADMISSION_THRESHOLD: f64 = 0.10;

/// Relaxed admission score for lipid-related searches whose candidate
/// paper carries lipid-domain vocabulary.
pub const LIPID_ADMISSION_THRESHOLD: f64 = 0.08;

/// Minimum score for a paper in a spinal-cord-stimulation search.
pub const SCS_ADMISSION_THRESHOLD: f64 = 0.05;

/// Denominator normalizing the summarization scorer's point scale to [0, 1].
pub const SUMMARIZATION_SCORE_SCALE: f64 = 30.0;

/// Publication-date window appended to every synthesized query.
pub const PUBLICATION_WINDOW_START: u16 = 2014;
pub const PUBLICATION_WINDOW_END: u16 = 2024;

pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Install the global tracing subscriber, honoring `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .init();
}
