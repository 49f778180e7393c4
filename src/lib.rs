pub mod analytics;
pub mod api;
pub mod config;
pub mod gui;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export the main error types for convenience
pub use analytics::AnalysisError;
pub use api::youtube::FetchError;

// Re-export the analysis entry points
pub use analytics::{analyze_channel, compare_channels, AnalysisOptions, AnalysisResult};
pub use api::youtube::{YouTubeApi, YouTubeClient};
pub use config::{AppConfig, ConfigManager};
