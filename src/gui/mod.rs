// Core modules
pub mod models;
pub mod services;
pub mod state_management;
pub mod utils;
pub mod views; // 画面ごとのビューモデル

// Dioxus UI components
pub mod components;
pub mod styles;

pub use models::Page;
pub use services::AnalysisService;
pub use state_management::{AnalysisStatus, AppEvent, AppState};

pub use components::MainWindow;
