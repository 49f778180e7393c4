use std::sync::Arc;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use tubelens::analytics::AnalysisOptions;
use tubelens::api::youtube::YouTubeClient;
use tubelens::config::{self, AppConfig};
use tubelens::gui::{components::MainWindow, styles::theme::CssClasses, utils, AnalysisService};

fn app() -> Element {
    rsx! {
        div {
            class: CssClasses::APP,
            style: "
                height: 100vh;
                margin: 0;
                padding: 0;
                overflow: hidden;
            ",

            MainWindow {}
        }
    }
}

/// 設定ファイルのログ設定を先に読むため、検証前の設定を返す
fn load_raw_config() -> AppConfig {
    config::ConfigManager::new()
        .and_then(|manager| manager.load_config())
        .unwrap_or_else(|e| {
            eprintln!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        })
}

fn main() -> Result<()> {
    let mut config = load_raw_config();

    // ガードはプロセス終了まで保持する
    let _log_guard = utils::init_logging(&config.log)?;

    tracing::info!("🎬 Starting tubelens - YouTube Channel Analysis");

    config.apply_env_overrides();
    if let Err(e) = config.validate() {
        utils::log_error_with_context(&e, "configuration");
        return Err(e);
    }

    let client = YouTubeClient::new(&config.api).context("Failed to build YouTube API client")?;
    tracing::info!(base_url = client.base_url(), "🔌 YouTube Data API client ready");

    let service = AnalysisService::new(Arc::new(client), AnalysisOptions::from(&config.analysis));

    tracing::info!(
        "🪟 ウィンドウ設定: {}x{}",
        config.window.width,
        config.window.height
    );

    let launch_builder = dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::tao::window::WindowBuilder::new()
                    .with_title("tubelens - YouTube Channel Analysis")
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                        config.window.width as f64,
                        config.window.height as f64,
                    ))
                    .with_resizable(true),
            ),
        )
        .with_context(service);

    launch_builder.launch(app);

    tracing::info!("👋 tubelens shutting down");
    Ok(())
}
