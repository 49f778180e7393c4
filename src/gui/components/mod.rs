// Dioxus GUI Components Module

pub mod channel_insights;
pub mod charts;
pub mod comparison_page;
pub mod data_table;
pub mod home_page;
pub mod main_window;
pub mod notice_banner;
pub mod sentiment_page;
pub mod sidebar;

pub use channel_insights::ChannelInsightsPage;
pub use charts::{BarChartCard, HistogramCard, StatCard};
pub use comparison_page::ComparisonPage;
pub use data_table::DataTable;
pub use home_page::HomePage;
pub use main_window::MainWindow;
pub use notice_banner::{AnalysisPlaceholder, NoticeBanner, NoticeList};
pub use sentiment_page::SentimentPage;
pub use sidebar::Sidebar;
