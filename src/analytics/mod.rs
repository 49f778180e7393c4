pub mod channel_analyzer;
pub mod duration;
pub mod models;
pub mod sentiment;
pub mod spam_filter;

pub use channel_analyzer::*;
pub use models::*;
pub use sentiment::SentimentLabel;
pub use spam_filter::{filter_spam, is_spam};
