use serde::{Deserialize, Serialize};

/// サイドバーで切り替える画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    ChannelInsights,
    SentimentAnalysis,
    ChannelComparison,
}

impl Page {
    pub fn all() -> [Page; 4] {
        [
            Page::Home,
            Page::ChannelInsights,
            Page::SentimentAnalysis,
            Page::ChannelComparison,
        ]
    }

    pub fn to_string(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ChannelInsights => "Channel Insights",
            Page::SentimentAnalysis => "Sentiment Analysis",
            Page::ChannelComparison => "Channel Comparison",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::ChannelInsights => "📊",
            Page::SentimentAnalysis => "💬",
            Page::ChannelComparison => "⚖️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Enter a channel ID and run the analysis",
            Page::ChannelInsights => "Channel statistics and per-video performance",
            Page::SentimentAnalysis => "Sentiment of the comments on recent uploads",
            Page::ChannelComparison => "Compare statistics across several channels",
        }
    }

    /// 分析結果がないと表示できない画面か
    pub fn requires_analysis(&self) -> bool {
        matches!(self, Page::ChannelInsights | Page::SentimentAnalysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_to_home() {
        assert_eq!(Page::default(), Page::Home);
        assert_eq!(Page::all()[0], Page::Home);
    }

    #[test]
    fn test_page_labels() {
        assert_eq!(Page::ChannelInsights.to_string(), "Channel Insights");
        assert_eq!(Page::SentimentAnalysis.icon(), "💬");
        assert!(Page::SentimentAnalysis.requires_analysis());
        assert!(!Page::ChannelComparison.requires_analysis());
    }
}
