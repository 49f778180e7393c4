//! VADERレキシコンによる感情スコアリング

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

/// スコアの符号による分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// テキストの compound スコア（-1.0〜1.0）
pub fn score(text: &str) -> f64 {
    score_batch(&[text]).into_iter().next().unwrap_or(0.0)
}

/// 入力と同じ順序でスコアを返す
pub fn score_batch<S: AsRef<str>>(texts: &[S]) -> Vec<f64> {
    let analyzer = SentimentIntensityAnalyzer::new();
    texts
        .iter()
        .map(|text| {
            analyzer
                .polarity_scores(text.as_ref())
                .get("compound")
                .copied()
                .unwrap_or(0.0)
                .clamp(-1.0, 1.0)
        })
        .collect()
}

/// 平均値。空なら0
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}
