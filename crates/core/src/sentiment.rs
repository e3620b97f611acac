//! Sentiment category classification and scoring.
//!
//! Posts arrive labeled with a free-form category string. The three known
//! labels map to fixed numeric scores; anything else is tolerated as
//! `Unknown` and scores neutral.

use serde::{Deserialize, Serialize};

/// Sentiment classification of a social-media post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SentimentCategory {
    Bullish,
    Neutral,
    Bearish,
    /// Any label outside the known three. Never rejected; scores neutral.
    Unknown,
}

impl From<String> for SentimentCategory {
    fn from(label: String) -> Self {
        Self::parse_label(&label)
    }
}

impl SentimentCategory {
    /// Parses a category label. Unrecognized labels yield `Unknown`,
    /// never an error.
    #[must_use]
    pub fn parse_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "bullish" => SentimentCategory::Bullish,
            "neutral" => SentimentCategory::Neutral,
            "bearish" => SentimentCategory::Bearish,
            _ => SentimentCategory::Unknown,
        }
    }

    /// Returns the string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Bullish => "bullish",
            SentimentCategory::Neutral => "neutral",
            SentimentCategory::Bearish => "bearish",
            SentimentCategory::Unknown => "unknown",
        }
    }

    /// Numeric score for averaging: bullish +1, bearish -1, everything
    /// else 0.
    #[must_use]
    pub fn score(&self) -> f64 {
        match self {
            SentimentCategory::Bullish => 1.0,
            SentimentCategory::Bearish => -1.0,
            SentimentCategory::Neutral | SentimentCategory::Unknown => 0.0,
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
