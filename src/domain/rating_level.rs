use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed three-valued rating used for accuracy, fluency and integrity.
///
/// The wire form is the Chinese character the grading backend is
/// instructed to emit; anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingLevel {
    #[serde(rename = "高")]
    High,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "低")]
    Low,
}

impl RatingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLevel::High => "高",
            RatingLevel::Medium => "中",
            RatingLevel::Low => "低",
        }
    }
}

impl FromStr for RatingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "高" => Ok(RatingLevel::High),
            "中" => Ok(RatingLevel::Medium),
            "低" => Ok(RatingLevel::Low),
            other => Err(format!("Invalid rating level: {}", other)),
        }
    }
}

impl fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
