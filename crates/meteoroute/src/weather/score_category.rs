use serde::{Deserialize, Serialize};

use super::WeatherError;

/// Band of a composite weather score, used to pick a marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherScoreCategory {
    Terrible,
    Bad,
    Good,
    Excellent,
}

impl WeatherScoreCategory {
    pub const ALL: [WeatherScoreCategory; 4] = [
        WeatherScoreCategory::Terrible,
        WeatherScoreCategory::Bad,
        WeatherScoreCategory::Good,
        WeatherScoreCategory::Excellent,
    ];

    pub fn from_score(score: i32) -> Result<Self, WeatherError> {
        let score = u8::try_from(score)
            .ok()
            .filter(|score| *score <= 100)
            .ok_or(WeatherError::ScoreOutOfRange(score))?;

        Ok(Self::for_score(score))
    }

    /// Scores above 100 fall in the top band.
    pub(crate) fn for_score(score: u8) -> Self {
        match score {
            0..=25 => WeatherScoreCategory::Terrible,
            26..=50 => WeatherScoreCategory::Bad,
            51..=75 => WeatherScoreCategory::Good,
            _ => WeatherScoreCategory::Excellent,
        }
    }

    pub fn min_score(&self) -> u8 {
        match self {
            WeatherScoreCategory::Terrible => 0,
            WeatherScoreCategory::Bad => 26,
            WeatherScoreCategory::Good => 51,
            WeatherScoreCategory::Excellent => 76,
        }
    }

    pub fn max_score(&self) -> u8 {
        match self {
            WeatherScoreCategory::Terrible => 25,
            WeatherScoreCategory::Bad => 50,
            WeatherScoreCategory::Good => 75,
            WeatherScoreCategory::Excellent => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherScoreCategory::Terrible => "terrible",
            WeatherScoreCategory::Bad => "bad",
            WeatherScoreCategory::Good => "good",
            WeatherScoreCategory::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for WeatherScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
