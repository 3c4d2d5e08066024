use serde::Serialize;

pub const FREEZING_RISK_WEIGHT: f64 = 1.8;
pub const PRECIPITATION_WEIGHT: f64 = 1.3;
pub const SNOWFALL_WEIGHT: f64 = 1.5;
pub const VISIBILITY_WEIGHT: f64 = 1.6;
pub const WIND_GUST_WEIGHT: f64 = 1.6;

pub const WORST_INTENSITY_SCORE: u8 = 100;

/// Threshold ladder scanned top-down: the first threshold the value reaches
/// gives the score, otherwise the fallback applies.
struct Ladder {
    steps: &'static [(f64, u8)],
    fallback: u8,
}

impl Ladder {
    fn score(&self, value: f64) -> u8 {
        self.steps
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map_or(self.fallback, |&(_, score)| score)
    }
}

// Freezing level and visibility are safer the higher they are.
const FREEZING_RISK_LADDER: Ladder = Ladder {
    steps: &[(1500.0, 0), (1000.0, 20), (500.0, 40), (200.0, 70)],
    fallback: 100,
};

const PRECIPITATION_LADDER: Ladder = Ladder {
    steps: &[(8.0, 100), (4.0, 70), (1.0, 40), (0.1, 20)],
    fallback: 0,
};

const SNOWFALL_LADDER: Ladder = Ladder {
    steps: &[(3.0, 100), (1.5, 70), (0.5, 40), (0.1, 20)],
    fallback: 0,
};

const VISIBILITY_LADDER: Ladder = Ladder {
    steps: &[(10_000.0, 0), (7_000.0, 20), (4_000.0, 40), (1_000.0, 70)],
    fallback: 100,
};

const WIND_GUST_LADDER: Ladder = Ladder {
    steps: &[(40.0, 100), (30.0, 70), (20.0, 40), (10.0, 20)],
    fallback: 0,
};

/// One scored weather condition, holding its raw measurement.
///
/// - `FreezingRisk`: freezing level height in meters
/// - `Precipitation`: rain over the last hour in millimeters
/// - `Snowfall`: snow over the last hour in centimeters
/// - `Visibility`: visibility in meters
/// - `WindGust`: gust speed in km/h
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "condition", content = "value")]
pub enum WeatherCondition {
    FreezingRisk(f64),
    Precipitation(f64),
    Snowfall(f64),
    Visibility(f64),
    WindGust(f64),
}

impl WeatherCondition {
    pub fn name(&self) -> &'static str {
        match self {
            WeatherCondition::FreezingRisk(_) => "Freezing Risk",
            WeatherCondition::Precipitation(_) => "Precipitation",
            WeatherCondition::Snowfall(_) => "Snowfall",
            WeatherCondition::Visibility(_) => "Visibility",
            WeatherCondition::WindGust(_) => "WindGust",
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            WeatherCondition::FreezingRisk(value)
            | WeatherCondition::Precipitation(value)
            | WeatherCondition::Snowfall(value)
            | WeatherCondition::Visibility(value)
            | WeatherCondition::WindGust(value) => value,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            WeatherCondition::FreezingRisk(_) => FREEZING_RISK_WEIGHT,
            WeatherCondition::Precipitation(_) => PRECIPITATION_WEIGHT,
            WeatherCondition::Snowfall(_) => SNOWFALL_WEIGHT,
            WeatherCondition::Visibility(_) => VISIBILITY_WEIGHT,
            WeatherCondition::WindGust(_) => WIND_GUST_WEIGHT,
        }
    }

    fn ladder(&self) -> &'static Ladder {
        match self {
            WeatherCondition::FreezingRisk(_) => &FREEZING_RISK_LADDER,
            WeatherCondition::Precipitation(_) => &PRECIPITATION_LADDER,
            WeatherCondition::Snowfall(_) => &SNOWFALL_LADDER,
            WeatherCondition::Visibility(_) => &VISIBILITY_LADDER,
            WeatherCondition::WindGust(_) => &WIND_GUST_LADDER,
        }
    }

    /// Severity in `0..=100`, 100 being the worst.
    pub fn intensity_score(&self) -> u8 {
        self.ladder().score(self.value())
    }

    pub fn weighted_score(&self) -> f64 {
        f64::from(self.intensity_score()) * self.weight()
    }

    pub fn worst_weighted_score(&self) -> f64 {
        f64::from(WORST_INTENSITY_SCORE) * self.weight()
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({}/100)", self.name(), self.value(), self.intensity_score())
    }
}
