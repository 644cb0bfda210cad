//! Daily forecast model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's high/low temperature summary.
/// A forecast is an ordered sequence of these, as long as the upstream
/// response, nominally the requested number of days.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastDay {
    /// Calendar date this entry covers
    pub date: NaiveDate,
    /// Daily maximum temperature in Celsius
    pub high_temp: f64,
    /// Daily minimum temperature in Celsius
    pub low_temp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_day_round_trip() {
        let day = ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            high_temp: 5.2,
            low_temp: -1.4,
        };
        let json = serde_json::to_string(&day).expect("serialize");
        let back: ForecastDay = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(day, back);
    }
}
