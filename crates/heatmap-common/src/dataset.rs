//! Dataset model for the upstream global-temperature JSON feed.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// The full dataset as served upstream: a reference base temperature plus
/// one variance record per (year, month).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<Observation>,
}

/// A single monthly observation: deviation in degrees Celsius from the
/// dataset's base temperature.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Observation {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub variance: f64,
}

impl Observation {
    /// Absolute temperature for this observation.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }

    /// Zero-based month index, 0-11.
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }
}

impl Dataset {
    /// Decode a dataset from its JSON wire form.
    pub fn from_json(json_str: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Reject datasets the chart builder cannot meaningfully render:
    /// an empty observation list, or any record with a month outside 1-12.
    pub fn validate(&self) -> ChartResult<()> {
        if self.monthly_variance.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        for (index, obs) in self.monthly_variance.iter().enumerate() {
            if obs.month < 1 || obs.month > 12 {
                return Err(ChartError::InvalidMonth {
                    index,
                    month: obs.month,
                });
            }
        }
        Ok(())
    }

    /// Min and max absolute temperature across all observations.
    /// Linear scan; returns None for an empty dataset.
    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        let mut iter = self.monthly_variance.iter();
        let first = iter.next()?.temperature(self.base_temperature);
        let mut min = first;
        let mut max = first;
        for obs in iter {
            let t = obs.temperature(self.base_temperature);
            if t < min {
                min = t;
            }
            if t > max {
                max = t;
            }
        }
        Some((min, max))
    }

    /// First and last year present, by value.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let mut iter = self.monthly_variance.iter();
        let first = iter.next()?.year;
        let mut min = first;
        let mut max = first;
        for obs in iter {
            min = min.min(obs.year);
            max = max.max(obs.year);
        }
        Some((min, max))
    }

    /// Distinct years in first-seen order, one band per year.
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years = Vec::new();
        for obs in &self.monthly_variance {
            if !years.contains(&obs.year) {
                years.push(obs.year);
            }
        }
        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                Observation {
                    year: 1753,
                    month: 1,
                    variance: -1.366,
                },
                Observation {
                    year: 1753,
                    month: 2,
                    variance: -2.223,
                },
                Observation {
                    year: 1754,
                    month: 1,
                    variance: -0.98,
                },
            ],
        }
    }

    #[test]
    fn test_decode_wire_format() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -1.366},
                {"year": 1753, "month": 2, "variance": -2.223}
            ]
        }"#;

        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.monthly_variance.len(), 2);
        assert_eq!(dataset.monthly_variance[1].month, 2);
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![],
        };
        assert!(matches!(
            dataset.validate(),
            Err(ChartError::EmptyDataset)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_month() {
        let mut dataset = sample();
        dataset.monthly_variance[1].month = 13;
        assert!(matches!(
            dataset.validate(),
            Err(ChartError::InvalidMonth { index: 1, month: 13 })
        ));
    }

    #[test]
    fn test_temperature_extent() {
        let (min, max) = sample().temperature_extent().unwrap();
        assert!((min - (8.66 - 2.223)).abs() < 1e-9);
        assert!((max - (8.66 - 0.98)).abs() < 1e-9);
    }

    #[test]
    fn test_distinct_years_first_seen_order() {
        assert_eq!(sample().distinct_years(), vec![1753, 1754]);
    }
}
