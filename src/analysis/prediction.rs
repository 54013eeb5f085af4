use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_CYCLE_DAYS: i64 = 28;
const SHORT_CYCLE_DAYS: i64 = 21;
const LONG_CYCLE_DAYS: i64 = 35;
const MAX_GAP_SPREAD_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub average_cycle_length: i64,
    pub next_period_date: DateTime<Utc>,
    pub risk_level: String,
    pub current_phase: String,
    pub suggestions: Vec<String>,
}

/// Day delta as the rounded quotient of the millisecond gap over 24h. No
/// timezone normalization; callers pass date-only-semantics instants.
fn day_gap(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    ((to - from).num_milliseconds() as f64 / 86_400_000.0).round() as i64
}

/// Predicts the next cycle from historical start dates (any order).
///
/// Fewer than two data points fall back to a fixed 28-day cycle. With two
/// or more, the average of consecutive start-date gaps sets the length;
/// averages outside 21..=35 days classify as Medium risk, and a gap spread
/// above 7 days overrides to High.
pub fn predict(start_dates: &[DateTime<Utc>], now: DateTime<Utc>) -> Prediction {
    let mut sorted = start_dates.to_vec();
    sorted.sort();

    let mut average_cycle_length = DEFAULT_CYCLE_DAYS;
    let mut risk_level = "Low";
    let mut suggestions = vec!["Track your symptoms daily".to_string()];

    let next_period_date = match sorted.len() {
        0 => now + Duration::days(DEFAULT_CYCLE_DAYS),
        1 => sorted[0] + Duration::days(DEFAULT_CYCLE_DAYS),
        n => {
            let gaps: Vec<i64> = sorted.windows(2).map(|w| day_gap(w[0], w[1])).collect();
            let total: i64 = gaps.iter().sum();
            average_cycle_length = (total as f64 / gaps.len() as f64).round() as i64;

            if average_cycle_length < SHORT_CYCLE_DAYS {
                risk_level = "Medium";
                suggestions =
                    vec!["Short cycle detected. Ensure adequate nutrition and rest.".to_string()];
            } else if average_cycle_length > LONG_CYCLE_DAYS {
                risk_level = "Medium";
                suggestions =
                    vec!["Long cycle detected. Consider stress reduction techniques.".to_string()];
            }

            // Irregularity overrides the length-based classification.
            let min_gap = gaps.iter().copied().min().unwrap_or(0);
            let max_gap = gaps.iter().copied().max().unwrap_or(0);
            if max_gap - min_gap > MAX_GAP_SPREAD_DAYS {
                risk_level = "High";
                suggestions = vec![
                    "High cycle variation. Consider consulting a healthcare provider.".to_string(),
                ];
            }

            sorted[n - 1] + Duration::days(average_cycle_length)
        }
    };

    Prediction {
        average_cycle_length,
        next_period_date,
        risk_level: risk_level.to_string(),
        current_phase: "Unknown".to_string(),
        suggestions,
    }
}
