//! Population-level relationship health.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::friend::{assess_all, FriendRecord};
use crate::health::ContactAssessment;

/// Gauge value when no friend is categorized.
pub const NO_DATA_SCORE: u8 = 100;

/// Lower bounds (inclusive) of each qualitative band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeBands {
    pub excellent: u8,
    pub good: u8,
    pub fair: u8,
    pub poor: u8,
}

impl Default for GaugeBands {
    fn default() -> Self {
        Self {
            excellent: 90,
            good: 70,
            fair: 50,
            poor: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl GaugeBands {
    pub fn band(&self, score: u8) -> HealthBand {
        if score >= self.excellent {
            HealthBand::Excellent
        } else if score >= self.good {
            HealthBand::Good
        } else if score >= self.fair {
            HealthBand::Fair
        } else if score >= self.poor {
            HealthBand::Poor
        } else {
            HealthBand::Critical
        }
    }
}

/// Mean health score across categorized friends, rounded.
///
/// Defaults to [`NO_DATA_SCORE`] when nobody is categorized.
pub fn aggregate_health(friends: &[FriendRecord], now: DateTime<Utc>) -> u8 {
    mean_health(&assess_all(friends, now))
}

/// Rounded mean over already-assessed friends.
pub fn mean_health(assessed: &[(&FriendRecord, ContactAssessment)]) -> u8 {
    if assessed.is_empty() {
        return NO_DATA_SCORE;
    }
    let sum: u32 = assessed.iter().map(|(_, a)| u32::from(a.score)).sum();
    (f64::from(sum) / assessed.len() as f64).round() as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeReport {
    pub score: u8,
    pub band: HealthBand,
    /// Friends that contributed to the score.
    pub categorized: usize,
    /// Of those, how many need a reminder right now.
    pub overdue: usize,
}

pub fn gauge_report(friends: &[FriendRecord], now: DateTime<Utc>, bands: GaugeBands) -> GaugeReport {
    let assessed = assess_all(friends, now);
    let score = mean_health(&assessed);
    GaugeReport {
        score,
        band: bands.band(score),
        categorized: assessed.len(),
        overdue: assessed.iter().filter(|(_, a)| a.needs_reminder()).count(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: u8,
}

/// Synthesized score history ending at `end` with today's real score.
///
/// Not a persisted record: a sinusoid plus uniform noise around `current`.
pub fn simulate_trend<R: Rng + ?Sized>(
    current: u8,
    days: usize,
    end: NaiveDate,
    rng: &mut R,
) -> Vec<TrendPoint> {
    (0..days)
        .map(|i| {
            let offset = (days - 1 - i) as i64;
            let date = end - Duration::days(offset);
            let score = if offset == 0 {
                current
            } else {
                let wave = (i as f64 * 0.4).sin() * 8.0;
                let noise: f64 = rng.gen_range(-5.0..=5.0);
                (f64::from(current) + wave + noise).clamp(0.0, 100.0).round() as u8
            };
            TrendPoint { date, score }
        })
        .collect()
}
