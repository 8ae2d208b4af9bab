//! Personality dimensions: per-dimension means and their three-way buckets.

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerVector, SCALE_MIDPOINT};

/// One of the four independent personality axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKey {
    Social,
    Decision,
    Energy,
    Leadership,
}

impl DimensionKey {
    /// Fixed key order used for composite keys, traits and descriptions.
    pub const ALL: [DimensionKey; 4] = [
        DimensionKey::Social,
        DimensionKey::Decision,
        DimensionKey::Energy,
        DimensionKey::Leadership,
    ];
}

/// Question index -> dimension. Indices not listed feed no dimension.
pub const QUESTION_DIMENSIONS: [(usize, DimensionKey); 10] = [
    (0, DimensionKey::Social),
    (1, DimensionKey::Social),
    (2, DimensionKey::Social),
    (3, DimensionKey::Decision),
    (4, DimensionKey::Decision),
    (5, DimensionKey::Energy),
    (6, DimensionKey::Energy),
    (7, DimensionKey::Leadership),
    (8, DimensionKey::Leadership),
    (9, DimensionKey::Leadership),
];

/// Mean answer per dimension, each within `[0, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub social: f64,
    pub decision: f64,
    pub energy: f64,
    pub leadership: f64,
}

impl DimensionScores {
    pub fn get(&self, key: DimensionKey) -> f64 {
        match key {
            DimensionKey::Social => self.social,
            DimensionKey::Decision => self.decision,
            DimensionKey::Energy => self.energy,
            DimensionKey::Leadership => self.leadership,
        }
    }
}

/// Reduce an answer vector to four dimension means.
///
/// A dimension with no mapped answer present (short vector) gets the scale
/// midpoint.
pub fn aggregate_dimensions(answers: &AnswerVector) -> DimensionScores {
    let mean = |key: DimensionKey| -> f64 {
        let (sum, count) = QUESTION_DIMENSIONS
            .iter()
            .filter(|(_, dim)| *dim == key)
            .filter_map(|(index, _)| answers.get(*index))
            .fold((0u32, 0u32), |(s, c), a| (s + u32::from(a), c + 1));
        if count == 0 {
            SCALE_MIDPOINT
        } else {
            f64::from(sum) / f64::from(count)
        }
    };

    DimensionScores {
        social: mean(DimensionKey::Social),
        decision: mean(DimensionKey::Decision),
        energy: mean(DimensionKey::Energy),
        leadership: mean(DimensionKey::Leadership),
    }
}

/// Which third of the scale a mean lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// `m < 1.0`
    Low,
    /// `1.0 <= m < 2.0`
    Mid,
    /// `m >= 2.0`
    High,
}

impl Bucket {
    pub fn from_mean(mean: f64) -> Self {
        if mean < 1.0 {
            Bucket::Low
        } else if mean < 2.0 {
            Bucket::Mid
        } else {
            Bucket::High
        }
    }
}

/// A dimension's discrete style, e.g. social/low = `extrovert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleLabel {
    pub dimension: DimensionKey,
    pub bucket: Bucket,
}

impl StyleLabel {
    pub fn new(dimension: DimensionKey, bucket: Bucket) -> Self {
        Self { dimension, bucket }
    }

    pub fn from_mean(dimension: DimensionKey, mean: f64) -> Self {
        Self::new(dimension, Bucket::from_mean(mean))
    }

    pub fn as_str(&self) -> &'static str {
        use Bucket::*;
        use DimensionKey::*;
        match (self.dimension, self.bucket) {
            (Social, Low) => "extrovert",
            (Social, Mid) => "ambivert",
            (Social, High) => "introvert",
            (Decision, Low) => "analytical",
            (Decision, Mid) => "balanced",
            (Decision, High) => "creative",
            (Energy, Low) => "active",
            (Energy, Mid) => "moderate",
            (Energy, High) => "calm",
            (Leadership, Low) => "leader",
            (Leadership, Mid) => "collaborator",
            (Leadership, High) => "supporter",
        }
    }
}

impl std::fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StyleLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The four style labels, always in social-decision-energy-leadership order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleProfile {
    pub social: StyleLabel,
    pub decision: StyleLabel,
    pub energy: StyleLabel,
    pub leadership: StyleLabel,
}

impl StyleProfile {
    pub fn from_scores(scores: &DimensionScores) -> Self {
        Self {
            social: StyleLabel::from_mean(DimensionKey::Social, scores.social),
            decision: StyleLabel::from_mean(DimensionKey::Decision, scores.decision),
            energy: StyleLabel::from_mean(DimensionKey::Energy, scores.energy),
            leadership: StyleLabel::from_mean(DimensionKey::Leadership, scores.leadership),
        }
    }

    pub fn labels(&self) -> [StyleLabel; 4] {
        [self.social, self.decision, self.energy, self.leadership]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[u8]) -> AnswerVector {
        AnswerVector::try_new(values.iter().copied()).unwrap()
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(Bucket::from_mean(0.999), Bucket::Low);
        assert_eq!(Bucket::from_mean(1.0), Bucket::Mid);
        assert_eq!(Bucket::from_mean(1.999), Bucket::Mid);
        assert_eq!(Bucket::from_mean(2.0), Bucket::High);
        assert_eq!(Bucket::from_mean(3.0), Bucket::High);
        assert_eq!(Bucket::from_mean(0.0), Bucket::Low);
    }

    #[test]
    fn aggregates_mapped_indices_only() {
        // social: 0,1,2 | decision: 3,4 | energy: 5,6 | leadership: 7,8,9 | 10+ ignored
        let scores = aggregate_dimensions(&answers(&[0, 1, 2, 3, 3, 0, 1, 2, 2, 2, 0, 0]));
        assert_eq!(scores.social, 1.0);
        assert_eq!(scores.decision, 3.0);
        assert_eq!(scores.energy, 0.5);
        assert_eq!(scores.leadership, 2.0);
    }

    #[test]
    fn short_vector_defaults_missing_dimensions_to_midpoint() {
        let scores = aggregate_dimensions(&answers(&[3, 3]));
        assert_eq!(scores.social, 3.0);
        assert_eq!(scores.decision, SCALE_MIDPOINT);
        assert_eq!(scores.energy, SCALE_MIDPOINT);
        assert_eq!(scores.leadership, SCALE_MIDPOINT);

        let empty = aggregate_dimensions(&AnswerVector::default());
        for key in DimensionKey::ALL {
            assert_eq!(empty.get(key), SCALE_MIDPOINT);
        }
    }

    #[test]
    fn means_stay_on_scale() {
        for fill in 0..=3u8 {
            let scores = aggregate_dimensions(&answers(&[fill; 14]));
            for key in DimensionKey::ALL {
                let m = scores.get(key);
                assert!((0.0..=3.0).contains(&m), "{key:?} = {m}");
            }
        }
    }

    #[test]
    fn style_profile_labels() {
        let profile = StyleProfile::from_scores(&DimensionScores {
            social: 0.2,
            decision: 1.0,
            energy: 2.0,
            leadership: 1.7,
        });
        let names: Vec<_> = profile.labels().iter().map(StyleLabel::as_str).collect();
        assert_eq!(names, ["extrovert", "balanced", "calm", "collaborator"]);
    }
}
