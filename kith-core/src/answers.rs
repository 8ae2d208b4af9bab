//! Quiz answer vector.

use serde::{Deserialize, Serialize};

use crate::error::AnswerError;

/// Highest answer value on the quiz scale.
pub const MAX_ANSWER: u8 = 3;

/// Midpoint of the 0-3 scale, used wherever an average has no data.
pub const SCALE_MIDPOINT: f64 = 1.5;

/// Ordered quiz responses, each in `0..=3`.
///
/// Length depends on the quiz variant (age group) and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u8>")]
pub struct AnswerVector(Vec<u8>);

impl AnswerVector {
    /// Build a vector, rejecting any value outside `0..=3`.
    pub fn try_new<I>(values: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, v)| {
                let value = v.into();
                u8::try_from(value)
                    .ok()
                    .filter(|a| *a <= MAX_ANSWER)
                    .ok_or(AnswerError::OutOfRange { index, value })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parse a comma-separated list such as `"0,2,3,1"`.
    ///
    /// Positions matter, so an empty field is an error; only a single
    /// trailing comma (`"0,1,"`) is tolerated.
    pub fn parse_csv(s: &str) -> Result<Self, AnswerError> {
        let mut fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        let values = fields
            .into_iter()
            .enumerate()
            .map(|(index, part)| {
                part.parse::<i64>().map_err(|_| AnswerError::Unparseable {
                    index,
                    raw: part.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(values)
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Mean over every answer; the scale midpoint when empty.
    pub fn overall_mean(&self) -> f64 {
        if self.0.is_empty() {
            return SCALE_MIDPOINT;
        }
        let sum: u32 = self.0.iter().map(|a| u32::from(*a)).sum();
        f64::from(sum) / self.0.len() as f64
    }
}

impl TryFrom<Vec<i64>> for AnswerVector {
    type Error = AnswerError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::try_new(values)
    }
}

impl From<AnswerVector> for Vec<u8> {
    fn from(v: AnswerVector) -> Self {
        v.0
    }
}
