//! Personality resolution: style labels -> composite key -> localized type.

use serde::Serialize;

use crate::answers::AnswerVector;
use crate::dimensions::{aggregate_dimensions, DimensionScores, StyleLabel, StyleProfile};
use crate::locale::{localize, Translations};
use crate::personality_tables::{
    PERSONALITY_NAMES, STYLE_SENTENCES, STYLE_TRAITS, UNIQUE_PERSONALITY,
};

/// Delimiter between style labels in a [`StyleProfile::key`].
pub const KEY_DELIMITER: &str = "-";

impl StyleProfile {
    /// Composite lookup key, e.g. `extrovert-analytical-active-leader`.
    pub fn key(&self) -> String {
        self.labels()
            .iter()
            .map(StyleLabel::as_str)
            .collect::<Vec<_>>()
            .join(KEY_DELIMITER)
    }
}

/// Personality block of the profile output contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub social_style: StyleLabel,
    pub decision_style: StyleLabel,
    pub energy_style: StyleLabel,
    pub leadership_style: StyleLabel,
    pub personality_type: String,
    pub traits: Vec<String>,
}

/// Resolved personality plus the narrative description shown with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPersonality {
    pub scores: DimensionScores,
    pub personality: Personality,
    pub description: String,
}

fn lookup<'a, T>(table: &'a [(&str, T)], key: &str) -> Option<&'a T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}

/// Display name for a composite key, falling back to "unique personality".
pub fn personality_name(key: &str, locale: &str) -> String {
    let entry: Translations = lookup(PERSONALITY_NAMES, key)
        .copied()
        .unwrap_or(UNIQUE_PERSONALITY);
    localize(entry, locale)
        .or_else(|| localize(UNIQUE_PERSONALITY, locale))
        .unwrap_or_default()
        .to_string()
}

/// Trait words for each label, concatenated in dimension order.
///
/// Independent of the composite-key table, so always populated.
pub fn traits_for(profile: &StyleProfile, locale: &str) -> Vec<String> {
    profile
        .labels()
        .iter()
        .filter_map(|label| lookup(STYLE_TRAITS, label.as_str()))
        .flat_map(|words| words.iter())
        .filter_map(|word| localize(*word, locale))
        .map(str::to_string)
        .collect()
}

/// One sentence per label, space-joined in dimension order.
pub fn describe(profile: &StyleProfile, locale: &str) -> String {
    profile
        .labels()
        .iter()
        .filter_map(|label| lookup(STYLE_SENTENCES, label.as_str()))
        .filter_map(|sentence| localize(*sentence, locale))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a style profile into its display record.
pub fn resolve_profile(profile: &StyleProfile, locale: &str) -> (Personality, String) {
    let personality = Personality {
        social_style: profile.social,
        decision_style: profile.decision,
        energy_style: profile.energy,
        leadership_style: profile.leadership,
        personality_type: personality_name(&profile.key(), locale),
        traits: traits_for(profile, locale),
    };
    (personality, describe(profile, locale))
}

/// Full path from raw answers to a resolved personality.
pub fn resolve_personality(answers: &AnswerVector, locale: &str) -> ResolvedPersonality {
    let scores = aggregate_dimensions(answers);
    let profile = StyleProfile::from_scores(&scores);
    let (personality, description) = resolve_profile(&profile, locale);
    ResolvedPersonality {
        scores,
        personality,
        description,
    }
}
