//! Reminder policy + ranking of friends who are due for contact.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::affinity::AffinityCategory;
use crate::friend::{assess_all, FriendRecord};
use crate::health::UrgencyTier;
use crate::locale::{localize, Translations};

/// One surfaced reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub friend_id: String,
    pub urgency_tier: UrgencyTier,
    pub days_since: i64,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderPolicy {
    /// Cap on surfaced reminders so the user is not overwhelmed.
    pub max_reminders: usize,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self { max_reminders: 3 }
    }
}

const SOUL_MATE_MESSAGES: &[Translations] = &[
    &[("en", "Your favorite person would love to hear from you today."), ("es", "A tu persona favorita le encantaría saber de ti hoy.")],
    &[("en", "A quick call can make their whole day."), ("es", "Una llamada rápida puede alegrarle el día.")],
    &[("en", "Share something that made you think of them."), ("es", "Comparte algo que te hizo pensar en esa persona.")],
];

const CLOSE_FRIEND_MESSAGES: &[Translations] = &[
    &[("en", "It's been a week. Time to catch up!"), ("es", "Ha pasado una semana. ¡Es hora de ponerse al día!")],
    &[("en", "Send a message and plan something together."), ("es", "Envía un mensaje y planeen algo juntos.")],
    &[("en", "Close friends grow closer with regular check-ins."), ("es", "Los amigos cercanos se acercan más con contacto frecuente.")],
];

const GOOD_BUDDY_MESSAGES: &[Translations] = &[
    &[("en", "A couple of weeks have passed. Say hi!"), ("es", "Han pasado un par de semanas. ¡Salúdalo!")],
    &[("en", "Ask how their week is going."), ("es", "Pregúntale cómo va su semana.")],
    &[("en", "A short message keeps the friendship going."), ("es", "Un mensaje corto mantiene viva la amistad.")],
];

const SITUATIONAL_MESSAGES: &[Translations] = &[
    &[("en", "It's been about a month. Check in?"), ("es", "Ha pasado cerca de un mes. ¿Le escribes?")],
    &[("en", "Share a quick update to stay in touch."), ("es", "Comparte una novedad para seguir en contacto.")],
    &[("en", "Find a reason to reconnect this week."), ("es", "Busca un motivo para reconectar esta semana.")],
];

const DISTANT_MESSAGES: &[Translations] = &[
    &[("en", "Long time no see! A hello goes a long way."), ("es", "¡Cuánto tiempo! Un saludo vale mucho.")],
    &[("en", "Reconnect before the friendship fades."), ("es", "Reconecta antes de que la amistad se apague.")],
    &[("en", "Send a friendly note to rekindle things."), ("es", "Envía una nota amistosa para reavivar la relación.")],
];

/// Fixed message pool for a category.
pub fn message_pool(category: AffinityCategory) -> &'static [Translations] {
    match category {
        AffinityCategory::SoulMate => SOUL_MATE_MESSAGES,
        AffinityCategory::CloseFriend => CLOSE_FRIEND_MESSAGES,
        AffinityCategory::GoodBuddy => GOOD_BUDDY_MESSAGES,
        AffinityCategory::Situational => SITUATIONAL_MESSAGES,
        AffinityCategory::Distant => DISTANT_MESSAGES,
    }
}

/// Every localized text in a category's pool, for membership checks.
pub fn pool_texts(category: AffinityCategory, locale: &str) -> Vec<&'static str> {
    message_pool(category)
        .iter()
        .filter_map(|entry| localize(*entry, locale))
        .collect()
}

/// Pick one message uniformly at random from the category pool.
pub fn pick_message<R: Rng + ?Sized>(
    category: AffinityCategory,
    locale: &str,
    rng: &mut R,
) -> String {
    let pool = message_pool(category);
    let entry = pool[rng.gen_range(0..pool.len())];
    localize(entry, locale).unwrap_or_default().to_string()
}

/// Rank due friends and return the top reminders.
///
/// Due means ratio >= 1. Ordered by urgency tier (high first), then by
/// category closeness. Messages vary per call; everything else is stable.
pub fn rank_reminders<R: Rng + ?Sized>(
    friends: &[FriendRecord],
    now: DateTime<Utc>,
    locale: &str,
    policy: ReminderPolicy,
    rng: &mut R,
) -> Vec<Reminder> {
    let mut due: Vec<_> = assess_all(friends, now)
        .into_iter()
        .filter(|(_, a)| a.needs_reminder())
        .collect();

    // Stable sort: equal keys keep store order.
    due.sort_by_key(|(_, a)| (a.tier.rank(), a.category.closeness_rank()));

    tracing::debug!(
        due = due.len(),
        cap = policy.max_reminders,
        "ranked contact reminders"
    );

    due.into_iter()
        .take(policy.max_reminders)
        .map(|(friend, a)| Reminder {
            friend_id: friend.id.clone(),
            urgency_tier: a.tier,
            days_since: a.days_since,
            message: pick_message(a.category, locale, rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn friend(id: &str, category: AffinityCategory, days_ago: i64) -> FriendRecord {
        FriendRecord::new(id, id)
            .with_category(category)
            .with_last_interaction(now() - Duration::days(days_ago))
    }

    #[test]
    fn nothing_due_emits_none() {
        let friends = vec![friend("a", AffinityCategory::CloseFriend, 2)];
        let mut rng = StdRng::seed_from_u64(7);
        let out = rank_reminders(&friends, now(), "en", ReminderPolicy::default(), &mut rng);
        assert!(out.is_empty());
    }

    #[test]
    fn sorts_by_tier_then_closeness_and_caps() {
        let friends = vec![
            friend("low-distant", AffinityCategory::Distant, 60),     // ratio 1.0, low
            friend("med-buddy", AffinityCategory::GoodBuddy, 21),     // ratio 1.5, medium
            friend("high-distant", AffinityCategory::Distant, 130),   // ratio ~2.17, high
            friend("high-soul", AffinityCategory::SoulMate, 9),       // ratio 3.0, high
            friend("low-close", AffinityCategory::CloseFriend, 7),    // ratio 1.0, low
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let out = rank_reminders(&friends, now(), "en", ReminderPolicy::default(), &mut rng);

        let ids: Vec<_> = out.iter().map(|r| r.friend_id.as_str()).collect();
        assert_eq!(ids, ["high-soul", "high-distant", "med-buddy"]);
        assert_eq!(out[0].urgency_tier, UrgencyTier::High);
        assert_eq!(out[0].days_since, 9);
        assert_eq!(out[2].urgency_tier, UrgencyTier::Medium);
    }

    #[test]
    fn respects_custom_cap() {
        let friends: Vec<_> = (0..6)
            .map(|i| friend(&format!("f{i}"), AffinityCategory::GoodBuddy, 30))
            .collect();
        let mut rng = StdRng::seed_from_u64(3);
        let policy = ReminderPolicy { max_reminders: 5 };
        assert_eq!(rank_reminders(&friends, now(), "en", policy, &mut rng).len(), 5);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            rank_reminders(&friends, now(), "en", ReminderPolicy::default(), &mut rng).len(),
            3
        );
    }

    #[test]
    fn never_contacted_friend_is_high_urgency() {
        let friends = vec![FriendRecord::new("new", "New").with_category(AffinityCategory::Distant)];
        let mut rng = StdRng::seed_from_u64(9);
        let out = rank_reminders(&friends, now(), "en", ReminderPolicy::default(), &mut rng);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].urgency_tier, UrgencyTier::High);
    }

    #[test]
    fn messages_come_from_the_category_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for category in AffinityCategory::ALL {
            for _ in 0..20 {
                let msg = pick_message(category, "es", &mut rng);
                assert!(pool_texts(category, "es").contains(&msg.as_str()), "{msg}");
            }
        }
    }

    #[test]
    fn pinned_rng_is_reproducible() {
        let friends = vec![friend("a", AffinityCategory::Situational, 45)];
        let first = rank_reminders(&friends, now(), "en", ReminderPolicy::default(), &mut StdRng::seed_from_u64(5));
        let second = rank_reminders(&friends, now(), "en", ReminderPolicy::default(), &mut StdRng::seed_from_u64(5));
        assert_eq!(first, second);
    }
}
