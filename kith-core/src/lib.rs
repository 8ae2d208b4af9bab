//! kith-core: personality classification and relationship health scoring.
//!
//! Every entry point is a pure function of its inputs plus static tables.
//! The only state that crosses the boundary is a friend's last interaction,
//! written back through [`FriendStore`].

pub mod affinity;
pub mod answers;
pub mod birthdays;
pub mod dimensions;
pub mod error;
pub mod friend;
pub mod gauge;
pub mod health;
pub mod locale;
pub mod personality;
mod personality_tables;
pub mod quiz;
pub mod reminders;
pub mod time;

pub use affinity::{classify_affinity, AffinityCategory};
pub use answers::{AnswerVector, SCALE_MIDPOINT};
pub use birthdays::{days_until, upcoming_birthdays, BirthdayPolicy, UpcomingBirthday};
pub use dimensions::{
    aggregate_dimensions, Bucket, DimensionKey, DimensionScores, StyleLabel, StyleProfile,
};
pub use error::{AnswerError, InvalidCategoryError};
pub use friend::{acknowledge_reminder, assess_all, FriendRecord, FriendStore};
pub use gauge::{
    aggregate_health, gauge_report, mean_health, simulate_trend, GaugeBands, GaugeReport, HealthBand,
    TrendPoint,
};
pub use health::{health_score, ContactAssessment, UrgencyTier, NEVER_CONTACTED_DAYS};
pub use locale::{localize, BASE_LOCALE};
pub use personality::{resolve_personality, Personality, ResolvedPersonality};
pub use quiz::{evaluate_quiz, QuizOutcome};
pub use reminders::{rank_reminders, Reminder, ReminderPolicy};
pub use time::{local_today, parse_timezone};
