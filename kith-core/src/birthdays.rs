//! Upcoming birthdays within a rolling window.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::friend::FriendRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayPolicy {
    /// Inclusive look-ahead in days.
    pub window_days: i64,
}

impl Default for BirthdayPolicy {
    fn default() -> Self {
        Self { window_days: 30 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBirthday {
    pub friend_id: String,
    pub days_until: i64,
}

/// Birthdate's month/day placed in `year`.
///
/// Feb 29 lands on Mar 1 in non-leap years.
fn in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Next occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = in_year(birthday, today.year())?;
    if this_year < today {
        in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Whole days until the next occurrence; 0 on the day itself.
pub fn days_until(birthday: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_occurrence(birthday, today).map(|next| (next - today).num_days())
}

/// Friends whose birthday falls within the window, soonest first.
pub fn upcoming_birthdays(
    friends: &[FriendRecord],
    today: NaiveDate,
    policy: BirthdayPolicy,
) -> Vec<UpcomingBirthday> {
    let mut out: Vec<_> = friends
        .iter()
        .filter_map(|f| {
            let days = days_until(f.birthday?, today)?;
            (0..=policy.window_days)
                .contains(&days)
                .then(|| UpcomingBirthday {
                    friend_id: f.id.clone(),
                    days_until: days,
                })
        })
        .collect();
    out.sort_by_key(|b| b.days_until);
    out
}
