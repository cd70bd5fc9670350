// SPDX-License-Identifier: MPL-2.0
//! Random archive date selection for picture requests.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

/// First day of the archive window this viewer draws from.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 2, 1).expect("valid epoch date")
}

/// Picks a random archive date between the epoch and today, today excluded.
///
/// "Today" is taken in local time. The current day is skipped because the
/// service publishes entries on its own schedule and today's entry may not
/// exist yet in every timezone.
pub fn random_archive_date() -> NaiveDate {
    random_archive_date_from(Local::now().date_naive())
}

/// Picks a random date in `[epoch, today)`, uniform at day granularity.
///
/// Returns the epoch itself when `today` is not after the epoch, so the
/// result is always a valid archive day even on a skewed clock.
pub fn random_archive_date_from(today: NaiveDate) -> NaiveDate {
    let epoch = epoch();
    let span = (today - epoch).num_days();
    if span <= 0 {
        return epoch;
    }
    epoch + Duration::days(rand::rng().random_range(0..span))
}

/// Formats a date the way the service expects it in query strings.
#[must_use]
pub fn format_request_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
