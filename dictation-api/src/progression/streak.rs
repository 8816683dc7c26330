//! Practice streaks over calendar days

use chrono::NaiveDate;
use std::collections::BTreeSet;

fn distinct_days(dates: &[NaiveDate]) -> BTreeSet<NaiveDate> {
    dates.iter().copied().collect()
}

/// Consecutive practice days ending on `today`.
///
/// Zero when the learner has not practiced today. Repeated dates count once.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let days = distinct_days(dates);

    let mut streak = 0;
    let mut day = Some(today);
    while let Some(d) = day.filter(|d| days.contains(d)) {
        streak += 1;
        day = d.pred_opt();
    }
    streak
}

/// Longest run of consecutive practice days. Repeated dates count once.
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in distinct_days(dates) {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(next) if next == day => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}
