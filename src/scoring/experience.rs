use crate::types::candidate::ExperienceEntry;
use crate::types::config::ExperiencePolicy;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDetail {
    pub entries: usize,
    pub months: i64,
    pub score: i64,
}

pub fn experience_score(
    entries: &[ExperienceEntry],
    policy: &ExperiencePolicy,
    today: NaiveDate,
) -> ExperienceDetail {
    let months = entries
        .iter()
        .filter_map(|entry| {
            let start = entry.start?;
            Some(months_between(start, entry.end.unwrap_or(today)))
        })
        .fold(0i64, i64::saturating_add);
    let count = entries.len() as i64;

    ExperienceDetail {
        entries: entries.len(),
        months,
        score: count
            .saturating_mul(policy.points_per_entry)
            .saturating_add(months),
    }
}

/// Whole calendar months from `start` to `end`, ignoring the day of month.
/// Spans that end before they start count as zero.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    (years * 12 + months).max(0)
}
