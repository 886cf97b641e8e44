use crate::observer::{NoopObserver, RankingObserver};
use crate::scoring;
use crate::types::candidate::{ParsedCandidate, ScoredCandidate};
use crate::types::config::ScoringPolicy;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Everything a ranking run produced, before truncation to top N.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingOutcome {
    /// Array elements in the payload.
    pub received: usize,
    /// Elements dropped for lacking an id.
    pub skipped: usize,
    /// Every scored candidate in payload order, before dedup.
    pub scored: Vec<ScoredCandidate>,
    /// Best candidate per user, in final rank order.
    pub ranked: Vec<ScoredCandidate>,
    /// Why the payload was rejected, if it was.
    pub rejected: Option<String>,
}

impl RankingOutcome {
    pub fn top(&self, top_n: usize) -> &[ScoredCandidate] {
        &self.ranked[..top_n.min(self.ranked.len())]
    }

    pub fn into_top(mut self, top_n: usize) -> Vec<ScoredCandidate> {
        self.ranked.truncate(top_n);
        self.ranked
    }

    fn rejected(reason: String) -> Self {
        Self {
            rejected: Some(reason),
            ..Self::default()
        }
    }
}

/// Ranks a JSON array of portfolios with the default policy and returns at
/// most `top_n` candidates, one per user. Malformed payloads yield an empty
/// list.
pub fn select_top_candidates(json: &str, top_n: usize) -> Vec<ScoredCandidate> {
    rank_payload(
        json,
        &ScoringPolicy::default(),
        Utc::now().date_naive(),
        &mut NoopObserver,
    )
    .into_top(top_n)
}

pub fn rank_payload(
    json: &str,
    policy: &ScoringPolicy,
    today: NaiveDate,
    observer: &mut dyn RankingObserver,
) -> RankingOutcome {
    let elements = match parse_payload(json) {
        Ok(elements) => elements,
        Err(reason) => {
            observer.payload_rejected(&reason);
            return RankingOutcome::rejected(reason);
        }
    };
    observer.payload_received(elements.len(), json.chars().count());

    let mut outcome = RankingOutcome {
        received: elements.len(),
        ..RankingOutcome::default()
    };
    let mut best = BestPerUser::default();

    for (index, element) in elements.iter().enumerate() {
        let Some(candidate) = ParsedCandidate::from_value(element) else {
            outcome.skipped += 1;
            observer.candidate_skipped(index);
            continue;
        };
        let (scored, detail) = scoring::score(&candidate, policy, today);
        observer.candidate_scored(&scored, &detail);
        best.offer(scored.clone(), observer);
        outcome.scored.push(scored);
    }

    let mut ranked = best.into_candidates();
    ranked.sort_by(rank_order);
    observer.ranking_finished(&ranked);
    outcome.ranked = ranked;
    outcome
}

/// Like [`rank_payload`], but for raw input bytes. Undecodable text is a
/// rejected payload, not an error.
pub fn rank_payload_bytes(
    payload: &[u8],
    policy: &ScoringPolicy,
    today: NaiveDate,
    observer: &mut dyn RankingObserver,
) -> RankingOutcome {
    match std::str::from_utf8(payload) {
        Ok(json) => rank_payload(json, policy, today, observer),
        Err(err) => {
            let reason = format!("payload is not valid utf-8: {err}");
            observer.payload_rejected(&reason);
            RankingOutcome::rejected(reason)
        }
    }
}

fn parse_payload(json: &str) -> Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Array(elements)) => Ok(elements),
        Ok(_) => Err("root element is not an array".to_string()),
        Err(err) => Err(format!("invalid json: {err}")),
    }
}

/// Descending by total, then skills, experience, project quality and blog.
/// Bio is not a tie-break key.
pub fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.total_score
        .cmp(&a.total_score)
        .then_with(|| b.skills_score.cmp(&a.skills_score))
        .then_with(|| b.experience_score.cmp(&a.experience_score))
        .then_with(|| b.project_quality_score.cmp(&a.project_quality_score))
        .then_with(|| b.blog_score.cmp(&a.blog_score))
}

/// Best candidate per user, remembering the order users first appeared in.
#[derive(Debug, Default)]
struct BestPerUser {
    slots: HashMap<String, usize>,
    candidates: Vec<ScoredCandidate>,
}

impl BestPerUser {
    /// A challenger only displaces the current best on a strictly higher total.
    fn offer(&mut self, candidate: ScoredCandidate, observer: &mut dyn RankingObserver) {
        match self.slots.get(&candidate.user_id) {
            Some(&slot) => {
                let current = &self.candidates[slot];
                if candidate.total_score > current.total_score {
                    observer.best_replaced(&candidate.user_id, current, &candidate);
                    self.candidates[slot] = candidate;
                } else {
                    observer.best_kept(&candidate.user_id, current, &candidate);
                }
            }
            None => {
                self.slots
                    .insert(candidate.user_id.clone(), self.candidates.len());
                self.candidates.push(candidate);
            }
        }
    }

    fn into_candidates(self) -> Vec<ScoredCandidate> {
        self.candidates
    }
}
