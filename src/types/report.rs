use crate::ranking::RankingOutcome;
use crate::types::candidate::ScoredCandidate;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub version: String,
    pub generated_at: String,
    pub input_sha256: String,
    pub received: usize,
    pub skipped: usize,
    pub distinct_users: usize,
    pub top_n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    pub candidates: Vec<ScoredCandidate>,
}

impl RankingReport {
    pub fn new(payload: &[u8], outcome: &RankingOutcome, top_n: usize) -> Self {
        let distinct_users = outcome
            .scored
            .iter()
            .map(|candidate| candidate.user_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            input_sha256: sha256_hex(payload),
            received: outcome.received,
            skipped: outcome.skipped,
            distinct_users,
            top_n,
            rejected: outcome.rejected.clone(),
            candidates: outcome.top(top_n).to_vec(),
        }
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;
    use crate::ranking::rank_payload;
    use crate::types::config::ScoringPolicy;
    use chrono::NaiveDate;

    #[test]
    fn report_summarises_outcome() {
        let payload = r#"[
            {"id": "p1", "userId": "u1"},
            {"id": "p2", "userId": "u1"},
            {"id": "p3", "userId": "u2"},
            {"userId": "u3"}
        ]"#;
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let outcome = rank_payload(payload, &ScoringPolicy::default(), today, &mut NoopObserver);
        let report = RankingReport::new(payload.as_bytes(), &outcome, 1);

        assert_eq!(report.received, 4);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.distinct_users, 2);
        assert_eq!(report.candidates.len(), 1);
        assert_eq!(report.input_sha256.len(), 64);
        assert!(report.rejected.is_none());
    }

    #[test]
    fn sha256_hex_matches_known_digest() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
