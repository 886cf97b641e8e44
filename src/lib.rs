//! Multi-factor portfolio scoring: parse a JSON array of portfolios, score
//! each across experience, skills, blog, bio and projects, keep the best
//! portfolio per user and return the top N.

pub mod config;
pub mod error;
pub mod logging;
pub mod observer;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod shortlist;
pub mod types;

pub use error::{RankError, Result};
pub use observer::{NoopObserver, RankingObserver, TracingObserver};
pub use ranking::{rank_payload, rank_payload_bytes, select_top_candidates, RankingOutcome};
pub use types::candidate::{ParsedCandidate, ScoredCandidate};
pub use types::config::ScoringPolicy;
