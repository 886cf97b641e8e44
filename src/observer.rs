use crate::scoring::ScoreBreakdown;
use crate::types::candidate::ScoredCandidate;

/// Progress hooks for a ranking run. Every method defaults to doing nothing.
pub trait RankingObserver {
    fn payload_received(&mut self, _count: usize, _len: usize) {}

    fn payload_rejected(&mut self, _reason: &str) {}

    fn candidate_skipped(&mut self, _index: usize) {}

    fn candidate_scored(&mut self, _candidate: &ScoredCandidate, _detail: &ScoreBreakdown) {}

    fn best_replaced(&mut self, _user_id: &str, _old: &ScoredCandidate, _new: &ScoredCandidate) {}

    fn best_kept(&mut self, _user_id: &str, _kept: &ScoredCandidate, _challenger: &ScoredCandidate) {
    }

    fn ranking_finished(&mut self, _ranked: &[ScoredCandidate]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RankingObserver for NoopObserver {}

/// Reports run progress through `tracing`: per-run summaries at info,
/// per-candidate figures at debug.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

const PREVIEW_LEN: usize = 5;

impl RankingObserver for TracingObserver {
    fn payload_received(&mut self, count: usize, len: usize) {
        tracing::info!(portfolios = count, payload_chars = len, "ranking payload received");
    }

    fn payload_rejected(&mut self, reason: &str) {
        tracing::warn!(%reason, "ranking payload rejected");
    }

    fn candidate_skipped(&mut self, index: usize) {
        tracing::debug!(index, "portfolio without id skipped");
    }

    fn candidate_scored(&mut self, candidate: &ScoredCandidate, detail: &ScoreBreakdown) {
        let categories = detail
            .skills
            .categories
            .iter()
            .map(|(name, count)| format!("{name}:{count}"))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::debug!(
            id = %candidate.id,
            user_id = %candidate.user_id,
            experience_entries = detail.experience.entries,
            experience_months = detail.experience.months,
            proficiency_sum = detail.skills.proficiency_sum,
            categories = %categories,
            relevant_posts = detail.blog.relevant,
            bio_len = detail.bio.length,
            bio_placeholder = detail.bio.placeholder,
            projects = detail.projects.per_project.len(),
            exp = candidate.experience_score,
            skills = candidate.skills_score,
            blog = candidate.blog_score,
            bio = candidate.bio_score,
            proj = candidate.project_quality_score,
            total = candidate.total_score,
            "portfolio scored"
        );
    }

    fn best_replaced(&mut self, user_id: &str, old: &ScoredCandidate, new: &ScoredCandidate) {
        tracing::debug!(
            user_id,
            old_id = %old.id,
            old_score = old.total_score,
            new_id = %new.id,
            new_score = new.total_score,
            "best portfolio for user replaced"
        );
    }

    fn best_kept(&mut self, user_id: &str, kept: &ScoredCandidate, challenger: &ScoredCandidate) {
        tracing::debug!(
            user_id,
            kept_id = %kept.id,
            kept_score = kept.total_score,
            challenger_id = %challenger.id,
            challenger_score = challenger.total_score,
            "best portfolio for user kept"
        );
    }

    fn ranking_finished(&mut self, ranked: &[ScoredCandidate]) {
        let preview = ranked
            .iter()
            .take(PREVIEW_LEN)
            .map(|candidate| format!("{}:{}", candidate.id, candidate.total_score))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(users = ranked.len(), %preview, "ranking finished");
        for (rank, candidate) in ranked.iter().enumerate() {
            tracing::debug!(
                rank = rank + 1,
                id = %candidate.id,
                user_id = %candidate.user_id,
                total = candidate.total_score,
                "ranked portfolio"
            );
        }
    }
}

/// Keeps every scored candidate together with its breakdown, then forwards
/// to an inner observer.
pub struct BreakdownCollector<'a> {
    pub entries: Vec<(ScoredCandidate, ScoreBreakdown)>,
    inner: &'a mut dyn RankingObserver,
}

impl<'a> BreakdownCollector<'a> {
    pub fn new(inner: &'a mut dyn RankingObserver) -> Self {
        Self {
            entries: Vec::new(),
            inner,
        }
    }
}

impl RankingObserver for BreakdownCollector<'_> {
    fn payload_received(&mut self, count: usize, len: usize) {
        self.inner.payload_received(count, len);
    }

    fn payload_rejected(&mut self, reason: &str) {
        self.inner.payload_rejected(reason);
    }

    fn candidate_skipped(&mut self, index: usize) {
        self.inner.candidate_skipped(index);
    }

    fn candidate_scored(&mut self, candidate: &ScoredCandidate, detail: &ScoreBreakdown) {
        self.entries.push((candidate.clone(), detail.clone()));
        self.inner.candidate_scored(candidate, detail);
    }

    fn best_replaced(&mut self, user_id: &str, old: &ScoredCandidate, new: &ScoredCandidate) {
        self.inner.best_replaced(user_id, old, new);
    }

    fn best_kept(&mut self, user_id: &str, kept: &ScoredCandidate, challenger: &ScoredCandidate) {
        self.inner.best_kept(user_id, kept, challenger);
    }

    fn ranking_finished(&mut self, ranked: &[ScoredCandidate]) {
        self.inner.ranking_finished(ranked);
    }
}
