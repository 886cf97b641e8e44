pub mod bio;
pub mod blog;
pub mod experience;
pub mod projects;
pub mod skills;

use crate::types::candidate::{ParsedCandidate, ScoredCandidate};
use crate::types::config::ScoringPolicy;
use bio::BioDetail;
use blog::BlogDetail;
use chrono::NaiveDate;
use experience::ExperienceDetail;
use projects::ProjectsDetail;
use skills::SkillsDetail;

/// Intermediate figures behind each sub-score of one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub experience: ExperienceDetail,
    pub skills: SkillsDetail,
    pub blog: BlogDetail,
    pub bio: BioDetail,
    pub projects: ProjectsDetail,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        [
            self.skills.score,
            self.blog.score,
            self.bio.score,
            self.projects.score,
        ]
        .into_iter()
        .fold(self.experience.score, i64::saturating_add)
    }
}

pub fn breakdown(
    candidate: &ParsedCandidate,
    policy: &ScoringPolicy,
    today: NaiveDate,
) -> ScoreBreakdown {
    ScoreBreakdown {
        experience: experience::experience_score(&candidate.experience, &policy.experience, today),
        skills: skills::skills_score(&candidate.skills, &policy.skills),
        blog: blog::blog_score(&candidate.blog_posts, &policy.blog),
        bio: bio::bio_score(candidate.bio.as_deref(), &policy.bio),
        projects: projects::project_quality_score(&candidate.projects, &policy.projects),
    }
}

pub fn score(
    candidate: &ParsedCandidate,
    policy: &ScoringPolicy,
    today: NaiveDate,
) -> (ScoredCandidate, ScoreBreakdown) {
    let detail = breakdown(candidate, policy, today);
    let scored = ScoredCandidate {
        id: candidate.id.clone(),
        user_id: candidate.user_id.clone(),
        experience_score: detail.experience.score,
        skills_score: detail.skills.score,
        blog_score: detail.blog.score,
        bio_score: detail.bio.score,
        project_quality_score: detail.projects.score,
        total_score: detail.total(),
    };
    (scored, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    #[test]
    fn score_combines_all_dimensions() {
        let candidate = ParsedCandidate::from_value(&json!({
            "id": "p1",
            "userId": "u1",
            "experience": [{ "startDate": "2020-01-01", "endDate": "2021-01-01" }],
            "skills": [
                { "proficiencyLevel": 3, "category": "backend" },
                { "proficiencyLevel": 4, "category": "frontend" }
            ],
            "blogPosts": [
                { "isPublished": true, "excerpt": "x".repeat(120), "content": "", "tags": ["t"] }
            ],
            "bio": "Software developer. Loves code.",
            "projects": [{
                "description": "d".repeat(100),
                "demoUrl": "https://demo",
                "githubUrl": "https://git",
                "technologies": ["a", "b", "c"]
            }]
        }))
        .expect("id present");

        let (scored, detail) = score(&candidate, &ScoringPolicy::default(), today());
        assert_eq!(scored.experience_score, 22);
        assert_eq!(scored.skills_score, 19);
        assert_eq!(scored.blog_score, 5);
        assert_eq!(scored.bio_score, 10);
        assert_eq!(scored.project_quality_score, 14);
        assert_eq!(scored.total_score, 70);
        assert_eq!(detail.total(), scored.total_score);
    }

    #[test]
    fn total_may_be_negative() {
        let candidate = ParsedCandidate::from_value(&json!({
            "id": "p1",
            "bio": "lorem lorem lorem"
        }))
        .expect("id present");
        let (scored, _) = score(&candidate, &ScoringPolicy::default(), today());
        assert_eq!(scored.total_score, -10);
    }

    #[test]
    fn policy_overrides_change_points() {
        let candidate = ParsedCandidate::from_value(&json!({
            "id": "p1",
            "experience": [{ "startDate": "bogus" }, {}]
        }))
        .expect("id present");
        let mut policy = ScoringPolicy::default();
        policy.experience.points_per_entry = 4;
        let (scored, _) = score(&candidate, &policy, today());
        assert_eq!(scored.experience_score, 8);
    }
}
