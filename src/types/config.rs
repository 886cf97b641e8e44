use crate::error::RankError;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankConfig {
    #[serde(default)]
    pub scoring: ScoringPolicy,
    pub ranking: Option<RankingConfig>,
    pub shortlist: Option<ShortlistConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShortlistConfig {
    pub min_candidates: Option<usize>,
    pub pick: Option<usize>,
}

/// Every threshold and point value the scorer uses. `Default` is the
/// production policy.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringPolicy {
    pub experience: ExperiencePolicy,
    pub skills: SkillsPolicy,
    pub blog: BlogPolicy,
    pub bio: BioPolicy,
    pub projects: ProjectPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperiencePolicy {
    pub points_per_entry: i64,
}

impl Default for ExperiencePolicy {
    fn default() -> Self {
        Self {
            points_per_entry: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillsPolicy {
    pub points_per_category: i64,
    /// Per-category cap on the occurrence bonus.
    pub category_bonus_cap: i64,
}

impl Default for SkillsPolicy {
    fn default() -> Self {
        Self {
            points_per_category: 5,
            category_bonus_cap: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogPolicy {
    pub points_per_post: i64,
    /// Minimum excerpt or content length for a post to count.
    pub min_body_chars: usize,
}

impl Default for BlogPolicy {
    fn default() -> Self {
        Self {
            points_per_post: 5,
            min_body_chars: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BioPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub length_points: i64,
    pub min_sentences: usize,
    pub sentence_points: i64,
    pub keywords: Vec<String>,
    pub keyword_points: i64,
    pub placeholder_markers: Vec<String>,
    pub placeholder_max_distinct_chars: usize,
    /// Subtracted when the bio looks like filler text.
    pub placeholder_penalty: i64,
}

impl Default for BioPolicy {
    fn default() -> Self {
        Self {
            min_length: 80,
            max_length: 500,
            length_points: 10,
            min_sentences: 2,
            sentence_points: 5,
            keywords: ["developer", "engineer", "designer", "react", "node"]
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
            keyword_points: 5,
            placeholder_markers: vec!["lorem".to_string()],
            placeholder_max_distinct_chars: 3,
            placeholder_penalty: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectPolicy {
    pub min_description_chars: usize,
    pub description_points: i64,
    pub demo_points: i64,
    pub repository_points: i64,
    pub technology_cap: i64,
    /// Cap on the bonus for every project beyond the first.
    pub extra_project_cap: i64,
}

impl Default for ProjectPolicy {
    fn default() -> Self {
        Self {
            min_description_chars: 80,
            description_points: 5,
            demo_points: 3,
            repository_points: 3,
            technology_cap: 5,
            extra_project_cap: 10,
        }
    }
}

impl ScoringPolicy {
    /// Upper bound for any single point value or cap.
    pub const MAX_POINTS: i64 = 1_000_000;

    pub fn validate(&self) -> Result<(), RankError> {
        let points = [
            ("experience.points_per_entry", self.experience.points_per_entry),
            ("skills.points_per_category", self.skills.points_per_category),
            ("skills.category_bonus_cap", self.skills.category_bonus_cap),
            ("blog.points_per_post", self.blog.points_per_post),
            ("bio.length_points", self.bio.length_points),
            ("bio.sentence_points", self.bio.sentence_points),
            ("bio.keyword_points", self.bio.keyword_points),
            ("bio.placeholder_penalty", self.bio.placeholder_penalty),
            ("projects.description_points", self.projects.description_points),
            ("projects.demo_points", self.projects.demo_points),
            ("projects.repository_points", self.projects.repository_points),
            ("projects.technology_cap", self.projects.technology_cap),
            ("projects.extra_project_cap", self.projects.extra_project_cap),
        ];
        if let Some((name, _)) = points.iter().find(|(_, value)| *value < 0) {
            return Err(RankError::InvalidPolicy(format!(
                "scoring.{name} must not be negative"
            )));
        }
        if let Some((name, _)) = points.iter().find(|(_, value)| *value > Self::MAX_POINTS) {
            return Err(RankError::InvalidPolicy(format!(
                "scoring.{name} must not exceed {}",
                Self::MAX_POINTS
            )));
        }

        if self.bio.min_length > self.bio.max_length {
            return Err(RankError::InvalidPolicy(format!(
                "scoring.bio.min_length ({}) exceeds scoring.bio.max_length ({})",
                self.bio.min_length, self.bio.max_length
            )));
        }
        if self.bio.min_sentences == 0 {
            return Err(RankError::InvalidPolicy(
                "scoring.bio.min_sentences must be greater than 0".to_string(),
            ));
        }

        validate_terms("bio.keywords", &self.bio.keywords)?;
        validate_terms("bio.placeholder_markers", &self.bio.placeholder_markers)?;
        Ok(())
    }
}

fn validate_terms(field: &str, terms: &[String]) -> Result<(), RankError> {
    let mut seen = HashSet::new();
    for term in terms {
        if term.trim().is_empty() {
            return Err(RankError::InvalidPolicy(format!(
                "scoring.{field} entries must be non-empty"
            )));
        }
        if term.trim() != term {
            return Err(RankError::InvalidPolicy(format!(
                "scoring.{field} entry has surrounding whitespace: {term:?}"
            )));
        }
        let normalized = term.to_lowercase();
        if !seen.insert(normalized.clone()) {
            return Err(RankError::InvalidPolicy(format!(
                "scoring.{field} contains duplicate entry: {normalized}"
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortlistSettings {
    pub min_candidates: usize,
    pub pick: usize,
}

impl Default for ShortlistSettings {
    fn default() -> Self {
        Self {
            min_candidates: 10,
            pick: 3,
        }
    }
}

impl RankConfig {
    pub const DEFAULT_TOP_N: usize = 10;

    pub fn top_n(&self) -> usize {
        self.ranking
            .as_ref()
            .and_then(|ranking| ranking.top_n)
            .unwrap_or(Self::DEFAULT_TOP_N)
    }

    pub fn shortlist_settings(&self) -> ShortlistSettings {
        let defaults = ShortlistSettings::default();
        match &self.shortlist {
            Some(shortlist) => ShortlistSettings {
                min_candidates: shortlist.min_candidates.unwrap_or(defaults.min_candidates),
                pick: shortlist.pick.unwrap_or(defaults.pick),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), RankError> {
        self.scoring.validate()?;

        if let Some(top_n) = self.ranking.as_ref().and_then(|ranking| ranking.top_n) {
            if top_n == 0 {
                return Err(RankError::ConfigParse(
                    "ranking.top_n must be greater than 0".to_string(),
                ));
            }
        }
        if let Some(pick) = self.shortlist.as_ref().and_then(|shortlist| shortlist.pick) {
            if pick == 0 {
                return Err(RankError::ConfigParse(
                    "shortlist.pick must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: RankConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.scoring, ScoringPolicy::default());
        assert_eq!(cfg.top_n(), 10);
        assert_eq!(cfg.shortlist_settings(), ShortlistSettings::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_partial_scoring_overrides_keep_other_defaults() {
        let toml_str = r#"
[scoring.bio]
keywords = ["rustacean", "developer"]
placeholder_penalty = 20

[scoring.projects]
technology_cap = 3
"#;
        let cfg: RankConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.scoring.bio.keywords, vec!["rustacean", "developer"]);
        assert_eq!(cfg.scoring.bio.placeholder_penalty, 20);
        assert_eq!(cfg.scoring.bio.min_length, 80);
        assert_eq!(cfg.scoring.projects.technology_cap, 3);
        assert_eq!(cfg.scoring.projects.demo_points, 3);
        assert_eq!(cfg.scoring.experience, ExperiencePolicy::default());
    }

    #[test]
    fn parse_rejects_unknown_scoring_key() {
        let toml_str = r#"
[scoring.blog]
points_per_pots = 4
"#;
        let err = toml::from_str::<RankConfig>(toml_str).expect_err("typo should be rejected");
        assert!(err.to_string().contains("points_per_pots"));
    }

    #[test]
    fn shortlist_settings_override_defaults() {
        let toml_str = r#"
[ranking]
top_n = 25

[shortlist]
min_candidates = 5
"#;
        let cfg: RankConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.top_n(), 25);
        assert_eq!(
            cfg.shortlist_settings(),
            ShortlistSettings {
                min_candidates: 5,
                pick: 3,
            }
        );
    }

    #[test]
    fn validate_rejects_inverted_bio_length_window() {
        let toml_str = r#"
[scoring.bio]
min_length = 600
"#;
        let cfg: RankConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("exceeds scoring.bio.max_length"));
    }

    #[test]
    fn validate_rejects_negative_points() {
        let toml_str = r#"
[scoring.projects]
demo_points = -3
"#;
        let cfg: RankConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("scoring.projects.demo_points"));
    }

    #[test]
    fn validate_rejects_points_above_ceiling() {
        let cfg: RankConfig = toml::from_str(
            r#"
[scoring.experience]
points_per_entry = 9223372036854775807
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("oversized points should fail");
        assert!(err
            .to_string()
            .contains("scoring.experience.points_per_entry must not exceed 1000000"));

        let mut policy = ScoringPolicy::default();
        policy.blog.points_per_post = ScoringPolicy::MAX_POINTS;
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn validate_rejects_padded_terms() {
        let cfg: RankConfig = toml::from_str(
            r#"
[scoring.bio]
keywords = [" react"]
"#,
        )
        .expect("config should parse");
        assert!(cfg
            .validate()
            .expect_err("padded keyword should fail")
            .to_string()
            .contains("surrounding whitespace"));
    }

    #[test]
    fn validate_rejects_blank_and_duplicate_keywords() {
        let blank: RankConfig = toml::from_str(
            r#"
[scoring.bio]
keywords = ["react", "  "]
"#,
        )
        .expect("config should parse");
        assert!(blank
            .validate()
            .expect_err("blank keyword should fail")
            .to_string()
            .contains("must be non-empty"));

        let duplicate: RankConfig = toml::from_str(
            r#"
[scoring.bio]
placeholder_markers = ["lorem", "LOREM"]
"#,
        )
        .expect("config should parse");
        assert!(duplicate
            .validate()
            .expect_err("duplicate marker should fail")
            .to_string()
            .contains("duplicate entry: lorem"));
    }

    #[test]
    fn validate_rejects_zero_top_n_and_pick() {
        let cfg: RankConfig = toml::from_str(
            r#"
[ranking]
top_n = 0
"#,
        )
        .expect("config should parse");
        assert!(cfg
            .validate()
            .expect_err("zero top_n should fail")
            .to_string()
            .contains("ranking.top_n must be greater than 0"));

        let cfg: RankConfig = toml::from_str(
            r#"
[shortlist]
pick = 0
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
