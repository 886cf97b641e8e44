use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

/// One portfolio read out of the payload. Absent, mistyped or unparseable
/// fields collapse to the defaults documented on each field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCandidate {
    pub id: String,
    /// Falls back to `id` so candidates without an owner never collapse together.
    pub user_id: String,
    /// Empty when `experience` is absent or not an array.
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillEntry>,
    pub blog_posts: Vec<BlogPostEntry>,
    /// `None` unless `bio` is a string.
    pub bio: Option<String>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry {
    pub start: Option<NaiveDate>,
    /// `None` means the position is ongoing.
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillEntry {
    /// Only JSON integers in `i32` range are kept.
    pub proficiency: Option<i32>,
    /// Empty categories are dropped.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostEntry {
    pub published: bool,
    pub excerpt: String,
    pub content: String,
    pub tag_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectEntry {
    pub description: String,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub technology_count: usize,
}

impl ParsedCandidate {
    /// Returns `None` when the element carries no usable `id`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = non_empty_str(value, "id")?.to_string();
        let user_id = non_empty_str(value, "userId")
            .map(str::to_string)
            .unwrap_or_else(|| id.clone());

        Some(Self {
            experience: array_field(value, "experience")
                .iter()
                .map(ExperienceEntry::from_value)
                .collect(),
            skills: array_field(value, "skills")
                .iter()
                .map(SkillEntry::from_value)
                .collect(),
            blog_posts: array_field(value, "blogPosts")
                .iter()
                .map(BlogPostEntry::from_value)
                .collect(),
            bio: str_field(value, "bio").map(str::to_string),
            projects: array_field(value, "projects")
                .iter()
                .map(ProjectEntry::from_value)
                .collect(),
            id,
            user_id,
        })
    }
}

impl ExperienceEntry {
    fn from_value(value: &Value) -> Self {
        Self {
            start: str_field(value, "startDate").and_then(parse_date),
            end: str_field(value, "endDate").and_then(parse_date),
        }
    }
}

impl SkillEntry {
    fn from_value(value: &Value) -> Self {
        Self {
            proficiency: value
                .get("proficiencyLevel")
                .and_then(Value::as_i64)
                .and_then(|level| i32::try_from(level).ok()),
            category: non_empty_str(value, "category").map(str::to_string),
        }
    }
}

impl BlogPostEntry {
    fn from_value(value: &Value) -> Self {
        Self {
            published: matches!(value.get("isPublished"), Some(Value::Bool(true))),
            excerpt: str_field(value, "excerpt").unwrap_or_default().to_string(),
            content: str_field(value, "content").unwrap_or_default().to_string(),
            tag_count: array_field(value, "tags").len(),
        }
    }
}

impl ProjectEntry {
    fn from_value(value: &Value) -> Self {
        Self {
            description: str_field(value, "description")
                .unwrap_or_default()
                .to_string(),
            demo_url: non_blank_str(value, "demoUrl").map(str::to_string),
            github_url: non_blank_str(value, "githubUrl").map(str::to_string),
            technology_count: array_field(value, "technologies").len(),
        }
    }
}

/// Accepts plain dates, RFC 3339 timestamps, offset-less timestamps and
/// US-style `MM/DD/YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(raw, "%m/%d/%Y").ok()
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    str_field(value, key).filter(|text| !text.is_empty())
}

fn non_blank_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    str_field(value, key).filter(|text| !text.trim().is_empty())
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub id: String,
    pub user_id: String,
    pub experience_score: i64,
    pub skills_score: i64,
    pub blog_score: i64,
    pub bio_score: i64,
    pub project_quality_score: i64,
    pub total_score: i64,
}
