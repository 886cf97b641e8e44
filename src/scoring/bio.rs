use crate::types::config::BioPolicy;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BioDetail {
    pub length: usize,
    pub sentences: usize,
    pub has_keywords: bool,
    pub placeholder: bool,
    pub score: i64,
}

pub fn bio_score(bio: Option<&str>, policy: &BioPolicy) -> BioDetail {
    let bio = match bio {
        Some(text) if !text.trim().is_empty() => text,
        _ => return BioDetail::default(),
    };

    let lowered = bio.to_lowercase();
    let length = bio.chars().count();
    let sentences = sentence_count(bio);
    let has_keywords = policy
        .keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.trim().to_lowercase()));
    let placeholder = is_placeholder(bio, &lowered, policy);

    let mut score = 0i64;
    if (policy.min_length..=policy.max_length).contains(&length) {
        score = score.saturating_add(policy.length_points);
    }
    if sentences >= policy.min_sentences {
        score = score.saturating_add(policy.sentence_points);
    }
    if has_keywords {
        score = score.saturating_add(policy.keyword_points);
    }
    if placeholder {
        score = score.saturating_sub(policy.placeholder_penalty);
    }

    BioDetail {
        length,
        sentences,
        has_keywords,
        placeholder,
        score,
    }
}

pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

fn is_placeholder(bio: &str, lowered: &str, policy: &BioPolicy) -> bool {
    let marked = policy
        .placeholder_markers
        .iter()
        .any(|marker| lowered.contains(&marker.trim().to_lowercase()));
    marked || bio.chars().collect::<HashSet<_>>().len() <= policy.placeholder_max_distinct_chars
}
