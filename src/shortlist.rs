//! Glue between the ranking and a language model that curates the final
//! picks: a minimum-size gate, the curation prompt, and reply parsing.

use crate::error::{RankError, Result};
use crate::types::candidate::ScoredCandidate;
use crate::types::config::ShortlistSettings;
use std::collections::{HashMap, HashSet};

pub fn ensure_min_candidates(ranked: &[ScoredCandidate], min_candidates: usize) -> Result<()> {
    if ranked.len() < min_candidates {
        return Err(RankError::InsufficientCandidates {
            found: ranked.len(),
            required: min_candidates,
        });
    }
    Ok(())
}

pub fn build_curation_prompt(ranked: &[ScoredCandidate], settings: &ShortlistSettings) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "You are curating featured developer portfolios. Below are {} candidates, \
         pre-ranked by a scoring engine (higher is better).\n\n",
        ranked.len()
    ));
    for (rank, candidate) in ranked.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {} (total={}, skills={}, experience={}, projects={}, blog={}, bio={})\n",
            rank + 1,
            candidate.id,
            candidate.total_score,
            candidate.skills_score,
            candidate.experience_score,
            candidate.project_quality_score,
            candidate.blog_score,
            candidate.bio_score
        ));
    }
    prompt.push_str(&format!(
        "\nSelect the best {} portfolio(s). Reply with their ids only, comma separated, \
         best first, with no other text.\n",
        settings.pick
    ));
    prompt
}

/// Extracts ranked ids from a model reply, in reply order, at most `pick`.
/// Ids match case-insensitively and come back in their ranked spelling.
pub fn parse_selection(
    reply: &str,
    ranked: &[ScoredCandidate],
    pick: usize,
) -> Result<Vec<String>> {
    let known: HashMap<String, &str> = ranked
        .iter()
        .map(|candidate| (candidate.id.to_lowercase(), candidate.id.as_str()))
        .collect();

    let mut seen = HashSet::new();
    let selected: Vec<String> = reply
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .map(|token| token.trim_matches(is_wrapping_punctuation))
        .filter(|token| !token.is_empty())
        .filter_map(|token| known.get(&token.to_lowercase()).copied())
        .filter(|id| seen.insert(*id))
        .take(pick)
        .map(str::to_string)
        .collect();

    if selected.is_empty() {
        return Err(RankError::NoMatchingSelection);
    }
    Ok(selected)
}

fn is_wrapping_punctuation(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | '`' | '[' | ']' | '(' | ')' | '{' | '}' | '<' | '>' | '.' | ':' | '*'
    )
}
