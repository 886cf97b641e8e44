use crate::types::candidate::SkillEntry;
use crate::types::config::SkillsPolicy;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsDetail {
    pub proficiency_sum: i64,
    /// Categories in first-seen order, keyed by their first spelling.
    pub categories: Vec<(String, usize)>,
    pub category_bonus: i64,
    pub score: i64,
}

pub fn skills_score(skills: &[SkillEntry], policy: &SkillsPolicy) -> SkillsDetail {
    let proficiency_sum = skills
        .iter()
        .filter_map(|skill| skill.proficiency)
        .map(i64::from)
        .fold(0i64, i64::saturating_add);

    let mut categories: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for category in skills.iter().filter_map(|skill| skill.category.as_deref()) {
        let key = category.to_lowercase();
        match slots.get(&key) {
            Some(&slot) => categories[slot].1 += 1,
            None => {
                slots.insert(key, categories.len());
                categories.push((category.to_string(), 1));
            }
        }
    }

    let category_bonus = categories
        .iter()
        .map(|(_, count)| (*count as i64).min(policy.category_bonus_cap))
        .fold(0i64, i64::saturating_add);
    let score = proficiency_sum
        .saturating_add((categories.len() as i64).saturating_mul(policy.points_per_category))
        .saturating_add(category_bonus);

    SkillsDetail {
        proficiency_sum,
        categories,
        category_bonus,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: Option<i32>, category: Option<&str>) -> SkillEntry {
        SkillEntry {
            proficiency: level,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn sums_proficiency_and_category_points() {
        let skills = vec![
            skill(Some(3), Some("backend")),
            skill(Some(4), Some("frontend")),
        ];
        let detail = skills_score(&skills, &SkillsPolicy::default());
        assert_eq!(detail.proficiency_sum, 7);
        assert_eq!(detail.category_bonus, 2);
        assert_eq!(detail.score, 7 + 2 * 5 + 2);
    }

    #[test]
    fn categories_match_case_insensitively() {
        let skills = vec![
            skill(Some(5), Some("Backend")),
            skill(Some(2), Some("backend")),
            skill(Some(4), Some("DevOps")),
        ];
        let detail = skills_score(&skills, &SkillsPolicy::default());
        assert_eq!(
            detail.categories,
            vec![("Backend".to_string(), 2), ("DevOps".to_string(), 1)]
        );
        assert_eq!(detail.score, 11 + 2 * 5 + 3);
    }

    #[test]
    fn category_bonus_is_capped_per_category() {
        let skills: Vec<_> = (0..8).map(|_| skill(None, Some("tools"))).collect();
        let detail = skills_score(&skills, &SkillsPolicy::default());
        assert_eq!(detail.category_bonus, 5);
        assert_eq!(detail.score, 5 + 5);
    }

    #[test]
    fn missing_proficiency_still_counts_category() {
        let skills = vec![skill(None, Some("design")), skill(Some(2), None)];
        let detail = skills_score(&skills, &SkillsPolicy::default());
        assert_eq!(detail.proficiency_sum, 2);
        assert_eq!(detail.score, 2 + 5 + 1);
    }
}
