use crate::types::candidate::BlogPostEntry;
use crate::types::config::BlogPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogDetail {
    pub posts: usize,
    pub relevant: usize,
    pub score: i64,
}

pub fn blog_score(posts: &[BlogPostEntry], policy: &BlogPolicy) -> BlogDetail {
    let relevant = posts
        .iter()
        .filter(|post| is_relevant(post, policy))
        .count();

    BlogDetail {
        posts: posts.len(),
        relevant,
        score: (relevant as i64).saturating_mul(policy.points_per_post),
    }
}

/// Published, tagged, and with a substantial excerpt or body.
pub fn is_relevant(post: &BlogPostEntry, policy: &BlogPolicy) -> bool {
    let substantial = post.excerpt.chars().count() >= policy.min_body_chars
        || post.content.chars().count() >= policy.min_body_chars;
    post.published && substantial && post.tag_count > 0
}
