use crate::scoring::ScoreBreakdown;
use crate::types::candidate::ScoredCandidate;
use crate::types::report::RankingReport;

pub fn to_markdown(report: &RankingReport) -> String {
    let mut output = String::new();
    output.push_str("# Portfolio Ranking\n\n");
    output.push_str(&format!(
        "- received: {}\n- skipped: {}\n- distinct users: {}\n- top n: {}\n- input sha256: {}\n\n",
        report.received,
        report.skipped,
        report.distinct_users,
        report.top_n,
        report.input_sha256
    ));
    if let Some(reason) = &report.rejected {
        output.push_str(&format!("Payload rejected: {reason}\n\n"));
    }

    output.push_str("## Ranked Portfolios\n\n");
    if report.candidates.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| # | id | user | total | skills | experience | projects | blog | bio |\n");
    output.push_str("|---|----|------|-------|--------|------------|----------|------|-----|\n");
    for (rank, candidate) in report.candidates.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            rank + 1,
            candidate.id,
            candidate.user_id,
            candidate.total_score,
            candidate.skills_score,
            candidate.experience_score,
            candidate.project_quality_score,
            candidate.blog_score,
            candidate.bio_score
        ));
    }
    output
}

pub fn explain_markdown(entries: &[(ScoredCandidate, ScoreBreakdown)]) -> String {
    let mut output = String::new();
    output.push_str("# Portfolio Score Breakdown\n");
    if entries.is_empty() {
        output.push_str("\n- none\n");
        return output;
    }

    for (candidate, detail) in entries {
        output.push_str(&format!(
            "\n## {} (user {})\n\ntotal: {}\n\n",
            candidate.id, candidate.user_id, candidate.total_score
        ));
        output.push_str(&format!(
            "- experience: {} ({} entries, {} months)\n",
            detail.experience.score, detail.experience.entries, detail.experience.months
        ));
        let categories = detail
            .skills
            .categories
            .iter()
            .map(|(name, count)| format!("{name}:{count}"))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "- skills: {} (proficiency {}, categories [{}], bonus {})\n",
            detail.skills.score, detail.skills.proficiency_sum, categories, detail.skills.category_bonus
        ));
        output.push_str(&format!(
            "- blog: {} ({} of {} posts relevant)\n",
            detail.blog.score, detail.blog.relevant, detail.blog.posts
        ));
        output.push_str(&format!(
            "- bio: {} (length {}, sentences {}, keywords {}, placeholder {})\n",
            detail.bio.score,
            detail.bio.length,
            detail.bio.sentences,
            if detail.bio.has_keywords { "yes" } else { "no" },
            if detail.bio.placeholder { "yes" } else { "no" }
        ));
        output.push_str(&format!(
            "- projects: {} ({} projects, breadth bonus {})\n",
            detail.projects.score,
            detail.projects.per_project.len(),
            detail.projects.breadth_bonus
        ));
        for (index, points) in detail.projects.per_project.iter().enumerate() {
            output.push_str(&format!(
                "  - #{}: {} (description {}, demo {}, repository {}, technologies {})\n",
                index + 1,
                points.total(),
                points.description,
                points.demo,
                points.repository,
                points.technologies
            ));
        }
    }
    output
}
