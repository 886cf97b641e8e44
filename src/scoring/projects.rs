use crate::types::candidate::ProjectEntry;
use crate::types::config::ProjectPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPoints {
    pub description: i64,
    pub demo: i64,
    pub repository: i64,
    pub technologies: i64,
}

impl ProjectPoints {
    pub fn total(&self) -> i64 {
        self.description
            .saturating_add(self.demo)
            .saturating_add(self.repository)
            .saturating_add(self.technologies)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsDetail {
    pub per_project: Vec<ProjectPoints>,
    pub breadth_bonus: i64,
    pub score: i64,
}

pub fn project_quality_score(projects: &[ProjectEntry], policy: &ProjectPolicy) -> ProjectsDetail {
    let per_project: Vec<_> = projects
        .iter()
        .map(|project| project_points(project, policy))
        .collect();
    let breadth_bonus = (projects.len() as i64 - 1)
        .max(0)
        .min(policy.extra_project_cap);
    let score = per_project
        .iter()
        .map(ProjectPoints::total)
        .fold(breadth_bonus, i64::saturating_add);

    ProjectsDetail {
        per_project,
        breadth_bonus,
        score,
    }
}

pub fn project_points(project: &ProjectEntry, policy: &ProjectPolicy) -> ProjectPoints {
    let described = project.description.chars().count() >= policy.min_description_chars;
    ProjectPoints {
        description: if described {
            policy.description_points
        } else {
            0
        },
        demo: if project.demo_url.is_some() {
            policy.demo_points
        } else {
            0
        },
        repository: if project.github_url.is_some() {
            policy.repository_points
        } else {
            0
        },
        technologies: (project.technology_count as i64).min(policy.technology_cap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(description: usize, demo: bool, git: bool, technologies: usize) -> ProjectEntry {
        ProjectEntry {
            description: "d".repeat(description),
            demo_url: demo.then(|| "https://demo".to_string()),
            github_url: git.then(|| "https://git".to_string()),
            technology_count: technologies,
        }
    }

    #[test]
    fn single_project_earns_all_components() {
        let detail =
            project_quality_score(&[project(100, true, true, 3)], &ProjectPolicy::default());
        assert_eq!(detail.per_project[0].total(), 5 + 3 + 3 + 3);
        assert_eq!(detail.breadth_bonus, 0);
        assert_eq!(detail.score, 14);
    }

    #[test]
    fn six_technologies_cap_at_five() {
        let points = project_points(&project(0, false, false, 6), &ProjectPolicy::default());
        assert_eq!(points.technologies, 5);
    }

    #[test]
    fn short_description_earns_nothing() {
        let points = project_points(&project(79, false, false, 0), &ProjectPolicy::default());
        assert_eq!(points, ProjectPoints::default());
    }

    #[test]
    fn breadth_bonus_rewards_extra_projects_with_cap() {
        let two = vec![project(0, false, false, 0); 2];
        assert_eq!(
            project_quality_score(&two, &ProjectPolicy::default()).breadth_bonus,
            1
        );

        let many = vec![project(0, false, false, 0); 25];
        let detail = project_quality_score(&many, &ProjectPolicy::default());
        assert_eq!(detail.breadth_bonus, 10);
        assert_eq!(detail.score, 10);
    }

    #[test]
    fn no_projects_scores_zero() {
        assert_eq!(
            project_quality_score(&[], &ProjectPolicy::default()),
            ProjectsDetail::default()
        );
    }
}
