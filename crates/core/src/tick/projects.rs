//! Project and task listing reports

use serde::Serialize;

use super::types::{Project, Task};

/// One row of the `list_projects` report.
#[derive(Debug, Serialize, PartialEq)]
pub struct ProjectRow {
    pub id: u64,
    pub name: String,
    pub client: String,
    pub budget: f64,
    pub hours_used: f64,
    pub budget_remaining: f64,
    pub is_closed: bool,
    pub owner: String,
}

/// Response shape for the `list_projects` tool.
#[derive(Debug, Serialize, PartialEq)]
pub struct ProjectsOutput {
    pub total_projects: usize,
    pub total_budget: f64,
    pub total_hours_logged: f64,
    pub projects: Vec<ProjectRow>,
}

pub fn transform_projects(projects: &[Project]) -> ProjectsOutput {
    let total_budget = projects.iter().map(Project::budget).sum();
    let total_hours_logged = projects.iter().map(Project::hours).sum();

    ProjectsOutput {
        total_projects: projects.len(),
        total_budget,
        total_hours_logged,
        projects: projects
            .iter()
            .map(|p| ProjectRow {
                id: p.id,
                name: p.name.clone(),
                client: p.client_name().to_string(),
                budget: p.budget(),
                hours_used: p.hours(),
                budget_remaining: p.budget() - p.hours(),
                is_closed: p.is_closed(),
                owner: p.owner_name().to_string(),
            })
            .collect(),
    }
}

/// One row of the `get_project_tasks` report.
#[derive(Debug, Serialize, PartialEq)]
pub struct TaskRow {
    pub id: u64,
    pub name: String,
    pub budget: f64,
    pub hours_used: f64,
    pub is_closed: bool,
}

/// Response shape for the `get_project_tasks` tool.
#[derive(Debug, Serialize, PartialEq)]
pub struct TasksOutput {
    pub project: String,
    pub project_id: u64,
    pub total_tasks: usize,
    pub tasks: Vec<TaskRow>,
}

pub fn transform_tasks(project: String, project_id: u64, tasks: &[Task]) -> TasksOutput {
    TasksOutput {
        project,
        project_id,
        total_tasks: tasks.len(),
        tasks: tasks
            .iter()
            .map(|t| TaskRow {
                id: t.id,
                name: t.name.clone(),
                budget: t.budget(),
                hours_used: t.hours_used(),
                is_closed: t.is_closed(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick::types::{ClientRef, Owner};

    fn project(id: u64, name: &str, budget: Option<f64>, hours: Option<f64>) -> Project {
        Project {
            id,
            name: name.to_string(),
            budget,
            hours,
            ..Project::default()
        }
    }

    #[test]
    fn test_transform_projects_totals_and_remaining_budget() {
        let mut acme = project(1, "Acme", Some(100.0), Some(40.0));
        acme.client = Some(ClientRef {
            id: 5,
            name: "Acme Inc".to_string(),
        });
        acme.owner = Some(Owner {
            first_name: "Ada".to_string(),
        });
        let internal = project(2, "Internal", None, Some(10.0));

        let output = transform_projects(&[acme, internal]);

        assert_eq!(output.total_projects, 2);
        assert_eq!(output.total_budget, 100.0);
        assert_eq!(output.total_hours_logged, 50.0);
        assert_eq!(output.projects[0].budget_remaining, 60.0);
        assert_eq!(output.projects[0].client, "Acme Inc");
        assert_eq!(output.projects[0].owner, "Ada");
        assert_eq!(output.projects[1].client, "No client");
        assert_eq!(output.projects[1].budget_remaining, -10.0);
    }

    #[test]
    fn test_transform_tasks() {
        let tasks = vec![
            Task {
                id: 100,
                name: "Design".to_string(),
                budget: Some(20.0),
                sum_hours: Some(12.5),
                closed: Some(false),
            },
            Task {
                id: 101,
                name: "Review".to_string(),
                ..Task::default()
            },
        ];

        let output = transform_tasks("acme".to_string(), 1, &tasks);

        assert_eq!(output.project, "acme");
        assert_eq!(output.project_id, 1);
        assert_eq!(output.total_tasks, 2);
        assert_eq!(output.tasks[0].hours_used, 12.5);
        assert_eq!(output.tasks[1].budget, 0.0);
        assert!(!output.tasks[1].is_closed);
    }
}
