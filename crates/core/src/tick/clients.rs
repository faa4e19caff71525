//! Client report, enriched by grouping fetched projects on `client.id`
//!
//! Tick has no client → project listing endpoint, so the relation is built
//! locally from the full project list.

use serde::Serialize;

use super::types::{Client, Project};

/// One row of the `list_clients` report.
#[derive(Debug, Serialize, PartialEq)]
pub struct ClientRow {
    pub id: u64,
    pub name: String,
    pub project_count: usize,
    pub total_budget: f64,
    pub total_hours_logged: f64,
    pub projects: Vec<String>,
}

/// Response shape for the `list_clients` tool.
#[derive(Debug, Serialize, PartialEq)]
pub struct ClientsOutput {
    pub total_clients: usize,
    pub clients: Vec<ClientRow>,
}

pub fn transform_clients(clients: &[Client], projects: &[Project]) -> ClientsOutput {
    let rows = clients
        .iter()
        .map(|client| {
            let owned: Vec<&Project> = projects
                .iter()
                .filter(|p| p.client_id() == Some(client.id))
                .collect();

            ClientRow {
                id: client.id,
                name: client.name.clone(),
                project_count: owned.len(),
                total_budget: owned.iter().map(|p| p.budget()).sum(),
                total_hours_logged: owned.iter().map(|p| p.hours()).sum(),
                projects: owned.iter().map(|p| p.name.clone()).collect(),
            }
        })
        .collect();

    ClientsOutput {
        total_clients: clients.len(),
        clients: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick::types::ClientRef;

    fn client(id: u64, name: &str) -> Client {
        Client {
            id,
            name: name.to_string(),
        }
    }

    fn project(name: &str, client_id: Option<u64>, budget: f64, hours: f64) -> Project {
        Project {
            id: 1,
            name: name.to_string(),
            budget: Some(budget),
            hours: Some(hours),
            client: client_id.map(|id| ClientRef {
                id,
                name: String::new(),
            }),
            ..Project::default()
        }
    }

    #[test]
    fn test_transform_clients_groups_projects() {
        let clients = vec![client(1, "Acme Inc"), client(2, "Globex")];
        let projects = vec![
            project("Website", Some(1), 100.0, 40.0),
            project("App", Some(1), 50.0, 10.0),
            project("Orphan", None, 10.0, 1.0),
        ];

        let output = transform_clients(&clients, &projects);

        assert_eq!(output.total_clients, 2);
        let acme = &output.clients[0];
        assert_eq!(acme.project_count, 2);
        assert_eq!(acme.total_budget, 150.0);
        assert_eq!(acme.total_hours_logged, 50.0);
        assert_eq!(acme.projects, vec!["Website", "App"]);

        let globex = &output.clients[1];
        assert_eq!(globex.project_count, 0);
        assert_eq!(globex.total_budget, 0.0);
        assert!(globex.projects.is_empty());
    }
}
