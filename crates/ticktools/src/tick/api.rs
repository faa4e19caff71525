//! Typed Tick API client over a [`Transport`]
//!
//! Listing endpoints are paginated: the client requests page 1 (no `page`
//! parameter, matching pre-pagination responses), then `page=2`, `page=3`, …
//! and stops at the first empty page. There is no page cap; an endpoint that
//! never returns an empty page is a broken remote contract. Pages are
//! requested strictly one at a time.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use ticktools_core::tick::{
    build_create_body, candidate_names, find_match, Client, Project, Task, TimeEntry, User,
};

use super::transport::{HttpTransport, Transport, TransportError};
use super::TickConfig;
use crate::error::ToolError;
use crate::prelude::Result;

pub struct TickApi<T: Transport> {
    transport: T,
}

impl TickApi<HttpTransport> {
    /// Build the client once at process start from `TICK_SUBDOMAIN` and
    /// `TICK_API_TOKEN`; every component takes it by reference.
    pub fn from_env() -> Result<Self> {
        let config = TickConfig::from_env()?;
        Ok(Self::new(HttpTransport::new(&config)?))
    }
}

impl<T: Transport> TickApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn get_page<R: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(String, String)],
        page: u32,
    ) -> Result<Vec<R>, TransportError> {
        let mut query: Vec<(String, String)> = filters.to_vec();
        if page > 1 {
            query.push(("page".to_string(), page.to_string()));
        }

        let value = self.transport.request(Method::GET, path, &query, None).await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// Fully paginate a listing endpoint, concatenating pages in order.
    /// Issues exactly `k + 1` requests for `k` non-empty pages.
    pub async fn fetch_all<R: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(String, String)],
    ) -> Result<Vec<R>, TransportError> {
        let mut all = Vec::new();
        let mut page = 1;
        loop {
            let records: Vec<R> = self.get_page(path, filters, page).await?;
            if records.is_empty() {
                break;
            }
            all.extend(records);
            page += 1;
        }
        Ok(all)
    }

    pub async fn get_all_projects(&self) -> Result<Vec<Project>, TransportError> {
        self.fetch_all("projects.json", &[]).await
    }

    pub async fn get_tasks(&self, project_id: u64) -> Result<Vec<Task>, TransportError> {
        let value = self
            .transport
            .request(
                Method::GET,
                &format!("projects/{project_id}/tasks.json"),
                &[],
                None,
            )
            .await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    pub async fn get_clients(&self) -> Result<Vec<Client>, TransportError> {
        let value = self
            .transport
            .request(Method::GET, "clients.json", &[], None)
            .await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    pub async fn get_users(&self) -> Result<Vec<User>, TransportError> {
        let value = self
            .transport
            .request(Method::GET, "users.json", &[], None)
            .await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// All time entries, optionally scoped to a project and a date window.
    /// Filters are passed through unchanged on every page request.
    pub async fn get_all_time_entries(
        &self,
        project_id: Option<u64>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<TimeEntry>, TransportError> {
        let path = match project_id {
            Some(id) => format!("projects/{id}/time_entries.json"),
            None => "time_entries.json".to_string(),
        };

        let mut filters = Vec::new();
        if let Some(start) = start_date {
            filters.push(("start_date".to_string(), start.to_string()));
        }
        if let Some(end) = end_date {
            filters.push(("end_date".to_string(), end.to_string()));
        }

        self.fetch_all(&path, &filters).await
    }

    /// Resolve a human-typed project name; not-found carries the full name
    /// list as a suggestion set.
    pub async fn find_project(&self, name: &str) -> Result<Project, ToolError> {
        let projects = self.get_all_projects().await?;
        match find_match(&projects, name) {
            Some(id) => Ok(projects
                .into_iter()
                .find(|p| p.id == id)
                .unwrap_or_default()),
            None => Err(ToolError::ProjectNotFound {
                name: name.to_string(),
                available: candidate_names(&projects),
            }),
        }
    }

    /// Resolve a task name within a project's task list.
    pub async fn find_task(
        &self,
        project_id: u64,
        project_label: &str,
        name: &str,
    ) -> Result<u64, ToolError> {
        let tasks = self.get_tasks(project_id).await?;
        find_match(&tasks, name).ok_or_else(|| ToolError::TaskNotFound {
            task: name.to_string(),
            project: project_label.to_string(),
            available: candidate_names(&tasks),
        })
    }

    /// Single POST; no retry.
    pub async fn create_time_entry(
        &self,
        project_id: u64,
        task_id: u64,
        hours: f64,
        date: &str,
        notes: &str,
    ) -> Result<Value, TransportError> {
        let body = build_create_body(task_id, hours, date, notes);
        self.transport
            .request(
                Method::POST,
                &format!("projects/{project_id}/time_entries.json"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Single PUT; the body comes pre-validated from
    /// [`ticktools_core::tick::build_update_body`].
    pub async fn update_time_entry(
        &self,
        entry_id: u64,
        body: &Value,
    ) -> Result<Value, TransportError> {
        self.transport
            .request(
                Method::PUT,
                &format!("time_entries/{entry_id}.json"),
                &[],
                Some(body),
            )
            .await
    }

    /// Single DELETE; success is the absence of a transport error (the
    /// response body carries no content).
    pub async fn delete_time_entry(&self, entry_id: u64) -> Result<(), TransportError> {
        self.transport
            .request(
                Method::DELETE,
                &format!("time_entries/{entry_id}.json"),
                &[],
                None,
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct LoggedRequest {
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        body: Option<Value>,
    }

    /// Scripted transport: pops one canned response per request and records
    /// everything it was asked to do.
    struct FakeTransport {
        responses: Mutex<VecDeque<Value>>,
        log: Mutex<Vec<LoggedRequest>>,
    }

    impl FakeTransport {
        fn with_responses(responses: Vec<Value>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                log: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<LoggedRequest> {
            self.log.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn request(
            &self,
            method: Method,
            path: &str,
            query: &[(String, String)],
            body: Option<&Value>,
        ) -> Result<Value, TransportError> {
            self.log.lock().unwrap().push(LoggedRequest {
                method,
                path: path.to_string(),
                query: query.to_vec(),
                body: body.cloned(),
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| TransportError::Network("no scripted response".to_string()))
        }
    }

    fn page(ids: &[u64]) -> Value {
        Value::Array(
            ids.iter()
                .map(|id| json!({"id": id, "name": format!("Project {id}")}))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_fetch_all_concatenates_pages_in_order() {
        let api = TickApi::new(FakeTransport::with_responses(vec![
            page(&[1, 2]),
            page(&[3]),
            json!([]),
        ]));

        let projects = api.get_all_projects().await.unwrap();

        let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // k + 1 requests for k non-empty pages
        assert_eq!(api.transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_all_page_param_only_from_page_two() {
        let api = TickApi::new(FakeTransport::with_responses(vec![
            page(&[1]),
            page(&[2]),
            json!([]),
        ]));

        api.get_all_projects().await.unwrap();

        let requests = api.transport.requests();
        assert!(requests[0].query.is_empty());
        assert_eq!(
            requests[1].query,
            vec![("page".to_string(), "2".to_string())]
        );
        assert_eq!(
            requests[2].query,
            vec![("page".to_string(), "3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_empty_first_page() {
        let api = TickApi::new(FakeTransport::with_responses(vec![json!([])]));

        let projects = api.get_all_projects().await.unwrap();

        assert!(projects.is_empty());
        assert_eq!(api.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_time_entry_filters_passed_on_every_page() {
        let entries = json!([{"id": 1, "hours": 2.0, "date": "2024-03-01"}]);
        let api = TickApi::new(FakeTransport::with_responses(vec![entries, json!([])]));

        api.get_all_time_entries(Some(16), Some("2024-03-01"), Some("2024-03-31"))
            .await
            .unwrap();

        let requests = api.transport.requests();
        assert_eq!(requests[0].path, "projects/16/time_entries.json");
        for request in &requests {
            assert!(request
                .query
                .contains(&("start_date".to_string(), "2024-03-01".to_string())));
            assert!(request
                .query
                .contains(&("end_date".to_string(), "2024-03-31".to_string())));
        }
        assert_eq!(requests[1].query.last().unwrap().1, "2");
    }

    #[tokio::test]
    async fn test_time_entries_without_project_use_global_endpoint() {
        let api = TickApi::new(FakeTransport::with_responses(vec![json!([])]));

        api.get_all_time_entries(None, None, None).await.unwrap();

        let requests = api.transport.requests();
        assert_eq!(requests[0].path, "time_entries.json");
        assert!(requests[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_find_project_not_found_lists_candidates() {
        let api = TickApi::new(FakeTransport::with_responses(vec![
            json!([{"id": 1, "name": "Acme Corp"}, {"id": 2, "name": "Acme Labs"}]),
            json!([]),
        ]));

        let err = api.find_project("zzz").await.unwrap_err();

        match err {
            ToolError::ProjectNotFound { name, available } => {
                assert_eq!(name, "zzz");
                assert_eq!(available, vec!["Acme Corp", "Acme Labs"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_project_first_match_wins() {
        let api = TickApi::new(FakeTransport::with_responses(vec![
            json!([{"id": 1, "name": "Acme Corp"}, {"id": 2, "name": "Acme Labs"}]),
            json!([]),
        ]));

        let project = api.find_project("acme").await.unwrap();

        assert_eq!(project.id, 1);
        assert_eq!(project.name, "Acme Corp");
    }

    #[tokio::test]
    async fn test_create_time_entry_request_shape() {
        let api = TickApi::new(FakeTransport::with_responses(vec![json!({"id": 99})]));

        api.create_time_entry(16, 42, 2.5, "2024-03-01", "standup")
            .await
            .unwrap();

        let requests = api.transport.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, "projects/16/time_entries.json");
        assert_eq!(
            requests[0].body,
            Some(json!({"task_id": 42, "hours": 2.5, "date": "2024-03-01", "notes": "standup"}))
        );
    }

    #[tokio::test]
    async fn test_update_time_entry_request_shape() {
        let api = TickApi::new(FakeTransport::with_responses(vec![json!({
            "id": 99, "hours": 3.0, "notes": "revised"
        })]));
        let body = json!({"hours": 3.0, "notes": "revised"});

        api.update_time_entry(99, &body).await.unwrap();

        let requests = api.transport.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].path, "time_entries/99.json");
        assert_eq!(requests[0].body, Some(body));
    }

    #[tokio::test]
    async fn test_created_entry_appears_once_in_subsequent_fetch() {
        let created = json!({"id": 99, "hours": 2.5, "date": "2024-03-01"});
        let api = TickApi::new(FakeTransport::with_responses(vec![
            created.clone(),
            json!([created]),
            json!([]),
        ]));

        api.create_time_entry(16, 42, 2.5, "2024-03-01", "")
            .await
            .unwrap();
        let entries = api
            .get_all_time_entries(Some(16), Some("2024-03-01"), Some("2024-03-01"))
            .await
            .unwrap();

        assert_eq!(entries.iter().filter(|e| e.id == 99).count(), 1);
    }

    #[tokio::test]
    async fn test_delete_time_entry_tolerates_empty_body() {
        let api = TickApi::new(FakeTransport::with_responses(vec![Value::Null]));

        api.delete_time_entry(99).await.unwrap();

        let requests = api.transport.requests();
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].path, "time_entries/99.json");
    }
}
