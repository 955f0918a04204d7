//! Session state: queries, reports, the message log and the current view
//!
//! One store lives for one hosting session. It is an explicit context object:
//! callers own it and pass it by reference, nothing is global.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::types::{Message, Query, QueryPatch, Report, View};

#[derive(Debug, Default)]
pub struct SessionStore {
    /// Newest first
    queries: Vec<Query>,
    /// Newest first
    reports: Vec<Report>,
    /// Oldest first, cleared when a new query starts
    messages: Vec<Message>,
    current_view: View,
}

impl SessionStore {
    /// An empty session showing the dashboard
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_query(&mut self, query: Query) {
        debug!("Recorded query {}", query.id);
        self.queries.insert(0, query);
    }

    /// Apply `patch` to the query with `id`.
    ///
    /// Status changes must follow the query lifecycle; a rejected patch leaves
    /// the query untouched.
    pub fn update_query(&mut self, id: &str, patch: QueryPatch) -> Result<(), StoreError> {
        let query = self
            .queries
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| StoreError::QueryNotFound(id.to_string()))?;

        if let Some(next) = patch.status {
            if next != query.status && !query.status.can_transition_to(next) {
                warn!("Rejected status change {} -> {} for query {}", query.status, next, id);
                return Err(StoreError::InvalidTransition {
                    id: id.to_string(),
                    from: query.status,
                    to: next,
                });
            }
            query.status = next;
        }
        if let Some(agents) = patch.agents_involved {
            query.agents_involved = agents;
        }
        if let Some(response) = patch.response {
            query.response = Some(response);
        }
        Ok(())
    }

    pub fn query(&self, id: &str) -> Option<&Query> {
        self.queries.iter().find(|q| q.id == id)
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Queries whose text contains `term`, ignoring case. Newest first.
    pub fn search_queries(&self, term: &str) -> Vec<&Query> {
        let term = term.to_lowercase();
        self.queries
            .iter()
            .filter(|q| q.text.to_lowercase().contains(&term))
            .collect()
    }

    pub fn add_report(&mut self, report: Report) {
        debug!("Recorded report {}", report.id);
        self.reports.insert(0, report);
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Log an uploaded file as a system message
    pub fn attach_file(&mut self, name: &str, size_bytes: u64) {
        self.add_message(Message::system(format!(
            "File uploaded: {} ({:.1} KB)",
            name,
            size_bytes as f64 / 1024.0
        )));
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MessageKind, QueryStatus};

    fn store_with_query(text: &str) -> (SessionStore, String) {
        let mut store = SessionStore::new();
        let query = Query::new(text);
        let id = query.id.clone();
        store.add_query(query);
        (store, id)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SessionStore::new();
        assert!(store.queries().is_empty());
        assert!(store.reports().is_empty());
        assert!(store.messages().is_empty());
        assert_eq!(store.current_view(), View::Dashboard);
    }

    #[test]
    fn test_queries_newest_first() {
        let mut store = SessionStore::new();
        store.add_query(Query::new("first"));
        store.add_query(Query::new("second"));
        assert_eq!(store.queries()[0].text, "second");
        assert_eq!(store.queries()[1].text, "first");
    }

    #[test]
    fn test_update_query_lifecycle() {
        let (mut store, id) = store_with_query("q");
        store
            .update_query(
                &id,
                QueryPatch {
                    status: Some(QueryStatus::Processing),
                    agents_involved: Some(vec!["patent".to_string()]),
                    response: None,
                },
            )
            .unwrap();
        store
            .update_query(&id, QueryPatch::status(QueryStatus::Completed))
            .unwrap();

        let query = store.query(&id).unwrap();
        assert_eq!(query.status, QueryStatus::Completed);
        assert_eq!(query.agents_involved, vec!["patent".to_string()]);
    }

    #[test]
    fn test_terminal_status_is_final() {
        let (mut store, id) = store_with_query("q");
        store
            .update_query(&id, QueryPatch::status(QueryStatus::Processing))
            .unwrap();
        store
            .update_query(&id, QueryPatch::status(QueryStatus::Failed))
            .unwrap();

        let err = store
            .update_query(&id, QueryPatch::status(QueryStatus::Completed))
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidTransition {
                id: id.clone(),
                from: QueryStatus::Failed,
                to: QueryStatus::Completed,
            }
        );
        assert_eq!(store.query(&id).unwrap().status, QueryStatus::Failed);
    }

    #[test]
    fn test_rejected_patch_changes_nothing() {
        let (mut store, id) = store_with_query("q");
        let result = store.update_query(
            &id,
            QueryPatch {
                status: Some(QueryStatus::Completed),
                agents_involved: Some(vec!["web".to_string()]),
                response: None,
            },
        );
        assert!(result.is_err());
        assert!(store.query(&id).unwrap().agents_involved.is_empty());
    }

    #[test]
    fn test_update_unknown_query() {
        let mut store = SessionStore::new();
        let err = store
            .update_query("missing", QueryPatch::status(QueryStatus::Processing))
            .unwrap_err();
        assert_eq!(err, StoreError::QueryNotFound("missing".to_string()));
    }

    #[test]
    fn test_search_queries() {
        let mut store = SessionStore::new();
        store.add_query(Query::new("Patent landscape for biologics"));
        store.add_query(Query::new("Import trends for APIs"));
        store.add_query(Query::new("GLP-1 trial landscape"));

        let hits = store.search_queries("LANDSCAPE");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].text, "GLP-1 trial landscape");
        assert_eq!(store.search_queries("").len(), 3);
        assert!(store.search_queries("oncology").is_empty());
    }

    #[test]
    fn test_messages_append_and_clear() {
        let mut store = SessionStore::new();
        store.add_message(Message::user("hi"));
        store.add_message(Message::system("working"));
        assert_eq!(store.messages()[0].kind, MessageKind::User);
        assert_eq!(store.messages().len(), 2);
        store.clear_messages();
        assert!(store.messages().is_empty());
    }

    #[test]
    fn test_reports_newest_first() {
        let mut store = SessionStore::new();
        store.add_report(Report::for_query("1", "first", "s"));
        store.add_report(Report::for_query("2", "second", "s"));
        assert_eq!(store.reports()[0].id, "report-2");
    }

    #[test]
    fn test_attach_file() {
        let mut store = SessionStore::new();
        store.attach_file("molecules.csv", 2048);
        let msg = &store.messages()[0];
        assert_eq!(msg.kind, MessageKind::System);
        assert_eq!(msg.content, "File uploaded: molecules.csv (2.0 KB)");
    }

    #[test]
    fn test_set_view() {
        let mut store = SessionStore::new();
        store.set_view(View::History);
        assert_eq!(store.current_view(), View::History);
    }
}
