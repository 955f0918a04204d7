//! Shared types for pharmagent-core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle of a submitted query.
///
/// Legal transitions are `pending → processing → completed | failed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl QueryStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Whether moving from `self` to `next` is allowed
    pub fn can_transition_to(self, next: QueryStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing)
                | (Self::Processing, Self::Completed)
                | (Self::Processing, Self::Failed)
        )
    }
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Structured output of one simulated agent run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentResult {
    pub agent_id: String,
    pub agent_name: String,
    /// Named findings; the shape depends on the agent
    pub data: Value,
    /// Display-only figure in milliseconds
    pub processing_time: f64,
}

/// What a completed query resolved to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub summary: String,
    pub data: Vec<AgentResult>,
    /// Link to a rendered report, when one has been published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
}

/// A user-submitted research request and its lifecycle record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub status: QueryStatus,
    pub agents_involved: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<QueryResponse>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            timestamp: Utc::now(),
            status: QueryStatus::Pending,
            agents_involved: Vec::new(),
            response: None,
        }
    }
}

/// Partial update applied to a stored query.
/// Fields left as `None` are untouched.
#[derive(Debug, Clone, Default)]
pub struct QueryPatch {
    pub status: Option<QueryStatus>,
    pub agents_involved: Option<Vec<String>>,
    pub response: Option<QueryResponse>,
}

impl QueryPatch {
    pub fn status(status: QueryStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Who produced a message in the session log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Agent,
    System,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Agent => write!(f, "agent"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Payload attached to an emitted message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MessageData {
    /// Every agent result, attached only to the final summary message
    Results { results: Vec<AgentResult> },
    /// One agent's findings, attached to its completion message
    Findings(Value),
}

/// One event in the narration of a query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

impl Message {
    fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            content: content.into(),
            timestamp: Utc::now(),
            agent_name: None,
            data: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageKind::System, content)
    }

    pub fn agent(agent_name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut msg = Self::new(MessageKind::Agent, content);
        msg.agent_name = Some(agent_name.into());
        msg
    }

    pub fn with_data(mut self, data: MessageData) -> Self {
        self.data = Some(data);
        self
    }

    /// The full result set, present only on a final summary message
    pub fn results(&self) -> Option<&[AgentResult]> {
        match &self.data {
            Some(MessageData::Results { results }) => Some(results),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Generating,
    Ready,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generating => write!(f, "generating"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// Longest report title taken verbatim from the query text
pub const REPORT_TITLE_MAX_CHARS: usize = 60;

/// Download link given to reports until a real export exists
pub const PLACEHOLDER_DOWNLOAD_URL: &str = "#";

/// Summary record derived from a completed query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub query_id: String,
    pub summary: String,
    pub download_url: String,
    pub status: ReportStatus,
}

impl Report {
    /// Build a ready report for a finished query
    pub fn for_query(query_id: &str, query_text: &str, summary: impl Into<String>) -> Self {
        Self {
            id: format!("report-{}", query_id),
            title: report_title(query_text),
            generated_at: Utc::now(),
            query_id: query_id.to_string(),
            summary: summary.into(),
            download_url: PLACEHOLDER_DOWNLOAD_URL.to_string(),
            status: ReportStatus::Ready,
        }
    }
}

/// First 60 characters of the query, with `...` appended when cut short
pub fn report_title(text: &str) -> String {
    let mut title: String = text.chars().take(REPORT_TITLE_MAX_CHARS).collect();
    if text.chars().count() > REPORT_TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}

/// Screen the hosting UI is showing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Query,
    History,
    Reports,
    Sources,
}

impl View {
    /// Parse a view identifier, falling back to the dashboard
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "query" => Self::Query,
            "history" => Self::History,
            "reports" => Self::Reports,
            "sources" => Self::Sources,
            _ => Self::Dashboard,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "dashboard"),
            Self::Query => write!(f, "query"),
            Self::History => write!(f, "history"),
            Self::Reports => write!(f, "reports"),
            Self::Sources => write!(f, "sources"),
        }
    }
}
