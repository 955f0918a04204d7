//! Agent profiles: identity, lifecycle status and cumulative counters

use serde::{Deserialize, Serialize};

/// Lifecycle status shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Idle,
    Processing,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Idle => write!(f, "idle"),
            Self::Processing => write!(f, "processing"),
        }
    }
}

/// The five agents that have simulation logic behind them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// Market sizing and competition (`iqvia`)
    Market,
    Clinical,
    Patent,
    /// Export/import trade data (`exim`)
    Trade,
    /// Literature and guideline search (`web`)
    Web,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        Self::Market,
        Self::Clinical,
        Self::Patent,
        Self::Trade,
        Self::Web,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Market => "iqvia",
            Self::Clinical => "clinical",
            Self::Patent => "patent",
            Self::Trade => "exim",
            Self::Web => "web",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Market => "IQVIA Insights Agent",
            Self::Clinical => "Clinical Trials Agent",
            Self::Patent => "Patent Landscape Agent",
            Self::Trade => "EXIM Trends Agent",
            Self::Web => "Web Intelligence Agent",
        }
    }

    /// Resolve an agent identifier; `None` for agents without simulation logic
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A registered agent as shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub id: String,
    pub name: String,
    pub status: AgentStatus,
    pub description: String,
    pub queries_processed: u64,
    /// Seconds
    pub avg_response_time: f64,
    /// Percentage, 0–100
    pub success_rate: f64,
}

impl AgentProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: AgentStatus::Idle,
            description: String::new(),
            queries_processed: 0,
            avg_response_time: 0.0,
            success_rate: 0.0,
        }
    }

    pub fn kind(&self) -> Option<AgentKind> {
        AgentKind::from_id(&self.id)
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }
}

/// An agent picked for a query, together with the line it reports on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDescriptor {
    pub kind: AgentKind,
    pub success_message: &'static str,
}

impl AgentDescriptor {
    pub const fn new(kind: AgentKind, success_message: &'static str) -> Self {
        Self {
            kind,
            success_message,
        }
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }
}
