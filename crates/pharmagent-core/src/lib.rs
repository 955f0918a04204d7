//! pharmagent-core - simulated multi-agent research pipeline
//!
//! This crate provides:
//! - Agent registry with the seven research agents and their counters
//! - Keyword-based relevance selection of agents for a query
//! - Randomized result synthesis per agent
//! - A staged notifier that narrates each agent run with injectable delays
//! - Summary composition and query orchestration over a session store
//! - Dashboard and data-source read models

pub mod agents;
pub mod dashboard;
pub mod delay;
pub mod error;
pub mod notifier;
pub mod orchestrator;
pub mod samples;
pub mod selector;
pub mod sources;
pub mod store;
pub mod summary;
pub mod synthesizer;
pub mod types;

// Re-export main types for convenience
pub use agents::{AgentDescriptor, AgentKind, AgentProfile, AgentRegistry, AgentStatus};
pub use dashboard::DashboardStats;
pub use delay::{Delay, NoDelay, RecordingDelay, TokioDelay};
pub use error::{StoreError, SubmitError};
pub use notifier::StagedNotifier;
pub use orchestrator::{QueryOrchestrator, QueryOutcome};
pub use samples::SAMPLE_QUERIES;
pub use selector::select_agents;
pub use sources::{DataSource, SourceHealth, SourceStatus, builtin_sources};
pub use store::SessionStore;
pub use summary::compose;
pub use synthesizer::synthesize;
pub use types::{
    AgentResult, Message, MessageData, MessageKind, Query, QueryPatch, QueryResponse,
    QueryStatus, Report, ReportStatus, View,
};
