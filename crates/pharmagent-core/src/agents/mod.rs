//! Agent registry and agent identities
//!
//! Seven agents are registered for display; five of them (market, clinical,
//! patent, trade, web) have a simulation behind them.

pub mod profile;
pub mod registry;

pub use profile::{AgentDescriptor, AgentKind, AgentProfile, AgentStatus};
pub use registry::AgentRegistry;
