//! Dashboard statistics derived from the session and the agent registry

use serde::Serialize;

use crate::agents::AgentRegistry;
use crate::store::SessionStore;
use crate::types::ReportStatus;

/// Data points credited per submitted query
const DATA_POINTS_PER_QUERY: f64 = 1.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_queries: usize,
    pub reports_ready: usize,
    pub data_points_analyzed: u64,
    pub active_agents: usize,
    pub total_agents: usize,
    /// Mean of the agents' average response times, seconds
    pub avg_response_time: f64,
    pub total_queries_processed: u64,
    pub avg_success_rate: f64,
}

impl DashboardStats {
    pub fn collect(store: &SessionStore, agents: &AgentRegistry) -> Self {
        let total_queries = store.queries().len();
        let profiles = agents.profiles();
        let mean = |values: Vec<f64>| {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        };

        Self {
            total_queries,
            reports_ready: store
                .reports()
                .iter()
                .filter(|r| r.status == ReportStatus::Ready)
                .count(),
            data_points_analyzed: (total_queries as f64 * DATA_POINTS_PER_QUERY).floor() as u64,
            active_agents: profiles.iter().filter(|p| p.is_active()).count(),
            total_agents: profiles.len(),
            avg_response_time: mean(profiles.iter().map(|p| p.avg_response_time).collect()),
            total_queries_processed: profiles.iter().map(|p| p.queries_processed).sum(),
            avg_success_rate: mean(profiles.iter().map(|p| p.success_rate).collect()),
        }
    }
}
