//! The fixed table of agents known to the assistant

use tracing::debug;

use super::profile::{AgentKind, AgentProfile, AgentStatus};

/// Read-only, declaration-ordered table of agent profiles
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    profiles: Vec<AgentProfile>,
}

impl AgentRegistry {
    /// Create a registry from an explicit list of profiles
    pub fn new(profiles: Vec<AgentProfile>) -> Self {
        debug!("AgentRegistry: initialized with {} agents", profiles.len());
        Self { profiles }
    }

    /// The seven built-in agents
    pub fn builtin() -> Self {
        Self::new(vec![
            profile(
                "iqvia",
                "IQVIA Insights Agent",
                AgentStatus::Active,
                "Market analysis, sales trends, and competitive intelligence",
                247,
                1.2,
                98.5,
            ),
            profile(
                "clinical",
                "Clinical Trials Agent",
                AgentStatus::Active,
                "Trial pipeline data from ClinicalTrials.gov and WHO ICTRP",
                189,
                0.8,
                100.0,
            ),
            profile(
                "patent",
                "Patent Landscape Agent",
                AgentStatus::Active,
                "Patent searches, expiry timelines, and FTO analysis",
                156,
                1.5,
                96.2,
            ),
            profile(
                "exim",
                "EXIM Trends Agent",
                AgentStatus::Idle,
                "Export-import data for APIs and formulations",
                98,
                1.1,
                99.1,
            ),
            profile(
                "web",
                "Web Intelligence Agent",
                AgentStatus::Active,
                "Real-time web search for guidelines and publications",
                312,
                0.9,
                97.8,
            ),
            profile(
                "internal",
                "Internal Knowledge Agent",
                AgentStatus::Idle,
                "Internal documents and strategy deck analysis",
                67,
                2.1,
                100.0,
            ),
            profile(
                "report",
                "Report Generator Agent",
                AgentStatus::Idle,
                "Formats findings into polished reports",
                134,
                3.2,
                100.0,
            ),
        ])
    }

    /// Get an agent profile by ID
    pub fn get(&self, id: &str) -> Option<&AgentProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// All profiles in declaration order
    pub fn profiles(&self) -> &[AgentProfile] {
        &self.profiles
    }

    /// Profiles that have a simulation behind them
    pub fn simulated(&self) -> impl Iterator<Item = (AgentKind, &AgentProfile)> {
        self.profiles
            .iter()
            .filter_map(|p| p.kind().map(|kind| (kind, p)))
    }

    /// Number of registered agents
    pub fn count(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn profile(
    id: &str,
    name: &str,
    status: AgentStatus,
    description: &str,
    queries_processed: u64,
    avg_response_time: f64,
    success_rate: f64,
) -> AgentProfile {
    AgentProfile {
        id: id.to_string(),
        name: name.to_string(),
        status,
        description: description.to_string(),
        queries_processed,
        avg_response_time,
        success_rate,
    }
}
