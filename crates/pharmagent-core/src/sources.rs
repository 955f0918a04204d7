//! Data sources the agents nominally draw from, and their health

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Connected,
    Disconnected,
    Error,
}

impl std::fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected => write!(f, "connected"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: SourceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
    pub description: String,
}

/// The seven built-in sources, with last-sync times relative to `now`
pub fn builtin_sources(now: DateTime<Utc>) -> Vec<DataSource> {
    let source = |id: &str, name: &str, kind: &str, minutes_ago: i64, description: &str| {
        DataSource {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            status: SourceStatus::Connected,
            last_sync: Some(now - Duration::minutes(minutes_ago)),
            description: description.to_string(),
        }
    };

    vec![
        source(
            "iqvia-db",
            "IQVIA Market Intelligence",
            "Commercial Database",
            15,
            "Sales data, market trends, and therapy area analytics",
        ),
        source(
            "clinicaltrials",
            "ClinicalTrials.gov",
            "Public Registry",
            30,
            "Global clinical trial registry and results database",
        ),
        source(
            "uspto",
            "USPTO Patent Database",
            "Patent Registry",
            45,
            "US patent filings, grants, and expiry information",
        ),
        source(
            "exim",
            "EXIM Trade Portal",
            "Trade Data",
            60,
            "Import-export data for pharmaceutical APIs and formulations",
        ),
        source(
            "pubmed",
            "PubMed & Scientific Journals",
            "Scientific Literature",
            20,
            "Medical and pharmaceutical research publications",
        ),
        source(
            "who",
            "WHO ICTRP",
            "Public Registry",
            90,
            "WHO International Clinical Trials Registry Platform",
        ),
        source(
            "internal",
            "Internal Document Repository",
            "Internal Database",
            5,
            "Strategy decks, field insights, and internal research",
        ),
    ]
}

/// Connection summary over a set of sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceHealth {
    pub connected: usize,
    pub total: usize,
    /// Rounded percentage of connected sources
    pub percentage: u32,
}

impl SourceHealth {
    pub fn of(sources: &[DataSource]) -> Self {
        let connected = sources
            .iter()
            .filter(|s| s.status == SourceStatus::Connected)
            .count();
        let total = sources.len();
        let percentage = if total == 0 {
            0
        } else {
            (connected as f64 * 100.0 / total as f64).round() as u32
        };
        Self {
            connected,
            total,
            percentage,
        }
    }
}
