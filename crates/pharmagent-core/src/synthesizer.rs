//! Result synthesis
//!
//! Produces the findings each simulated agent reports. Field names and value
//! ranges are fixed per agent; the values themselves come from a
//! non-cryptographic RNG on every call, so two results for the same agent
//! share a shape but not their numbers.

use rand::Rng;
use serde_json::{Value, json};

use crate::agents::AgentKind;
use crate::types::AgentResult;

/// Name used for agents without simulation logic
pub const PLACEHOLDER_AGENT_NAME: &str = "Agent";

/// Synthesize findings for `agent_id` using the thread-local RNG
pub fn synthesize(agent_id: &str) -> AgentResult {
    synthesize_with(agent_id, &mut rand::rng())
}

/// Synthesize findings with a caller-supplied RNG
pub fn synthesize_with<R: Rng>(agent_id: &str, rng: &mut R) -> AgentResult {
    let processing_time = rng.random_range(800.0..2300.0);

    let Some(kind) = AgentKind::from_id(agent_id) else {
        return AgentResult {
            agent_id: agent_id.to_string(),
            agent_name: PLACEHOLDER_AGENT_NAME.to_string(),
            data: json!({ "status": "Data retrieved successfully" }),
            processing_time,
        };
    };

    let data = match kind {
        AgentKind::Market => market_findings(rng),
        AgentKind::Clinical => clinical_findings(rng),
        AgentKind::Patent => patent_findings(rng),
        AgentKind::Trade => trade_findings(rng),
        AgentKind::Web => web_findings(rng),
    };

    AgentResult {
        agent_id: agent_id.to_string(),
        agent_name: kind.display_name().to_string(),
        data,
        processing_time,
    }
}

fn market_findings<R: Rng>(rng: &mut R) -> Value {
    json!({
        "marketSize": format!("${:.1}B", rng.random_range(1.0..6.0)),
        "growthRate": format!("{:.1}% CAGR", rng.random_range(5.0..20.0)),
        "competitors": rng.random_range(10..40),
        "marketShare": {
            "top3": ["Company A (18%)", "Company B (15%)", "Company C (12%)"]
        },
        "trends": [
            "Increasing demand in emerging markets",
            "Shift towards combination therapies",
            "Growing preference for once-daily formulations"
        ]
    })
}

fn clinical_findings<R: Rng>(rng: &mut R) -> Value {
    json!({
        "activeTrials": rng.random_range(10..60),
        "phaseDistribution": {
            "Phase I": rng.random_range(2..12),
            "Phase II": rng.random_range(5..20),
            "Phase III": rng.random_range(3..15),
            "Phase IV": rng.random_range(1..9)
        },
        "topSponsors": ["Pharma Corp A", "Research Institute B", "Biotech Company C"],
        "keyIndications": ["Primary indication", "Secondary indication", "Exploratory use"],
        "unmetNeeds": [
            "Pediatric formulations",
            "Long-acting versions",
            "Improved safety profile"
        ]
    })
}

fn patent_findings<R: Rng>(rng: &mut R) -> Value {
    let fto_status = if rng.random_bool(0.5) {
        "Clear"
    } else {
        "Requires navigation"
    };
    json!({
        "activePatents": rng.random_range(5..25),
        "expiringWithin2Years": rng.random_range(2..10),
        "ftoStatus": fto_status,
        "keyPatentHolders": ["Big Pharma A", "Research Corp B", "Generic Co C"],
        "opportunityWindow": format!("{} months", rng.random_range(12..36)),
        "filingTrends": "Increasing activity in novel formulations and combinations"
    })
}

fn trade_findings<R: Rng>(rng: &mut R) -> Value {
    let price_trajectory = if rng.random_bool(0.5) {
        "Declining"
    } else {
        "Stable"
    };
    let supply_risk = if rng.random_bool(0.3) { "High" } else { "Low" };
    json!({
        "importVolume": format!("{:.0} MT", rng.random_range(100.0..600.0)),
        "exportVolume": format!("{:.0} MT", rng.random_range(50.0..350.0)),
        "topImportCountries": ["China (45%)", "India (28%)", "EU (18%)"],
        "topExportDestinations": ["USA (35%)", "EU (30%)", "LATAM (20%)"],
        "priceTrajectory": price_trajectory,
        "supplyRisk": supply_risk
    })
}

fn web_findings<R: Rng>(rng: &mut R) -> Value {
    json!({
        "publicationsFound": rng.random_range(50..250),
        "recentGuidelines": [
            "WHO Treatment Guidelines 2024",
            "FDA Safety Updates",
            "EMA Regulatory Changes"
        ],
        "keyFindings": [
            "Strong efficacy data in recent meta-analyses",
            "Favorable safety profile confirmed",
            "Growing real-world evidence"
        ],
        "clinicalEvidence": "Level A (Strong recommendation)",
        "expertOpinions": [
            "Leading researchers support expanded use",
            "Emerging consensus on optimal dosing"
        ]
    })
}
