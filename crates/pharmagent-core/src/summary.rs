//! Summary composition
//!
//! Reduces the agent results of one query into a narrative. Each known agent
//! contributes one templated sentence built from its findings; the narrative
//! always ends with the same recommendation paragraph.

use serde_json::Value;

use crate::agents::AgentKind;
use crate::types::AgentResult;

/// Opening line placed before the agent sentences
pub const SUMMARY_PREAMBLE: &str = "Based on comprehensive multi-source analysis:";

/// Closing paragraph of every summary
pub const RECOMMENDATION: &str = "Recommendation: The opportunity presents a favorable \
risk-reward profile for portfolio development consideration. Strategic factors including \
market dynamics, competitive intensity, regulatory pathway, and intellectual property \
landscape have been evaluated.";

/// Compose the narrative for `results`.
///
/// Unknown agent ids contribute nothing. With no sentences at all the output
/// is just the recommendation paragraph.
pub fn compose(results: &[AgentResult]) -> String {
    let insights: Vec<String> = results.iter().filter_map(insight).collect();

    if insights.is_empty() {
        return RECOMMENDATION.to_string();
    }

    format!(
        "{}\n\n{}\n\n{}",
        SUMMARY_PREAMBLE,
        insights.join("\n\n"),
        RECOMMENDATION
    )
}

/// The sentence one result contributes, if its agent is known
pub fn insight(result: &AgentResult) -> Option<String> {
    let data = &result.data;
    let sentence = match AgentKind::from_id(&result.agent_id)? {
        AgentKind::Market => format!(
            "Market analysis reveals a {} opportunity growing at {}, with {} active competitors.",
            field(data, "marketSize"),
            field(data, "growthRate"),
            field(data, "competitors"),
        ),
        AgentKind::Clinical => format!(
            "Clinical landscape shows {} active trials, indicating robust research activity \
             and validation of therapeutic approach.",
            field(data, "activeTrials"),
        ),
        AgentKind::Patent => format!(
            "Patent analysis indicates {} freedom-to-operate status with {} key patents \
             expiring within 2 years.",
            field(data, "ftoStatus"),
            field(data, "expiringWithin2Years"),
        ),
        AgentKind::Trade => format!(
            "Trade data shows {} import volume with {} price trends, suggesting {} supply risk.",
            field(data, "importVolume"),
            field(data, "priceTrajectory").to_lowercase(),
            field(data, "supplyRisk").to_lowercase(),
        ),
        AgentKind::Web => format!(
            "Literature review identified {} relevant publications with {} evidence \
             supporting the approach.",
            field(data, "publicationsFound"),
            field(data, "clinicalEvidence"),
        ),
    };
    Some(sentence)
}

/// Render one finding for prose: strings without quotes, missing values as
/// "unknown".
fn field(data: &Value, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "unknown".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(agent_id: &str, data: Value) -> AgentResult {
        AgentResult {
            agent_id: agent_id.to_string(),
            agent_name: "test".to_string(),
            data,
            processing_time: 1000.0,
        }
    }

    fn fixed_results() -> Vec<AgentResult> {
        vec![
            result(
                "iqvia",
                json!({ "marketSize": "$2.4B", "growthRate": "14.2% CAGR", "competitors": 12 }),
            ),
            result("clinical", json!({ "activeTrials": 45 })),
            result(
                "patent",
                json!({ "ftoStatus": "Clear", "expiringWithin2Years": 3 }),
            ),
            result(
                "exim",
                json!({ "importVolume": "420 MT", "priceTrajectory": "Declining", "supplyRisk": "High" }),
            ),
            result(
                "web",
                json!({ "publicationsFound": 127, "clinicalEvidence": "Level A (Strong recommendation)" }),
            ),
        ]
    }

    #[test]
    fn test_compose_empty_is_recommendation_only() {
        assert_eq!(compose(&[]), RECOMMENDATION);
    }

    #[test]
    fn test_compose_all_agents() {
        let summary = compose(&fixed_results());
        let expected = [
            SUMMARY_PREAMBLE,
            "Market analysis reveals a $2.4B opportunity growing at 14.2% CAGR, with 12 active competitors.",
            "Clinical landscape shows 45 active trials, indicating robust research activity and validation of therapeutic approach.",
            "Patent analysis indicates Clear freedom-to-operate status with 3 key patents expiring within 2 years.",
            "Trade data shows 420 MT import volume with declining price trends, suggesting high supply risk.",
            "Literature review identified 127 relevant publications with Level A (Strong recommendation) evidence supporting the approach.",
            RECOMMENDATION,
        ]
        .join("\n\n");
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_unknown_agents_contribute_nothing() {
        let results = vec![
            result("internal", json!({ "status": "Data retrieved successfully" })),
            result("clinical", json!({ "activeTrials": 10 })),
        ];
        let summary = compose(&results);
        assert_eq!(summary.matches("\n\n").count(), 2);
        assert!(summary.contains("10 active trials"));
        assert!(!summary.contains("Data retrieved"));

        assert_eq!(compose(&results[..1]), RECOMMENDATION);
    }

    #[test]
    fn test_compose_is_stable() {
        let results: Vec<AgentResult> = ["iqvia", "clinical", "patent", "exim", "web"]
            .into_iter()
            .map(crate::synthesizer::synthesize)
            .collect();
        assert_eq!(compose(&results), compose(&results));
    }

    #[test]
    fn test_missing_field_renders_unknown() {
        let summary = compose(&[result("clinical", json!({}))]);
        assert!(summary.contains("shows unknown active trials"));
    }
}
