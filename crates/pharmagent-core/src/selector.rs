//! Relevance selection
//!
//! Maps free-text queries to the agents that should work on them. Each rule
//! pairs a keyword group with an agent; rules are checked in table order and
//! every rule whose group matches contributes its agent. A query that matches
//! nothing goes to the market, clinical and patent agents.

use tracing::debug;

use crate::agents::{AgentDescriptor, AgentKind};

/// One row of the selection table
#[derive(Debug, Clone)]
pub struct SelectionRule {
    /// Lower-case substrings; any one of them matching fires the rule
    pub keywords: &'static [&'static str],
    pub agent: AgentDescriptor,
}

impl SelectionRule {
    pub fn matches(&self, lower_query: &str) -> bool {
        self.keywords.iter().any(|k| lower_query.contains(k))
    }
}

/// Keyword rules in the order agents are reported.
///
/// "study" sits in both the clinical and the web group, so a query that
/// mentions a study fires both agents.
pub const SELECTION_RULES: [SelectionRule; 5] = [
    SelectionRule {
        keywords: &["market", "competition", "sales", "trend"],
        agent: AgentDescriptor::new(
            AgentKind::Market,
            "Market analysis complete. Found relevant therapeutic areas and competitive dynamics.",
        ),
    },
    SelectionRule {
        keywords: &["trial", "clinical", "study", "phase"],
        agent: AgentDescriptor::new(
            AgentKind::Clinical,
            "Clinical trial landscape mapped. Identified active trials and pipeline opportunities.",
        ),
    },
    SelectionRule {
        keywords: &["patent", "ip", "expir", "fto"],
        agent: AgentDescriptor::new(
            AgentKind::Patent,
            "Patent analysis complete. FTO assessment and opportunity windows identified.",
        ),
    },
    SelectionRule {
        keywords: &["import", "export", "trade", "api"],
        agent: AgentDescriptor::new(
            AgentKind::Trade,
            "Trade data analyzed. Import-export trends and sourcing insights compiled.",
        ),
    },
    SelectionRule {
        keywords: &["research", "publication", "study", "evidence"],
        agent: AgentDescriptor::new(
            AgentKind::Web,
            "Literature review complete. Scientific evidence and guidelines synthesized.",
        ),
    },
];

/// Agents used when no rule matches. Their narration is shorter than the
/// keyword-selected variants.
pub const FALLBACK_AGENTS: [AgentDescriptor; 3] = [
    AgentDescriptor::new(AgentKind::Market, "Market analysis complete."),
    AgentDescriptor::new(AgentKind::Clinical, "Clinical trial data retrieved."),
    AgentDescriptor::new(AgentKind::Patent, "Patent landscape analyzed."),
];

/// Pick the agents for a query. Never returns an empty list.
pub fn select_agents(query: &str) -> Vec<AgentDescriptor> {
    select_with(&SELECTION_RULES, &FALLBACK_AGENTS, query)
}

/// Evaluate an arbitrary rule table. `fallback` is returned whenever no rule
/// fires.
pub fn select_with(
    rules: &[SelectionRule],
    fallback: &[AgentDescriptor],
    query: &str,
) -> Vec<AgentDescriptor> {
    let lower = query.to_lowercase();

    let selected: Vec<AgentDescriptor> = rules
        .iter()
        .filter(|rule| rule.matches(&lower))
        .map(|rule| rule.agent.clone())
        .collect();

    if selected.is_empty() {
        debug!("No keyword group matched, using {} fallback agents", fallback.len());
        return fallback.to_vec();
    }

    debug!(
        "Selected agents: {}",
        selected.iter().map(|a| a.id()).collect::<Vec<_>>().join(", ")
    );
    selected
}
