//! Staged notifier
//!
//! Narrates a query run as a timed sequence of messages: one system message
//! announcing delegation, then for every selected agent a "processing"
//! message, its synthesized result, and a completion message carrying the
//! findings. Agents run strictly one after another.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::agents::AgentDescriptor;
use crate::delay::Delay;
use crate::synthesizer;
use crate::types::{AgentResult, Message, MessageData};

/// Wait after the delegation announcement
pub const DELEGATION_DELAY: Duration = Duration::from_millis(800);
/// Wait while an agent "computes"
pub const AGENT_RUN_DELAY: Duration = Duration::from_millis(1200);
/// Wait after an agent reports, before the next one starts
pub const SETTLE_DELAY: Duration = Duration::from_millis(600);

/// Number of messages one run emits for `agent_count` agents
pub fn expected_message_count(agent_count: usize) -> usize {
    1 + 2 * agent_count
}

/// Drives the timed message sequence for a single query
#[derive(Debug, Clone)]
pub struct StagedNotifier<D> {
    delay: D,
}

impl<D: Delay> StagedNotifier<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Run every agent in order, handing each message to `emit` as soon as
    /// it is produced.
    ///
    /// An error from `emit` aborts the remaining sequence and is returned
    /// as-is; nothing is retried. There is no cancellation: callers that lose
    /// interest drop the future.
    pub async fn run<F>(
        &self,
        query_text: &str,
        agents: &[AgentDescriptor],
        emit: &mut F,
    ) -> Result<Vec<AgentResult>>
    where
        F: FnMut(Message) -> Result<()>,
    {
        debug!(
            "Delegating query ({} chars) to {} agents",
            query_text.chars().count(),
            agents.len()
        );

        emit(Message::system(format!(
            "Master Agent analyzing query and delegating to {} specialized agents...",
            agents.len()
        )))
        .context("Failed to emit delegation message")?;

        self.delay.sleep(DELEGATION_DELAY).await;

        let mut results = Vec::with_capacity(agents.len());
        for (index, agent) in agents.iter().enumerate() {
            debug!("Agent {}/{} started: {}", index + 1, agents.len(), agent.id());
            emit(Message::agent(
                agent.name(),
                format!("{} is processing your request...", agent.name()),
            ))
            .with_context(|| format!("Failed to emit start message for {}", agent.id()))?;

            self.delay.sleep(AGENT_RUN_DELAY).await;

            let result = synthesizer::synthesize(agent.id());
            let findings = result.data.clone();
            results.push(result);

            emit(
                Message::agent(agent.name(), agent.success_message)
                    .with_data(MessageData::Findings(findings)),
            )
            .with_context(|| format!("Failed to emit result message for {}", agent.id()))?;

            self.delay.sleep(SETTLE_DELAY).await;
            debug!("Agent {}/{} finished: {}", index + 1, agents.len(), agent.id());
        }

        Ok(results)
    }
}
