//! Query orchestration
//!
//! Ties selection, staged notification and summary composition to the
//! session store. This is the one place failures are caught: anything that
//! goes wrong while a query runs marks it `failed`, and no report is created.

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::delay::Delay;
use crate::error::SubmitError;
use crate::notifier::StagedNotifier;
use crate::selector::select_agents;
use crate::store::SessionStore;
use crate::summary::compose;
use crate::types::{
    AgentResult, Message, MessageData, Query, QueryPatch, QueryResponse, QueryStatus, Report,
};

/// Agent name attached to the final summary message
pub const MASTER_AGENT_NAME: &str = "Master Agent";

/// How a submitted query ended
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    Completed {
        query_id: String,
        report_id: String,
        summary: String,
        results: Vec<AgentResult>,
    },
    Failed {
        query_id: String,
        error: String,
    },
}

impl QueryOutcome {
    pub fn query_id(&self) -> &str {
        match self {
            Self::Completed { query_id, .. } | Self::Failed { query_id, .. } => query_id,
        }
    }

    pub fn status(&self) -> QueryStatus {
        match self {
            Self::Completed { .. } => QueryStatus::Completed,
            Self::Failed { .. } => QueryStatus::Failed,
        }
    }
}

/// Runs queries against a session store
#[derive(Debug, Clone)]
pub struct QueryOrchestrator<D> {
    notifier: StagedNotifier<D>,
}

impl<D: Delay> QueryOrchestrator<D> {
    pub fn new(delay: D) -> Self {
        Self {
            notifier: StagedNotifier::new(delay),
        }
    }

    pub fn notifier(&self) -> &StagedNotifier<D> {
        &self.notifier
    }

    /// Submit a query with no outside observer
    pub async fn submit(
        &self,
        store: &mut SessionStore,
        text: &str,
    ) -> Result<QueryOutcome, SubmitError> {
        self.submit_with(store, text, &mut |_| Ok(())).await
    }

    /// Submit a query, showing every message to `observer` before it is
    /// logged in the store.
    ///
    /// Blank text is rejected up front and leaves the store untouched. Any
    /// later failure, including an error returned by `observer`, is reported
    /// as [`QueryOutcome::Failed`].
    pub async fn submit_with<O>(
        &self,
        store: &mut SessionStore,
        text: &str,
        observer: &mut O,
    ) -> Result<QueryOutcome, SubmitError>
    where
        O: FnMut(&Message) -> Result<()>,
    {
        if text.trim().is_empty() {
            return Err(SubmitError::EmptyQuery);
        }

        let query = Query::new(text);
        let query_id = query.id.clone();
        info!("Processing query {}", query_id);
        store.add_query(query);
        store.clear_messages();

        match self.process(store, &query_id, text, observer).await {
            Ok((summary, results)) => {
                let report = Report::for_query(&query_id, text, summary.clone());
                let report_id = report.id.clone();
                store.add_report(report);
                info!(
                    "Query {} completed with {} agent results",
                    query_id,
                    results.len()
                );
                Ok(QueryOutcome::Completed {
                    query_id,
                    report_id,
                    summary,
                    results,
                })
            }
            Err(e) => {
                error!("Query processing error for {}: {:#}", query_id, e);
                if let Err(store_err) =
                    store.update_query(&query_id, QueryPatch::status(QueryStatus::Failed))
                {
                    warn!("Could not mark query {} failed: {}", query_id, store_err);
                }
                Ok(QueryOutcome::Failed {
                    query_id,
                    error: format!("{:#}", e),
                })
            }
        }
    }

    /// Everything between starting the query and marking it completed.
    /// Returns the summary and the ordered results.
    async fn process<O>(
        &self,
        store: &mut SessionStore,
        query_id: &str,
        text: &str,
        observer: &mut O,
    ) -> Result<(String, Vec<AgentResult>)>
    where
        O: FnMut(&Message) -> Result<()>,
    {
        // every failure below must land on processing -> failed
        store
            .update_query(query_id, QueryPatch::status(QueryStatus::Processing))
            .context("Failed to mark query processing")?;

        record(store, observer, Message::user(text))?;

        let agents = select_agents(text);
        store
            .update_query(
                query_id,
                QueryPatch {
                    agents_involved: Some(agents.iter().map(|a| a.id().to_string()).collect()),
                    ..Default::default()
                },
            )
            .context("Failed to record involved agents")?;

        let results = self
            .notifier
            .run(text, &agents, &mut |m| record(store, observer, m))
            .await?;

        let summary = compose(&results);
        record(
            store,
            observer,
            Message::agent(MASTER_AGENT_NAME, summary.clone()).with_data(MessageData::Results {
                results: results.clone(),
            }),
        )?;

        store
            .update_query(
                query_id,
                QueryPatch {
                    status: Some(QueryStatus::Completed),
                    agents_involved: None,
                    response: Some(QueryResponse {
                        summary: summary.clone(),
                        data: results.clone(),
                        report_url: None,
                    }),
                },
            )
            .context("Failed to mark query completed")?;

        Ok((summary, results))
    }
}

fn record<O>(store: &mut SessionStore, observer: &mut O, message: Message) -> Result<()>
where
    O: FnMut(&Message) -> Result<()>,
{
    observer(&message).context("Message observer failed")?;
    store.add_message(message);
    Ok(())
}
