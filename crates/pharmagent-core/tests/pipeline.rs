//! End-to-end runs of the query pipeline against a session store

use std::time::Duration;

use anyhow::anyhow;
use pharmagent_core::notifier::{AGENT_RUN_DELAY, DELEGATION_DELAY, SETTLE_DELAY};
use pharmagent_core::summary::{RECOMMENDATION, SUMMARY_PREAMBLE};
use pharmagent_core::{
    MessageKind, QueryOrchestrator, QueryOutcome, QueryStatus, RecordingDelay, ReportStatus,
    SessionStore,
};

const METFORMIN: &str = "Analyze Metformin's potential for repurposing in oncology";
const METFORMIN_LONG: &str = "Analyze Metformin's potential for repurposing in oncology indications";

#[tokio::test]
async fn metformin_query_uses_fallback_agents() {
    let delay = RecordingDelay::new();
    let orchestrator = QueryOrchestrator::new(delay.clone());
    let mut store = SessionStore::new();

    let mut emitted = Vec::new();
    let outcome = orchestrator
        .submit_with(&mut store, METFORMIN, &mut |m| {
            emitted.push((m.kind, m.content.clone()));
            Ok(())
        })
        .await
        .unwrap();

    let QueryOutcome::Completed {
        query_id,
        summary,
        results,
        ..
    } = outcome
    else {
        panic!("query did not complete");
    };

    let ids: Vec<&str> = results.iter().map(|r| r.agent_id.as_str()).collect();
    assert_eq!(ids, vec!["iqvia", "clinical", "patent"]);

    // user, delegation, 2 per agent, final summary
    assert_eq!(emitted.len(), 1 + 1 + 2 * 3 + 1);
    assert_eq!(emitted[0], (MessageKind::User, METFORMIN.to_string()));
    assert_eq!(emitted[1].0, MessageKind::System);
    assert_eq!(emitted[3].1, "Market analysis complete.");
    assert_eq!(emitted[5].1, "Clinical trial data retrieved.");
    assert_eq!(emitted[7].1, "Patent landscape analyzed.");

    let paragraphs: Vec<&str> = summary.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 5);
    assert_eq!(paragraphs[0], SUMMARY_PREAMBLE);
    assert!(paragraphs[1].starts_with("Market analysis reveals a $"));
    assert!(paragraphs[2].starts_with("Clinical landscape shows "));
    assert!(paragraphs[3].starts_with("Patent analysis indicates "));
    assert_eq!(paragraphs[4], RECOMMENDATION);

    let query = store.query(&query_id).unwrap();
    assert_eq!(query.status, QueryStatus::Completed);
    assert_eq!(query.agents_involved, vec!["iqvia", "clinical", "patent"]);

    let report = &store.reports()[0];
    assert_eq!(report.status, ReportStatus::Ready);
    assert_eq!(report.summary, summary);
    // 57 characters, so kept whole
    assert_eq!(report.title, METFORMIN);

    let expected_wait = DELEGATION_DELAY + (AGENT_RUN_DELAY + SETTLE_DELAY) * 3;
    assert_eq!(delay.total(), expected_wait);
    assert_eq!(expected_wait, Duration::from_millis(6200));
}

#[tokio::test]
async fn long_query_title_is_truncated() {
    let orchestrator = QueryOrchestrator::new(RecordingDelay::new());
    let mut store = SessionStore::new();
    orchestrator.submit(&mut store, METFORMIN_LONG).await.unwrap();

    let report = &store.reports()[0];
    assert_eq!(report.title, format!("{}...", &METFORMIN_LONG[..60]));
}

#[tokio::test]
async fn failed_query_produces_no_report() {
    let orchestrator = QueryOrchestrator::new(RecordingDelay::new());
    let mut store = SessionStore::new();

    let outcome = orchestrator
        .submit_with(&mut store, "patent cliff", &mut |m| {
            if m.kind == MessageKind::System {
                Err(anyhow!("renderer crashed"))
            } else {
                Ok(())
            }
        })
        .await
        .unwrap();

    assert_eq!(outcome.status(), QueryStatus::Failed);
    assert_eq!(store.queries()[0].status, QueryStatus::Failed);
    assert!(store.reports().is_empty());

    // the session keeps working afterwards
    let next = orchestrator.submit(&mut store, "patent cliff").await.unwrap();
    assert_eq!(next.status(), QueryStatus::Completed);
    assert_eq!(store.queries().len(), 2);
    assert_eq!(store.reports().len(), 1);
}
