//! End-to-end workflow tests: RequestWorkflow driving the HTTP client
//! against a mock summarization service.

mod common;

use std::sync::Arc;

use common::{dead_base_url, service_config, MockResponse, MockService};
use tempfile::TempDir;
use textsum::export::{DirectoryExporter, FileExporter, SUMMARY_FILENAME};
use textsum::service::{
    HttpSummaryClient, SummaryService, SummaryStyle, EMPTY_INPUT_MESSAGE,
    TRANSPORT_FAILURE_MESSAGE,
};
use textsum::ui::summarize::{HistoryEntry, RequestState};
use textsum::workflow::RequestWorkflow;

const FOX: &str = "The quick brown fox jumps over the lazy dog.";

fn workflow_for(base_url: &str, style: SummaryStyle) -> RequestWorkflow {
    let client = HttpSummaryClient::new(&service_config(base_url)).unwrap();
    let service: Arc<dyn SummaryService> = Arc::new(client);
    RequestWorkflow::new(service, style)
}

#[tokio::test]
async fn test_short_summary_round_trip() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::summary("A fox jumps."))
        .await;

    let mut workflow = workflow_for(&mock.base_url(), SummaryStyle::Medium);
    workflow.set_input_text(FOX);
    workflow.set_style(SummaryStyle::Short);
    assert_eq!(workflow.word_count(), 9);

    let state = workflow.summarize().await.clone();
    assert_eq!(
        state,
        RequestState::Succeeded {
            summary: "A fox jumps.".into()
        }
    );

    let body = mock.captured_requests().await[0].json();
    assert_eq!(body["text"], FOX);
    assert_eq!(body["min_length"], 20);
    assert_eq!(body["max_length"], 60);

    assert_eq!(
        workflow.history(),
        &[HistoryEntry {
            input: FOX.into(),
            summary: "A fox jumps.".into(),
        }]
    );
}

#[tokio::test]
async fn test_history_is_most_recent_first() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::summary("one")).await;
    mock.enqueue_response(MockResponse::summary("two")).await;

    let mut workflow = workflow_for(&mock.base_url(), SummaryStyle::Medium);
    workflow.set_input_text("first text");
    workflow.summarize().await;
    workflow.set_input_text("second text");
    workflow.summarize().await;

    let history = workflow.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].input, "second text");
    assert_eq!(history[0].summary, "two");
    assert_eq!(history[1].input, "first text");
    assert_eq!(history[1].summary, "one");
}

#[tokio::test]
async fn test_blank_input_never_reaches_the_service() {
    let mock = MockService::start().await;

    let mut workflow = workflow_for(&mock.base_url(), SummaryStyle::Medium);
    workflow.set_input_text("  \n\t ");
    let state = workflow.summarize().await.clone();

    assert_eq!(state.error_message(), Some(EMPTY_INPUT_MESSAGE));
    assert!(mock.captured_requests().await.is_empty());
    assert!(workflow.history().is_empty());
}

#[tokio::test]
async fn test_service_error_keeps_history_and_input() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::summary("kept")).await;
    mock.enqueue_response(MockResponse::error(503, "overloaded"))
        .await;

    let mut workflow = workflow_for(&mock.base_url(), SummaryStyle::Medium);
    workflow.set_input_text("hello there");
    workflow.summarize().await;
    let state = workflow.summarize().await.clone();

    assert_eq!(state.error_message(), Some(TRANSPORT_FAILURE_MESSAGE));
    assert_eq!(workflow.input_text(), "hello there");
    assert_eq!(workflow.history().len(), 1);
    assert!(workflow.export_file().is_none());
}

#[tokio::test]
async fn test_unreachable_service_shows_connection_error() {
    let mut workflow = workflow_for(&dead_base_url(), SummaryStyle::Detailed);
    workflow.set_input_text("anything at all");
    let state = workflow.summarize().await.clone();

    assert_eq!(state.error_message(), Some(TRANSPORT_FAILURE_MESSAGE));
    assert!(workflow.history().is_empty());
}

#[tokio::test]
async fn test_summary_can_be_saved_to_disk() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::summary("Saved summary."))
        .await;

    let mut workflow = workflow_for(&mock.base_url(), SummaryStyle::Short);
    workflow.set_input_text(FOX);
    workflow.summarize().await;

    let temp_dir = TempDir::new().unwrap();
    let exporter = DirectoryExporter::new(temp_dir.path().join("out"));
    let file = workflow.export_file().expect("summary should be exportable");
    let path = exporter.save(&file).unwrap();

    assert_eq!(path.file_name().unwrap(), SUMMARY_FILENAME);
    assert_eq!(std::fs::read_to_string(path).unwrap(), "Saved summary.");
}
