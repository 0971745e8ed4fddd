use serde_json::json;
use std::time::Duration;
use taskrank_client::{
    AnalysisSession, HttpScoringClient, Lifecycle, Notice, RemoteError, ScoringBackend,
    SessionError, DEFAULT_TIMEOUT,
};
use taskrank_core::{normalize, RawTask, Strategy, Tier};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn result_row(title: &str, score: f64) -> serde_json::Value {
    json!({
        "title": title,
        "due_date": null,
        "estimated_hours": 1,
        "importance": 5,
        "dependencies": [],
        "score": score,
        "explanation": "Urgency=0.35, Importance=0.50, EffortFit=1.00, DependencyImpact=0.30"
    })
}

fn client(server: &MockServer) -> HttpScoringClient {
    HttpScoringClient::new(&server.uri(), DEFAULT_TIMEOUT).unwrap()
}

#[tokio::test]
async fn analyze_posts_tasks_and_strategy() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/analyze/"))
        .and(body_json(json!({
            "tasks": [{
                "title": "Write report",
                "due_date": "2026-11-01",
                "estimated_hours": 2.0,
                "importance": 7.0,
                "dependencies": ["research", "outline"]
            }],
            "strategy": "deadline_driven"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "strategy": "deadline_driven",
            "results": [result_row("Write report", 72.5)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let task = normalize(
        RawTask::new("Write report")
            .with_due_date("2026-11-01")
            .with_hours("2")
            .with_importance(7)
            .with_dependencies("research, outline"),
    )
    .unwrap();

    let results = client(&server)
        .analyze(&[task], Strategy::DeadlineDriven)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 72.5);
    assert_eq!(results[0].tier(), Tier::Medium);
}

#[tokio::test]
async fn server_detail_is_used_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/analyze/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Scoring backend unavailable"})),
        )
        .mount(&server)
        .await;

    let task = normalize(RawTask::new("x")).unwrap();
    let err = client(&server)
        .analyze(&[task], Strategy::SmartBalance)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RemoteError::Status {
            status: 400,
            detail: Some("Scoring backend unavailable".to_string())
        }
    );
    assert_eq!(err.message(), "Scoring backend unavailable");
}

#[tokio::test]
async fn missing_detail_falls_back_to_status_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/suggest/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client(&server).suggest().await.unwrap_err();
    assert_eq!(err.message(), "Request failed with status code 500");
}

/// Serve one connection: error status line and headers, part of the body,
/// then hold the socket open for `hold` before dropping it.
async fn truncated_error_server(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = sock.read(&mut buf).await;
        sock.write_all(
            b"HTTP/1.1 500 Internal Server Error\r\n\
              content-type: application/json\r\n\
              content-length: 64\r\n\r\n{\"detail\"",
        )
        .await
        .unwrap();
        sock.flush().await.unwrap();
        tokio::time::sleep(hold).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn stalled_error_body_reports_timeout() {
    let base = truncated_error_server(Duration::from_secs(2)).await;
    let c = HttpScoringClient::new(&base, Duration::from_millis(200)).unwrap();

    let err = c.suggest().await.unwrap_err();
    assert_eq!(err, RemoteError::Timeout { millis: 200 });
}

#[tokio::test]
async fn dropped_error_body_reports_transport_failure() {
    let base = truncated_error_server(Duration::ZERO).await;
    let c = HttpScoringClient::new(&base, Duration::from_secs(2)).unwrap();

    let err = c.suggest().await.unwrap_err();
    assert!(matches!(err, RemoteError::Transport(_)), "{err:?}");
    assert_ne!(err.message(), "Request failed with status code 500");
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/suggest/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": []}))
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let c = HttpScoringClient::new(&server.uri(), Duration::from_millis(100)).unwrap();
    let err = c.suggest().await.unwrap_err();
    assert_eq!(err, RemoteError::Timeout { millis: 100 });
    assert_eq!(err.message(), "timeout of 100ms exceeded");
}

#[tokio::test]
async fn undecodable_body_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/suggest/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let err = client(&server).suggest().await.unwrap_err();
    assert!(matches!(err, RemoteError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    // Nothing listens on port 9 (discard) in the test environment.
    let c = HttpScoringClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = c.suggest().await.unwrap_err();
    assert!(
        matches!(err, RemoteError::Transport(_) | RemoteError::Timeout { .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn session_round_trip_against_http_service() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/analyze/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [result_row("a", 85.0), result_row("b", 60.0), result_row("c", 10.0)]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/analyze/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut session = AnalysisSession::new(client(&server));
    session
        .import_bulk_text(r#"[{"title": "a"}, {"title": "b"}, {"title": "c"}]"#)
        .unwrap();

    let tiers: Vec<_> = session
        .analyze()
        .await
        .unwrap()
        .iter()
        .map(|r| r.tier())
        .collect();
    assert_eq!(tiers, [Tier::High, Tier::Medium, Tier::Low]);
    assert_eq!(
        session.notice(),
        Some(&Notice::Success("Analyzed 3 tasks.".to_string()))
    );

    let err = session.analyze().await.unwrap_err();
    assert_eq!(
        err,
        SessionError::Remote(RemoteError::Status {
            status: 503,
            detail: None
        })
    );
    assert_eq!(session.lifecycle(), Lifecycle::Failed);
    assert_eq!(session.results().len(), 3);
    assert_eq!(session.drafts().len(), 3);
    assert_eq!(
        session.notice(),
        Some(&Notice::Error("Request failed with status code 503".to_string()))
    );
}

#[tokio::test]
async fn suggestions_replace_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/suggest/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "title": "Saved task",
                "due_date": "2026-10-30",
                "estimated_hours": 4,
                "importance": 9,
                "dependencies": ["kickoff"],
                "source_id": "6710aa01",
                "score": 91.4,
                "explanation": "Urgency=0.60"
            }]
        })))
        .mount(&server)
        .await;

    let mut session = AnalysisSession::new(client(&server));
    let results = session.suggest().await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source_id.as_deref(), Some("6710aa01"));
    assert_eq!(results[0].dependencies, ["kickoff"]);
    assert_eq!(
        session.notice(),
        Some(&Notice::Success("Loaded saved suggestions.".to_string()))
    );
}
