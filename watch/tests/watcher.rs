//! Watcher integration tests against a fake host and a mock backend.

use std::sync::{Arc, Mutex};

use coach_client::AnalysisClient;
use coach_panel::{Panel, Surface};
use coach_types::DocumentSnapshot;
use coach_watch::{
    ChangeSubscription, EditorHost, HostDiagnostic, HostSeverity, Watcher, change_feed,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Minimal in-memory host for watcher tests.
#[derive(Default)]
struct FakeHost {
    active: Mutex<Option<DocumentSnapshot>>,
    diagnostics: Mutex<Vec<HostDiagnostic>>,
}

impl FakeHost {
    fn set_active(&self, language: &str, text: &str) {
        *self.active.lock().unwrap() = Some(DocumentSnapshot::new(language, text));
    }

    fn set_diagnostics(&self, items: Vec<HostDiagnostic>) {
        *self.diagnostics.lock().unwrap() = items;
    }
}

impl EditorHost for FakeHost {
    fn active_document(&self) -> Option<DocumentSnapshot> {
        self.active.lock().unwrap().clone()
    }

    fn diagnostics(&self) -> Vec<HostDiagnostic> {
        self.diagnostics.lock().unwrap().clone()
    }

    fn subscribe(&self) -> ChangeSubscription {
        // Tests drive on_document_changed directly; the trait still needs
        // a functioning subscription.
        let (_tx, sub) = change_feed();
        sub
    }
}

fn client_for(server: &MockServer) -> (AnalysisClient, Arc<Panel>) {
    let panel = Arc::new(Panel::new());
    let (surface, _view) = Surface::channel();
    panel.resolve(surface);
    let client = AnalysisClient::new(
        format!("{}/api/analyze/code", server.uri()),
        Arc::clone(&panel),
    );
    (client, panel)
}

#[tokio::test]
async fn no_active_document_means_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let host = Arc::new(FakeHost::default());
    let (client, _panel) = client_for(&server);
    let watcher = Watcher::new(host, client);

    assert!(watcher.on_document_changed().is_none());
    server.verify().await;
}

#[tokio::test]
async fn each_notification_produces_exactly_one_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(3)
        .mount(&server)
        .await;

    let host = Arc::new(FakeHost::default());
    host.set_active("python", "x=1");
    let (client, _panel) = client_for(&server);
    let watcher = Watcher::new(host, client);

    for _ in 0..3 {
        watcher.on_document_changed().unwrap().await.unwrap();
    }
    server.verify().await;
}

#[tokio::test]
async fn dispatch_carries_captured_diagnostics() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "language": "python",
            "code": "def f():\n    unused = 1\n",
            "diagnostics": [{"message": "unused variable", "line": 3}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let host = Arc::new(FakeHost::default());
    host.set_active("python", "def f():\n    unused = 1\n");
    // Host reports the 0-based line; the capture maps it to 1-based.
    host.set_diagnostics(vec![HostDiagnostic::new(
        "unused variable",
        2,
        HostSeverity::Warning,
    )]);

    let (client, _panel) = client_for(&server);
    let watcher = Watcher::new(host, client);
    watcher.on_document_changed().unwrap().await.unwrap();
    server.verify().await;
}

#[tokio::test]
async fn run_loop_dispatches_per_feed_notification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"score": 42})))
        .expect(2)
        .mount(&server)
        .await;

    let host = Arc::new(FakeHost::default());
    host.set_active("python", "x=1");
    let (client, panel) = client_for(&server);

    let (feed, subscription) = change_feed();
    let handle = Watcher::new(host, client).spawn(subscription);

    feed.send(coach_watch::DocumentChanged).await.unwrap();
    feed.send(coach_watch::DocumentChanged).await.unwrap();
    drop(feed);
    handle.await.unwrap();

    // Dispatches are spawned; poll until both requests have landed.
    for _ in 0..50 {
        if server.received_requests().await.unwrap_or_default().len() >= 2
            && panel.last_delivered().is_some()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert_eq!(
        panel.last_delivered().map(|r| r.value().clone()),
        Some(json!({"score": 42}))
    );
    server.verify().await;
}
