use pretty_assertions::assert_eq;
use tests::prelude::*;

use async_trait::async_trait;
use cascade_select::{
    DependentSelect, FetchError, FilterPanel, HttpOptionsSource, OptionsRequest, OptionsSource,
    Refresh, SelectState,
};
use cascade_server::{AppState, Config};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{net::TcpListener, sync::oneshot};

/// Answers requests in order with canned responses, after a delay.
#[derive(Default)]
struct Scripted {
    responses: Mutex<VecDeque<(Duration, Result<Vec<OptionEntry>, String>)>>,
    requests: Mutex<Vec<OptionsRequest>>,
}

impl Scripted {
    fn respond(self, delay_ms: u64, options: Vec<OptionEntry>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((Duration::from_millis(delay_ms), Ok(options)));
        self
    }

    fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, Err(message.to_string())));
        self
    }

    fn requests(&self) -> Vec<OptionsRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OptionsSource for Scripted {
    async fn fetch(&self, request: &OptionsRequest) -> Result<Vec<OptionEntry>, FetchError> {
        self.requests.lock().unwrap().push(request.clone());

        let (delay, response) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected options request");

        tokio::time::sleep(delay).await;
        response.map_err(FetchError::Other)
    }
}

fn project_select(source: &Arc<Scripted>) -> DependentSelect {
    DependentSelect::new("projects", PROJECT, [CLIENT], source.clone())
}

#[tokio::test]
async fn mount_without_parents_fetches_once() {
    let source = Arc::new(Scripted::default().respond(0, vec![OptionEntry::new("Acme", 1)]));
    let select = DependentSelect::new("projects", CLIENT, Vec::<String>::new(), source.clone());

    assert_eq!(select.snapshot().state, SelectState::Idle);
    assert_eq!(select.mount().await, Refresh::Applied { cleared: false });

    let snapshot = select.snapshot();
    assert_eq!(snapshot.state, SelectState::Loaded);
    assert_eq!(snapshot.options, vec![OptionEntry::new("Acme", 1)]);
    assert_eq!(source.requests().len(), 1);
}

#[tokio::test]
async fn mount_with_parents_does_not_fetch() {
    let source = Arc::new(Scripted::default());
    let select = project_select(&source);

    assert_eq!(select.mount().await, Refresh::Skipped);
    assert_eq!(select.snapshot().state, SelectState::Loaded);
    assert!(source.requests().is_empty());
}

#[tokio::test]
async fn request_carries_declared_parents_only() {
    let source = Arc::new(Scripted::default().respond(0, vec![]));
    let select = project_select(&source);

    assert_eq!(
        select.parent_changed("select-filter-status", "open").await,
        Refresh::Skipped
    );
    assert!(source.requests().is_empty());

    // A blank parent value still refetches
    select.parent_changed(CLIENT, "").await;

    assert_eq!(
        source.requests()[0].to_query(),
        vec![
            ("resource".to_string(), "projects".to_string()),
            ("filter".to_string(), PROJECT.to_string()),
            (CLIENT.to_string(), String::new()),
        ]
    );
}

#[tokio::test]
async fn superseded_response_never_overwrites() {
    let source = Arc::new(
        Scripted::default()
            .respond(50, vec![OptionEntry::new("Acme Launch", 10)])
            .respond(0, vec![OptionEntry::new("Globex Merger", 11)]),
    );
    let select = project_select(&source);

    let (older, newer) = tokio::join!(select.parent_changed(CLIENT, "1"), async {
        tokio::task::yield_now().await;
        select.parent_changed(CLIENT, "2").await
    });

    assert_eq!(older, Refresh::Superseded);
    assert_eq!(newer, Refresh::Applied { cleared: false });

    // Outlive the older request's delay
    tokio::time::sleep(Duration::from_millis(80)).await;

    let snapshot = select.snapshot();
    assert_eq!(snapshot.state, SelectState::Loaded);
    assert_eq!(snapshot.options, vec![OptionEntry::new("Globex Merger", 11)]);
}

#[tokio::test]
async fn failed_request_keeps_options() {
    let source = Arc::new(
        Scripted::default()
            .respond(0, vec![OptionEntry::new("Acme Launch", 10)])
            .fail("connection refused"),
    );
    let select = project_select(&source);

    select.parent_changed(CLIENT, "1").await;
    assert_eq!(select.parent_changed(CLIENT, "2").await, Refresh::Failed);

    let snapshot = select.snapshot();
    assert_eq!(snapshot.state, SelectState::Loaded);
    assert_eq!(snapshot.options, vec![OptionEntry::new("Acme Launch", 10)]);

    // No retry
    assert_eq!(source.requests().len(), 2);
}

#[tokio::test]
async fn selection_absent_from_new_options_is_cleared() {
    let source = Arc::new(
        Scripted::default()
            .respond(0, vec![OptionEntry::new("Acme Launch", 10)])
            .respond(0, vec![OptionEntry::new("Globex Merger", 11)]),
    );
    let select = project_select(&source);

    select.select("10");
    assert_eq!(
        select.parent_changed(CLIENT, "1").await,
        Refresh::Applied { cleared: false }
    );
    assert_eq!(select.selected(), Some(Value::from("10")));

    assert_eq!(
        select.parent_changed(CLIENT, "2").await,
        Refresh::Applied { cleared: true }
    );
    assert_eq!(select.selected(), None);
}

#[tokio::test]
async fn subscribers_see_each_state() {
    let source = Arc::new(Scripted::default().respond(0, vec![OptionEntry::new("Acme", 1)]));
    let select = DependentSelect::new("projects", CLIENT, Vec::<String>::new(), source);

    let mut snapshots = select.subscribe();
    select.mount().await;

    assert!(snapshots.has_changed().unwrap());
    let snapshot = snapshots.borrow_and_update().clone();
    assert_eq!(snapshot.state, SelectState::Loaded);
    assert_eq!(snapshot.options.len(), 1);
}

#[tokio::test]
async fn siblings_issue_independent_requests() {
    let source = Arc::new(Scripted::default().respond(0, vec![]).respond(0, vec![]));

    let mut panel = FilterPanel::new();
    panel
        .add(project_select(&source))
        .add(DependentSelect::new(
            "projects",
            "dependent-filter-contact_id",
            [CLIENT],
            source.clone(),
        ));

    panel.select(CLIENT, "1").await;

    let mut filters: Vec<_> = source
        .requests()
        .into_iter()
        .map(|request| request.filter)
        .collect();
    filters.sort();

    assert_eq!(filters, ["dependent-filter-contact_id", PROJECT]);
}

#[tokio::test]
async fn cleared_selection_propagates_to_grandchildren() {
    let source = Arc::new(
        Scripted::default()
            .respond(0, vec![OptionEntry::new("Globex Merger", 11)])
            .respond(0, vec![]),
    );

    let project = project_select(&source);
    let task = DependentSelect::new("tasks", "dependent-filter-task_id", [PROJECT], source.clone());

    let mut panel = FilterPanel::new();
    panel.add(project.clone()).add(task);

    project.select(10);
    panel.select(CLIENT, "2").await;

    assert_eq!(project.selected(), None);

    let requests = source.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].filter, "dependent-filter-task_id");
    assert_eq!(requests[1].parents.get(PROJECT), Some(&Value::Null));
}

async fn panel_against_live_server(s: impl Setup) {
    let db = fixtures::db(&s).await;
    let registry = fixtures::registry();

    let filters = registry
        .get("projects")
        .unwrap()
        .filter_meta(&db, &ParentValues::new())
        .await
        .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(cascade_server::serve_on(
        listener,
        Config::DEFAULT_PREFIX,
        AppState::new(db, registry),
        async {
            let _ = stopped.await;
        },
    ));

    let source = HttpOptionsSource::new(&format!("http://{addr}"), Config::DEFAULT_PREFIX).unwrap();
    let panel = FilterPanel::from_meta("projects", &filters, Arc::new(source));

    // The plain select filter is not part of the panel
    assert_eq!(panel.len(), 2);

    panel.mount().await;

    let client = panel.get(CLIENT).unwrap();
    let project = panel.get(PROJECT).unwrap();

    assert_eq!(client.snapshot().options.len(), 3);
    assert_eq!(project.snapshot().options.len(), 2);

    panel.select(PROJECT, 10).await;
    panel.select(CLIENT, "2").await;

    let snapshot = project.snapshot();
    assert_eq!(snapshot.options, vec![OptionEntry::new("Globex Merger", 11)]);
    assert_eq!(snapshot.selected, None);

    panel.select(CLIENT, "").await;
    assert_eq!(project.snapshot().options.len(), 2);

    shutdown.send(()).unwrap();
    server.await.unwrap().unwrap();
}

tests!(panel_against_live_server);
