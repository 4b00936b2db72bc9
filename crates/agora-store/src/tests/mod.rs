use super::*;
use agora_core::ArgumentKind;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_seed_populates_six_debates() -> Result<(), StoreError> {
    let store = Store::seeded_in_memory()?;
    let debates = store.list_debates(&DebateFilter::default())?;
    assert_eq!(debates.len(), 6);
    assert_eq!(debates[0].id, DebateId::from("1"));
    assert_eq!(debates[0].creator, "TechEthicist");

    let stats = store.stats()?;
    assert_eq!(stats.debate_count, 6);
    assert_eq!(stats.argument_count, 32);
    assert_eq!(stats.relation_count, 26);
    Ok(())
}

#[test]
fn test_seed_is_idempotent() -> Result<(), StoreError> {
    let store = Store::seeded_in_memory()?;
    store.seed()?;
    let debates = store.list_debates(&DebateFilter::default())?;
    assert_eq!(debates.len(), 6);
    assert_eq!(store.stats()?.argument_count, 32);
    Ok(())
}

#[test]
fn test_category_filter_is_case_insensitive() -> Result<(), StoreError> {
    let store = Store::seeded_in_memory()?;
    let filter = DebateFilter {
        category: Some("technology".to_string()),
        query: None,
    };
    let debates = store.list_debates(&filter)?;
    assert_eq!(debates.len(), 1);
    assert_eq!(debates[0].category, "Technology");
    Ok(())
}

#[test]
fn test_title_query_filter() -> Result<(), StoreError> {
    let store = Store::seeded_in_memory()?;
    let filter = DebateFilter {
        category: None,
        query: Some("productivity".to_string()),
    };
    let debates = store.list_debates(&filter)?;
    assert_eq!(debates.len(), 1);
    assert_eq!(debates[0].id, DebateId::from("5"));
    Ok(())
}

#[test]
fn test_watermark_debate_graph() -> Result<(), StoreError> {
    let store = Store::seeded_in_memory()?;
    let graph = store.graph(&DebateId::from("1"))?.unwrap();
    assert_eq!(graph.nodes.len(), 6);
    assert_eq!(graph.edges.len(), 5);
    let root = graph.resolution().unwrap();
    assert_eq!(
        root.label,
        "Should AI-generated content require a mandatory digital watermark?"
    );
    // Order is the seeded order.
    assert_eq!(graph.nodes[0].id, agora_core::ArgumentId::from("root"));
    assert_eq!(graph.nodes[5].kind, ArgumentKind::EVIDENCE);
    assert!(graph.validate().is_empty());
    Ok(())
}

#[test]
fn test_unknown_debate_is_none_and_not_found() -> Result<(), StoreError> {
    let store = Store::seeded_in_memory()?;
    let id = DebateId::from("nonexistent");
    assert!(store.get_debate(&id)?.is_none());
    assert!(store.graph(&id)?.is_none());
    assert_eq!(
        GraphSource::load_graph(&store, &id),
        Err(SourceError::NotFound(id))
    );
    Ok(())
}

#[test]
fn test_leaderboard_rows() -> Result<(), StoreError> {
    let store = Store::seeded_in_memory()?;
    let entries = store.leaderboard()?;
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].username, "LogicMaster");
    assert_eq!(entries[9].rank, 10);
    Ok(())
}

#[test]
fn test_on_disk_store_survives_reopen() -> Result<(), StoreError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("agora.db");
    {
        let store = Store::open(&path)?;
        store.seed()?;
    }
    let store = Store::open(&path)?;
    let graph = store.graph(&DebateId::from("6"))?.unwrap();
    assert_eq!(graph.nodes.len(), 6);
    Ok(())
}

// ---- loader ----

/// Source whose answer for one id lags, to stage mid-flight id changes.
struct DelayedSource {
    store: Store,
    slow_id: DebateId,
    delay: Duration,
}

impl GraphSource for DelayedSource {
    fn load_graph(&self, id: &DebateId) -> Result<DebateGraph, SourceError> {
        if *id == self.slow_id {
            thread::sleep(self.delay);
        } else {
            thread::sleep(Duration::from_millis(5));
        }
        self.store.load_graph(id)
    }
}

fn poll_until_terminal(loader: &mut GraphLoader) -> LoadState {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !loader.state().is_terminal() {
        assert!(Instant::now() < deadline, "loader never settled");
        loader.poll();
        thread::sleep(Duration::from_millis(5));
    }
    loader.state().clone()
}

#[test]
fn test_loader_passes_through_loading() -> Result<(), StoreError> {
    let source = std::sync::Arc::new(Store::seeded_in_memory()?);
    let mut loader = GraphLoader::new(source);
    assert_eq!(loader.state(), &LoadState::Idle);

    loader.request(DebateId::from("1"));
    // Even an instant source shows Loading until the next poll.
    assert_eq!(loader.state(), &LoadState::Loading);

    match poll_until_terminal(&mut loader) {
        LoadState::Loaded(graph) => assert_eq!(graph.debate_id, DebateId::from("1")),
        other => panic!("expected Loaded, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_loader_not_found_is_terminal() -> Result<(), StoreError> {
    let source = std::sync::Arc::new(Store::seeded_in_memory()?);
    let mut loader = GraphLoader::new(source);
    loader.request(DebateId::from("nonexistent"));
    assert_eq!(poll_until_terminal(&mut loader), LoadState::NotFound);
    Ok(())
}

#[test]
fn test_latest_identifier_wins() -> Result<(), StoreError> {
    let source = std::sync::Arc::new(DelayedSource {
        store: Store::seeded_in_memory()?,
        slow_id: DebateId::from("1"),
        delay: Duration::from_millis(200),
    });
    let mut loader = GraphLoader::new(source);

    loader.request(DebateId::from("1"));
    loader.request(DebateId::from("2"));
    assert_eq!(loader.current(), Some(&DebateId::from("2")));

    match poll_until_terminal(&mut loader) {
        LoadState::Loaded(graph) => assert_eq!(graph.debate_id, DebateId::from("2")),
        other => panic!("expected Loaded, got {other:?}"),
    }

    // Let the slow resolution for "1" land; it must be disregarded.
    thread::sleep(Duration::from_millis(300));
    loader.poll();
    match loader.state() {
        LoadState::Loaded(graph) => assert_eq!(graph.debate_id, DebateId::from("2")),
        other => panic!("stale result leaked through: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_loader_reset_returns_to_idle() -> Result<(), StoreError> {
    let source = std::sync::Arc::new(Store::seeded_in_memory()?);
    let mut loader = GraphLoader::new(source);
    loader.request(DebateId::from("3"));
    loader.reset();
    assert_eq!(loader.state(), &LoadState::Idle);

    // The in-flight result for the reset request is disregarded too.
    thread::sleep(Duration::from_millis(50));
    loader.poll();
    assert_eq!(loader.state(), &LoadState::Idle);
    Ok(())
}
