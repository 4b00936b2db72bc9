//! Background resolution of a debate identifier to its graph.
//!
//! The GUI polls [`GraphLoader::poll`] every frame; the CLI polls in a
//! sleep loop. Resolution runs on a spawned thread so a slow source never
//! blocks painting.

use agora_core::{DebateGraph, DebateId, GraphSource, SourceError};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::thread;

/// Observable state of the current load.
///
/// Every `request` passes through `Loading` before a terminal state, even
/// when the source answers instantly; views use that transition to clear
/// the previous graph. All terminal states are permanent until the next
/// `request`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No identifier requested yet (view entered without one).
    Idle,
    Loading,
    Loaded(DebateGraph),
    NotFound,
    Failed(String),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

type LoadResult = (u64, DebateId, Result<DebateGraph, SourceError>);

/// Resolves identifiers through a [`GraphSource`], newest request wins.
///
/// Each `request` bumps a generation counter; results arriving for an
/// older generation are dropped on the floor, so a stale response can
/// never overwrite a newer identifier's state.
pub struct GraphLoader {
    source: Arc<dyn GraphSource>,
    results_tx: Sender<LoadResult>,
    results_rx: Receiver<LoadResult>,
    generation: u64,
    state: LoadState,
    current: Option<DebateId>,
}

impl GraphLoader {
    pub fn new(source: Arc<dyn GraphSource>) -> Self {
        let (results_tx, results_rx) = unbounded();
        Self {
            source,
            results_tx,
            results_rx,
            generation: 0,
            state: LoadState::Idle,
            current: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Identifier of the most recent request, terminal or not.
    pub fn current(&self) -> Option<&DebateId> {
        self.current.as_ref()
    }

    /// Start resolving `id`. Synchronously enters `Loading` and invalidates
    /// any in-flight resolution for a previous identifier.
    pub fn request(&mut self, id: DebateId) {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.current = Some(id.clone());

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.results_tx.clone();
        thread::spawn(move || {
            let result = source.load_graph(&id);
            // The loader may be gone by the time we finish; nothing to do then.
            let _ = tx.send((generation, id, result));
        });
    }

    /// Forget the current request and return to `Idle`. In-flight work is
    /// disregarded when it lands.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = LoadState::Idle;
        self.current = None;
    }

    /// Drain finished resolutions. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((generation, id, result)) = self.results_rx.try_recv() {
            if generation != self.generation {
                tracing::debug!("disregarding stale load of debate {id}");
                continue;
            }
            self.state = match result {
                Ok(graph) => LoadState::Loaded(graph),
                Err(SourceError::NotFound(_)) => LoadState::NotFound,
                Err(SourceError::Unavailable(reason)) => LoadState::Failed(reason),
            };
            changed = true;
        }
        changed
    }
}
