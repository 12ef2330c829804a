//! Suggestion Worker Thread
//!
//! Runs suggestion fetches and term recording on a background thread so the
//! UI never blocks on the network. Requests arrive over an unbounded channel,
//! results go back over a std channel that the UI drains on each tick.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::api::SuggestBackend;

/// How long a stopping worker waits for term records still in flight
pub const RECORD_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestRequest {
    /// Fetch suggestions for a query
    Fetch {
        query: String,
        /// Monotonic sequence number, used to discard stale responses
        request_id: u64,
    },
    /// Persist a committed term. No response is sent back.
    Record { term: String },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestResponse {
    Suggestions {
        request_id: u64,
        suggestions: Vec<String>,
    },
    Failed {
        request_id: u64,
        message: String,
    },
}

/// Channel ends and shutdown token for one worker
///
/// Cancelling stops fetches at once. Record requests already sent still run
/// to completion, bounded by `RECORD_DRAIN_TIMEOUT`. Dropping the handle
/// cancels without waiting; `shutdown` also joins the thread.
pub struct WorkerHandle {
    request_tx: UnboundedSender<SuggestRequest>,
    response_rx: Receiver<SuggestResponse>,
    cancel: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Wrap existing channel ends without spawning a thread
    pub fn from_channels(
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            cancel: CancellationToken::new(),
            thread: None,
        }
    }

    /// Queue a request. Returns false if the worker is gone.
    pub fn send(&self, request: SuggestRequest) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        self.request_tx.send(request).is_ok()
    }

    pub fn try_recv(&self) -> Option<SuggestResponse> {
        self.response_rx.try_recv().ok()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancel and wait for the thread to exit, including pending records
    pub fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::warn!("Suggestion worker panicked during shutdown");
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn the suggestion worker thread
pub fn spawn_worker(backend: Arc<dyn SuggestBackend>) -> std::io::Result<WorkerHandle> {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let cancel = CancellationToken::new();

    let worker_cancel = cancel.clone();
    let thread = std::thread::Builder::new()
        .name("suggest-worker".to_string())
        .spawn(move || worker_loop(backend, request_rx, response_tx, worker_cancel))?;

    Ok(WorkerHandle {
        request_tx,
        response_rx,
        cancel,
        thread: Some(thread),
    })
}

/// Main worker loop - processes requests until cancelled or the channel closes
fn worker_loop(
    backend: Arc<dyn SuggestBackend>,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
    cancel: CancellationToken,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start suggestion runtime: {}", e);
            return;
        }
    };

    let records = TaskTracker::new();
    runtime.block_on(async {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                request = request_rx.recv() => match request {
                    Some(request) => dispatch(&backend, request, &response_tx, &cancel, &records),
                    None => break,
                },
            }
        }

        // Records queued just before cancellation still count
        request_rx.close();
        while let Ok(request) = request_rx.try_recv() {
            if let SuggestRequest::Record { term } = request {
                records.spawn(record_term(Arc::clone(&backend), term));
            }
        }

        records.close();
        if tokio::time::timeout(RECORD_DRAIN_TIMEOUT, records.wait())
            .await
            .is_err()
        {
            log::warn!("Gave up on {} unfinished term record(s)", records.len());
        }
    });

    // Dropping the runtime aborts any fetch still in flight
    log::debug!("Suggestion worker shutting down");
}

fn dispatch(
    backend: &Arc<dyn SuggestBackend>,
    request: SuggestRequest,
    response_tx: &Sender<SuggestResponse>,
    cancel: &CancellationToken,
    records: &TaskTracker,
) {
    match request {
        SuggestRequest::Fetch { query, request_id } => {
            tokio::spawn(fetch_suggestions(
                Arc::clone(backend),
                query,
                request_id,
                response_tx.clone(),
                cancel.clone(),
            ));
        }
        SuggestRequest::Record { term } => {
            records.spawn(record_term(Arc::clone(backend), term));
        }
    }
}

async fn fetch_suggestions(
    backend: Arc<dyn SuggestBackend>,
    query: String,
    request_id: u64,
    response_tx: Sender<SuggestResponse>,
    cancel: CancellationToken,
) {
    let result = tokio::select! {
        _ = cancel.cancelled() => return,
        result = backend.suggest(&query) => result,
    };

    let response = match result {
        Ok(suggestions) => SuggestResponse::Suggestions {
            request_id,
            suggestions,
        },
        Err(e) => {
            log::warn!("Suggestion fetch {} for '{}' failed: {}", request_id, query, e);
            SuggestResponse::Failed {
                request_id,
                message: e.to_string(),
            }
        }
    };

    // UI may already be gone
    let _ = response_tx.send(response);
}

/// Runs outside the cancellation token, bounded by `RECORD_DRAIN_TIMEOUT`
async fn record_term(backend: Arc<dyn SuggestBackend>, term: String) {
    match backend.record(&term).await {
        Ok(()) => log::debug!("Recorded search term '{}'", term),
        Err(e) => log::warn!("Failed to record search term '{}': {}", term, e),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
