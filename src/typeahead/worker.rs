//! Lookup Worker Thread
//!
//! Runs search lookups in a background thread so keystrokes never wait on the
//! network. The thread owns a single-threaded tokio runtime; every request
//! becomes its own task, so lookups complete in whatever order the provider
//! answers. Responses go back over a std channel that the controller polls.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use crate::provider::{Candidate, SearchError, SearchProvider};

/// Sequence number reserved for worker-level failures. Those apply to
/// whatever lookup is current.
pub const WORKER_FAILURE_SEQ: u64 = 0;

/// A lookup to run, tagged with its dispatch sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub query: String,
    pub seq: u64,
}

/// Completion of a lookup, in whatever order lookups finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub seq: u64,
    pub query: String,
    pub outcome: Result<Vec<Candidate>, SearchError>,
}

impl LookupResponse {
    pub fn success(seq: u64, query: impl Into<String>, results: Vec<Candidate>) -> Self {
        Self {
            seq,
            query: query.into(),
            outcome: Ok(results),
        }
    }

    pub fn failure(seq: u64, query: impl Into<String>, error: SearchError) -> Self {
        Self {
            seq,
            query: query.into(),
            outcome: Err(error),
        }
    }
}

/// Spawn the lookup worker thread
///
/// The thread exits when `shutdown` is cancelled or every request sender is
/// dropped. Lookups still running at that point are dropped with the runtime
/// and never answer.
pub fn spawn_worker<P: SearchProvider>(
    provider: Arc<P>,
    timeout: Duration,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
    shutdown: CancellationToken,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("tickahead-lookup".to_string())
        .spawn(move || {
            let failure_tx = response_tx.clone();

            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create lookup runtime: {}", e);
                        let _ = response_tx.send(LookupResponse::failure(
                            WORKER_FAILURE_SEQ,
                            String::new(),
                            SearchError::WorkerUnavailable,
                        ));
                        return;
                    }
                };

                rt.block_on(worker_loop(provider, timeout, request_rx, response_tx, shutdown));
            }));

            if let Err(e) = result {
                log::error!("Lookup worker thread panicked: {}", panic_message(&*e));
                let _ = failure_tx.send(LookupResponse::failure(
                    WORKER_FAILURE_SEQ,
                    String::new(),
                    SearchError::WorkerUnavailable,
                ));
            }
        })
}

async fn worker_loop<P: SearchProvider>(
    provider: Arc<P>,
    timeout: Duration,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
    shutdown: CancellationToken,
) {
    log::debug!("Lookup worker started ({})", provider.name());

    loop {
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => break,

            request = request_rx.recv() => match request {
                Some(request) => {
                    log::debug!("Worker received lookup {}: {:?}", request.seq, request.query);
                    let (seq, query) = (request.seq, request.query.clone());
                    let lookup = tokio::spawn(run_lookup(
                        Arc::clone(&provider),
                        timeout,
                        request,
                        response_tx.clone(),
                        shutdown.clone(),
                    ));
                    tokio::spawn(supervise_lookup(lookup, seq, query, response_tx.clone()));
                }
                None => break,
            },
        }
    }

    log::debug!("Lookup worker shutting down");
}

async fn run_lookup<P: SearchProvider>(
    provider: Arc<P>,
    timeout: Duration,
    request: LookupRequest,
    response_tx: Sender<LookupResponse>,
    shutdown: CancellationToken,
) {
    let LookupRequest { query, seq } = request;

    tokio::select! {
        biased;

        _ = shutdown.cancelled() => {
            log::debug!("Lookup {} dropped on shutdown", seq);
        }

        outcome = tokio::time::timeout(timeout, provider.search(query.clone())) => {
            let outcome = outcome.unwrap_or(Err(SearchError::Timeout));
            // Receiver gone means the controller was torn down
            let _ = response_tx.send(LookupResponse { seq, query, outcome });
        }
    }
}

/// Answer for a lookup whose task panicked, so it never stays in flight
async fn supervise_lookup(
    lookup: tokio::task::JoinHandle<()>,
    seq: u64,
    query: String,
    response_tx: Sender<LookupResponse>,
) {
    let Err(e) = lookup.await else {
        return;
    };
    if !e.is_panic() {
        return;
    }

    let panic = e.into_panic();
    log::error!("Lookup {} panicked: {}", seq, panic_message(&*panic));
    let _ = response_tx.send(LookupResponse::failure(
        seq,
        query,
        SearchError::WorkerUnavailable,
    ));
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
