//! Query dispatcher
//!
//! Hands lookups to the worker and decides which completions may touch the
//! selection state. Every dispatch gets a fresh sequence number; only the
//! completion carrying the in-flight number is accepted. In-flight network
//! calls are never cancelled, their answers are simply ignored.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::worker::{LookupRequest, LookupResponse, WORKER_FAILURE_SEQ, spawn_worker};
use crate::provider::{Candidate, SearchError, SearchProvider};

/// Result of the current lookup, after the staleness check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Non-empty result set
    Found {
        query: String,
        candidates: Vec<Candidate>,
    },
    /// Empty or malformed response
    NoResults { query: String },
    /// Network or provider failure, degraded to no results by the caller
    Failed { query: String, error: SearchError },
}

impl LookupOutcome {
    pub fn query(&self) -> &str {
        match self {
            LookupOutcome::Found { query, .. }
            | LookupOutcome::NoResults { query }
            | LookupOutcome::Failed { query, .. } => query,
        }
    }
}

#[derive(Debug, Clone)]
struct InFlight {
    seq: u64,
    query: String,
}

pub struct LookupDispatcher {
    /// Channel to send lookups to the worker
    request_tx: Option<UnboundedSender<LookupRequest>>,
    /// Channel to receive completions from the worker
    response_rx: Option<Receiver<LookupResponse>>,
    /// Completions produced locally (worker unreachable at dispatch time)
    backlog: VecDeque<LookupResponse>,
    /// Next sequence number (starts at 1, 0 reserved for worker failures)
    next_seq: u64,
    /// The one lookup whose completion is still wanted
    in_flight: Option<InFlight>,
    /// Stops the worker on teardown
    shutdown: Option<CancellationToken>,
}

impl LookupDispatcher {
    /// Spawn a lookup worker for `provider` and connect to it
    pub fn spawn<P: SearchProvider>(provider: P, timeout: Duration) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = channel();
        let shutdown = CancellationToken::new();

        let mut dispatcher = Self::with_channels(request_tx, response_rx);

        match spawn_worker(
            Arc::new(provider),
            timeout,
            request_rx,
            response_tx,
            shutdown.clone(),
        ) {
            Ok(_) => dispatcher.shutdown = Some(shutdown),
            Err(e) => {
                // Lookups will degrade to failures
                log::error!("Failed to spawn lookup worker: {}", e);
                dispatcher.request_tx = None;
                dispatcher.response_rx = None;
            }
        }

        dispatcher
    }

    /// Connect to an already running worker, or to a test harness
    pub fn with_channels(
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) -> Self {
        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            backlog: VecDeque::new(),
            next_seq: 1,
            in_flight: None,
            shutdown: None,
        }
    }

    /// Issue a lookup and return its sequence number without waiting
    ///
    /// The new lookup supersedes whatever was in flight.
    pub fn dispatch(&mut self, query: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        // Skip 0 on wrap (reserved for worker failures)
        if self.next_seq == WORKER_FAILURE_SEQ {
            self.next_seq = 1;
        }

        if let Some(previous) = &self.in_flight {
            log::debug!("Lookup {} superseded by {}", previous.seq, seq);
        }
        log::debug!("Dispatching lookup {} for {:?}", seq, query);

        self.in_flight = Some(InFlight {
            seq,
            query: query.to_string(),
        });

        let request = LookupRequest {
            query: query.to_string(),
            seq,
        };

        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };

        if !sent {
            log::error!("Lookup worker disconnected - dispatch of {} failed", seq);
            self.request_tx = None;
            self.backlog.push_back(LookupResponse::failure(
                seq,
                query,
                SearchError::WorkerUnavailable,
            ));
        }

        seq
    }

    /// Drain completed lookups (non-blocking)
    ///
    /// Returns the accepted outcomes in arrival order; stale completions are
    /// dropped.
    pub fn poll(&mut self) -> Vec<LookupOutcome> {
        let mut outcomes = Vec::new();

        while let Some(response) = self.backlog.pop_front() {
            outcomes.extend(self.accept(response));
        }

        let Some(rx) = self.response_rx.take() else {
            return outcomes;
        };

        loop {
            match rx.try_recv() {
                Ok(response) => outcomes.extend(self.accept(response)),
                Err(TryRecvError::Empty) => {
                    self.response_rx = Some(rx);
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    log::error!("Lookup worker disconnected in poll");
                    self.request_tx = None;
                    let current = self
                        .in_flight
                        .as_ref()
                        .map(|current| (current.seq, current.query.clone()));
                    if let Some((seq, query)) = current {
                        let response =
                            LookupResponse::failure(seq, query, SearchError::WorkerUnavailable);
                        outcomes.extend(self.accept(response));
                    }
                    // Don't put receiver back - it's disconnected
                    break;
                }
            }
        }

        outcomes
    }

    /// Apply the staleness rule to one completion
    ///
    /// Returns `None` when the completion does not belong to the in-flight
    /// lookup. Worker-level failures apply to the in-flight lookup, if any.
    pub fn accept(&mut self, response: LookupResponse) -> Option<LookupOutcome> {
        let current = self.in_flight.as_ref()?;

        if response.seq != current.seq && response.seq != WORKER_FAILURE_SEQ {
            log::debug!(
                "Ignoring stale lookup {} (current: {})",
                response.seq,
                current.seq
            );
            return None;
        }

        let current = self.in_flight.take()?;
        let query = current.query;

        let outcome = match response.outcome {
            Ok(candidates) if candidates.is_empty() => LookupOutcome::NoResults { query },
            Ok(candidates) => {
                log::debug!("Lookup {} found {} candidates", current.seq, candidates.len());
                LookupOutcome::Found { query, candidates }
            }
            Err(error) if error.is_malformed() => {
                log::debug!("Lookup {} returned a malformed response: {}", current.seq, error);
                LookupOutcome::NoResults { query }
            }
            Err(error) => {
                log::warn!("Lookup {} for {:?} failed: {}", current.seq, query, error);
                LookupOutcome::Failed { query, error }
            }
        };

        Some(outcome)
    }

    /// Forget the in-flight lookup; its completion will be ignored
    pub fn invalidate(&mut self) {
        if let Some(current) = self.in_flight.take() {
            log::debug!("Invalidated lookup {}", current.seq);
        }
    }

    /// True while the latest lookup has not been answered or invalidated
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Sequence number of the lookup still wanted, if any
    pub fn in_flight_seq(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|current| current.seq)
    }

    /// Stop the worker and disconnect. Later dispatches degrade to failures.
    pub fn shutdown(&mut self) {
        self.invalidate();
        self.backlog.clear();
        if let Some(token) = self.shutdown.take() {
            token.cancel();
        }
        self.request_tx = None;
        self.response_rx = None;
    }
}

impl Drop for LookupDispatcher {
    fn drop(&mut self) {
        if let Some(token) = self.shutdown.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod dispatcher_tests;
