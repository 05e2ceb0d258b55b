//! Search-as-you-type typeahead for a single text input
//!
//! Keystrokes are debounced into lookups, lookups run on a worker thread, and
//! only the latest lookup's answer reaches the results panel.

mod controller;
mod debouncer;
mod dispatcher;
mod host;
mod scroll;
mod selection;
mod timer;
mod worker;

pub use controller::{DEFAULT_BLUR_GRACE_MS, TypeaheadController, TypeaheadView};
pub use debouncer::{DEFAULT_DEBOUNCE_MS, DebounceScheduler, InputDisposition};
pub use dispatcher::{LookupDispatcher, LookupOutcome};
pub use host::{HostField, MirrorField};
pub use scroll::PanelScroll;
pub use selection::{KeyEffect, SelectionState, Suggestions, TypeaheadKey};
pub use timer::Timer;
pub use worker::{LookupRequest, LookupResponse, WORKER_FAILURE_SEQ, spawn_worker};
