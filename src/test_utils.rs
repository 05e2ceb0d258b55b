//! Shared test utilities for tickahead
//!
//! Apps built here talk to a hand-driven lookup channel instead of a worker,
//! so tests decide when and in which order lookups complete.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{Sender, channel};
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::provider::{AssetKind, Candidate};
    use crate::typeahead::{LookupDispatcher, LookupRequest, LookupResponse};

    pub struct TestApp {
        pub app: App,
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    impl TestApp {
        /// Requests sent since the last call
        pub fn sent(&mut self) -> Vec<LookupRequest> {
            let mut sent = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                sent.push(request);
            }
            sent
        }

        /// Answer a request and let the app apply it
        pub fn answer(&mut self, request: &LookupRequest, results: Vec<Candidate>) {
            self.responses
                .send(LookupResponse::success(
                    request.seq,
                    request.query.clone(),
                    results,
                ))
                .unwrap();
            self.app.poll_typeahead(Instant::now());
        }

        /// Type each character of `text` as a key press
        pub fn type_str(&mut self, text: &str) {
            for c in text.chars() {
                self.app.handle_key_event(key(KeyCode::Char(c)), Instant::now());
            }
        }

        pub fn press(&mut self, code: KeyCode) {
            self.app.handle_key_event(key(code), Instant::now());
        }

        /// Jump past the debounce period so the pending lookup goes out
        pub fn settle(&mut self) {
            self.app
                .poll_typeahead(Instant::now() + Duration::from_secs(1));
        }

        /// Type, settle, and answer the one resulting lookup
        pub fn search(&mut self, text: &str, results: Vec<Candidate>) {
            self.type_str(text);
            self.settle();
            let request = self.sent().pop().expect("lookup dispatched");
            self.answer(&request, results);
        }
    }

    /// App with default config and a manual lookup channel
    pub fn test_app() -> TestApp {
        test_app_with(&Config::default(), "")
    }

    pub fn test_app_with(config: &Config, initial: &str) -> TestApp {
        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = channel();
        let dispatcher = LookupDispatcher::with_channels(request_tx, response_rx);
        TestApp {
            app: App::with_dispatcher(config, dispatcher, initial),
            requests,
            responses,
        }
    }

    /// A few well-known tickers
    pub fn sample_candidates() -> Vec<Candidate> {
        vec![
            Candidate::stock("AAPL", "Apple Inc."),
            Candidate::stock("AMZN", "Amazon.com Inc."),
            Candidate::new("ADA", "Cardano", AssetKind::Crypto),
        ]
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
