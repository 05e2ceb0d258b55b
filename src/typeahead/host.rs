//! Host field contract
//!
//! The host is the text input the typeahead is attached to. It mirrors every
//! keystroke and receives the full candidate when the user commits one.

use crate::provider::Candidate;

pub trait HostField {
    /// Called for every keystroke, and with the symbol on commit
    fn on_text_changed(&mut self, text: &str);

    /// Called exactly once per commit
    fn on_candidate_committed(&mut self, candidate: &Candidate);
}

/// Host that keeps the latest text and every committed candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorField {
    text: String,
    commits: Vec<Candidate>,
}

impl MirrorField {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: initial.into(),
            commits: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Most recent commit, if any
    pub fn committed(&self) -> Option<&Candidate> {
        self.commits.last()
    }

    pub fn commits(&self) -> &[Candidate] {
        &self.commits
    }
}

impl HostField for MirrorField {
    fn on_text_changed(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn on_candidate_committed(&mut self, candidate: &Candidate) {
        self.commits.push(candidate.clone());
    }
}
