//! Idle/listening toggle that hands a finished transcript to the interpreter

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListenState {
    #[default]
    Idle,
    Listening,
}

/// Accumulates recognized speech between `start` and `stop`
#[derive(Debug, Clone, Default)]
pub struct ListeningSession {
    state: ListenState,
    transcript: String,
}

impl ListeningSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ListenState {
        self.state
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Enter listening, discarding any previous transcript
    pub fn start(&mut self) {
        self.transcript.clear();
        self.state = ListenState::Listening;
    }

    /// Append recognized text; ignored while idle
    pub fn append(&mut self, text: &str) {
        if self.state != ListenState::Listening {
            return;
        }
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.transcript.is_empty() {
            self.transcript.push(' ');
        }
        self.transcript.push_str(text);
    }

    /// Abandon listening without producing a transcript
    pub fn cancel(&mut self) {
        self.transcript.clear();
        self.state = ListenState::Idle;
    }

    /// Leave listening; yields the transcript once if it is non-empty
    pub fn stop(&mut self) -> Option<String> {
        if self.state != ListenState::Listening {
            return None;
        }
        self.state = ListenState::Idle;
        if self.transcript.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.transcript))
        }
    }

    /// Flip between idle and listening, as a single mic button does
    pub fn toggle(&mut self) -> Option<String> {
        match self.state {
            ListenState::Idle => {
                self.start();
                None
            }
            ListenState::Listening => self.stop(),
        }
    }
}
