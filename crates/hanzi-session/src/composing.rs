use tracing::debug;

use super::types::{Composition, SessionState};
use super::CandidateSession;

impl CandidateSession {
    /// Append one syllable letter and re-match from page 1.
    ///
    /// Only ASCII letters are accepted (upper case is folded); anything else
    /// is ignored and `false` returned.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let letter = letter.to_ascii_lowercase();
        if !self.is_composing() {
            self.state = SessionState::Composing(Composition::default());
        }
        if let SessionState::Composing(c) = &mut self.state {
            c.buffer.push(letter);
        }
        self.rematch();
        true
    }

    /// Remove the last buffered letter. Emptying the buffer returns to idle.
    pub fn backspace(&mut self) {
        let SessionState::Composing(c) = &mut self.state else {
            return;
        };
        c.buffer.pop();
        if c.buffer.is_empty() {
            self.clear();
        } else {
            self.rematch();
        }
    }

    /// Drop the buffer and matches. Safe to call when already idle.
    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
    }

    fn rematch(&mut self) {
        let SessionState::Composing(c) = &mut self.state else {
            return;
        };
        c.matches = self.dict.lookup(&c.buffer).to_vec();
        c.page = 1;
        debug!(buffer = %c.buffer, matches = c.matches.len(), "rematch");
    }
}
