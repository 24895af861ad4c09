use tracing::debug;

use super::sink::CommitSink;
use super::CandidateSession;

impl CandidateSession {
    /// Hand `text` to the sink and return to idle.
    pub fn select_candidate(&mut self, text: &str, sink: &mut dyn CommitSink) {
        debug!(buffer = self.buffer(), text, "select candidate");
        sink.insert_text(text);
        self.clear();
    }

    /// Commit the candidate in `slot` of the current page. A blank or
    /// out-of-range slot is ignored and `false` returned.
    pub fn select_slot(&mut self, slot: usize, sink: &mut dyn CommitSink) -> bool {
        let page = self.current_page();
        let Some(text) = page.slot(slot) else {
            return false;
        };
        self.select_candidate(text, sink);
        true
    }

    /// Commit the first candidate on the current page, or the raw letters
    /// when nothing matches. Does nothing while idle.
    pub fn commit_first(&mut self, sink: &mut dyn CommitSink) {
        if !self.is_composing() {
            return;
        }
        let page = self.current_page();
        match page.first() {
            Some(text) => self.select_candidate(text, sink),
            None => self.commit_raw(sink),
        }
    }

    /// Commit the buffered letters themselves and return to idle.
    pub fn commit_raw(&mut self, sink: &mut dyn CommitSink) {
        if !self.is_composing() {
            return;
        }
        sink.insert_text(self.buffer());
        self.clear();
    }
}
