use super::types::{CandidatePage, SessionState, Slot};
use super::CandidateSession;

impl CandidateSession {
    /// Number of pages for the current matches; 0 when there are none.
    pub fn page_count(&self) -> usize {
        self.matches().len().div_ceil(self.page_size)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page() > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page() * self.page_size < self.matches().len()
    }

    /// The visible page.
    ///
    /// Matches are shown newest first: slot 0 of page 1 is the last match,
    /// and each later page continues backwards through the list. Slots past
    /// the front of the list are blank and disabled.
    ///
    /// With a dictionary file this puts the line that appears last for a key
    /// in slot 0. A host that wants file order on screen can read
    /// [`matches`](Self::matches) directly, which is oldest first.
    pub fn current_page(&self) -> CandidatePage {
        let matches = self.matches();
        let skipped = (self.page() - 1) * self.page_size;

        let slots = (0..self.page_size)
            .map(|i| {
                // index = len - 1 - skipped - i, when that is non-negative
                matches
                    .len()
                    .checked_sub(skipped + i + 1)
                    .map(|idx| Slot::candidate(&matches[idx]))
                    .unwrap_or_else(Slot::blank)
            })
            .collect();

        CandidatePage {
            slots,
            has_previous: self.has_previous_page(),
            has_next: self.has_next_page(),
            page: self.page(),
            page_count: self.page_count(),
        }
    }

    /// Go back one page. Returns `false` (and does nothing) on page 1.
    pub fn previous_page(&mut self) -> bool {
        match &mut self.state {
            SessionState::Composing(c) if c.page > 1 => {
                c.page -= 1;
                true
            }
            _ => false,
        }
    }

    /// Advance one page. Returns `false` (and does nothing) on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        match &mut self.state {
            SessionState::Composing(c) => {
                c.page += 1;
                true
            }
            SessionState::Idle => false,
        }
    }
}
