//! Pinyin candidate session and the on-screen keyboard controller.
//!
//! `CandidateSession` owns the syllable buffer typed so far and the Hanzi
//! matching it, and pages through those matches. `InputPanel` routes
//! keyboard presses either to the session or straight to the host text
//! field (a [`CommitSink`]).

pub(crate) mod types;

mod commit;
mod composing;
mod paging;
mod panel;
mod sink;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use hanzi_core::dict::PinyinDictionary;
use hanzi_core::settings::settings;

pub use hanzi_core::settings::InputMode;
pub use panel::InputPanel;
pub use sink::{CommitSink, TextBuffer};
pub use types::{
    CandidateAction, CandidatePage, KeyEvent, LetterCase, PanelResponse, Slot, DEFAULT_PAGE_SIZE,
};

use types::SessionState;

/// Matching state for one pinyin lookup.
///
/// Idle while the buffer is empty, composing otherwise. The dictionary is
/// shared read-only; everything else belongs to this session.
pub struct CandidateSession {
    dict: Arc<PinyinDictionary>,
    page_size: usize,
    state: SessionState,
}

impl CandidateSession {
    /// Session with the configured page size.
    pub fn new(dict: Arc<PinyinDictionary>) -> Self {
        Self::with_page_size(dict, settings().candidates.page_size)
    }

    /// A zero page size is raised to 1.
    pub fn with_page_size(dict: Arc<PinyinDictionary>, page_size: usize) -> Self {
        Self {
            dict,
            page_size: page_size.max(1),
            state: SessionState::Idle,
        }
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, SessionState::Composing(_))
    }

    pub fn buffer(&self) -> &str {
        match &self.state {
            SessionState::Composing(c) => &c.buffer,
            SessionState::Idle => "",
        }
    }

    /// The full, unpaged match list, oldest dictionary entry first.
    pub fn matches(&self) -> &[String] {
        match &self.state {
            SessionState::Composing(c) => &c.matches,
            SessionState::Idle => &[],
        }
    }

    /// Current 1-based page; 1 while idle.
    pub fn page(&self) -> usize {
        match &self.state {
            SessionState::Composing(c) => c.page,
            SessionState::Idle => 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn dictionary(&self) -> &Arc<PinyinDictionary> {
        &self.dict
    }
}
