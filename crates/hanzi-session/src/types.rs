use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One candidate button on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Empty for a disabled slot.
    pub text: String,
    pub enabled: bool,
}

impl Slot {
    pub(crate) fn candidate(text: &str) -> Self {
        Self {
            text: text.to_string(),
            enabled: true,
        }
    }

    pub(crate) fn blank() -> Self {
        Self {
            text: String::new(),
            enabled: false,
        }
    }
}

/// Snapshot of the visible candidate page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidatePage {
    /// Always exactly `page_size` slots.
    pub slots: Vec<Slot>,
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based.
    pub page: usize,
    /// 0 when nothing matches.
    pub page_count: usize,
}

impl CandidatePage {
    /// Text of the enabled slots, in display order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|s| s.enabled)
            .map(|s| s.text.as_str())
    }

    /// First slot's text, if enabled. Space commits this.
    pub fn first(&self) -> Option<&str> {
        self.slots
            .first()
            .filter(|s| s.enabled)
            .map(|s| s.text.as_str())
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots
            .get(index)
            .filter(|s| s.enabled)
            .map(|s| s.text.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Composition {
    /// Lowercase letters, never empty while composing.
    pub buffer: String,
    pub matches: Vec<String>,
    /// 1-based.
    pub page: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum SessionState {
    #[default]
    Idle,
    Composing(Composition),
}

/// Upper or lower case for the letter keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

impl LetterCase {
    pub(crate) fn apply(self, c: char) -> char {
        match self {
            LetterCase::Lower => c.to_ascii_lowercase(),
            LetterCase::Upper => c.to_ascii_uppercase(),
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            LetterCase::Lower => LetterCase::Upper,
            LetterCase::Upper => LetterCase::Lower,
        }
    }
}

/// A press on the on-screen keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Letter, digit or symbol key.
    Char(char),
    Space,
    Enter,
    Backspace,
    /// Candidate button by position on the current page.
    SelectSlot(usize),
    PreviousPage,
    NextPage,
    /// Latin/Pinyin switch.
    ToggleMode,
    ToggleCase,
    Escape,
}

/// Candidate area action — exactly one of three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateAction {
    /// Leave the area as-is.
    Keep,
    /// Show or refresh the candidate area with this page.
    Show(CandidatePage),
    /// Hide the candidate area.
    Hide,
}

/// Response from `InputPanel::press`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelResponse {
    /// False when the host should handle the key itself (Enter while idle).
    pub consumed: bool,
    pub candidates: CandidateAction,
}

impl PanelResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            candidates: CandidateAction::Keep,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn with_candidates(mut self, candidates: CandidateAction) -> Self {
        self.candidates = candidates;
        self
    }
}
