use std::sync::Arc;

use tracing::debug_span;

use hanzi_core::dict::PinyinDictionary;
use hanzi_core::settings::{settings, InputMode};

use super::sink::CommitSink;
use super::types::{CandidateAction, KeyEvent, LetterCase, PanelResponse};
use super::CandidateSession;

/// Keyboard-level controller: one current pinyin session plus the mode and
/// case toggles of the on-screen keyboard.
pub struct InputPanel {
    session: CandidateSession,
    mode: InputMode,
    letter_case: LetterCase,
}

impl InputPanel {
    /// Panel in the configured initial mode with the configured page size.
    pub fn new(dict: Arc<PinyinDictionary>) -> Self {
        Self::with_session(CandidateSession::new(dict), settings().panel.initial_mode)
    }

    pub fn with_session(session: CandidateSession, mode: InputMode) -> Self {
        Self {
            session,
            mode,
            letter_case: LetterCase::Lower,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn letter_case(&self) -> LetterCase {
        self.letter_case
    }

    pub fn session(&self) -> &CandidateSession {
        &self.session
    }

    /// Process a key press. Committed text goes to `sink`.
    pub fn press(&mut self, event: KeyEvent, sink: &mut dyn CommitSink) -> PanelResponse {
        let _span = debug_span!("press", ?event, mode = ?self.mode).entered();

        match event {
            KeyEvent::Char(c) => self.handle_char(c, sink),

            KeyEvent::Space if self.session.is_composing() => {
                self.session.commit_first(sink);
                self.hide()
            }
            KeyEvent::Space => {
                sink.insert_text(" ");
                PanelResponse::consumed()
            }

            // Enter while composing commits the letters as typed
            KeyEvent::Enter if self.session.is_composing() => {
                self.session.commit_raw(sink);
                self.hide()
            }
            KeyEvent::Enter => PanelResponse::not_consumed(),

            KeyEvent::Backspace if self.session.is_composing() => {
                self.session.backspace();
                self.show_or_hide()
            }
            KeyEvent::Backspace => {
                sink.backspace();
                PanelResponse::consumed()
            }

            KeyEvent::SelectSlot(slot) => {
                if self.session.select_slot(slot, sink) {
                    self.hide()
                } else {
                    PanelResponse::consumed()
                }
            }

            KeyEvent::PreviousPage => {
                self.session.previous_page();
                self.show_or_keep()
            }
            KeyEvent::NextPage => {
                self.session.next_page();
                self.show_or_keep()
            }

            KeyEvent::ToggleMode => {
                self.session.clear();
                self.mode = match self.mode {
                    InputMode::Latin => {
                        self.letter_case = LetterCase::Lower;
                        InputMode::Pinyin
                    }
                    InputMode::Pinyin => InputMode::Latin,
                };
                self.hide()
            }
            KeyEvent::ToggleCase => {
                self.letter_case = self.letter_case.toggled();
                PanelResponse::consumed()
            }

            KeyEvent::Escape => self.close(),
        }
    }

    /// The host switched to another text field. Pending syllables must not
    /// leak into it.
    pub fn retarget(&mut self) -> PanelResponse {
        self.session.clear();
        self.hide()
    }

    /// The panel is closing; drop any pending input.
    pub fn close(&mut self) -> PanelResponse {
        self.session.clear();
        self.hide()
    }

    fn handle_char(&mut self, c: char, sink: &mut dyn CommitSink) -> PanelResponse {
        if self.mode == InputMode::Latin {
            let c = if c.is_ascii_alphabetic() {
                self.letter_case.apply(c)
            } else {
                c
            };
            sink.insert_text(c.encode_utf8(&mut [0u8; 4]));
            return PanelResponse::consumed();
        }

        if self.session.append_letter(c) {
            return self.show_or_hide();
        }

        // Symbol or digit: finish the pending syllables first
        let was_composing = self.session.is_composing();
        self.session.commit_first(sink);
        match settings().punctuation_get(c) {
            Some(full_width) => sink.insert_text(full_width),
            None => sink.insert_text(c.encode_utf8(&mut [0u8; 4])),
        }
        if was_composing {
            self.hide()
        } else {
            PanelResponse::consumed()
        }
    }

    fn hide(&self) -> PanelResponse {
        PanelResponse::consumed().with_candidates(CandidateAction::Hide)
    }

    fn show_or_hide(&self) -> PanelResponse {
        if self.session.is_composing() {
            PanelResponse::consumed()
                .with_candidates(CandidateAction::Show(self.session.current_page()))
        } else {
            self.hide()
        }
    }

    fn show_or_keep(&self) -> PanelResponse {
        if self.session.is_composing() {
            PanelResponse::consumed()
                .with_candidates(CandidateAction::Show(self.session.current_page()))
        } else {
            PanelResponse::consumed()
        }
    }
}
