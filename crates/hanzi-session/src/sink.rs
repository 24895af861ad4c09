/// The host text field that receives committed text.
pub trait CommitSink {
    /// Insert `text` at the cursor.
    fn insert_text(&mut self, text: &str);
    /// Delete the character before the cursor.
    fn backspace(&mut self);
}

/// In-memory text field with the cursor fixed at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl CommitSink for TextBuffer {
    fn insert_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn backspace(&mut self) {
        self.text.pop();
    }
}
