//! Pinyin dictionary storage.
//!
//! `PinyinDictionary` maps syllable keys (lowercase letters, no separators)
//! to Hanzi candidates in insertion order. Multi-character phrases are
//! indexed under every abbreviation variant produced by [`expand_phrase`],
//! so `aq`, `aiq` and `aiqing` all reach 爱情.

mod entry;
mod expand;
mod pinyin_dict;
mod source;

pub use entry::DictEntry;
pub use expand::expand_phrase;
pub use pinyin_dict::PinyinDictionary;
pub use source::{parse_line, ParsedLine};

use std::io;
use std::sync::{Arc, OnceLock};

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("global dictionary already initialized")]
    AlreadyInitialized,
}

static GLOBAL: OnceLock<Arc<PinyinDictionary>> = OnceLock::new();

/// Install the process-wide dictionary. Must run before the first `global()`.
pub fn init_global(dict: Arc<PinyinDictionary>) -> Result<(), DictError> {
    GLOBAL.set(dict).map_err(|_| DictError::AlreadyInitialized)
}

/// The shared dictionary, or an empty one when nothing was installed.
pub fn global() -> Arc<PinyinDictionary> {
    GLOBAL
        .get_or_init(|| Arc::new(PinyinDictionary::default()))
        .clone()
}
