use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use super::{expand_phrase, parse_line, DictError};

/// Insertion-ordered multi-map from syllable key to Hanzi.
///
/// Built once from dictionary lines and read-only afterwards; share it
/// between sessions through an `Arc`.
#[derive(Debug, Default)]
pub struct PinyinDictionary {
    entries: HashMap<String, Vec<String>>,
    pair_count: usize,
}

impl PinyinDictionary {
    /// Build from raw dictionary lines. Lines without a syllable run, and
    /// malformed phrases, are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        let mut total_lines = 0u64;
        let mut skipped = 0u64;

        for line in lines {
            total_lines += 1;
            let line = line.as_ref();
            let Some(parsed) = parse_line(line) else {
                skipped += 1;
                continue;
            };

            if !parsed.is_phrase() {
                dict.insert(parsed.syllables, parsed.hanzi);
                continue;
            }

            let keys = expand_phrase(parsed.syllables);
            if keys.is_empty() {
                warn!(line, "malformed phrase syllables");
                skipped += 1;
                continue;
            }
            for key in &keys {
                dict.insert(key, parsed.hanzi);
            }
        }

        info!(
            total_lines,
            skipped,
            keys = dict.entries.len(),
            pairs = dict.pair_count,
            "pinyin dictionary built"
        );
        dict
    }

    /// Build from already-split pairs, keeping their order.
    #[cfg(test)]
    pub(crate) fn from_entries(entries: impl IntoIterator<Item = super::DictEntry>) -> Self {
        let mut dict = Self::default();
        for e in entries {
            dict.insert(&e.key, &e.hanzi);
        }
        dict
    }

    /// Read a dictionary from any line source. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DictError> {
        let mut lines = Vec::new();
        for chunk in reader.split(b'\n') {
            let chunk = chunk?;
            lines.push(String::from_utf8_lossy(&chunk).into_owned());
        }
        Ok(Self::from_lines(lines))
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Like [`open`](Self::open), but an unreadable source yields an empty
    /// dictionary. The error is handed back so the caller can tell the user.
    pub fn load_or_empty(path: &Path) -> (Self, Option<DictError>) {
        match Self::open(path) {
            Ok(dict) => (dict, None),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "pinyin dictionary unavailable");
                (Self::default(), Some(e))
            }
        }
    }

    /// Add a pair unless it is already stored under `key`.
    fn insert(&mut self, key: &str, hanzi: &str) -> bool {
        let values = self.entries.entry(key.to_string()).or_default();
        if values.iter().any(|v| v == hanzi) {
            debug!(key, hanzi, "duplicate pair suppressed");
            return false;
        }
        values.push(hanzi.to_string());
        self.pair_count += 1;
        true
    }

    /// Candidates stored under `key`, oldest first. Empty when absent.
    pub fn lookup(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all pairs. Keys come in arbitrary order; values under a
    /// key keep insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Returns (key_count, pair_count).
    pub fn stats(&self) -> (usize, usize) {
        (self.entries.len(), self.pair_count)
    }
}
