use serde::{Deserialize, Serialize};

/// One `(key, hanzi)` pair as stored in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub key: String,
    pub hanzi: String,
}
