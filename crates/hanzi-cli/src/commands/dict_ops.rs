use std::path::Path;
use std::sync::Arc;

use hanzi_core::dict::{expand_phrase, DictEntry, PinyinDictionary};

use super::die;

/// Open a dictionary, exiting on failure.
pub fn open_dict(dict_file: &str) -> PinyinDictionary {
    die!(
        PinyinDictionary::open(Path::new(dict_file)),
        "Error opening dictionary: {}"
    )
}

/// Open a dictionary, falling back to an empty one with a warning.
pub fn load_dict_lenient(path: &Path) -> Arc<PinyinDictionary> {
    let (dict, err) = PinyinDictionary::load_or_empty(path);
    if let Some(e) = err {
        eprintln!(
            "Warning: cannot read pinyin dictionary {} ({e}); no candidates will be offered",
            path.display()
        );
    }
    Arc::new(dict)
}

pub fn lookup_cmd(dict_file: &str, key: &str, json: bool) {
    let dict = open_dict(dict_file);
    let values = dict.lookup(key);
    if json {
        println!("{}", die!(serde_json::to_string(values), "Error: {}"));
        return;
    }
    if dict.contains_key(key) {
        println!("{key}: {}", values.join(" "));
    } else {
        println!("{key}: (none)");
    }
}

pub fn expand_cmd(phrase: &str) {
    let keys = expand_phrase(phrase);
    if keys.is_empty() {
        eprintln!("Error: malformed phrase {phrase:?}");
        std::process::exit(1);
    }
    for key in keys {
        println!("{key}");
    }
}

pub fn info_cmd(dict_file: &str) {
    let dict = open_dict(dict_file);
    let (keys, pairs) = dict.stats();
    println!("keys:  {keys}");
    println!("pairs: {pairs}");
}

/// Every stored pair, keys sorted, values in insertion order.
pub fn dump_entries(dict: &PinyinDictionary) -> Vec<DictEntry> {
    let mut entries: Vec<DictEntry> = dict
        .iter()
        .map(|(key, hanzi)| DictEntry {
            key: key.to_string(),
            hanzi: hanzi.to_string(),
        })
        .collect();
    // stable: values under one key keep their order
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}

pub fn dump_cmd(dict_file: &str, json: bool) {
    let entries = dump_entries(&open_dict(dict_file));
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&entries), "Error: {}"));
        return;
    }
    for e in &entries {
        println!("{}\t{}", e.key, e.hanzi);
    }
}
