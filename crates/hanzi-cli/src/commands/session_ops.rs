use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use hanzi_core::dict::{self, PinyinDictionary};
use hanzi_core::settings::settings;
use hanzi_session::{
    CandidatePage, CandidateSession, InputMode, InputPanel, KeyEvent, TextBuffer,
};

use super::dict_ops::load_dict_lenient;
use super::die;

#[derive(Debug, Serialize)]
pub struct TypeReport {
    pub buffer: String,
    pub committed: String,
    pub page: CandidatePage,
}

/// Feed `input` to a pinyin panel, then move to `page`.
///
/// A space presses the space bar; every other character is a key press.
pub fn simulate(dict: Arc<PinyinDictionary>, input: &str, page: usize) -> TypeReport {
    let session = CandidateSession::new(dict);
    let mut panel = InputPanel::with_session(session, InputMode::Pinyin);
    let mut sink = TextBuffer::new();

    for ch in input.chars() {
        let event = match ch {
            ' ' => KeyEvent::Space,
            c => KeyEvent::Char(c),
        };
        panel.press(event, &mut sink);
    }
    for _ in 1..page {
        panel.press(KeyEvent::NextPage, &mut sink);
    }

    TypeReport {
        buffer: panel.session().buffer().to_string(),
        committed: sink.into_string(),
        page: panel.session().current_page(),
    }
}

/// One-line rendering: `[1/2] 1.G 2.F 3.E 4.D 5.C 6.B  <  >`
///
/// Disabled slots print as `-`; the arrows are dropped when unavailable.
pub fn format_page(page: &CandidatePage) -> String {
    let mut out = format!("[{}/{}]", page.page, page.page_count);
    for (i, slot) in page.slots.iter().enumerate() {
        let text = if slot.enabled { slot.text.as_str() } else { "-" };
        out.push_str(&format!(" {}.{}", i + 1, text));
    }
    if page.has_previous || page.has_next {
        out.push(' ');
    }
    if page.has_previous {
        out.push_str(" <");
    }
    if page.has_next {
        out.push_str(" >");
    }
    out
}

pub fn type_cmd(dict_file: Option<&str>, input: &str, page: usize, json: bool) {
    let path = dict_file
        .map(Path::new)
        .unwrap_or(settings().dictionary.path.as_path());
    die!(
        dict::init_global(load_dict_lenient(path)),
        "Error installing dictionary: {}"
    );

    let report = simulate(dict::global(), input, page);
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&report), "Error: {}"));
        return;
    }
    if !report.committed.is_empty() {
        println!("committed: {}", report.committed);
    }
    if report.buffer.is_empty() {
        println!("(idle)");
    } else {
        println!("{}: {}", report.buffer, format_page(&report.page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Arc<PinyinDictionary> {
        Arc::new(PinyinDictionary::from_lines([
            "Ak", "Bk", "Ck", "Dk", "Ek", "Fk", "Gk", "你ni", "好hao", "你好ni'hao",
        ]))
    }

    #[test]
    fn simulate_first_page() {
        let report = simulate(dict(), "k", 1);
        assert_eq!(report.buffer, "k");
        assert_eq!(
            format_page(&report.page),
            "[1/2] 1.G 2.F 3.E 4.D 5.C 6.B  >"
        );
    }

    #[test]
    fn simulate_second_page() {
        let report = simulate(dict(), "k", 2);
        assert_eq!(
            format_page(&report.page),
            "[2/2] 1.A 2.- 3.- 4.- 5.- 6.-  <"
        );
    }

    #[test]
    fn simulate_space_commits() {
        let report = simulate(dict(), "nh ni", 1);
        assert_eq!(report.committed, "你好");
        assert_eq!(report.buffer, "ni");
        assert_eq!(format_page(&report.page), "[1/1] 1.你 2.- 3.- 4.- 5.- 6.-");
    }

    #[test]
    fn simulate_idle() {
        let report = simulate(dict(), "", 3);
        assert_eq!(report.buffer, "");
        assert_eq!(report.page.page_count, 0);
    }

    #[test]
    fn report_serializes() {
        let report = simulate(dict(), "k", 1);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["buffer"], "k");
        assert_eq!(json["page"]["slots"][0]["text"], "G");
        assert_eq!(json["page"]["has_next"], true);
    }

    #[test]
    fn lenient_load_of_missing_file_is_empty() {
        let dict = load_dict_lenient(Path::new("/nonexistent/ChinesePinyin"));
        assert!(dict.is_empty());
    }

    #[test]
    fn lenient_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ChinesePinyin");
        std::fs::write(&path, "爱情ai'qing\n").unwrap();
        let dict = load_dict_lenient(&path);
        let report = simulate(dict, "aq", 1);
        assert_eq!(report.page.slots[0].text, "爱情");
    }
}
