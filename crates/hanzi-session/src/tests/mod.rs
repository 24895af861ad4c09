
use std::sync::Arc;

use hanzi_core::dict::PinyinDictionary;

use super::CandidateSession;

pub(super) fn make_test_dict() -> Arc<PinyinDictionary> {
    Arc::new(PinyinDictionary::from_lines([
        "阿a",
        "啊a",
        "爱ai",
        "哎ai",
        "唉ai",
        "爱情ai'qing",
        "你ni",
        "泥ni",
        "好hao",
        "号hao",
        "你好ni'hao",
        "中zhong",
        "中国zhong'guo",
        "中华人民zhong'hua'ren'min",
        // seven homophones for paging
        "一yi",
        "以yi",
        "已yi",
        "意yi",
        "易yi",
        "亿yi",
        "义yi",
    ]))
}

pub(super) fn make_session() -> CandidateSession {
    CandidateSession::with_page_size(make_test_dict(), 6)
}

// Helper: type a string one letter at a time
pub(super) fn type_string(session: &mut CandidateSession, s: &str) {
    for ch in s.chars() {
        session.append_letter(ch);
    }
}
