use toml::Value;

const SETTINGS_PATH: &str = "src/default_settings.toml";

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS_PATH}");
    if let Err(problem) = check_default_settings(include_str!("src/default_settings.toml")) {
        panic!("{SETTINGS_PATH}: {problem}");
    }
}

/// Reject an embedded settings file that `settings()` would fail to load.
fn check_default_settings(content: &str) -> Result<(), String> {
    let root: Value = content.parse().map_err(|e| format!("invalid TOML: {e}"))?;

    match root.get("candidates").and_then(|c| c.get("page_size")) {
        Some(Value::Integer(n)) if *n > 0 => {}
        _ => return Err("[candidates] page_size must be a positive integer".into()),
    }
    match root.get("dictionary").and_then(|d| d.get("path")) {
        Some(Value::String(p)) if !p.is_empty() => {}
        _ => return Err("[dictionary] path must be a non-empty string".into()),
    }
    match root.get("panel").and_then(|p| p.get("initial_mode")) {
        Some(Value::String(m)) if m == "latin" || m == "pinyin" => {}
        _ => return Err("[panel] initial_mode must be \"latin\" or \"pinyin\"".into()),
    }
    if let Some(table) = root.get("punctuation").and_then(Value::as_table) {
        for (symbol, replacement) in table {
            if symbol.chars().count() != 1 || replacement.as_str().map_or(true, str::is_empty) {
                return Err(format!("[punctuation] entry {symbol:?} is invalid"));
            }
        }
    }
    Ok(())
}
