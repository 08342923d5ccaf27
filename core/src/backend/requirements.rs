//! Minimal requirements-file reader: extracts distribution names so each can
//! be upgraded individually. Version pins, extras and markers are dropped.

use std::sync::OnceLock;

use regex::Regex;

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._-]*)").expect("valid regex"))
}

pub fn parse_requirement_names(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for raw in content.lines() {
        let line = match raw.split_once(" #") {
            Some((head, _)) => head,
            None => raw,
        }
        .trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }

        // Direct references ("name @ url") and markers ("name; python_version<'3.8'").
        let line = line.split([';', '@']).next().unwrap_or_default().trim();

        let Some(m) = name_re().captures(line).and_then(|c| c.get(1)) else {
            tracing::debug!(line = raw, "skipping unparseable requirement");
            continue;
        };
        let name = m.as_str().to_string();
        if !names.iter().any(|n| n.eq_ignore_ascii_case(&name)) {
            names.push(name);
        }
    }

    names
}
