// src/core/sanitize.rs

regex!(BR_TAG = r"(?i)<br\s*/?>");

/// Raw-markup cleanup applied before parsing: non-breaking spaces become plain
/// spaces and line-break tags become real newlines, so text extraction sees
/// the same line structure the page shows.
pub fn normalize_markup(s: &str) -> String {
    let s = s.replace("&nbsp;", " ").replace('\u{a0}', " ");
    BR_TAG.replace_all(&s, "\n").into_owned()
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Bill identifiers ("HB 123", "SB 2-A") as file stems.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' || ch == '.' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!("unnamed") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_breaks_and_spaces() {
        assert_eq!(normalize_markup("a&nbsp;b<br>c<BR/>d<br />e"), "a b\nc\nd\ne");
    }

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Third\n   Reading \t "), "Third Reading");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn filenames() {
        assert_eq!(sanitize_filename("HB 123"), "HB_123");
        assert_eq!(sanitize_filename("SB 2-A"), "SB_2-A");
        assert_eq!(sanitize_filename("../.."), "unnamed");
        assert_eq!(sanitize_filename(""), "unnamed");
    }
}
