// src/core/sanitize.rs

/// Replace every `\n` with a space. Other whitespace is kept as-is.
pub fn flatten_newlines(s: &str) -> String {
    s.replace('\n', " ")
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

/// Final `/`-separated segment of a URL or path, query and fragment excluded.
pub fn last_segment(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    path.rsplit('/').next().unwrap_or(path)
}
