// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
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

/// Year display text: trim, strip one trailing comma, trim again.
/// No date parsing; the year stays opaque display text.
pub fn normalize_year(s: &str) -> String {
    let t = s.trim();
    let t = t.strip_suffix(',').unwrap_or(t);
    t.trim().to_string()
}

/// Artwork id derivation: lowercase, whitespace/comma/hyphen runs collapse
/// to a single hyphen, everything outside [a-z0-9-] is dropped.
pub fn slug_id(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_hyphen = false;
    for ch in s.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_whitespace() || ch == ',' || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        }
        // anything else: dropped
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_strips_single_trailing_comma() {
        assert_eq!(normalize_year(" 2020, "), "2020");
        assert_eq!(normalize_year("2019"), "2019");
        assert_eq!(normalize_year("c. 1999,"), "c. 1999");
        assert_eq!(normalize_year(""), "");
    }

    #[test]
    fn slug_collapses_runs_and_drops_junk() {
        assert_eq!(slug_id("Sunset-2020"), "sunset-2020");
        assert_eq!(slug_id("Blue, Period  III-1907"), "blue-period-iii-1907");
        assert_eq!(slug_id("Étude #4-"), "tude-4");
        assert_eq!(slug_id("  ,— ,  "), "");
    }

    #[test]
    fn normalize_ws_collapses_inner_runs() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }
}
