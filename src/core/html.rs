// src/core/html.rs
//
// Minimal tag-level scanning over raw markup text. No DOM, no allocation
// beyond lowercased shadow copies; class-soup selectors are matched as
// substrings of the open tag (see config/markers.rs).

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<tag ...>...</tag>` block whose open tag contains `marker`
/// (case-insensitive). Returns byte offsets of the whole block.
///
/// Close-tag matching is non-nesting; fine for the card/field tags we scan,
/// which the upstream page never nests inside themselves.
pub fn next_block_with_marker_ci(
    s: &str,
    tag: &str,
    marker: &str,
    from: usize,
) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open = join!("<", &*to_lower(tag));
    let close = join!("</", &*to_lower(tag), ">");
    let mark = to_lower(marker);

    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(&open)? + pos;
        // Reject partial tag-name hits ("<p" inside "<path").
        match s.as_bytes().get(start + open.len()) {
            Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'>') | Some(b'/') => {}
            _ => {
                pos = start + open.len();
                continue;
            }
        }
        let open_end = s[start..].find('>')? + start + 1;
        if lc[start..open_end].contains(&mark) {
            let end_rel = lc[open_end..].find(&close)?;
            return Some((start, open_end + end_rel + close.len()));
        }
        pos = open_end;
    }
}

/// Inner text span of a block: after the open tag, before the final close tag.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Pull an attribute value out of an open tag, handling both quote styles
/// and bare values. `name` is matched case-insensitively on a word boundary.
pub fn attr_value_ci(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let needle = join!(&*to_lower(name), "=");

    let mut from = 0usize;
    loop {
        let at = lc.get(from..)?.find(&needle)? + from;
        let val_start = at + needle.len();
        if at > 0 {
            let prev = lc.as_bytes()[at - 1];
            if prev.is_ascii_alphanumeric() || prev == b'-' || prev == b'_' {
                from = val_start;
                continue;
            }
        }
        let rest = &open_tag[val_start..];
        return match rest.as_bytes().first() {
            Some(&q) if q == b'"' || q == b'\'' => {
                let tail = &rest[1..];
                let end = tail.find(q as char)?;
                Some(tail[..end].to_string())
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                Some(rest[..end].to_string())
            }
            None => None,
        };
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_block_skips_partial_tag_names() {
        let doc = r#"<path d="x"/><p class="ver-truncate">Dawn</p>"#;
        let (s, e) = next_block_with_marker_ci(doc, "p", "ver-truncate", 0).unwrap();
        assert_eq!(&doc[s..e], r#"<p class="ver-truncate">Dawn</p>"#);
    }

    #[test]
    fn marker_block_skips_unmarked_siblings() {
        let doc = r#"<p class="other">x</p><p class="ver-inline">2020,</p>"#;
        let (s, e) = next_block_with_marker_ci(doc, "p", "ver-inline", 0).unwrap();
        assert!(doc[s..e].contains("2020"));
    }

    #[test]
    fn attr_value_both_quote_styles() {
        assert_eq!(
            attr_value_ci(r#"<img src="https://x/y.jpg" alt=t>"#, "src").as_deref(),
            Some("https://x/y.jpg")
        );
        assert_eq!(
            attr_value_ci(r#"<img src='a.png'>"#, "src").as_deref(),
            Some("a.png")
        );
        assert_eq!(attr_value_ci(r#"<img data-src="no">"#, "src"), None);
    }

    #[test]
    fn strip_tags_flattens_nested_spans() {
        assert_eq!(strip_tags("<p><span>A</span>  B</p>"), "A B");
    }
}
