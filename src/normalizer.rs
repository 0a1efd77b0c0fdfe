//! Whitespace canonicalization applied before segmentation.
//!
//! Line breaks are dropped everywhere. Every other whitespace run outside a
//! double-quoted string is removed, except where it separates the end of one
//! declaration from the keyword of the next one; such a run collapses to a
//! single space. Quoted text is copied untouched.

/// Canonicalizes whitespace in `text`. Never fails and is idempotent.
pub fn normalize(text: &str) -> String {
    let chars: Vec<char> = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let mut out = String::with_capacity(chars.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                out.push(c);
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
                i += 1;
            }
            '"' => {
                in_string = !in_string;
                out.push(c);
                i += 1;
            }
            c if in_string || !c.is_whitespace() => {
                out.push(c);
                i += 1;
            }
            _ => {
                let run_end = chars[i..]
                    .iter()
                    .position(|c| !c.is_whitespace())
                    .map_or(chars.len(), |p| i + p);
                if closes_declaration(&out) && opens_declaration(&chars[run_end..]) {
                    out.push(' ');
                }
                i = run_end;
            }
        }
    }

    out
}

/// True when `emitted` ends with `)` or `}` followed only by characters that
/// are neither openers nor spaces.
fn closes_declaration(emitted: &str) -> bool {
    match emitted.rfind([')', '}']) {
        Some(pos) => !emitted[pos + 1..].contains(['(', '{', ' ']),
        None => false,
    }
}

/// True when `rest` reaches an opener before any closer.
fn opens_declaration(rest: &[char]) -> bool {
    for c in rest {
        match c {
            '(' | '{' => return true,
            ')' | '}' => return false,
            _ => {}
        }
    }
    false
}
