//! Tag stripping for unstyled output.
//!
//! Unlike the lexer this never fails: anything that does not look like a
//! complete tag marker is kept as text.

/// Remove all tag markers from `message`, keeping their content.
///
/// An unescaped `<` starts a marker when a `>` follows before any other `<`;
/// the whole marker (`<name>` or `</name>`) is dropped. `\<` yields a literal
/// `<`.
///
/// # Examples
///
/// ```
/// use tagstyle::strip_tags;
///
/// assert_eq!(strip_tags("<error>bad</error>"), "bad");
/// assert_eq!(strip_tags(r"\<error>"), "<error>");
/// assert_eq!(strip_tags("1 < 2"), "1 < 2");
/// ```
pub fn strip_tags(message: &str) -> String {
    let chars: Vec<char> = message.chars().collect();
    let mut out = String::with_capacity(message.len());
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        if c == '<' {
            if pos > 0 && chars[pos - 1] == '\\' {
                out.pop();
                out.push('<');
                pos += 1;
                continue;
            }
            if let Some(len) = marker_len(&chars[pos..]) {
                pos += len;
                continue;
            }
        }
        out.push(c);
        pos += 1;
    }

    out
}

/// Length of the tag marker at the start of `rest`, if there is one.
fn marker_len(rest: &[char]) -> Option<usize> {
    for (i, c) in rest.iter().enumerate().skip(1) {
        match c {
            '>' => return Some(i + 1),
            '<' => return None,
            _ => {}
        }
    }
    None
}
