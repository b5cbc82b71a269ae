//! Teams Markup Escaping
//!
//! Teams cards render a constrained markdown dialect. `escape` encodes the
//! characters that dialect reserves; `split_blocks` lifts `<pre>` regions
//! out of a body so code is delivered raw while running text is escaped.

use trackcast::domain::entities::TextSegment;

const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>";
const CODE_FENCE: &str = "```";

/// Escape raw text for the Teams markup dialect.
///
/// All replacements happen in a single pass, so an already-escaped sequence
/// is never escaped again. Lone `\r` or `\n` characters pass through; only
/// the CRLF pair becomes `<br/>`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '[' => out.push_str("&#91;"),
            ']' => out.push_str("&#93;"),
            '\\' => out.push_str("&#92;"),
            '~' => out.push_str("&#126;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            ':' => out.push_str("&#58;"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("<br/>");
            }
            _ => out.push(c),
        }
    }
    out
}

/// Split a body on `<pre>`/`</pre>` regions into typed segments.
///
/// Text outside the delimiters becomes escaped [`TextSegment::Plain`]
/// segments; each matched region becomes one [`TextSegment::CodeBlock`]
/// holding the raw interior behind a code fence. Nested `<pre>` pairs are
/// depth-counted, so the outermost pair owns the whole nested range. An
/// unterminated `<pre>` leaves the remainder as plain text.
pub fn split_blocks(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(PRE_OPEN) {
        let Some(close) = find_matching_close(rest, open + PRE_OPEN.len()) else {
            break;
        };
        if open > 0 {
            segments.push(TextSegment::Plain(escape(&rest[..open])));
        }
        let interior = &rest[open + PRE_OPEN.len()..close];
        segments.push(TextSegment::CodeBlock(format!("{CODE_FENCE}\n{interior}")));
        rest = &rest[close + PRE_CLOSE.len()..];
    }
    if !rest.is_empty() {
        segments.push(TextSegment::Plain(escape(rest)));
    }
    segments
}

/// Byte offset of the `</pre>` closing the block opened before `from`,
/// counting nested pairs.
fn find_matching_close(text: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut cursor = from;
    loop {
        let next_open = text[cursor..].find(PRE_OPEN);
        let next_close = text[cursor..].find(PRE_CLOSE)?;
        match next_open {
            Some(open) if open < next_close => {
                depth += 1;
                cursor += open + PRE_OPEN.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(cursor + next_close);
                }
                cursor += next_close + PRE_CLOSE.len();
            }
        }
    }
}
