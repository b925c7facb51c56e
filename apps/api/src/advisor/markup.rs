//! Markup Formatter — converts generated markdown-ish text into the light HTML
//! the page renders.
//!
//! Pass order is fixed: headings, then bold spans, then newlines. The final
//! `<br><br>` collapse runs once, so three or more consecutive newlines leave
//! doubled breaks behind.

const BOLD_OPEN: &str = "<b>";
const BOLD_CLOSE: &str = "</b>";
const LINE_BREAK: &str = "<br>";

/// Runs every formatting pass over raw model output.
pub fn format_suggestions(raw: &str) -> String {
    let text = convert_headings(raw);
    let text = convert_bold(&text);
    text.replace('\n', LINE_BREAK)
        .replace("<br><br>", LINE_BREAK)
}

/// Replaces `#` headings with bold text.
///
/// A heading is a `#` at the very start of the text or right after a newline;
/// that newline is consumed along with the heading. One whitespace character
/// after the `#` is optional and may itself be a newline, in which case the
/// heading text is the following line. The heading text is trimmed and must be
/// non-empty before trimming.
fn convert_headings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        let hash_offset = if pos == 0 && rest.starts_with('#') {
            Some(0)
        } else if rest.starts_with("\n#") {
            Some(1)
        } else {
            None
        };

        if let Some(offset) = hash_offset {
            if let Some((heading, len)) = match_heading(&rest[offset + 1..]) {
                out.push_str(BOLD_OPEN);
                out.push_str(heading.trim());
                out.push_str(BOLD_CLOSE);
                pos += offset + 1 + len;
                continue;
            }
        }

        let ch_len = rest.chars().next().map_or(1, char::len_utf8);
        out.push_str(&rest[..ch_len]);
        pos += ch_len;
    }

    out
}

/// Matches the part of a heading after `#`. Returns the captured heading text
/// and the number of bytes consumed.
fn match_heading(after_hash: &str) -> Option<(&str, usize)> {
    // Prefer consuming one leading whitespace character.
    if let Some(ws) = after_hash.chars().next().filter(|c| c.is_whitespace()) {
        let skip = ws.len_utf8();
        let line = take_line(&after_hash[skip..]);
        if !line.is_empty() {
            return Some((line, skip + line.len()));
        }
    }

    let line = take_line(after_hash);
    (!line.is_empty()).then_some((line, line.len()))
}

fn take_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// Replaces `**text**` with `<b>text</b>`. The enclosed text cannot contain
/// `*` but may span lines.
fn convert_bold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some(inner) = rest.strip_prefix("**") {
            if let Some(end) = inner.find('*') {
                if end > 0 && inner[end..].starts_with("**") {
                    out.push_str(BOLD_OPEN);
                    out.push_str(&inner[..end]);
                    out.push_str(BOLD_CLOSE);
                    pos += 2 + end + 2;
                    continue;
                }
            }
        }

        let ch_len = rest.chars().next().map_or(1, char::len_utf8);
        out.push_str(&rest[..ch_len]);
        pos += ch_len;
    }

    out
}
