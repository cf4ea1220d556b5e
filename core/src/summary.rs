//! Word-boundary text truncation for card, timeline and featured summaries.

/// Appended whenever a summary is cut
pub const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `limit` characters at a word boundary.
///
/// Text that already fits is returned unchanged. Otherwise the first `limit`
/// characters are cut back to the last space and `...` is appended. When the
/// prefix holds no usable space the result is just `...`.
///
/// The marker counts against the budget, so a summarized string always fits
/// and summarizing twice changes nothing. A space is only usable if the
/// marker still fits after it; when the only spaces sit too close to the
/// limit the result is the bare marker.
pub fn summarize(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let prefix_end = byte_offset(text, limit);
    let prefix = &text[..prefix_end];

    let marker_len = ELLIPSIS.chars().count();
    let cut = match prefix.rfind(' ') {
        Some(space) if prefix[..space].chars().count() + marker_len <= limit => Some(space),
        // Last space leaves no room for the marker, look for an earlier one
        Some(_) => {
            let room = byte_offset(prefix, limit.saturating_sub(marker_len));
            prefix[..room].rfind(' ')
        }
        None => None,
    };

    match cut {
        Some(space) => format!("{}{ELLIPSIS}", &prefix[..space]),
        None => ELLIPSIS.to_string(),
    }
}

/// Byte offset of the `chars`-th character (or the end of `text`)
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
