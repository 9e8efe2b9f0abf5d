//! Logging helpers for player input, which is raw terminal bytes and not always UTF-8.

use std::fmt::Write;

/// Longest input preview (in characters) written to the log before it is cut.
const MAX_PREVIEW: usize = 64;

/// Render one raw input line for a single-line log record.
///
/// Valid UTF-8 text is kept, control characters and bytes that are not valid UTF-8 are
/// shown as `\xNN`, and a backslash is doubled so the two cannot be confused.
pub fn escape_input(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len().min(MAX_PREVIEW) + 8);
    let mut shown = 0;
    let mut rest = raw;
    while !rest.is_empty() {
        let (text, bad) = match std::str::from_utf8(rest) {
            Ok(text) => (text, &rest[rest.len()..]),
            Err(e) => {
                let (good, tail) = rest.split_at(e.valid_up_to());
                let bad_len = e.error_len().unwrap_or(tail.len());
                // `good` is exactly the prefix the decoder accepted
                let text = std::str::from_utf8(good).unwrap_or_default();
                rest = &tail[bad_len..];
                (text, &tail[..bad_len])
            }
        };
        for ch in text.chars() {
            if shown == MAX_PREVIEW {
                out.push('…');
                return out;
            }
            match ch {
                '\\' => out.push_str("\\\\"),
                c if c.is_control() => {
                    let _ = write!(&mut out, "\\x{:02X}", c as u32);
                }
                c => out.push(c),
            }
            shown += 1;
        }
        for byte in bad {
            if shown == MAX_PREVIEW {
                out.push('…');
                return out;
            }
            let _ = write!(&mut out, "\\x{:02X}", byte);
            shown += 1;
        }
        if bad.is_empty() {
            break;
        }
    }
    out
}
