//! Mojibake detection and repair.
//!
//! The common failure mode in harvested CSVs is text that was *encoded* as
//! UTF-8 but *decoded* as windows-1252, producing strings like
//! "CIAT PublicaÃ§ao". Such a string has a telltale shape: re-encoding it to
//! windows-1252 yields bytes that form valid UTF-8 and decode to different
//! (the intended) text. Plain accented text does not survive that
//! round-trip, so the test doubles as the "weirdness" measure: all-ASCII
//! strings and ordinary Latin text are never flagged.
//!
//! Curly quotes map to windows-1252 bytes that are not valid UTF-8
//! continuations on their own, so genuine smart-quoted text is left alone.

use encoding_rs::WINDOWS_1252;

/// Whether the string looks like UTF-8 that was mis-decoded as windows-1252.
pub fn is_mojibake(text: &str) -> bool {
    decode_once(text).is_some()
}

/// Recover the intended text from a mojibake string, or `None` when the
/// string does not exhibit the encode/decode mismatch.
pub fn repair_mojibake(text: &str) -> Option<String> {
    decode_once(text)
}

fn decode_once(text: &str) -> Option<String> {
    if text.is_ascii() {
        return None;
    }
    let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
    if had_errors {
        // Not representable in windows-1252, so it cannot have come from a
        // windows-1252 mis-decode.
        return None;
    }
    let decoded = std::str::from_utf8(&bytes).ok()?;
    if decoded == text {
        return None;
    }
    Some(decoded.to_string())
}
