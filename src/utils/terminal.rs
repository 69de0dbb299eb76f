//! Terminal output sanitization
//!
//! Bookmark labels, links and raw fragments come from arbitrary export files. A crafted
//! title can carry ANSI escape sequences that clear the screen, move the cursor or recolor
//! the rest of the report, so the text report of the `scan` command passes every
//! file-derived string through [`strip_ansi_codes`]. The JSON report needs no extra care:
//! serde_json escapes control characters.

const ESC: char = '\x1b';

/// Strips ANSI escape sequences and control characters from a string
///
/// CSI sequences (`ESC [ params letter`) and OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`) are removed whole. Any other control character is dropped, except tab.
/// Newlines are dropped too: the report prints one bookmark per line.
///
/// # Examples
///
/// ```
/// use bookmark_harvest::utils::terminal::strip_ansi_codes;
///
/// let title = "\x1b[31mRed title\x1b[0m";
/// assert_eq!(strip_ansi_codes(title), "Red title");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}
