// © 2025 <_@habnab.it>
//
// SPDX-License-Identifier: EUPL-1.2

/// Makes file text safe inside a JSON string literal.
///
/// Backslashes and double quotes get a backslash in front; line breaks
/// (`\n`, and the `\r` of `\r\n` or old Mac line endings) are dropped, so a
/// multi-line file becomes one line with nothing between the pieces. Each
/// input character is translated once, so the backslashes added for quotes
/// are never doubled again.
pub fn escape_contents(contents: &str) -> String {
    let mut escaped = String::with_capacity(contents.len());
    for ch in contents.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' | '\r' => (),
            ch => escaped.push(ch),
        }
    }
    escaped
}
