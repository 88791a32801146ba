// © 2025 <_@habnab.it>
//
// SPDX-License-Identifier: EUPL-1.2

/// Renders already-escaped entries as a flat JSON object.
///
/// Keys are uppercased. Entries after the first start on a new line:
/// `{"FOO": "a",\n"BAR": "b"}`. No trailing newline.
pub fn render<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::from("{");
    let mut first = true;
    for (name, escaped) in entries {
        if first {
            first = false;
        } else {
            out.push_str(",\n");
        }
        out.push('"');
        out.push_str(&name.to_uppercase());
        out.push_str("\": \"");
        out.push_str(escaped);
        out.push('"');
    }
    out.push('}');
    out
}
