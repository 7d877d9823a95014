//! Markup stripping for aggregated text.
//!
//! Searchable field values frequently hold rich-text markup; the search
//! index wants plain words. Single-pass scanners, no external parser: tags
//! are replaced by spaces first, then the common entities are decoded, then
//! whitespace runs collapse to single spaces.

/// Strip markup from aggregated text.
///
/// Tag removal happens before entity decoding, so `&lt;b&gt;` survives as
/// literal `<b>` text rather than being mistaken for a tag.
pub fn strip_markup(input: &str) -> String {
    let without_tags = strip_tags(input);
    let decoded = decode_entities(&without_tags);
    collapse_whitespace(&decoded)
}

/// Replace `<...>` tag runs with a single space so adjacent words stay
/// separated. An unterminated tag is dropped to end-of-input.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' if !in_tag => {
                in_tag = true;
                out.push(' ');
            }
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&nbsp;", ' '),
];

fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match entity_at(tail) {
            Some((decoded, len)) => {
                out.push(decoded);
                rest = &tail[len..];
            }
            None => {
                // Unknown entity, keep the ampersand literally
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn entity_at(s: &str) -> Option<(char, usize)> {
    ENTITIES
        .iter()
        .find(|(name, _)| s.starts_with(name))
        .map(|(name, decoded)| (*decoded, name.len()))
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
