//! Placeholder substitution over template text.

use crate::domain::VariableMap;

/// Delimiter surrounding a placeholder name, as in `%local_interface%`.
const DELIMITER: char = '%';

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Substitute `%name%` placeholder tokens in `template` with values from
/// `variables`.
///
/// The template is scanned left to right in a single pass:
///
/// - every occurrence of a token whose name is in the mapping is replaced by
///   its value;
/// - a token whose name is not in the mapping is emitted verbatim, and its
///   closing `%` may open the token that follows it;
/// - mapping keys with no matching token are silently ignored;
/// - anything that does not form a token (a stray `%`, an unterminated or
///   empty name) is treated as literal text, never an error.
///
/// Substituted values are inserted verbatim and never re-scanned, so values
/// containing `%name%` sequences do not trigger further expansion. The
/// function has no side effects and never fails; with an empty mapping it
/// returns the input unchanged.
pub fn translate(template: &str, variables: &VariableMap) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(DELIMITER) {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let name_len =
            after_open.find(|c: char| !is_name_char(c)).unwrap_or(after_open.len());
        let name = &after_open[..name_len];
        let terminated = after_open[name_len..].starts_with(DELIMITER);

        if terminated && !name.is_empty() {
            if let Some(value) = variables.get(name) {
                output.push_str(value);
                rest = &after_open[name_len + 1..];
                continue;
            }
        }

        // Not a recognized token: emit it literally and resume scanning at
        // whatever ended the name, so a terminating '%' can still open the
        // next token.
        output.push(DELIMITER);
        output.push_str(name);
        rest = &after_open[name_len..];
    }

    output.push_str(rest);
    output
}
