//! Positional placeholder rendering for translated templates.
//!
//! Templates use `{0}`, `{1}`, … mapped to successive arguments; `{{` and
//! `}}` are literal brace escapes. Any other brace sequence (unmatched,
//! empty, non-numeric, or carrying alignment/conversion specifiers) is
//! malformed.

use std::fmt::Display;

use crate::error::Error;

/// Renders `template`, substituting each `{n}` with `args[n]`.
///
/// Fails when a placeholder index has no matching argument or the braces are
/// malformed. A lookup made without arguments returns the stored template
/// verbatim and never reaches this function.
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String, Error> {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                out.push_str(&template[literal_start..i]);

                // Escaped brace
                if i + 1 < bytes.len() && bytes[i + 1] == b'{' {
                    out.push('{');
                    i += 2;
                    literal_start = i;
                    continue;
                }

                let start = i + 1;
                let mut j = start;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                if j == start || j == bytes.len() || bytes[j] != b'}' {
                    return Err(Error::malformed_template(format!(
                        "malformed placeholder in `{template}`"
                    )));
                }

                let index = template[start..j].parse::<usize>().map_err(|_| {
                    Error::malformed_template(format!("malformed placeholder in `{template}`"))
                })?;
                match args.get(index) {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => return Err(Error::placeholder_out_of_range(index, args.len())),
                }

                i = j + 1;
                literal_start = i;
            }
            b'}' => {
                out.push_str(&template[literal_start..i]);

                if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                    out.push('}');
                    i += 2;
                    literal_start = i;
                    continue;
                }

                return Err(Error::malformed_template(format!(
                    "unmatched `}}` in `{template}`"
                )));
            }
            _ => i += 1,
        }
    }

    out.push_str(&template[literal_start..]);
    Ok(out)
}
