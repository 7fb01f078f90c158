use crate::backend::FontSpec;
use crate::error::RenderError;
use crate::measure::TextMeasurer;

/// Wrap `text` into lines no wider than `max_width`.
///
/// Tokenizes on whitespace and greedily fills each line: a token joins the
/// current line while the measured width of `current + " " + token` stays
/// within `max_width`. A single token wider than `max_width` sits alone on
/// its own line; there is no character-level splitting. Empty or
/// all-whitespace input yields exactly one empty line so callers can always
/// reserve at least one line's height.
pub fn wrap_text<M>(
    measurer: &mut M,
    text: &str,
    font: &FontSpec,
    max_width: f32,
) -> Result<Vec<String>, RenderError>
where
    M: TextMeasurer + ?Sized,
{
    if max_width <= 0.0 {
        return Err(RenderError::InvalidLayout {
            what: "wrap width",
            value: max_width,
        });
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for token in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(token);
            continue;
        }
        let candidate = format!("{current} {token}");
        if measurer.measure(&candidate, font)? <= max_width {
            current = candidate;
        } else {
            lines.push(core::mem::take(&mut current));
            current.push_str(token);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}
