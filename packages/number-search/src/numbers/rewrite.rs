//! Reassembly of a sentence with numerals substituted for spans.

use super::span::NumericSpan;

/// Render a value as a decimal numeral that always shows a fractional part.
///
/// Integral values get exactly one decimal ("121.0"), however large.
/// Fractional values keep every significant digit and never use exponent
/// notation. Non-finite values have no decimal form and render as `inf` or
/// `NaN`; the pipeline leaves such spans unrewritten.
///
/// # Examples
/// ```
/// use number_search::numbers::format_numeral;
///
/// assert_eq!(format_numeral(121.0), "121.0");
/// assert_eq!(format_numeral(12.5), "12.5");
/// assert_eq!(format_numeral(1e16), "10000000000000000.0");
/// ```
#[must_use]
pub fn format_numeral(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Replace each span's tokens with its numeral and join with single spaces.
///
/// `spans` must not overlap. Tokens outside every span are kept as they are.
pub fn rewrite_sentence(tokens: &[String], spans: &[(NumericSpan, f64)]) -> String {
    let mut slots: Vec<Option<String>> = tokens.iter().cloned().map(Some).collect();

    for (span, value) in spans {
        let Some(first) = slots.get_mut(span.start) else {
            continue;
        };
        *first = Some(format_numeral(*value));

        let tail_end = span.end.min(slots.len());
        for slot in slots.iter_mut().take(tail_end).skip(span.start + 1) {
            *slot = None;
        }
    }

    slots.into_iter().flatten().collect::<Vec<_>>().join(" ")
}
