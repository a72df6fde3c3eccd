use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

// @module: Diacritic and punctuation stripping for subtitle text

/// Strip diacritical marks and sentence punctuation from a subtitle text line.
///
/// The input is canonically decomposed (NFD) so that accented letters become
/// a base letter followed by combining marks, every nonspacing mark is
/// dropped, and finally all `,` and `.` characters are removed. Characters
/// with no decomposition pass through unchanged, so ASCII whitespace and
/// line terminators are preserved exactly.
///
/// The transform is pure and idempotent; it accepts any string, including
/// the empty string.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_nonspacing_mark(*c))
        .filter(|c| *c != ',' && *c != '.')
        .collect()
}

// @checks: Unicode general category "Mark, nonspacing" (Mn)
fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}
