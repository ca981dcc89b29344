//! Measure - display-width arithmetic for terminal text.
//!
//! All widths are terminal cells, not bytes or chars: wide CJK glyphs count
//! as two cells, combining marks as zero. Wrapping is grapheme-aware and
//! greedy, preserving explicit newlines as hard breaks.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cells this string occupies on one line.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Wrap `text` into lines no wider than `width` cells.
///
/// Explicit newlines always break, so an empty source yields one empty
/// line and trailing newlines yield trailing empties. A grapheme wider
/// than `width` still lands alone on its own line rather than vanishing.
/// Width 0 disables wrapping and only honors the explicit breaks.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(String::from).collect();
    }

    let mut lines = Vec::new();
    for hard_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for grapheme in hard_line.graphemes(true) {
            let grapheme_width = display_width(grapheme);
            if current_width + grapheme_width > width && !current.is_empty() {
                lines.push(current);
                current = String::new();
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += grapheme_width;
        }
        lines.push(current);
    }
    lines
}

/// Longest prefix of `text` that fits in `max` cells.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = display_width(grapheme);
        if used + grapheme_width > max {
            break;
        }
        out.push_str(grapheme);
        used += grapheme_width;
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
