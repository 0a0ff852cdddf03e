use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculates the display width of a string in terminal columns.
///
/// Accented Latin text (the bulk of the catalog) is one column per character;
/// CJK and emoji count as two, combining marks as zero.
///
/// # Examples
///
/// ```
/// use jurisdata::util::display_width;
///
/// assert_eq!(display_width("Direito"), 7);
/// assert_eq!(display_width("Previdência"), 11);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Ellipsis appended to truncated cells
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncates a string to fit within `max_width` terminal columns.
///
/// Appends "..." when text is cut. Widths of three columns or less have no
/// room for an ellipsis, so as many characters as fit are returned instead.
/// Returns `Cow::Borrowed` whenever the input already fits.
///
/// # Examples
///
/// ```
/// use jurisdata::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Aluguel", 10), "Aluguel");
/// assert_eq!(truncate_to_width("Rescisão contratual", 11), "Rescisão...");
/// assert_eq!(truncate_to_width("Lei", 0), "");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let (budget, suffix) = if max_width <= ELLIPSIS_WIDTH {
        (max_width, "")
    } else {
        (max_width - ELLIPSIS_WIDTH, ELLIPSIS)
    };

    let mut used = 0;
    let mut cut = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut = idx + c.len_utf8();
    }

    Cow::Owned(format!("{}{}", &s[..cut], suffix))
}

/// Truncates to `width` columns and right-pads with spaces to exactly `width`.
///
/// Used for fixed-width table cells where `format!("{:<n}")` would miscount
/// multi-byte characters.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&cell));
    let mut out = String::with_capacity(cell.len() + pad);
    out.push_str(&cell);
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Lowercases a search needle once so it can be matched against many fields.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test against an already folded needle.
///
/// An empty needle matches every haystack.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    if folded_needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(folded_needle)
}
