use super::boundary::find_separator;
use super::SPLIT_TOLERANCE;

/// Carve `input` into exactly `parts` ordered slices that concatenate back
/// to `input` with no character lost, added, or reordered.
///
/// Cuts aim for natural boundaries: a tolerance window around the ideal cut
/// point is probed for a sentence end, comma, or space outside any link.
/// The ideal length is computed once from the full input, so later parts
/// absorb whatever drift the earlier cuts introduced.
///
/// `parts == 1` returns the input unchanged. When the input is shorter than
/// `parts`, the trailing slices come back empty.
pub fn segment(input: &str, parts: usize) -> Vec<String> {
    if parts <= 1 {
        return vec![input.to_string()];
    }

    let ideal = input.len() / parts;
    let mut result = Vec::with_capacity(parts);
    let mut remaining = input;

    while result.len() < parts - 1 {
        let end = next_cut(remaining, ideal);
        result.push(remaining[..end].to_string());
        remaining = &remaining[end..];
    }

    // Last part takes whatever is left, no further search
    result.push(remaining.to_string());

    result
}

/// Byte length of the next part of `remaining`, separator included
fn next_cut(remaining: &str, ideal: usize) -> usize {
    if remaining.is_empty() {
        return 0;
    }

    // Walk backward from the ideal cut, probing the tolerance window around
    // each position until some window holds a usable separator
    let mut split_index = ideal.min(remaining.len());
    while split_index > 0 {
        let lo = floor_boundary(remaining, split_index.saturating_sub(SPLIT_TOLERANCE));
        let hi = floor_boundary(
            remaining,
            (split_index + SPLIT_TOLERANCE).min(remaining.len()),
        );

        if let Some(sep) = find_separator(&remaining[lo..hi]) {
            if let Some(offset) = remaining[lo..].find(sep.as_char()) {
                return lo + offset + 1;
            }
        }

        split_index -= 1;
    }

    // No window near the ideal held a separator; settle for the last
    // occurrence anywhere before the ideal
    let cap = ceil_boundary(remaining, (ideal + 1).min(remaining.len()));
    if let Some(sep) = find_separator(remaining) {
        if let Some(index) = remaining[..cap].rfind(sep.as_char()) {
            return index + 1;
        }
    }

    // Hard cut at the ideal length, nothing to align on
    cap
}

/// Largest char boundary at or below `index`
fn floor_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest char boundary at or above `index`
fn ceil_boundary(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
