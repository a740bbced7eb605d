/// Collapse every whitespace run (newlines, tabs, repeated spaces) into a
/// single space and trim the ends.
///
/// The result is only ever used for token counting; slicing always happens
/// against the original text. Idempotent: normalizing twice changes nothing.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
