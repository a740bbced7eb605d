use super::IDLE_LABEL;

/// What the injected controls need from a host input surface.
///
/// A browser shell implements this over the page DOM; tests implement it
/// over plain structs. The planning core never touches the host directly.
pub trait Surface {
    /// Current draft text in the input box
    fn draft(&self) -> String;

    /// Replace the draft text
    fn set_draft(&mut self, text: &str);

    /// Relabel the send control
    fn set_send_label(&mut self, label: &str);

    /// Allow or block activation of the send control
    fn set_send_enabled(&mut self, enabled: bool);

    /// Render the live token counter, `warn` set when over budget
    fn set_counter(&mut self, text: &str, warn: bool);

    /// Whether the injected control is already present
    fn has_control(&self) -> bool;

    /// Create the injected control and counter elements
    fn install_control(&mut self);
}

/// Re-assert the injected control after a host change notification.
///
/// Hosts rebuild their input area on navigation, so callers wire this to
/// whatever change event the host offers. Re-entry while the control is
/// still present is a no-op.
pub fn ensure_control<S: Surface>(surface: &mut S) {
    if surface.has_control() {
        return;
    }
    surface.install_control();
    surface.set_send_label(IDLE_LABEL);
    surface.set_send_enabled(true);
    surface.set_counter("0 tokens", false);
}
