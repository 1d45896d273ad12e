//! Collaborators the setup screen delegates to
//!
//! The watchface subsystem (theme install, renderer, wakeup behaviour) lives
//! outside this crate. The setup screen only triggers its operations and
//! gives it an [`InfoSink`] through which it can show progress or failures
//! on the screen's status label.

use core::fmt::Write;

/// Receiver for status text shown on the setup screen's info label.
pub trait InfoSink {
    /// Show `text` verbatim and refresh the screen immediately.
    fn set_info_label(&mut self, text: &str);

    /// Show a completion percentage, clamped to `0..=100`.
    fn report_progress(&mut self, percent: i32) {
        let mut text = heapless::String::<8>::new();
        write!(&mut text, "{}%", percent.clamp(0, 100)).ok();
        self.set_info_label(&text);
    }
}

/// The watchface subsystem as seen from the setup screen.
///
/// None of these operations report failure to the caller. An implementation
/// that wants the user to see a problem writes it to the `info` sink.
pub trait WatchfaceControl {
    /// Restore the built-in default theme.
    fn default_theme(&mut self, info: &mut dyn InfoSink);

    /// Unpack and install the theme archive.
    fn decompress_theme(&mut self, info: &mut dyn InfoSink);

    /// Reload the current watchface and show it for testing.
    fn reload_and_test(&mut self, info: &mut dyn InfoSink);

    /// Switch anti-aliased rendering of the watchface tile.
    fn set_antialias(&mut self, enabled: bool);

    /// Choose whether the watchface tile is shown after wakeup.
    fn enable_tile_after_wakeup(&mut self, enabled: bool);
}
