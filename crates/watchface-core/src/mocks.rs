//! Mock implementations for testing
//!
//! Fakes for the display, the config storage and the watchface subsystem,
//! for use in unit tests and by downstream crates enabling the `mocks`
//! feature.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::ConfigStorage;
use crate::ui::core::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use crate::watchface::{InfoSink, WatchfaceControl};

/// Display that counts the pixels drawn onto it.
pub struct MockDisplay {
    size: Size,
    pixels_drawn: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            size: Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
            pixels_drawn: 0,
        }
    }

    /// Number of in-bounds pixels drawn since creation or the last reset
    pub fn pixels_drawn(&self) -> usize {
        self.pixels_drawn
    }

    pub fn reset(&mut self) {
        self.pixels_drawn = 0;
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTarget for MockDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let area = self.bounding_box();
        self.pixels_drawn += pixels
            .into_iter()
            .filter(|Pixel(point, _)| area.contains(*point))
            .count();
        Ok(())
    }
}

impl OriginDimensions for MockDisplay {
    fn size(&self) -> Size {
        self.size
    }
}

/// Error returned by [`MemoryStorage`] when failures are switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStorageError;

/// In-memory keyed blob storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: BTreeMap<String, Vec<u8>>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn blob(&self, key: &str) -> Option<&[u8]> {
        self.blobs.get(key).map(Vec::as_slice)
    }
}

impl ConfigStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn read(&mut self, key: &str, buf: &mut [u8]) -> Result<Option<usize>, Self::Error> {
        Ok(self.blobs.get(key).map(|blob| {
            let len = blob.len().min(buf.len());
            buf[..len].copy_from_slice(&blob[..len]);
            len
        }))
    }

    fn write(&mut self, key: &str, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MemoryStorageError);
        }
        self.blobs.insert(String::from(key), Vec::from(data));
        self.writes += 1;
        Ok(())
    }
}

/// One call made on a [`RecordingWatchface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchfaceCall {
    DefaultTheme,
    DecompressTheme,
    ReloadAndTest,
    SetAntialias(bool),
    EnableTileAfterWakeup(bool),
}

/// Watchface subsystem that records every call made on it.
///
/// Messages queued with [`RecordingWatchface::with_install_messages`] are
/// written to the info sink while a theme is being installed.
#[derive(Debug, Default)]
pub struct RecordingWatchface {
    calls: Vec<WatchfaceCall>,
    install_messages: Vec<String>,
}

impl RecordingWatchface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_install_messages(mut self, messages: &[&str]) -> Self {
        self.install_messages = messages.iter().map(|m| String::from(*m)).collect();
        self
    }

    pub fn calls(&self) -> &[WatchfaceCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl WatchfaceControl for RecordingWatchface {
    fn default_theme(&mut self, _info: &mut dyn InfoSink) {
        self.calls.push(WatchfaceCall::DefaultTheme);
    }

    fn decompress_theme(&mut self, info: &mut dyn InfoSink) {
        self.calls.push(WatchfaceCall::DecompressTheme);
        for message in &self.install_messages {
            info.set_info_label(message);
        }
    }

    fn reload_and_test(&mut self, _info: &mut dyn InfoSink) {
        self.calls.push(WatchfaceCall::ReloadAndTest);
    }

    fn set_antialias(&mut self, enabled: bool) {
        self.calls.push(WatchfaceCall::SetAntialias(enabled));
    }

    fn enable_tile_after_wakeup(&mut self, enabled: bool) {
        self.calls.push(WatchfaceCall::EnableTileAfterWakeup(enabled));
    }
}
