//! Hardware-independent core library for the watchface setup screen
//!
//! This crate contains the platform-agnostic pieces of the watch GUI's
//! watchface setup tile: a small embedded-graphics UI toolkit, the page
//! system, the setup page itself, config persistence and the traits through
//! which the screen delegates to the watchface subsystem.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod app;
pub mod config;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod pages;
pub mod ui;
pub mod watchface;

pub use app::{SetupApp, SetupError};
pub use config::{ConfigError, ConfigStorage, WatchfaceConfig, WatchfaceConfigStore};
pub use watchface::{InfoSink, WatchfaceControl};
