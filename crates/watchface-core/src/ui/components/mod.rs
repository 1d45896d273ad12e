// src/ui/components/mod.rs
//! UI components library

pub mod button;
pub mod header;
pub mod switch;
pub mod text;

pub use button::Button;
pub use header::SettingsHeader;
pub use switch::LabeledSwitch;
pub use text::{TextComponent, TextSize};
