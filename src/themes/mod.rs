//! Theme system for color management
//!
//! Semantic color palettes keyed by the persisted theme mode.

pub mod theme;

pub use theme::Theme;
