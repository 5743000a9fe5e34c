//! UI Constants
//!
//! Centralized constants for layout, paging and the eyes overlay.

use crate::domain::{EyePair, EyeSpec};

/// Rows per table page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1440.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Table row height in pixels
pub const TABLE_ROW_HEIGHT: f32 = 40.0;

/// Detail panel width in pixels
pub const DETAIL_PANEL_WIDTH: f32 = 320.0;

/// Character avatar edge length in the detail panel
pub const AVATAR_SIZE: f32 = 200.0;

/// Duration of the detail panel highlight after a click
pub const CLICK_ANIMATION_MS: u64 = 500;

/// Pupil diameter relative to the eye
pub const PUPIL_RATIO: f32 = 0.4;

/// Rick's eyes
pub const RICK_EYES: EyePair = EyePair {
    left: EyeSpec::new(185.0, 360.0, 30.0, 11.0),
    right: EyeSpec::new(272.0, 338.0, 30.0, 11.0),
};

/// Morty's eyes
pub const MORTY_EYES: EyePair = EyePair {
    left: EyeSpec::new(1260.0, 430.0, 30.0, 11.0),
    right: EyeSpec::new(1350.0, 430.0, 45.0, 11.0),
};
