// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Base scale, meaning the image is shown unmagnified and drags rotate.
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Maximum magnification.
pub const MAX_ZOOM_SCALE: f32 = 4.0;

/// Multiplicative factor applied by one zoom in/out action.
pub const ZOOM_STEP_FACTOR: f32 = 1.5;

/// Whether zoom controls and gestures are offered by default.
pub const DEFAULT_ZOOM_ENABLED: bool = true;

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Horizontal drag distance, in logical pixels, that corresponds to one
/// full turn of the object. Drag units map 1:1 to degrees.
pub const FULL_ROTATION_DISTANCE: f32 = 360.0;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default interval between autoplay frame advances, in milliseconds.
pub const DEFAULT_ROTATION_SPEED_MS: u64 = 100;

/// Whether autoplay starts enabled by default.
pub const DEFAULT_AUTO_ROTATE: bool = false;
