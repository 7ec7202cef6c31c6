// SPDX-License-Identifier: MPL-2.0
//! `spin_lens` is a 360 degree product rotation viewer built with the Iced
//! GUI framework.
//!
//! It renders a directory of sequentially named frames as a draggable
//! turntable, with keyboard stepping, zoom and pan, autoplay, and fullscreen
//! presentation.

#![doc(html_root_url = "https://docs.rs/spin_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod frame_sequence;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
