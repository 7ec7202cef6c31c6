// SPDX-License-Identifier: MPL-2.0
//! Frame decoding for the viewer.

mod frame;

pub use frame::{load_frame, load_sequence, FrameImage, LoadedFrame};
