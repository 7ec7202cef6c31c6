// SPDX-License-Identifier: MPL-2.0
//! Decoding of frame stills into renderable image handles.
//!
//! A still that fails to decode becomes `LoadedFrame::Broken` instead of an
//! error: the slot keeps its position in the sequence so rotation stays
//! index-stable, and the pane renders a placeholder for it.

use crate::error::Result;
use crate::frame_sequence::FrameSequence;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// One decoded frame ready for rendering.
#[derive(Debug, Clone)]
pub struct FrameImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl FrameImage {
    /// Creates a `FrameImage` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// A slot in the mounted sequence: either a decoded frame or a placeholder
/// for a still that could not be decoded.
#[derive(Debug, Clone)]
pub enum LoadedFrame {
    Ready(FrameImage),
    Broken,
}

impl LoadedFrame {
    /// Returns the decoded frame, if this slot holds one.
    #[must_use]
    pub fn image(&self) -> Option<&FrameImage> {
        match self {
            LoadedFrame::Ready(image) => Some(image),
            LoadedFrame::Broken => None,
        }
    }
}

/// Decodes a single still into RGBA.
pub fn load_frame(path: &Path) -> Result<FrameImage> {
    let bytes = std::fs::read(path)?;
    let img = image_rs::load_from_memory(&bytes)?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(FrameImage::from_rgba(width, height, pixels))
}

/// Decodes every still of a sequence, keeping one slot per frame.
///
/// Decode failures are local: the failing slot becomes `Broken` and the
/// rest of the sequence is unaffected.
#[must_use]
pub fn load_sequence(sequence: &FrameSequence) -> Vec<LoadedFrame> {
    sequence
        .iter()
        .map(|path| match load_frame(path) {
            Ok(image) => LoadedFrame::Ready(image),
            Err(error) => {
                eprintln!("Failed to decode frame {}: {}", path.display(), error);
                LoadedFrame::Broken
            }
        })
        .collect()
}
