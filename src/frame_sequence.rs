// SPDX-License-Identifier: MPL-2.0
//! Ordered, immutable sequence of frame stills for one capture.
//!
//! The sequence is the rotation order: frame `i` shows the object at the
//! `i`-th captured angle. It is supplied once when the viewer is mounted and
//! never reordered or mutated afterwards; the viewer only ever indexes into
//! it. Producing the stills (the capture/asset pipeline) is someone else's
//! job and happens before this crate is involved.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File extensions accepted when scanning a directory for frames.
const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "bmp"];

/// Ordered list of frame references for one 360° capture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameSequence {
    frames: Vec<PathBuf>,
}

impl FrameSequence {
    /// Creates a sequence from an already-ordered list of frame paths.
    ///
    /// The caller's order is preserved verbatim; it is the rotation order.
    #[must_use]
    pub fn new(frames: Vec<PathBuf>) -> Self {
        Self { frames }
    }

    /// Scans a directory for supported image files and builds a sequence in
    /// alphabetical filename order.
    ///
    /// Returns an error if the directory cannot be read. An empty directory
    /// yields an empty sequence, not an error; the viewer renders its empty
    /// state for it.
    pub fn from_directory(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(Error::Sequence(format!(
                "not a directory: {}",
                directory.display()
            )));
        }

        let mut frames = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_supported_frame(&path) {
                frames.push(path);
            }
        }

        frames.sort();

        Ok(Self { frames })
    }

    /// Returns the number of frames in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Checks whether the sequence has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the path of the frame at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.frames.get(index).map(|p| p.as_path())
    }

    /// Iterates over the frame paths in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.frames.iter().map(|p| p.as_path())
    }
}

fn is_supported_frame(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
