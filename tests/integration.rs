// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks across config persistence, sequence mounting, and
//! option resolution.

use spin_lens::app::{resolve_options, Flags};
use spin_lens::config::{self, Config};
use spin_lens::frame_sequence::FrameSequence;
use std::fs;
use tempfile::tempdir;

#[test]
fn persisted_config_drives_resolved_options() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let written = Config {
        auto_rotate: Some(true),
        rotation_speed_ms: Some(80),
        zoom_enabled: Some(false),
    };
    config::save_to_path(&written, &path).expect("failed to write config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let options = resolve_options(&Flags::default(), &loaded);

    assert!(options.auto_rotate);
    assert_eq!(options.speed.millis(), 80);
    assert!(!options.zoom_enabled);
}

#[test]
fn mounted_directory_yields_a_sorted_sequence() {
    let dir = tempdir().expect("failed to create temporary directory");
    for name in ["frame_010.png", "frame_002.jpg", "frame_001.png", "notes.txt"] {
        fs::write(dir.path().join(name), b"stub").expect("failed to write file");
    }

    let sequence = FrameSequence::from_directory(dir.path()).expect("mount failed");

    let names: Vec<_> = sequence
        .iter()
        .map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();
    assert_eq!(
        names,
        [
            Some("frame_001.png".to_string()),
            Some("frame_002.jpg".to_string()),
            Some("frame_010.png".to_string()),
        ]
    );
}

#[test]
fn empty_directory_mounts_as_an_empty_sequence() {
    let dir = tempdir().expect("failed to create temporary directory");

    let sequence = FrameSequence::from_directory(dir.path()).expect("mount failed");
    assert!(sequence.is_empty());
    assert_eq!(sequence.len(), 0);
}

#[test]
fn mounting_a_file_path_is_an_error() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file = dir.path().join("frame_001.png");
    fs::write(&file, b"stub").expect("failed to write file");

    assert!(FrameSequence::from_directory(&file).is_err());
}

#[test]
fn command_line_speed_wins_over_persisted_config() {
    let config = Config {
        rotation_speed_ms: Some(500),
        ..Config::default()
    };
    let flags = Flags {
        speed_ms: Some(25),
        ..Flags::default()
    };

    assert_eq!(resolve_options(&flags, &config).speed.millis(), 25);
}
