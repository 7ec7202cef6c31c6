// SPDX-License-Identifier: MPL-2.0

use spin_lens::app::{self, Flags};
use spin_lens::ui::viewer::subcomponents::autoplay::RotationSpeed;
use std::path::PathBuf;

const HELP: &str = "\
spin_lens - 360 degree product rotation viewer

USAGE:
  spin_lens [OPTIONS] [DIRECTORY]

ARGS:
  DIRECTORY       Directory holding the rotation frames

OPTIONS:
  --speed <MS>    Autoplay interval in milliseconds
  --auto-rotate   Start spinning as soon as the frames load
  --no-zoom       Disable zoom controls and gestures
  -h, --help      Print this help
";

fn main() -> iced::Result {
    let flags = match parse_args() {
        Ok(flags) => flags,
        Err(message) => {
            eprintln!("{message}");
            eprintln!();
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_args() -> Result<Flags, String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let speed_ms: Option<u64> = args
        .opt_value_from_str("--speed")
        .map_err(|err| format!("invalid --speed value: {err}"))?;
    if let Some(ms) = speed_ms {
        RotationSpeed::new(ms).map_err(|err| err.to_string())?;
    }

    let auto_rotate = args.contains("--auto-rotate");
    let no_zoom = args.contains("--no-zoom");

    let directory = args.finish().into_iter().next().map(PathBuf::from);

    Ok(Flags {
        directory,
        speed_ms,
        auto_rotate,
        no_zoom,
    })
}
