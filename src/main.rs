// SPDX-License-Identifier: MPL-2.0
use iced_quiz::app::{self, paths, Flags};

const HELP: &str = "\
IcedQuiz - a video player that stops to ask questions

USAGE:
  iced_quiz [OPTIONS] [VIDEO]

ARGS:
  <VIDEO>               Video file path or URL

OPTIONS:
  --lang <id>           Interface language (e.g. en-US, fr)
  --quiz <file>         TOML quiz file replacing the built-in questions
  --config-dir <dir>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    pretty_env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = optional_value(&mut args, "--lang");
    let quiz_path = optional_value(&mut args, "--quiz");
    let config_dir = optional_value(&mut args, "--config-dir");
    let video = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        video,
        quiz_path,
        config_dir,
    })
}

/// Reads `--key <value>`, logging and ignoring a malformed value.
fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring {key}: {err}");
            None
        }
    }
}
