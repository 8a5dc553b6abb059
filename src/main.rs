// SPDX-License-Identifier: MPL-2.0
use booking_prompt::app::{self, Flags};
use booking_prompt::config::paths;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
booking-prompt

USAGE:
  booking_prompt [OPTIONS]

OPTIONS:
  --lang <LOCALE>         UI language, e.g. en-US or fr
  --server <URL>          Booking server base URL
  --csrf-token <TOKEN>    Anti-forgery token sent with availability checks
  --config-dir <DIR>      Directory holding settings.toml
  -h, --help              Print this help

ENVIRONMENT:
  RUST_LOG                   Log filter (default: booking_prompt=info)
  BOOKING_PROMPT_CONFIG_DIR  Config directory when --config-dir is absent
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_prompt=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        server: args.opt_value_from_str("--server")?,
        csrf_token: args.opt_value_from_str("--csrf-token")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
