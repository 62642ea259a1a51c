// SPDX-License-Identifier: MPL-2.0
use iced_snack::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedSnack - stacked snack notifications demo

USAGE:
  iced_snack [OPTIONS]

OPTIONS:
  --anchor <v-h>        Screen anchor, e.g. top-right or bottom-center
  --max-snack <n>       Number of snacks on screen at once
  --hide-icons          Hide variant icons
  --config-dir <path>   Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_snack=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        anchor: args.opt_value_from_str("--anchor").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --anchor");
            None
        }),
        max_snack: args.opt_value_from_str("--max-snack").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --max-snack");
            None
        }),
        hide_icons: args.contains("--hide-icons"),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}
