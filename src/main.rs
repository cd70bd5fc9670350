// SPDX-License-Identifier: MPL-2.0
use astro_lens::app::{self, Flags};

const HELP: &str = "\
AstroLens - random astronomy picture viewer

USAGE:
  astro_lens [OPTIONS]

OPTIONS:
  --api-key <KEY>  NASA API key (defaults to DEMO_KEY)
  -h, --help       Print help information
  -V, --version    Print version information
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    if args.contains(["-V", "--version"]) {
        println!("astro_lens {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let api_key = match args.opt_value_from_str("--api-key") {
        Ok(value) => value,
        Err(error) => {
            eprintln!("Error: {error}.");
            std::process::exit(1);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unrecognized arguments: {remaining:?}");
    }

    app::run(Flags { api_key })
}
