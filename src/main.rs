use clap::Parser;
use log::debug;

use passgen::cli::{self, Args, prompts};
use passgen::{exits, terminal, tui};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args = Args::parse();
    cli::init_logging(args.verbose);

    let config = args.config();
    debug!("{config:?}");

    let result = tui::run(&config, args.choice);
    terminal::reset_terminal();

    if let Err(e) = result {
        prompts::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
