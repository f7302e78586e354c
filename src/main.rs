use dotenvy::dotenv;
use std::env;

use linksmart::cli;
use linksmart::config;
use linksmart::logging;

fn main() {
    dotenv().ok();

    config::init_config();
    let _guard = logging::init_logging(config::get_config());

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        cli::commands::show_help();
        return;
    }

    cli::run_cli();
}
