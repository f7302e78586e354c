use crate::utils::colors::*;
use std::env;

pub fn show_help() {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "linksmart".to_string());
    println!(
        "{}{}linksmart - local-first URL shortening tool{}",
        BOLD, MAGENTA, RESET
    );
    println!();
    println!("{}Usage:{}", BOLD, RESET);
    println!(
        "  {}{}{} help                         # show help",
        CYAN, program_name, RESET
    );
    println!();
    println!("{}Link management:{}", BOLD, RESET);
    println!(
        "  {}{}{} add <target URL> [--alias <alias>] [--tag <tag>]...   # add short link",
        CYAN, program_name, RESET
    );
    println!(
        "  {}{}{} list                         # list all short links",
        CYAN, program_name, RESET
    );
    println!(
        "  {}{}{} rename <alias> <new alias>   # rename a short link",
        CYAN, program_name, RESET
    );
    println!(
        "  {}{}{} remove <alias>               # remove short link",
        CYAN, program_name, RESET
    );
    println!(
        "  {}{}{} clear                        # remove all short links",
        CYAN, program_name, RESET
    );
    println!();
    println!("{}Resolution & analytics:{}", BOLD, RESET);
    println!(
        "  {}{}{} resolve <address|alias>      # resolve and record a click",
        CYAN, program_name, RESET
    );
    println!(
        "  {}{}{} stats [<alias>]              # dashboard totals or per-link history",
        CYAN, program_name, RESET
    );
    println!();
    println!("{}Environment:{}", BOLD, RESET);
    println!("  LINKS_FILE            data file path (default linksmart_data_v1.json)");
    println!("  STORAGE_BACKEND       file | memory (default file)");
    println!("  BASE_URL              base address printed in short links");
    println!("  RANDOM_CODE_LENGTH    generated alias length (default 6)");
}
