use AmmoniaSynth::Utils::logger::init_logger;
use AmmoniaSynth::cli::cli_main::run_interactive_menu;
use simplelog::LevelFilter;
use std::path::Path;

pub fn main() {
    if let Err(e) = init_logger(LevelFilter::Info, Some(Path::new("ammonia_synth.log"))) {
        eprintln!("logging disabled: {}", e);
    }
    run_interactive_menu();
}
