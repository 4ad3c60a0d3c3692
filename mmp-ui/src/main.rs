mod input;
mod runtime;
mod terminal;
mod widget;

use std::fs::File;

use terminal::TerminalBackend;

const DEFAULT_PLAYER: &str = "Living Room";

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mmp")
        .join("mmp.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path).or_else(|_| File::create("/tmp/mmp.log")) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("mmp: logging disabled, cannot create log file: {}", e);
            return;
        }
    };

    if let Err(e) = WriteLogger::init(log_level, Config::default(), log_file) {
        eprintln!("mmp: logging disabled: {}", e);
        return;
    }

    log::info!("mmp starting (log level: {:?})", log_level);
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    let player_name = args
        .iter()
        .position(|a| a == "--player")
        .and_then(|i| args.get(i + 1).cloned())
        .unwrap_or_else(|| DEFAULT_PLAYER.to_string());

    let mut backend = TerminalBackend::new()?;
    backend.start()?;
    let result = runtime::run(&mut backend, &player_name);
    backend.stop()?;

    if let Err(e) = &result {
        log::error!("runtime error: {}", e);
    }
    result
}
