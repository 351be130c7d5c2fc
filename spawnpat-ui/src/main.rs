mod args;
mod driver;

use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use spawnpat_core::action::{Action, ClipboardAction, DispatchResult, SimulationAction, StatusLevel};
use spawnpat_core::config::Config;
use spawnpat_core::dispatch::LocalDispatcher;
use spawnpat_core::state::AppState;
use spawnpat_types::Dispatcher;

use args::{Args, PatternSource, USAGE};
use driver::RunOptions;

fn init_logging(verbose: bool) {
    use simplelog::{LevelFilter, WriteLogger};

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("spawnpat")
        .join("spawnpat.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path).or_else(|_| File::create("/tmp/spawnpat.log")) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("spawnpat: logging disabled, cannot create log file: {}", e);
            return;
        }
    };

    if let Err(e) = WriteLogger::init(log_level, simplelog::Config::default(), log_file) {
        eprintln!("spawnpat: logging disabled: {}", e);
        return;
    }

    log::info!("spawnpat starting (log level: {:?})", log_level);
}

fn read_pattern_text(source: &PatternSource) -> io::Result<String> {
    match source {
        PatternSource::Inline(text) => Ok(text.clone()),
        PatternSource::Stdin => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Print status lines to stderr. Returns false if any was a warning.
fn report(result: &DispatchResult) -> bool {
    let mut ok = true;
    for event in &result.status {
        match event.level {
            StatusLevel::Info => eprintln!("{}", event.message),
            StatusLevel::Warning => {
                eprintln!("warning: {}", event.message);
                ok = false;
            }
        }
    }
    ok
}

fn run(args: Args) -> ExitCode {
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut state = AppState::from_config(&config);

    let text = match read_pattern_text(&args.pattern) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("spawnpat: cannot read pattern: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut dispatcher = LocalDispatcher::new(&mut state);

    if let Some(gravity) = args.gravity {
        let result = dispatcher.dispatch(&Action::Simulation(SimulationAction::SetGravity(gravity)));
        if !report(&result) {
            return ExitCode::FAILURE;
        }
    }

    let pasted = dispatcher.dispatch(&Action::Clipboard(ClipboardAction::Paste(text)));
    let loaded = report(&pasted) && pasted.editor_fields.is_some();
    if !loaded {
        return ExitCode::FAILURE;
    }

    if args.copy {
        let copied = dispatcher.dispatch(&Action::Clipboard(ClipboardAction::Copy));
        if let Some(text) = copied.clipboard {
            println!("{}", text);
        }
        return ExitCode::SUCCESS;
    }

    let opts = RunOptions {
        duration: args.duration.unwrap_or_else(|| driver::default_duration(&state)),
        frame_rate: args.fps.unwrap_or_else(|| config.frame_rate()),
        json: args.json,
        realtime: args.realtime,
    };
    let stdout = io::stdout();
    match driver::run(&mut state, &opts, &mut stdout.lock()) {
        Ok(summary) => {
            if summary.emitters_skipped > 0 {
                eprintln!(
                    "warning: {} spawn position(s) had no emitter",
                    summary.emitters_skipped
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("output failed: {}", e);
            eprintln!("spawnpat: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = match args::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("spawnpat: {}", msg);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);
    run(args)
}
