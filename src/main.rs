use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tally::LogLevel;
use tally::core::config::{self, CliOverrides};
use tally::core::controller::Controller;
use tally::core::model::CalculatorModel;
use tally::script::{ScriptView, run_script};
use tally::tui::{self, TerminalView};

#[derive(Parser)]
#[command(name = "tally", about = "Two-operand terminal calculator")]
struct Args {
    /// Press these keys without opening the terminal UI, then print the display
    #[arg(short, long)]
    keys: Option<String>,

    /// With --keys, print every display update instead of only the last
    #[arg(long, requires = "keys")]
    trace: bool,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Don't capture the mouse (keypad buttons can't be clicked)
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // The logger needs the resolved config, so loading is logged after init
    let (file_config, loaded) = match config::load_config() {
        Ok((c, outcome)) => (c, Ok(outcome)),
        Err(e) => {
            eprintln!("tally: {e}; using defaults");
            (config::TallyConfig::default(), Err(e))
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file.clone(),
            no_mouse: args.no_mouse,
        },
    );

    // Initialize file logger - the terminal UI owns stdout
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level.filter(), log_config, log_file);
    }

    log::info!("Tally starting up with {:?}", resolved);
    match loaded {
        Ok(outcome) => outcome.log(),
        Err(e) => log::warn!("Ignored config file: {}", e),
    }
    log::debug!("Config file values: {:?}", file_config);
    for note in &resolved.notes {
        log::warn!("{}", note);
    }

    match args.keys {
        Some(keys) => {
            let mut controller = Controller::new(CalculatorModel::new(), ScriptView::new());
            let display = run_script(&mut controller, &keys);
            if args.trace {
                for line in controller.view().transcript() {
                    println!("{line}");
                }
            } else {
                println!("{display}");
            }
            Ok(())
        }
        None => {
            let mut controller =
                Controller::new(CalculatorModel::new(), TerminalView::new(resolved.mouse));
            tui::run(&mut controller)
        }
    }
}
