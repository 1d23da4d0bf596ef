//! cellview binary: dispatches the parsed command against the remote
//! examiner and the process stdout.

use std::io;
use std::process;

use anyhow::Result;

use cellview::cli::{self, Command};
use cellview::examiner::RemoteExaminer;
use cellview::exit::SignalNotifier;
use cellview::{ui, viz};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("cellview: {err:#}");
        process::exit(2);
    }
}

fn run(args: &[String]) -> Result<()> {
    let config = cli::parse_args(args)?;
    let examiner = RemoteExaminer::new(config.examiner);
    let mut stdout = io::stdout();

    match config.command {
        Command::ListApps => ui::list_apps(&examiner, &mut stdout)?,
        Command::AppStatus { app_name } => ui::app_status(&examiner, &mut stdout, &app_name)?,
        Command::Visualize { rate } => {
            viz::visualize(&examiner, &mut stdout, rate, &SignalNotifier)?
        }
    }
    Ok(())
}
