mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod play;
mod render;
mod util;
mod warning;
use crate::app::App;
use crate::config::Settings;
use crate::warning::Warning;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match cli::Args::from_env() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("slither: {e}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        print!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }
    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    let (settings, trouble) = match Settings::resolve(&args) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("slither: {e}");
            return ExitCode::from(2);
        }
    };
    let warning = trouble.as_ref().map(Warning::from_error);
    let terminal = ratatui::init();
    let r = App::new(settings, warning).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
