use clap::Parser;
use fixconv::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
