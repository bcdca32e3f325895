use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use gitweb::app;
use gitweb::error::Error;
use gitweb::exec::SystemRunner;

#[derive(Parser)]
#[command(name = "gitweb")]
#[command(about = "Open the current git repository's remote in your browser", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let stdin = io::stdin();
    match app::run(&SystemRunner, stdin.lock(), io::stdout()) {
        Err(Error::NoRemotes) => {
            println!("no remote is found");
            process::exit(2);
        }
        result => Ok(result?),
    }
}
