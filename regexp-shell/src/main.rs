use std::io;

use clap::Parser;
use log::{debug, LevelFilter};

mod shell;

use shell::Shell;

#[derive(clap::Parser, Debug)]
#[command(
    name = "regexp-shell",
    about = "Compile regular expressions, export their automata and match strings"
)]
struct Cli {
    /// Do not print the banner and the command menu.
    #[arg(short = 'd', long)]
    quiet: bool,

    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level_filter())
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), cli.quiet);
    shell.run()?;
    debug!("leaving with expression {:?}", shell.regex().as_str());
    Ok(())
}
