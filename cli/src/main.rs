mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.to_config();
    if !cfg.has_targets() {
        CommandLine::print_usage()?;
        return Ok(ExitCode::SUCCESS);
    }

    print::banner(commands.quiet);
    check::check(&cfg, commands.quiet).await
}
