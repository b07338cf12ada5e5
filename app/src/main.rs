mod config;
mod logging;
mod page;
mod shell;
mod templates;

use std::io;

use color_eyre::Result;
use domain::core::Directory;
use domain::data;
use domain::prompt::{Prompter, ScriptedPrompter, TerminalPrompter, stdin_lines};

use crate::config::Cli;
use crate::page::HtmlPage;
use crate::shell::Shell;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::load();

    // Initialize logging
    logging::init()?;
    tracing::info!("Starting directory browser");
    tracing::debug!("Configuration: {cli:#?}");

    let users = data::load_users(&cli.users)?;
    let stocks = data::load_stocks(&cli.stocks)?;

    let prompter: Box<dyn Prompter> = if cli.assume_yes {
        Box::new(ScriptedPrompter::always(true))
    } else {
        Box::new(TerminalPrompter::stdio())
    };

    let directory = Directory::new(users, stocks, HtmlPage::new(&cli.assets), prompter);
    let mut shell = Shell::new(directory, stdin_lines(), io::stdout(), cli.output_path());
    shell.run()?;
    tracing::info!(
        "Session ended with {} users",
        shell.directory().users().len()
    );

    Ok(())
}
