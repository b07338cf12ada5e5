use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use color_eyre::Result;
use domain::core::Directory;
use domain::event::{Outcome, UiEvent};
use domain::prompt::Prompter;
use domain::user::UserId;
use domain::view::DirectoryView;
use tracing::{debug, info};

use crate::page::HtmlPage;

pub const HELP: &str = "\
Commands:
  list                  show the user list
  select <id>           click a user in the list
  set <field> <value>   edit a form field (firstname, lastname, address, city, email, userID)
  view <symbol>         click a portfolio row's View action
  save                  click Save
  delete                click Delete
  render                write the page as HTML
  help                  show this help
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Select(UserId),
    Set { field: String, value: String },
    View(String),
    Save,
    Delete,
    Render,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    UnknownField(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty command"),
            ParseError::Unknown(cmd) => write!(f, "Unknown command '{cmd}', try 'help'"),
            ParseError::MissingArgument(arg) => write!(f, "Missing argument: {arg}"),
            ParseError::UnknownField(field) => write!(f, "Unknown form field '{field}'"),
        }
    }
}

impl std::error::Error for ParseError {}

const FORM_FIELDS: [&str; 6] = ["userID", "firstname", "lastname", "address", "city", "email"];

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "" => Err(ParseError::Empty),
            "list" | "ls" => Ok(Command::List),
            "select" => {
                if rest.is_empty() {
                    Err(ParseError::MissingArgument("id"))
                } else {
                    Ok(Command::Select(UserId::new(rest)))
                }
            }
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(field, value)| (field, value.trim()));
                if field.is_empty() {
                    return Err(ParseError::MissingArgument("field"));
                }
                if !FORM_FIELDS.contains(&field) {
                    return Err(ParseError::UnknownField(field.to_string()));
                }
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "view" => {
                if rest.is_empty() {
                    Err(ParseError::MissingArgument("symbol"))
                } else {
                    Ok(Command::View(rest.to_string()))
                }
            }
            "save" => Ok(Command::Save),
            "delete" => Ok(Command::Delete),
            "render" => Ok(Command::Render),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

/// Reads commands line by line and drives the directory with them.
pub struct Shell<P, R, W> {
    directory: Directory<HtmlPage, P>,
    input: R,
    output: W,
    render_path: PathBuf,
}

impl<P, R, W> Shell<P, R, W>
where
    P: Prompter,
    R: BufRead,
    W: Write,
{
    pub fn new(
        directory: Directory<HtmlPage, P>,
        input: R,
        output: W,
        render_path: PathBuf,
    ) -> Self {
        Self {
            directory,
            input,
            output,
            render_path,
        }
    }

    pub fn directory(&self) -> &Directory<HtmlPage, P> {
        &self.directory
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.directory.start();
        self.print_list()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(ParseError::Empty) => continue,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            self.execute(command)?;
        }

        info!("Shell finished");
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!("Executing {command:?}");
        match command {
            Command::List => self.print_list()?,
            Command::Select(id) => {
                if self.dispatch(UiEvent::UserClicked(id)) == Outcome::Applied {
                    self.print_form()?;
                    self.print_portfolio()?;
                }
            }
            Command::Set { field, value } => {
                self.directory.view_mut().form_mut().set_field(&field, value);
            }
            Command::View(symbol) => {
                self.dispatch(UiEvent::ViewStock(symbol));
                self.print_stock()?;
            }
            Command::Save => {
                if self.dispatch(UiEvent::Save) == Outcome::Applied {
                    self.print_list()?;
                }
            }
            Command::Delete => {
                if self.dispatch(UiEvent::Delete) == Outcome::Applied {
                    self.print_list()?;
                }
            }
            Command::Render => self.render()?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Dispatches `event`, then whatever the page raised while handling it.
    fn dispatch(&mut self, event: UiEvent) -> Outcome {
        let outcome = self.directory.dispatch(event);
        while let Some(follow_up) = self.directory.view_mut().next_event() {
            self.directory.dispatch(follow_up);
        }
        outcome
    }

    fn render(&mut self) -> Result<()> {
        let html = self.directory.view().render()?;
        if let Some(parent) = self.render_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.render_path, html)?;
        info!("Rendered page to {}", self.render_path.display());
        writeln!(self.output, "Page written to {}", self.render_path.display())?;
        Ok(())
    }

    fn print_list(&mut self) -> Result<()> {
        let page = self.directory.view();
        if page.users().is_empty() {
            writeln!(self.output, "(no users)")?;
        }
        for entry in page.users() {
            writeln!(self.output, "[{}] {}", entry.key, entry.label)?;
        }
        Ok(())
    }

    fn print_form(&mut self) -> Result<()> {
        let form = self.directory.view().form();
        writeln!(self.output, "userID:    {}", form.user_id)?;
        writeln!(self.output, "firstname: {}", form.firstname)?;
        writeln!(self.output, "lastname:  {}", form.lastname)?;
        writeln!(self.output, "address:   {}", form.address)?;
        writeln!(self.output, "city:      {}", form.city)?;
        writeln!(self.output, "email:     {}", form.email)?;
        Ok(())
    }

    fn print_portfolio(&mut self) -> Result<()> {
        let portfolio = self.directory.view().portfolio();
        let [symbol, shares, actions] = portfolio.header;
        writeln!(self.output, "{symbol:<8} {shares:>10} {actions}")?;
        for row in &portfolio.rows {
            writeln!(
                self.output,
                "{:<8} {:>10} {}",
                row.symbol, row.owned, row.action_label
            )?;
        }
        Ok(())
    }

    fn print_stock(&mut self) -> Result<()> {
        let page = self.directory.view();
        let stock = page.stock();
        writeln!(self.output, "name:     {}", stock.name)?;
        writeln!(self.output, "sector:   {}", stock.sector)?;
        writeln!(self.output, "industry: {}", stock.sub_industry)?;
        writeln!(self.output, "address:  {}", stock.address)?;
        writeln!(self.output, "logo:     {}", page.logo())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
