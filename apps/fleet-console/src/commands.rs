//! Console command line parsing.

use fleet_core::domain::FormData;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  open <href>                    go to a page, e.g. open /vehicles?page=2
  submit <href> key=value ...    submit a form, quote values with spaces
  search <text>                  filter the inventory (back to page 1)
  page <n>                       show another page of the inventory
  back                           return to the previous page
  reload                         load the current page again
  help                           show this list
  quit                           leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(String),
    Submit { href: String, form: FormData },
    Search(String),
    Page(u32),
    Back,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("Not a page number: {0}")]
    InvalidPage(String),

    #[error("Expected key=value, got '{0}'")]
    InvalidField(String),

    #[error("Unterminated quote")]
    UnterminatedQuote,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let tokens = tokenize(line)?;
        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "open" | "go" => Command::Open(first(args, "open")?),
            "submit" => {
                let href = first(args, "submit")?;
                let mut form = FormData::new();
                for field in &args[1..] {
                    let (key, value) = field
                        .split_once('=')
                        .ok_or_else(|| CommandError::InvalidField(field.clone()))?;
                    form.insert(key, value);
                }
                Command::Submit { href, form }
            }
            "search" => Command::Search(args.join(" ")),
            "page" => {
                let raw = first(args, "page")?;
                let page = raw
                    .parse::<u32>()
                    .ok()
                    .filter(|p| *p > 0)
                    .ok_or(CommandError::InvalidPage(raw))?;
                Command::Page(page)
            }
            "back" => Command::Back,
            "reload" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn first(args: &[String], command: &'static str) -> Result<String, CommandError> {
    args.first()
        .cloned()
        .ok_or(CommandError::MissingArgument(command))
}

/// Split on whitespace; single or double quotes group words, anywhere in a
/// token (`name="Jane Doe"`).
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
