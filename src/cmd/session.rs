//! Session command - interactive item list on stdin/stdout

use crate::ledger::{format_total, LedgerError};
use crate::session::Session;
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Default)]
pub struct SessionCommand {
    /// Do not print the "> " prompt (useful when piping commands in)
    #[arg(long)]
    no_prompt: bool,
}

/// One line typed at the session prompt
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
struct Line {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Add an item: add <price> <name...> [--no-vat]
    Add {
        /// Base price in GBP excluding VAT
        #[arg(allow_negative_numbers = true)]
        price: String,
        /// Item name (may be several words)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// The item does not carry VAT
        #[arg(long)]
        no_vat: bool,
    },
    /// Remove the item at a list position
    #[command(visible_alias = "remove")]
    Rm { position: usize },
    /// Show the item list
    List,
    /// Show the running total
    Total,
    /// Print the share/export text
    Export,
    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

impl SessionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run(stdin.lock(), stdout.lock(), !self.no_prompt)
    }
}

/// Drive a session from `input` until `quit` or end of input
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, prompt: bool) -> anyhow::Result<()> {
    let mut session = Session::new();
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let action = match Line::try_parse_from(words) {
            Ok(parsed) => parsed.action,
            Err(e) => {
                write!(out, "{}", e)?;
                continue;
            }
        };

        match action {
            Action::Add {
                price,
                name,
                no_vat,
            } => match session.submit(&name.join(" "), &price, !no_vat) {
                Ok(_) => render(&session, &mut out)?,
                Err(e) => writeln!(out, "Not added: {}", e)?,
            },
            Action::Rm { position } => match session.remove(position) {
                Ok(item) => {
                    log::info!("Removed {}", item.name());
                    render(&session, &mut out)?
                }
                Err(LedgerError::IndexOutOfRange { len, .. }) => {
                    log::warn!("Stale position {} (list has {} items)", position, len);
                    writeln!(out, "No item at position {}", position)?
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Action::List => render(&session, &mut out)?,
            Action::Total => match session.total() {
                Some(total) => writeln!(out, "{}", format_total(total))?,
                None => writeln!(out, "No items")?,
            },
            Action::Export => match session.export() {
                Some(text) => writeln!(out, "{}", text)?,
                None => writeln!(out, "Nothing to export")?,
            },
            Action::Quit => break,
        }
    }

    log::debug!("Session ended with {} items", session.ledger().len());
    Ok(())
}

fn render<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let Some(total) = session.total() else {
        return writeln!(out, "No items");
    };
    for row in session.rows() {
        writeln!(out, "{}", row.line)?;
    }
    writeln!(out, "{}", format_total(total))
}
