use clap::{Parser, Subcommand};

mod cmd;
mod input;
mod ledger;
mod session;

/// VAT calculator: keep a list of priced items and their VAT-inclusive total
#[derive(Parser, Debug)]
#[command(name = "booker", version, about)]
struct Opts {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive item list (the default)
    Session(cmd::session::SessionCommand),
    /// Price a batch of items from a file and show the total
    Report(cmd::report::ReportCommand),
    /// Print the expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        None => cmd::session::SessionCommand::default().exec(),
        Some(Command::Session(session)) => session.exec(),
        Some(Command::Report(report)) => report.exec(),
        Some(Command::Schema(schema)) => schema.exec(),
    }
}
