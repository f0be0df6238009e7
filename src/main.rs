use clap::Parser;
use miette::Result;
use bgpack::cli::{Cli, Commands};
use bgpack::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => bgpack::cli::build::run(args, &printer)?,
        Commands::Palette(args) => bgpack::cli::palette::run(args, &printer)?,
        Commands::List(args) => bgpack::cli::list::run(args, &printer)?,
        Commands::Validate(args) => bgpack::cli::validate::run(args, &printer)?,
        Commands::Init(args) => bgpack::cli::init::run(args, &printer)?,
        Commands::Completions(args) => bgpack::cli::completions::run(args)?,
    }

    Ok(())
}
