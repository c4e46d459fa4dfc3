use cauldron_sprites::cli::{Cli, Commands};
use cauldron_sprites::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::ConvertFloor(args) => {
            cauldron_sprites::cli::convert::run(args, &printer)?;
        }
        Commands::GenerateSprites(args) => {
            cauldron_sprites::cli::generate::run(args, &printer)?;
        }
        Commands::List(args) => cauldron_sprites::cli::list::run(args, &printer)?,
        Commands::Completions(args) => cauldron_sprites::cli::completions::run(args)?,
    }

    Ok(())
}
