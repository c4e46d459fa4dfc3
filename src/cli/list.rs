//! List command implementation.
//!
//! Prints the sprite catalog grouped by category without drawing anything.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::sprites::{catalog, floor};
use crate::types::Category;

/// List every sprite the generator writes
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show pixel dimensions next to each name
    #[arg(long)]
    pub sizes: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let sprites = catalog(floor::DEFAULT_SEED);

    for category in Category::ALL {
        let entries: Vec<String> = sprites
            .iter()
            .filter(|s| s.category == category)
            .map(|s| {
                if args.sizes {
                    let (w, h) = s.size();
                    format!("{} {}", s.name, printer.dim(&format!("{}x{}", w, h)))
                } else {
                    s.name.to_string()
                }
            })
            .collect();

        if entries.is_empty() {
            continue;
        }
        printer.info(category.dir_name(), &entries.join(", "));
    }

    printer.info("Total", &plural(sprites.len(), "sprite", "sprites"));
    Ok(())
}
