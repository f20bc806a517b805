//! Detect command - report the broker handler owning a document.

use std::path::PathBuf;

use clap::Args;

use beleg_core::HandlerRegistry;

#[derive(Args)]
pub struct DetectArgs {
    /// Input document as page-segmented JSON
    #[arg(required = true)]
    input: PathBuf,
}

pub fn run(args: DetectArgs) -> anyhow::Result<()> {
    let document = super::load_document(&args.input)?;

    let matches = HandlerRegistry::standard().matches(&document);
    match matches.as_slice() {
        [] => anyhow::bail!("no handler recognizes this document"),
        [broker] => {
            println!("{broker}");
            Ok(())
        }
        many => {
            for broker in many {
                println!("{broker}");
            }
            anyhow::bail!("document is claimed by {} handlers", many.len())
        }
    }
}
