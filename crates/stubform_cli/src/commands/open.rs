//! Open command - Render the opening form markup.

use anyhow::Result;
use clap::Args;
use tracing::info;

use stubform_core::ExtraTokens;

use super::{parse_key_val, GlobalArgs};

#[derive(Args)]
pub struct OpenArgs {
    /// Token for the form-open stub, e.g. `action=/users` fills DUMMYACTION
    #[arg(short, long = "token", value_parser = parse_key_val)]
    pub tokens: Vec<(String, String)>,
}

pub fn execute(args: &OpenArgs, global: &GlobalArgs) -> Result<()> {
    info!("Rendering form open with {} token(s)", args.tokens.len());

    let renderer = global.renderer()?;
    let extra: ExtraTokens = args.tokens.iter().cloned().collect();
    print!("{}", renderer.open(&extra)?);

    Ok(())
}
