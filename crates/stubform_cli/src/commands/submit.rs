//! Submit command - Render a submit button.

use anyhow::Result;
use clap::Args;

use super::GlobalArgs;

#[derive(Args)]
pub struct SubmitArgs {
    /// Button text (defaults to the configured text, "Save")
    pub text: Option<String>,
}

pub fn execute(args: &SubmitArgs, global: &GlobalArgs) -> Result<()> {
    let renderer = global.renderer()?;
    let markup = match &args.text {
        Some(text) => renderer.submit(text)?,
        None => renderer.submit_default()?,
    };
    print!("{}", markup);
    Ok(())
}
