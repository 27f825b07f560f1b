//! Render command - Render a whole form from a definition file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use stubform_core::FormDefinition;

use super::{load_model, GlobalArgs};

#[derive(Args)]
pub struct RenderArgs {
    /// Form definition (YAML or JSON)
    pub form: PathBuf,

    /// JSON file with the model the form is bound to
    #[arg(short, long)]
    pub model: Option<PathBuf>,
}

pub fn execute(args: &RenderArgs, global: &GlobalArgs) -> Result<()> {
    info!("Rendering form: {:?}", args.form);

    let renderer = global.renderer()?;
    let definition = FormDefinition::load(&args.form)
        .with_context(|| format!("Failed to load form definition {:?}", args.form))?;
    let model = load_model(args.model.as_deref())?;

    print!("{}", definition.render(&renderer, &model)?);
    Ok(())
}
