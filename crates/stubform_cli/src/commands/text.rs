//! Text command - Render a text field.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use stubform_core::{Attributes, TextField};

use super::{load_model, parse_key_val, GlobalArgs};

#[derive(Args)]
pub struct TextArgs {
    /// Field name (also the model field the value is read from)
    pub name: String,

    /// Label text
    #[arg(short, long, default_value = "")]
    pub label: String,

    /// Attribute as key=value; repeat for more
    #[arg(short, long = "attr", value_parser = parse_key_val)]
    pub attrs: Vec<(String, String)>,

    /// JSON file with the model to read the value from
    #[arg(short, long)]
    pub model: Option<PathBuf>,
}

pub fn execute(args: &TextArgs, global: &GlobalArgs) -> Result<()> {
    info!("Rendering text field: {}", args.name);

    let renderer = global.renderer()?;
    let model = load_model(args.model.as_deref())?;
    let attributes: Attributes = args.attrs.iter().cloned().collect();
    let field = TextField::new(args.name.as_str())
        .label(args.label.as_str())
        .attributes(attributes);

    print!("{}", renderer.text(&field, &model)?);
    Ok(())
}
