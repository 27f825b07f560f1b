//! Check command - Verify stubs resolve and report unfilled tokens.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use stubform_core::store::names;
use stubform_core::{unresolved_tokens, FormDefinition};

use super::{load_model, GlobalArgs};

#[derive(Args)]
pub struct CheckArgs {
    /// Form definition to render as part of the check
    pub form: Option<PathBuf>,

    /// JSON model used when rendering the form
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Treat tokens left in the rendered form as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<()> {
    let renderer = global.renderer()?;
    let mut failures = 0usize;

    println!("Checking stubs...");
    for name in names::ALL {
        match renderer.store().get(name) {
            Ok(_) => println!("   ok       {}", name),
            Err(e) => {
                failures += 1;
                println!("   missing  {} ({})", name, e);
            }
        }
    }

    if let Some(form) = &args.form {
        info!("Rendering {:?} for token check", form);
        let definition = FormDefinition::load(form)
            .with_context(|| format!("Failed to load form definition {:?}", form))?;
        let model = load_model(args.model.as_deref())?;
        let markup = definition.render(&renderer, &model)?;

        let leftover = unresolved_tokens(&markup);
        if leftover.is_empty() {
            println!("All tokens filled in {:?}", form);
        } else {
            println!("Unfilled tokens in {:?}:", form);
            for token in &leftover {
                println!("   - {}", token);
            }
            if args.strict {
                failures += leftover.len();
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("Check failed with {} problem(s)", failures);
    }

    println!("Check passed");
    Ok(())
}
