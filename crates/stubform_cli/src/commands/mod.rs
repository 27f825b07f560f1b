//! CLI command definitions.
//!
//! Each subcommand renders one stub (or a whole form) to stdout, so stub
//! authors can preview their templates without a web application.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::debug;

use stubform_core::{RendererConfig, StubFormRenderer};

pub mod check;
pub mod close;
pub mod list;
pub mod open;
pub mod render;
pub mod submit;
pub mod text;

/// stubform - render form markup from stub templates
#[derive(Parser)]
#[command(name = "stubform")]
#[command(version, about = "stubform - render form markup from stub templates")]
#[command(long_about = r#"
stubform fills form stubs (form-open, _csrf, text, submit, form-close) with
runtime values and prints the resulting markup.

COMMANDS:
  open    → form-open + CSRF markup
  close   → form-close markup
  text    → a text field, optionally valued from a JSON model
  submit  → a submit button
  render  → a whole form from a YAML/JSON definition
  list    → stub keys available
  check   → verify stubs and report unfilled tokens

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of published stubs overriding the built-in ones
    #[arg(short, long, global = true)]
    pub stubs: Option<PathBuf>,

    /// CSRF token injected into the open-form markup
    #[arg(long, global = true, env = "STUBFORM_CSRF_TOKEN", default_value = "")]
    pub csrf_token: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Effective configuration: file (if any), then command line overrides.
    pub fn config(&self) -> Result<RendererConfig> {
        let mut config = match &self.config {
            Some(path) => RendererConfig::load(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => RendererConfig::default(),
        };

        if let Some(stubs) = &self.stubs {
            config = config.stubs_dir(stubs.clone());
        }

        debug!("Effective config: {:?}", config);
        Ok(config)
    }

    pub fn renderer(&self) -> Result<StubFormRenderer> {
        let config = self.config()?;
        Ok(StubFormRenderer::from_config(&config, self.csrf_token.clone()))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the form-open stub followed by the CSRF stub
    Open(open::OpenArgs),

    /// Render the form-close stub
    Close,

    /// Render a text field
    Text(text::TextArgs),

    /// Render a submit button
    Submit(submit::SubmitArgs),

    /// Render a whole form from a definition file
    Render(render::RenderArgs),

    /// List available stub keys
    List,

    /// Verify stubs resolve and report unfilled tokens
    Check(check::CheckArgs),
}

/// Parse a `key=value` argument.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid argument `{}`: expected key=value", s))?;
    if key.is_empty() {
        return Err(format!("invalid argument `{}`: empty key", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Read a JSON model file; no file means no bound model.
pub fn load_model(path: Option<&Path>) -> Result<Value> {
    let Some(path) = path else {
        return Ok(Value::Null);
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model {:?}", path))?;
    let model = serde_json::from_str(&content)
        .with_context(|| format!("Model {:?} is not valid JSON", path))?;
    Ok(model)
}
