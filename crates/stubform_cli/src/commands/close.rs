//! Close command - Render the closing form markup.

use anyhow::Result;

use super::GlobalArgs;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    let renderer = global.renderer()?;
    print!("{}", renderer.close()?);
    Ok(())
}
