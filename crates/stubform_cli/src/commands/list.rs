//! List command - Show the stub keys available.

use anyhow::Result;

use super::GlobalArgs;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    let renderer = global.renderer()?;
    for name in renderer.store().names()? {
        println!("{}", name);
    }
    Ok(())
}
