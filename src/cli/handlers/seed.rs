use anyhow::Result;

use super::CommandContext;

pub fn handle_seed(ctx: CommandContext) -> Result<()> {
    let seed = ctx.seed()?;
    println!("{}", serde_json::to_string_pretty(&seed)?);
    Ok(())
}
