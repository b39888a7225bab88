use crate::graphql::build_schema;
use anyhow::Result;

use super::{CommandContext, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.store()?);
    let vars = parse_variables(variables)?;

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
