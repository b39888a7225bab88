use crate::graphql::{GRAPHQL_PATH, build_schema, create_app, run_server};
use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_serve(
    ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_graphiql: bool,
) -> Result<()> {
    let server = &ctx.config.server;
    let host = host.unwrap_or_else(|| server.host.clone());
    let port = port.unwrap_or(server.port);
    let graphiql = server.graphiql && !no_graphiql;

    let schema = build_schema(ctx.store()?);
    let app = create_app(schema, graphiql);

    println!("Starting GraphQL server on http://{}:{}{}", host, port, GRAPHQL_PATH);
    if graphiql {
        println!("GraphiQL: http://{}:{}{}", host, port, GRAPHQL_PATH);
    }

    tokio::runtime::Runtime::new()?.block_on(async {
        let listener = tokio::net::TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("Failed to bind {}:{}", host, port))?;
        run_server(listener, app).await?;
        Ok::<(), anyhow::Error>(())
    })
}
