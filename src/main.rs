use anyhow::{Context, Result};
use clap::Parser;

use gradebook::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_seed, handle_serve,
};
use gradebook::cli::{Cli, Commands};
use gradebook::config::GradebookConfig;
use gradebook::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    let ctx = CommandContext::new(load_config(&cli)?);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handle_serve(ctx, host, port, no_graphiql),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Seed => handle_seed(ctx),
        Commands::Schema => handle_schema(),
    }
}

fn load_config(cli: &Cli) -> Result<GradebookConfig> {
    let mut config = match &cli.config {
        Some(path) => GradebookConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            GradebookConfig::discover(&cwd).context("Failed to load config")?
        }
    };

    if let Some(dir) = &cli.seed_dir {
        config.store.seed_dir = Some(dir.clone());
    }
    if let Some(policy) = cli.id_policy {
        config.store.id_policy = policy.into();
    }

    Ok(config)
}
