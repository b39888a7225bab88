mod mutate;
mod query;
mod schema;
mod seed;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use seed::handle_seed;
pub use serve::handle_serve;

use crate::config::GradebookConfig;
use crate::storage::{SeedData, SharedStore, Store};
use anyhow::{Context, Result};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GradebookConfig,
}

impl CommandContext {
    pub fn new(config: GradebookConfig) -> Self {
        Self { config }
    }

    pub fn seed(&self) -> Result<SeedData> {
        SeedData::load(self.config.store.seed_dir.as_deref()).context("Failed to load seed data")
    }

    /// A store populated from the configured seed data.
    pub fn store(&self) -> Result<SharedStore> {
        let store = Store::from_seed(self.seed()?, self.config.store.id_policy);
        Ok(SharedStore::new(store))
    }
}

pub(crate) fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}
