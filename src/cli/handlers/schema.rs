use crate::config::IdPolicy;
use crate::graphql::build_schema;
use crate::storage::{SharedStore, Store};
use anyhow::Result;

pub fn handle_schema() -> Result<()> {
    let schema = build_schema(SharedStore::new(Store::new(IdPolicy::default())));
    print!("{}", schema.sdl());
    Ok(())
}
