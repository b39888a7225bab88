//! In-memory storage layer for the gradebook.
//!
//! All records live in process memory and are lost on restart. A [`Store`]
//! owns one [`Table`] per entity kind; the GraphQL layer reaches it through a
//! cloneable [`SharedStore`] handle.
//!
//! ## Components
//!
//! - [`Repository`]: list/get/create/delete contract shared by all tables
//! - [`Table`]: ordered sequence of one entity kind with id assignment
//! - [`Store`]: the three tables plus cross-table operations (cascades)
//! - [`SeedData`]: initial records, embedded or read from a directory

mod seed;
mod store;
mod table;

pub use seed::SeedData;
pub use store::{SharedStore, Store, StudentRemoval};
pub use table::{Repository, Table};
