//! GraphQL schema, resolvers and HTTP endpoint for the gradebook.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at http://localhost:3000/graphql)
//! gradebook serve --port 3000
//!
//! # Execute a query from CLI
//! gradebook query '{ grades { grade course { name } student { name } } }'
//!
//! # Execute a mutation from CLI
//! gradebook mutate 'addCourse(name: "Art", description: "Drawing") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `students`, `courses`, `grades`, `student`, `course`, `grade`
//! - **Mutations**: `addStudent`, `addCourse`, `addGrade`, `deleteStudent`,
//!   `deletecourse`, `deletegrade`
//!
//! Lookups that find nothing resolve to `null` rather than an error.
//!
//! The three delete mutations return a `Deleted` object with only `id`, the
//! id that was requested. Selecting any other field on it (`name`,
//! `courseID`, ...) is a validation error, not a null.

mod schema;
mod server;
mod types;

pub use schema::{GradebookSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, create_app, run_server};
pub use types::*;
