//! # Gradebook - an in-memory GraphQL service for academic records
//!
//! Gradebook keeps students, courses and grades in process memory, seeded
//! from static JSON at startup, and exposes them through a single GraphQL
//! endpoint. Nothing is persisted; restarting the process restores the seed.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API (GraphiQL at http://localhost:3000/graphql)
//! gradebook serve
//!
//! # Run a one-off query against the seed data
//! gradebook query '{ students { name course { name } } }'
//!
//! # Print the schema
//! gradebook schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Records (Student, Course, Grade)
//! - [`storage`]: In-memory tables and seed data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.gradebook.yml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `GradebookError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP endpoint.
pub mod graphql;

pub mod logging;
pub mod model;

/// In-memory storage layer.
///
/// Owns the student, course and grade tables and the seed loader.
pub mod storage;
