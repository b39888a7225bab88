use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::IdPolicy;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL service for students, courses and grades"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .gradebook.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding courses.json, students.json and grades.json
    #[arg(long, global = true, env = "GRADEBOOK_SEED_DIR")]
    pub seed_dir: Option<PathBuf>,

    /// How ids are assigned to new records (overrides config)
    #[arg(long, global = true, value_enum)]
    pub id_policy: Option<IdPolicyArg>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not serve GraphiQL on GET requests
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a freshly seeded store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,

    /// Print the seed dataset as JSON
    Seed,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IdPolicyArg {
    /// Counter that never reuses an id
    Sequential,
    /// Table length + 1 (ids may repeat after deletes)
    Length,
}

impl From<IdPolicyArg> for IdPolicy {
    fn from(arg: IdPolicyArg) -> Self {
        match arg {
            IdPolicyArg::Sequential => IdPolicy::Sequential,
            IdPolicyArg::Length => IdPolicy::Length,
        }
    }
}
