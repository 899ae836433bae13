use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todz")]
#[command(about = "A tiny, file-backed todo list", long_about = None)]
// The built-in help subcommand is replaced by an explicit variant so the
// catch-all below only ever sees genuinely unknown commands.
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    Add {
        /// The todo text (remaining arguments are joined with spaces)
        text: Vec<String>,
    },

    /// List all todos
    List,

    /// Mark a todo as done
    Done {
        /// Id of the todo
        id: String,
    },

    /// Delete a todo
    Delete {
        /// Id of the todo
        id: String,
    },

    /// Delete all todos
    Clear,

    /// Show this help message
    Help,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
