use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use folio_server::Facade;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio site backend: pages and a JSON API over one SQLite file")]
pub struct Cli {
    /// Path to config file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the page façade, the JSON API, or both
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Which façade(s) to expose
        #[arg(long, value_enum, default_value_t = FacadeArg::All)]
        facade: FacadeArg,
    },

    /// Create or migrate the database, then exit
    Init,

    /// Insert a user and print it as JSON
    AddUser {
        /// Username (at most 80 characters, unique)
        #[arg(required = true)]
        username: String,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FacadeArg {
    All,
    Pages,
    Api,
}

impl From<FacadeArg> for Facade {
    fn from(arg: FacadeArg) -> Self {
        match arg {
            FacadeArg::All => Facade::All,
            FacadeArg::Pages => Facade::Pages,
            FacadeArg::Api => Facade::Api,
        }
    }
}
