mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use folio_core::config::Config;
use folio_server::Facade;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "folio=trace,folio_server=trace,folio_db=debug,folio_core=debug,tower_http=debug"
                .to_string()
        } else {
            "folio=debug,folio_server=debug,folio_db=info,folio_core=info,tower_http=info"
                .to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Serve { host, port, facade } => {
            let mut config = Config::load_or_default(cli.config.as_deref());
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(serve(config, facade.into()))
        }
        Commands::Init => init_database(cli.config.as_deref()),
        Commands::AddUser { username } => add_user(cli.config.as_deref(), &username),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("folio {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn serve(config: Config, facade: Facade) -> Result<()> {
    tracing::info!("Starting folio server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );
    folio_server::start(config, facade).await?;
    Ok(())
}

fn init_database(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let pool = folio_server::open_database(&config)?;
    let conn = folio_db::pool::get_conn(&pool)?;
    let users = folio_db::queries::users::count_users(&conn)?;
    let works = folio_db::queries::works::count_works(&conn)?;

    println!("Database ready: {}", config.server.db_path.display());
    println!("  Users: {users}");
    println!("  Works: {works}");

    let owner = config.portfolio.default_owner();
    if folio_db::queries::users::get_user(&conn, owner)?.is_none() {
        println!(
            "  Note: default owner {owner} does not exist yet; create it with `folio add-user <name>`"
        );
    }
    Ok(())
}

fn add_user(config_path: Option<&Path>, username: &str) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let pool = folio_server::open_database(&config)?;
    let conn = folio_db::pool::get_conn(&pool)?;

    if let Some(existing) = folio_db::queries::users::get_user_by_username(&conn, username)? {
        anyhow::bail!("User '{username}' already exists with id {}", existing.id);
    }

    let user = folio_db::queries::users::create_user(&conn, username)
        .with_context(|| format!("Failed to add user '{username}'"))?;
    tracing::info!(user_id = %user.id, "User added");

    let json = serde_json::json!({ "id": user.id, "username": user.username });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {}", p.display());
            let contents = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read {}", p.display()))?;
            Config::from_json(&contents)?
        }
        None => {
            println!("No config file specified, using defaults");
            Config::default()
        }
    };

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("✓ Configuration is valid");
    } else {
        for warning in &warnings {
            println!("⚠ {warning}");
        }
    }
    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  Database: {}", config.server.db_path.display());
    println!("  Auth enabled: {}", config.auth.enabled);
    println!("  Default owner: {}", config.portfolio.default_owner_id);
    println!("  Site title: {}", config.site.title);

    Ok(())
}
