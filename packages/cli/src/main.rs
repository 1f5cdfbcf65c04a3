use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;

use rtag_cli::config::{validate_port, Config, ConfigError};

#[derive(Parser)]
#[command(name = "rtag")]
#[command(about = "Review and tag REST service")]
#[command(version)]
struct Cli {
    /// Address to bind (overrides RTAG_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides RTAG_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// SQLite database file (overrides RTAG_DATABASE_PATH)
    #[arg(long)]
    database: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<Config, ConfigError> {
        let mut config = Config::from_env()?;

        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = validate_port(port)?;
        }
        if let Some(database) = self.database {
            config.database_path = database;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    rtag_cli::init_tracing();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = rtag_cli::run_server(config).await {
        error!("{:#}", e);
        process::exit(1);
    }
}
