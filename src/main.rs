//! pathparams - a guided tour of path parameters with generated OpenAPI docs

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use pathparams::api::{self, ApiDoc};
use pathparams::config::Config;
use pathparams::types::ModelName;

#[derive(Parser)]
#[command(name = "pathparams")]
#[command(about = "A guided tour of path parameters: typed, enumerated and catch-all routes")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the route table in registration order
    Routes,

    /// Show the message returned for a model (alexnet, resnet, lenet)
    Model {
        /// Model name
        name: ModelName,
    },

    /// Print the OpenAPI document
    Openapi {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment
    let _ = dotenvy::dotenv();

    let mut config = Config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_filter = if cli.verbose {
        "pathparams=debug,tower_http=debug".to_string()
    } else {
        config.log_filter.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            config.validate()?;

            let addrs = config.socket_addrs()?;
            let router = api::create_router(&config);

            let listener = tokio::net::TcpListener::bind(addrs.as_slice()).await?;
            let addr = listener.local_addr()?;

            tracing::info!(
                "Starting HTTP server on {} with {} routes",
                addr,
                api::route_table().len()
            );

            println!("pathparams server running at http://{}", addr);
            if config.docs.enabled {
                println!("  API Docs: http://{}{}", addr, config.docs.ui_path);
                println!("  OpenAPI:  http://{}{}", addr, config.docs.spec_path);
            }

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("Server stopped");
        }

        Commands::Routes => {
            for (i, route) in api::route_table().iter().enumerate() {
                println!(
                    "{}. {:<6} {:<24} {}",
                    i + 1,
                    route.method,
                    route.path,
                    route.operation
                );
            }
        }

        Commands::Model { name } => {
            println!("{}: {}", name, name.message());
        }

        Commands::Openapi { pretty } => {
            let doc = ApiDoc::openapi();
            let json = if pretty {
                doc.to_pretty_json()?
            } else {
                doc.to_json()?
            };
            println!("{}", json);
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
