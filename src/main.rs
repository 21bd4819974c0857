use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::{api, config::Config, service::TodoService};

#[derive(Parser)]
#[command(name = "todo-api")]
#[command(about = "File-backed REST API for a personal todo list")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port for HTTP API
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON file holding the todos
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the stored todos
    List {
        /// JSON file holding the todos
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Initialize tracing to stdout, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "todo_api=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let todos = TodoService::open(&config.data_file);
    let count = todos.init().await?;

    let app = api::create_router_with_cors(todos, config.cors_origins.as_deref());

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(
        "Todo API listening on http://{} (data file: {}, {} todos)",
        listener.local_addr()?,
        config.data_file.display(),
        count
    );

    axum::serve(listener, app).await?;
    Ok(())
}

async fn list(config: Config) -> anyhow::Result<()> {
    let todos = TodoService::open(&config.data_file).list().await?;

    if todos.is_empty() {
        println!("No todos in {}", config.data_file.display());
        return Ok(());
    }

    for todo in todos {
        let mark = if todo.completed { "x" } else { " " };
        println!(
            "[{}] {:>4}  {}  ({})",
            mark,
            todo.id,
            todo.title,
            todo.create_time
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::from_env();

    match cli.command {
        Some(Commands::Serve { host, port, file }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(file) = file {
                config.data_file = file;
            }
            serve(config).await?;
        }
        Some(Commands::List { file }) => {
            if let Some(file) = file {
                config.data_file = file;
            }
            list(config).await?;
        }
        None => serve(config).await?,
    }

    Ok(())
}
