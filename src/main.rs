use annoscope::{app, server};
use annoscope_core::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "annoscope", about = "Concept-set document search and catalog autocomplete")]
struct Cli {
    /// Config file to use instead of ~/.config/annoscope/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        /// Override `[server] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print autocomplete suggestions for INPUT as JSON.
    Complete {
        input: String,
        /// Override `[search] max_autocomplete`.
        #[arg(long)]
        cap: Option<usize>,
    },
    /// Print the documents annotated with every given concept as JSON.
    Search {
        #[arg(required = true)]
        uris: Vec<String>,
        /// Only count documents annotated with the exact concepts.
        #[arg(long)]
        direct: bool,
    },
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = Config::load(cli.config.as_deref())?;
    let search = app::build_search(&config)?;

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.server.bind.clone());
            let state = server::AppState::new(search, config.catalog.paths.clone());
            server::serve(state, &addr).await?;
        }
        Command::Complete { input, cap } => {
            let cap = cap.unwrap_or(search.max_autocomplete());
            let hits: Vec<server::HitBody> = search
                .autocomplete_capped(&input, cap)?
                .into_iter()
                .map(server::HitBody::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Command::Search { uris, direct: false } => {
            let found = search.search_documents(&uris).await?;
            println!("{}", serde_json::to_string_pretty(&server::SearchBody::from(found))?);
        }
        Command::Search { uris, direct: true } => {
            let found = search.search_documents_direct(&uris).await?;
            println!("{}", serde_json::to_string_pretty(&server::ArticleSearchBody::from(found))?);
        }
    }
    Ok(())
}
