//! # deskbot CLI Application
//!
//! Command-line entry point for the support chatbot.
//!
//! ## Subcommands
//!
//! - `serve`: HTTP service plus the nightly topic refresh
//! - `ask`: answer one message and exit
//! - `crawl`: discover the site's topic pages and print them
//!
//! Settings come from the environment (and a `.env` file if present); flags
//! given on the command line take precedence.

mod telemetry;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use deskbot::cache::PageCache;
use deskbot::config::{Settings, parse_site_url};
use deskbot::router::ChatRouter;
use deskbot::scheduler::RefreshScheduler;
use deskbot::server::{AppState, build_app};
use deskbot::variants::Variant;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};
use url::Url;

#[derive(Parser)]
#[command(author, version, about = "Rule-based web support chatbot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the chat HTTP service
    Serve(ServeArgs),

    /// Answer a single message
    Ask(AskArgs),

    /// Crawl the site once and print the topic pages found
    Crawl(CrawlArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Deployment variant (overrides CHATBOT_VARIANT)
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// Address to listen on (overrides BIND_ADDR)
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[derive(Args, Debug)]
struct AskArgs {
    /// Message to answer
    #[arg(required = true)]
    message: String,

    /// Deployment variant (overrides CHATBOT_VARIANT)
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,
}

#[derive(Args, Debug)]
struct CrawlArgs {
    /// Deployment variant (overrides CHATBOT_VARIANT)
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// Site to crawl (overrides COMPANY_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Output format (text|json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let settings = Settings::from_env().context("Invalid configuration")?;

    let _otel = telemetry::init_tracing_subscriber(
        settings.log_dir.as_deref(),
        settings.otlp_endpoint.as_deref(),
    )?;

    match cli.command {
        Some(Commands::Serve(args)) => serve_command(settings, args).await?,
        Some(Commands::Ask(args)) => ask_command(settings, args).await?,
        Some(Commands::Crawl(args)) => crawl_command(settings, args).await?,
        None => {
            // If no command is provided, show help
            let _ = Cli::parse_from(["deskbot", "--help"]);
        }
    }

    Ok(())
}

fn apply_variant(settings: Settings, variant: Option<Variant>) -> Settings {
    match variant {
        Some(variant) => settings.with_variant(variant),
        None => settings,
    }
}

#[instrument(skip(settings))]
async fn serve_command(settings: Settings, args: ServeArgs) -> anyhow::Result<()> {
    let mut settings = apply_variant(settings, args.variant);
    if let Some(bind) = args.bind {
        settings = settings.with_bind_addr(bind);
    }

    let cache = Arc::new(PageCache::new());
    let chat = ChatRouter::from_settings(&settings, Arc::clone(&cache))?;
    let scheduler = RefreshScheduler::new(
        chat.resolver().crawler().clone(),
        cache,
        settings.base_url.clone(),
    );
    let app = build_app(AppState::new(chat, scheduler.handle()));

    let shutdown = CancellationToken::new();
    let scheduler_task = tokio::spawn(scheduler.run(shutdown.clone()));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.bind_addr))?;
    info!(
        variant = %settings.variant,
        base_url = %settings.base_url,
        local_testing = settings.local_testing,
        "Listening on {}",
        settings.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await
        .context("Server error")?;

    shutdown.cancel();
    scheduler_task.await.context("Refresh scheduler panicked")?;
    info!("Server stopped");

    Ok(())
}

#[instrument(skip(settings))]
async fn ask_command(settings: Settings, args: AskArgs) -> anyhow::Result<()> {
    let settings = apply_variant(settings, args.variant);
    let chat = ChatRouter::from_settings(&settings, Arc::new(PageCache::new()))?;

    println!("{}", chat.reply(&args.message).await);
    Ok(())
}

#[instrument(skip(settings))]
async fn crawl_command(settings: Settings, args: CrawlArgs) -> anyhow::Result<()> {
    let mut settings = apply_variant(settings, args.variant);
    if let Some(raw) = args.url.as_deref() {
        let url: Url = parse_site_url("--url", raw)?;
        settings = settings.with_base_url(url);
    }

    eprintln!("Crawling {}...", settings.base_url);

    let chat = ChatRouter::from_settings(&settings, Arc::new(PageCache::new()))?;
    let crawler = chat.resolver().crawler();
    let (pages, crawled) = match crawler.try_crawl(&settings.base_url).await {
        Ok(pages) => (pages, true),
        Err(e) => {
            eprintln!("Crawl failed ({}); showing default pages", e);
            (crawler.fallback(), false)
        }
    };

    match args.format.as_str() {
        "json" => {
            let json_response = serde_json::json!({
                "base_url": settings.base_url,
                "crawled": crawled,
                "topics": pages,
            });
            println!("{}", serde_json::to_string_pretty(&json_response)?);
        }
        _ => {
            println!("Found {} topic pages", pages.len());
            for (topic, url) in pages.iter() {
                println!("{:<12} {}", topic.as_str(), url);
            }
        }
    }

    Ok(())
}
