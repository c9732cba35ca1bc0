//! HTTP server command for the bookmarks API
//!
//! Picks a storage backend, then runs the server until Ctrl+C/SIGTERM.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::sync::Arc;

use bookmarks_server::db::{create_pool_with_options, schema, DEFAULT_MAX_CONNECTIONS};
use bookmarks_server::{
    run_server, BookmarkService, BookmarkStore, MemoryBookmarkStore, PgBookmarkStore,
    ServerConfig,
};

/// Where bookmarks are persisted
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL (requires DATABASE_URL)
    Postgres,
    /// Process memory; lost on exit
    Memory,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BOOKMARKS_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Storage backend
    #[arg(long, value_enum, env = "BOOKMARKS_STORE", default_value = "postgres")]
    pub store: StoreBackend,

    /// Database URL (postgres backend only)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Bearer token required on bookmark routes (unset = no auth)
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Path prefix for bookmark routes
    #[arg(long, env = "BOOKMARKS_API_PREFIX", default_value = "/api")]
    pub api_prefix: String,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store = open_store(&args).await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        api_prefix: args.api_prefix,
        api_token: args.api_token.filter(|token| !token.is_empty()),
    };

    tracing::info!("Starting bookmarks server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(BookmarkService::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}

async fn open_store(args: &ServeArgs) -> Result<Arc<dyn BookmarkStore>> {
    match args.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store - bookmarks are lost on shutdown");
            Ok(Arc::new(MemoryBookmarkStore::new()))
        }
        StoreBackend::Postgres => {
            let database_url = args
                .database_url
                .as_deref()
                .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

            let pool = create_pool_with_options(database_url, args.max_connections)
                .await
                .context("Failed to create database pool")?;

            schema::ensure(&pool)
                .await
                .context("Failed to create bookmarks table")?;

            Ok(Arc::new(PgBookmarkStore::new(pool)))
        }
    }
}
