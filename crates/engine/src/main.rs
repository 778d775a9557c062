//! Charsmith - Main entry point.
//!
//! Loads configuration, builds the [`App`] and, when given a resource type
//! as the first argument (`races`, `classes`, ...), prints its resource list.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charsmith_domain::ResourceType;
use charsmith_engine::{App, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charsmith_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_base_url, storage = ?config.storage, "Starting Charsmith");

    let app = App::load(config).await.context("failed to start")?;

    let Some(arg) = std::env::args().nth(1) else {
        tracing::info!("No resource type given, nothing to list");
        return Ok(());
    };
    let resource_type: ResourceType = arg
        .parse()
        .with_context(|| format!("unknown resource type '{arg}'"))?;

    let resources = app.generic(resource_type).get_all().await?;
    for resource in &resources {
        let source = if resource.is_homebrew { "homebrew" } else { "srd" };
        println!("{:<32} {:<40} {}", resource.id, resource.name, source);
    }
    tracing::info!(count = resources.len(), %resource_type, "Listed resources");

    Ok(())
}

fn load_dotenv() {
    // The working directory wins over the repo root.
    let _ = dotenvy::dotenv();

    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
