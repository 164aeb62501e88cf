use anyhow::{Context, Result};
use axum::Router;
use og_meta::{
    Metadata,
    config::{self, Mode},
    routes,
    services::flatten_service::FlattenService,
};
use std::{
    fs,
    io::{self, ErrorKind, Read},
    path::Path,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // --- Parse config + run mode ---
    let (cfg, mode) = config::AppConfig::from_env_and_args()?;

    tracing::info!("Starting og-meta with config: {:?}", cfg);

    // --- Initialize core service ---
    let service = FlattenService::new(cfg.max_depth);

    // --- Handle one-shot render mode ---
    if let Mode::Render { input, raw, parent } = mode {
        render_once(&service, &input, raw, parent.as_deref())?;
        return Ok(()); // exit after rendering
    }

    // --- Build router ---
    let app: Router = routes::routes::routes().with_state(service);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Flatten a single document from a file (or stdin for `-`) and print the
/// pairs to stdout as a JSON array.
fn render_once(
    service: &FlattenService,
    input: &Path,
    raw: bool,
    parent: Option<&str>,
) -> Result<()> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading metadata from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("reading metadata file {}", input.display()))?
    };

    let pairs = if raw {
        let document: serde_json::Value =
            serde_json::from_str(&text).context("parsing JSON document")?;
        service.flatten_value(document, parent)?
    } else {
        let metadata: Metadata =
            serde_json::from_str(&text).context("parsing metadata object")?;
        service.render_metadata(&metadata)?
    };

    tracing::info!("Rendered {} properties from {}", pairs.len(), input.display());
    println!("{}", serde_json::to_string_pretty(&pairs)?);

    Ok(())
}
