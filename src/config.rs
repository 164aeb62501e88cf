use crate::services::flatten_service::DEFAULT_MAX_DEPTH;
use anyhow::{Context, Result};
use clap::Parser;
use std::{env, path::PathBuf};

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_depth: usize,
}

/// What the binary should do after configuration is resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Run the HTTP server.
    Serve,
    /// Flatten one document, print the pairs as JSON and exit.
    Render {
        input: PathBuf,
        raw: bool,
        parent: Option<String>,
    },
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Flattens Open Graph metadata into meta tag pairs")]
pub struct Args {
    /// Host to bind to (overrides OG_META_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides OG_META_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Maximum nesting depth accepted (overrides OG_META_MAX_DEPTH)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Render this metadata file ("-" for stdin) and exit instead of serving
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Treat the input as an untyped document rather than a typed metadata object
    #[arg(long, requires = "input")]
    pub raw: bool,

    /// Path prefix for raw documents
    #[arg(long, requires = "raw")]
    pub parent: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and run mode.
    pub fn from_env_and_args() -> Result<(Self, Mode)> {
        let args = Args::parse();
        Self::resolve(args, |key| env::var(key))
    }

    /// Merge parsed args over values from `lookup`; CLI wins.
    pub fn resolve<F>(args: Args, lookup: F) -> Result<(Self, Mode)>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // --- Environment fallback ---
        let env_host = lookup("OG_META_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = parse_var(&lookup, "OG_META_PORT", 3000u16)?;
        let env_depth = parse_var(&lookup, "OG_META_MAX_DEPTH", DEFAULT_MAX_DEPTH)?;

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            max_depth: args.max_depth.unwrap_or(env_depth),
        };

        let mode = match args.input {
            Some(input) => Mode::Render {
                input,
                raw: args.raw,
                parent: args.parent,
            },
            None => Mode::Serve,
        };

        Ok((cfg, mode))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("parsing {} value `{}`", key, value)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {}", key)),
    }
}
