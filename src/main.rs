use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schemagen::config::{Config, DEFAULT_CONFIG_FILE};
use schemagen::{parse_interchange, Dialect, ExportRequest, Exporter, MySqlIntrospector};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Settings file; optional unless given explicitly
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Introspect tables of a live database and generate code for them
    Export {
        /// Output dialect (sql, laravel-migration, laravel-model, prisma, typescript, go, zod, mermaid, json)
        #[arg(long, short)]
        target: Dialect,
        /// Database to read tables from; defaults to the config or the URL path
        #[arg(long)]
        database: Option<String>,
        /// Server URL; defaults to DATABASE_URL or the config file
        #[arg(long)]
        url: Option<String>,
        /// Path to write the generated code. Prints to stdout if not set.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Tables to export, in output order
        #[arg(required = true)]
        tables: Vec<String>,
    },
    /// Render a JSON interchange dump into another dialect
    Render {
        /// JSON file produced by `export --target json`
        #[arg(long)]
        input: PathBuf,
        #[arg(long, short)]
        target: Dialect,
        /// Path to write the generated code. Prints to stdout if not set.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the available output dialects
    Targets,
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let required = path.is_some();
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&path, required)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    Ok(config.apply_env())
}

fn write_output(out: Option<PathBuf>, text: &str) -> Result<()> {
    if let Some(path) = out {
        fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Wrote {}", path.display());
    } else {
        println!("{}", text);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("schemagen=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            target,
            database,
            url,
            out,
            tables,
        } => {
            let mut config = load_config(cli.config)?;
            if url.is_some() {
                config.database_url = url;
            }
            if database.is_some() {
                config.database = database;
            }
            let introspector = MySqlIntrospector::connect(config.database_url()?).await?;
            let exporter =
                Exporter::new(Arc::new(introspector)).with_options(config.render.clone());
            let request = ExportRequest::new(config.database_name()?, tables, target);
            let text = exporter.export(&request).await?;
            write_output(out, &text)?;
        }
        Commands::Render { input, target, out } => {
            let config = load_config(cli.config)?;
            let text = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let tables = parse_interchange(&text)?;
            write_output(out, &target.render_with(&tables, &config.render))?;
        }
        Commands::Targets => {
            for dialect in Dialect::ALL {
                println!("{:<18} .{}", dialect.name(), dialect.extension());
            }
        }
    }

    Ok(())
}
