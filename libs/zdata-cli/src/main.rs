//! Z-Data Surface command line tool.
//!
//! Builds a surface mesh from a z(x,y) table and writes it as an OBJ file.
//!
//! ```text
//! zdata-surface terrain.txt                     # writes terrain.obj
//! zdata-surface terrain.txt --loop --flip -o ring.obj
//! zdata-surface --config surface.json --transpose
//! ```

mod obj;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::constants::{DEFAULT_LOG_LEVEL, OBJ_EXTENSION};
use obj::ObjSceneHost;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use zdata_mesh::{add_surface, SurfaceConfig};

/// Build a 3D surface from a z(x,y) data table
#[derive(Parser, Debug)]
#[command(name = "zdata-surface")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build a 3D surface mesh from a z(x,y) data table", long_about = None)]
struct Cli {
    /// Data file of z(x,y) (table text)
    file: Option<PathBuf>,

    /// Loop in the line direction
    #[arg(long = "loop")]
    closed: bool,

    /// Flip the normal vector of every face
    #[arg(long)]
    flip: bool,

    /// Switch x <-> y, same as transposing the matrix
    #[arg(long)]
    transpose: bool,

    /// Name of the created object
    #[arg(short, long)]
    name: Option<String>,

    /// Output OBJ file (defaults to the data file with an .obj extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON surface configuration; flags given here override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = parse_level(&cli.log_level)?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(&cli)?;
    let output = output_path(&cli, &config)?;

    let mut host = ObjSceneHost::new(output);
    match add_surface(&config, &mut host) {
        Ok(object) => {
            info!(
                name = %object.name,
                path = %object.path.display(),
                vertices = object.vertex_count,
                faces = object.face_count,
                "surface written"
            );
            Ok(())
        }
        Err(error) if error.is_empty_result() => {
            warn!("{}; nothing written", error);
            Ok(())
        }
        Err(error) => Err(error).with_context(|| {
            format!(
                "failed to build surface from '{}'",
                config.file_path.display()
            )
        }),
    }
}

fn parse_level(name: &str) -> Result<Level> {
    Ok(match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => bail!("unknown log level '{}' (expected trace, debug, info, warn or error)", other),
    })
}

/// Picks the OBJ path, refusing to write over the data file.
fn output_path(cli: &Cli, config: &SurfaceConfig) -> Result<PathBuf> {
    let output = match &cli.output {
        Some(path) => path.clone(),
        None => {
            let is_obj = config
                .file_path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(OBJ_EXTENSION));
            if is_obj {
                bail!(
                    "data file '{}' already has the .{} extension; pass --output",
                    config.file_path.display(),
                    OBJ_EXTENSION
                );
            }
            config.file_path.with_extension(OBJ_EXTENSION)
        }
    };

    if output == config.file_path {
        bail!("output '{}' would overwrite the data file", output.display());
    }
    Ok(output)
}

/// Merges the optional JSON configuration with the command line.
fn resolve_config(cli: &Cli) -> Result<SurfaceConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read config '{}'", path.display()))?;
            serde_json::from_str::<SurfaceConfig>(&text)
                .with_context(|| format!("invalid config '{}'", path.display()))?
        }
        None => SurfaceConfig::default(),
    };

    if let Some(file) = &cli.file {
        config.file_path = file.clone();
    }
    if let Some(name) = &cli.name {
        config.name = name.clone();
    }
    config.closed |= cli.closed;
    config.flip |= cli.flip;
    config.transpose |= cli.transpose;

    if config.file_path.as_os_str().is_empty() {
        bail!("no data file given (pass FILE or set file_path in --config)");
    }
    Ok(config)
}
