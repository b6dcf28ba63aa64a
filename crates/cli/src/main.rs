use anyhow::{anyhow, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};
use trigrid::{
    Coordinate, CoordinatesRequest, GridAddress, GridValueRequest,
    ShapeConfig, ShapeKind,
};
use validator::Validate;

/// CLI for converting between triangle grid addresses and coordinates.
#[derive(Debug, StructOpt)]
#[structopt(name = "trigrid")]
struct Opt {
    /// Path to a config file that defines the grid and shape. Supported
    /// formats: JSON, TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Length of one side of a grid cell. Overrides the config file
    #[structopt(short = "s", long)]
    cell_size: Option<i32>,

    /// The kind of shape to compute. Only `triangle` is supported, other
    /// kinds are rejected. Overrides the config file
    #[structopt(long)]
    shape: Option<ShapeKind>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Calculate the vertices of the shape at a grid address
    Coordinates {
        /// Grid address label, e.g. `A2` for row 1, column 2
        address: GridAddress,
    },

    /// Calculate the grid address of a shape from its vertices
    Address {
        /// Vertices as `x,y`, in role order: top left, outer, bottom right
        #[structopt(required = true)]
        vertices: Vec<Coordinate>,
    },

    /// Process a JSON request body from a file. The grid and shape come from
    /// the request itself, so `--config`, `--cell-size` and `--shape` are
    /// ignored
    Request {
        /// Path to the JSON request
        path: PathBuf,

        /// Which kind of request the file holds
        #[structopt(short, long, default_value = "coordinates")]
        kind: RequestKind,
    },
}

/// The different request bodies that can be loaded from a file
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
enum RequestKind {
    Coordinates,
    GridValue,
}

fn load_config(config_path: &Path) -> anyhow::Result<ShapeConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Build the final config from the config file (if any), then apply CLI
/// overrides on top
fn build_config(opt: &Opt) -> anyhow::Result<ShapeConfig> {
    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => ShapeConfig::default(),
    };
    if let Some(cell_size) = opt.cell_size {
        config.grid.cell_size = cell_size;
    }
    if let Some(shape) = opt.shape {
        config.shape = shape;
    }
    config.validate().context("invalid config")?;
    Ok(config)
}

/// Process a request body loaded from a file, returning the JSON response
fn process_request_file(
    path: &Path,
    kind: RequestKind,
) -> anyhow::Result<String> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("error reading request file {:?}", path))?;
    info!("Loaded {} request from {:?}", kind, path);
    let response = match kind {
        RequestKind::Coordinates => {
            CoordinatesRequest::from_json(&json)?.process()?.to_json()
        }
        RequestKind::GridValue => {
            GridValueRequest::from_json(&json)?.process()?.to_json()
        }
    };
    Ok(response)
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let output = match &opt.command {
        Command::Coordinates { address } => {
            let config = build_config(&opt)?;
            CoordinatesRequest {
                grid: config.grid,
                grid_value: *address,
                shape_type: config.shape,
            }
            .process()?
            .to_json()
        }
        Command::Address { vertices } => {
            let config = build_config(&opt)?;
            GridValueRequest {
                grid: config.grid,
                shape_type: config.shape,
                vertices: vertices.clone(),
            }
            .process()?
            .to_json()
        }
        Command::Request { path, kind } => process_request_file(path, *kind)?,
    };

    println!("{}", output);
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
