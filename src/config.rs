//! Command line arguments and the operation plan built from them.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use log::{debug, warn};

use crate::operations::{BoundsInput, Operation};

/// List, inspect, bound and reproject GeoTIFF rasters
#[derive(Parser, Debug)]
#[command(name = "rastertool")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to look for raster datasets (file or directory)
    #[arg(short, long, env = "RASTERTOOL_PATH", value_hint = ValueHint::AnyPath)]
    pub path: Option<PathBuf>,

    /// Path to write out files
    #[arg(short, long = "outpath", env = "RASTERTOOL_OUTPATH", value_hint = ValueHint::DirPath)]
    pub outpath: Option<PathBuf>,

    /// List all raster datasets in directory
    #[arg(short, long)]
    pub list: bool,

    /// Display raster metadata
    #[arg(short, long)]
    pub metadata: bool,

    /// Operate on a stream of JSON from stdin
    #[arg(short, long)]
    pub stream: bool,

    /// Get bounding box for a feature, read from FILE or the stream
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    pub bounds: Option<Option<PathBuf>>,

    /// Reproject raster(s) to EPSG:4326
    #[arg(short, long)]
    pub reproject: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

/// Immutable run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: Option<PathBuf>,
    pub out_path: Option<PathBuf>,
    pub list: bool,
    pub metadata: bool,
    pub bounds: Option<BoundsInput>,
    pub reproject: bool,
    pub verbosity: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let bounds = match args.bounds {
            None => None,
            Some(_) if args.stream => Some(BoundsInput::Stdin),
            Some(Some(file)) if file.as_os_str() != "-" => Some(BoundsInput::File(file)),
            Some(Some(_)) => Some(BoundsInput::Stdin),
            Some(None) => {
                warn!("--bounds needs --stream or an input file, skipping");
                None
            }
        };
        Self {
            path: args.path,
            out_path: args.outpath,
            list: args.list,
            metadata: args.metadata,
            bounds,
            reproject: args.reproject,
            verbosity: args.debug,
        }
    }
}

impl Config {
    /// Selected operations in run order: list, metadata, bounds, reproject.
    pub fn operations(&self) -> Vec<Operation> {
        let mut operations = Vec::new();

        match (&self.path, self.list, self.metadata) {
            (Some(path), list, metadata) => {
                if list {
                    operations.push(Operation::List(path.clone()));
                }
                if metadata {
                    operations.push(Operation::Metadata(path.clone()));
                }
            }
            (None, true, _) | (None, _, true) => warn!("--list and --metadata need --path"),
            _ => {}
        }

        if let Some(input) = &self.bounds {
            operations.push(Operation::Bounds(input.clone()));
        }

        if self.reproject {
            match (&self.path, &self.out_path) {
                (Some(path), Some(out_dir)) => operations.push(Operation::Reproject {
                    path: path.clone(),
                    out_dir: out_dir.clone(),
                }),
                _ => warn!("--reproject needs --path and --outpath"),
            }
        }

        debug!("planned {operations:?}");
        operations
    }
}
