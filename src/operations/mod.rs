pub mod bounds;
pub mod list;
pub mod metadata;
pub mod reproject;

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use log::{error, info};

use crate::{
    components::{GdalFile, RasterFile},
    errors::{Result, RastertoolError},
};

pub use bounds::calculate_bounds;
pub use list::list_rasters;
pub use metadata::{display_metadata, RasterInfo};
pub use reproject::reproject_rasters;

/// Where the bounds operation reads its JSON from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsInput {
    Stdin,
    File(PathBuf),
}

/// One selected unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    List(PathBuf),
    Metadata(PathBuf),
    Bounds(BoundsInput),
    Reproject { path: PathBuf, out_dir: PathBuf },
}

impl Operation {
    pub fn run<F: RasterFile, W: Write>(&self, out: &mut W) -> Result<()> {
        info!("running {self:?}");
        match self {
            Operation::List(directory) => {
                for raster in list_rasters(directory)? {
                    writeln!(out, "{raster}")?;
                }
                Ok(())
            }
            Operation::Metadata(path) => display_metadata::<F, _>(path, out),
            Operation::Bounds(input) => {
                let envelope = match input {
                    BoundsInput::Stdin => calculate_bounds(io::stdin().lock())?,
                    BoundsInput::File(file) => calculate_bounds(fs::File::open(file)?)?,
                };
                writeln!(out, "{}", serde_json::to_string(&envelope)?)?;
                Ok(())
            }
            Operation::Reproject { path, out_dir } => reproject_rasters::<F>(path, out_dir),
        }
    }
}

/// Runs `operations` in order against GDAL.
///
/// Batch failures do not stop later operations; they are merged
/// and reported once everything ran. Any other error aborts.
pub fn run<W: Write>(operations: &[Operation], out: &mut W) -> Result<()> {
    let mut summary = BatchSummary::default();
    for operation in operations {
        match operation.run::<GdalFile, _>(out) {
            Err(RastertoolError::Batch(failed)) => summary.merge(failed),
            result => result?,
        }
        out.flush()?;
    }
    summary.into_result()
}

/// Outcome of applying an operation to every file of a batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    succeeded: usize,
    failures: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.failures
            .iter()
            .map(|(path, message)| (path.as_path(), message.as_str()))
    }

    pub fn merge(&mut self, other: BatchSummary) {
        self.succeeded += other.succeeded;
        self.failures.extend(other.failures);
    }

    /// Records the result for `path`.
    ///
    /// Not-a-raster stays fatal and is handed back.
    fn record(&mut self, path: &Path, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => self.succeeded += 1,
            Err(error @ RastertoolError::NotARaster(_)) => return Err(error),
            Err(error) => {
                error!("{path:?}: {error}");
                self.failures.push((path.to_path_buf(), error.to_string()));
            }
        }
        Ok(())
    }

    fn into_result(self) -> Result<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(RastertoolError::Batch(self))
        }
    }
}

/// Stats `path`, failing with [RastertoolError::PathNotFound] if it is missing.
pub(crate) fn stat(path: &Path) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => RastertoolError::PathNotFound(path.to_path_buf()),
        _ => RastertoolError::IoError(error),
    })
}

/// Applies `action` to `path` if it is a file, or to every raster listed in it.
///
/// A single file propagates its error as is. Within a directory each
/// file's failure is recorded and the rest of the batch still runs.
pub(crate) fn for_each_raster<A>(path: &Path, mut action: A) -> Result<()>
where
    A: FnMut(&Path) -> Result<()>,
{
    if stat(path)?.is_file() {
        return action(path);
    }

    let mut summary = BatchSummary::default();
    for raster in list_rasters(path)? {
        let raster_path = path.join(raster);
        let result = action(&raster_path);
        summary.record(&raster_path, result)?;
    }
    info!(
        "{:?}: {} of {} files processed",
        path,
        summary.total() - summary.failed(),
        summary.total()
    );
    summary.into_result()
}

/// Reads everything from `reader`.
pub(crate) fn read_to_end(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}
