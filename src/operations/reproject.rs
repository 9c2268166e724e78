use std::{
    io,
    path::{Path, PathBuf},
};

use log::info;

use crate::{components::RasterFile, errors::Result, operations::for_each_raster};

/// Output location for `source`: `out_dir` joined with the source file name.
pub fn output_path(source: &Path, out_dir: &Path) -> Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{source:?} has no file name"),
        )
    })?;
    Ok(out_dir.join(name))
}

/// Reprojects `path`, or every raster in it, to EPSG:4326 inside `out_dir`.
///
/// `out_dir` is not checked up front; writing into a missing
/// directory fails per file.
pub fn reproject_rasters<F: RasterFile>(path: &Path, out_dir: &Path) -> Result<()> {
    for_each_raster(path, |source| {
        let destination = output_path(source, out_dir)?;
        F::open(source)?.reproject_to_wgs84(&destination)?;
        info!("wrote {destination:?}");
        Ok(())
    })
}
