//! Process exit codes (BSD sysexits.h compatible above 63)

/// Successful termination
pub const OK: i32 = 0;

/// Metadata was requested for a file GDAL cannot read as a raster
pub const NOT_RASTER: i32 = 1;

/// A batch finished but at least one file failed
pub const PARTIAL: i32 = 2;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;
