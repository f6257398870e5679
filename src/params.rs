//! Parameter types for a processing run.
//!
//! These structs describe *what* to do, not *how* to do it. A run is
//! described once by [`ProcessParams`]; the directory walk re-derives a
//! [`FileParams`] for every file it visits, which is all the per-file
//! policy ever sees.
//!
//! ## Types
//!
//! - [`Quality`] — lossy JPEG quality (1–100, default 75). Clamped on construction.
//! - [`Target`] — file XOR directory. The enum makes "both set" unrepresentable.
//! - [`ProcessParams`] — full run specification from the CLI.
//! - [`FileParams`] — per-file slice of the run specification.

use std::path::PathBuf;

/// Quality setting for lossy JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// What a run operates on: a single file or a directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

/// Immutable description of one processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessParams {
    pub target: Target,
    /// Extension filter as given on the command line. Accepted for
    /// compatibility but not consulted: the fixed set
    /// `.JPEG/.JPG/.PNG/.BMP` is what the gate actually applies.
    pub extension: String,
    /// Files whose size in whole KB is below this are skipped.
    pub min_size_kb: u64,
    /// Canvas height; images at or below it pass through untouched.
    pub target_height: u32,
    pub quality: Quality,
}

impl ProcessParams {
    /// Derive the per-file parameters for one file under this run.
    pub fn for_file(&self, path: PathBuf) -> FileParams {
        FileParams {
            path,
            min_size_kb: self.min_size_kb,
            target_height: self.target_height,
            quality: self.quality,
        }
    }
}

/// Per-file slice of [`ProcessParams`], spawned per visited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileParams {
    pub path: PathBuf,
    pub min_size_kb: u64,
    pub target_height: u32,
    pub quality: Quality,
}
