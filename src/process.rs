//! Per-file policy and the directory walk.
//!
//! ## Per-file policy
//!
//! In order, for every candidate file:
//!
//! 1. **Extension gate** — only `.jpeg`/`.jpg`/`.png`/`.bmp`
//!    (case-insensitive) go further. Everything else is skipped silently.
//! 2. **Size gate** — files smaller than `min_size_kb` (whole KB, strict
//!    less-than) are skipped; a file exactly at the threshold is processed.
//! 3. **Resize** — decode, orientation-aware resize onto the canvas,
//!    re-encode losslessly as BMP, overwrite in place.
//! 4. **Re-check** — stat the rewritten file.
//! 5. **Recompress** — if it is still strictly above `min_size_kb`, encode
//!    the in-memory image as JPEG at the run's quality factor and
//!    overwrite again.
//!
//! Overwrites are destructive: no backup of the original is kept. All
//! writes go through the narrow [`FileSink`] seam so tests can substitute
//! a recording sink without touching the transform logic.
//!
//! ## Directory walk
//!
//! Depth-first; all files in a directory are processed before its
//! subdirectories are entered; within each class the filesystem's
//! enumeration order is kept (not sorted). Each file yields a
//! [`FileOutcome`] which the walker folds into a [`RunSummary`]. The first
//! error aborts the rest of the walk — files already rewritten stay
//! rewritten.

use crate::imaging::{CodecError, ImageCodec, ResizeError, resize_to_height};
use crate::params::{FileParams, ProcessParams, Target};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

const KB: u64 = 1024;

/// The fixed extension gate. The CLI accepts a filter argument for
/// compatibility, but this set is what applies, in both file and
/// directory mode.
const PROCESSABLE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "bmp"];

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("Resize error: {0}")]
    Resize(#[from] ResizeError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension outside the fixed processable set.
    Extension,
    /// Below the minimum-size threshold.
    BelowThreshold,
}

/// What happened to one candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Processed {
        /// Whether the second, lossy write-stage fired.
        recompressed: bool,
    },
    Skipped(SkipReason),
}

/// Aggregated outcomes of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub recompressed: usize,
    pub skipped: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Processed { recompressed } => {
                self.processed += 1;
                if recompressed {
                    self.recompressed += 1;
                }
            }
            FileOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} processed ({} recompressed), {} skipped",
            self.processed, self.recompressed, self.skipped
        )
    }
}

/// Narrow seam around the destructive write and the size re-check.
///
/// Production is [`InPlaceSink`]. Tests substitute a recording sink to
/// observe the two-stage write policy, or a staging strategy, without
/// changing anything above this trait.
pub trait FileSink {
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()>;
    fn file_len(&self, path: &Path) -> std::io::Result<u64>;
}

/// Overwrites files where they are. No backups, no staging.
pub struct InPlaceSink;

impl FileSink for InPlaceSink {
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        std::fs::write(path, bytes)
    }

    fn file_len(&self, path: &Path) -> std::io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}

fn has_processable_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            PROCESSABLE_EXTENSIONS
                .iter()
                .any(|p| ext.eq_ignore_ascii_case(p))
        })
}

/// Run the whole per-file policy for one file.
///
/// Prints one progress line per processed file; skips are silent.
pub fn process_file(
    codec: &impl ImageCodec,
    sink: &impl FileSink,
    params: &FileParams,
) -> Result<FileOutcome, ProcessError> {
    let path = &params.path;

    if !has_processable_extension(path) {
        return Ok(FileOutcome::Skipped(SkipReason::Extension));
    }

    if sink.file_len(path)? / KB < params.min_size_kb {
        log::debug!("{} below {}KB, skipping", path.display(), params.min_size_kb);
        return Ok(FileOutcome::Skipped(SkipReason::BelowThreshold));
    }

    let decoded = codec.decode(path)?;
    let resized = resize_to_height(decoded.image, decoded.orientation, params.target_height)?;

    sink.write_bytes(path, &codec.encode_lossless(&resized)?)?;

    // Strict greater-than: a rewrite landing exactly on the threshold
    // does not trigger the lossy stage.
    let mut recompressed = false;
    if sink.file_len(path)? / KB > params.min_size_kb {
        sink.write_bytes(path, &codec.encode_jpeg(&resized, params.quality)?)?;
        recompressed = true;
    }

    println!("Processed file '{}'.", path.display());
    Ok(FileOutcome::Processed { recompressed })
}

/// Process the run's target, aggregating per-file outcomes.
///
/// Directory targets walk depth-first with files before subdirectories;
/// the first error aborts the remaining walk.
pub fn run(
    codec: &impl ImageCodec,
    sink: &impl FileSink,
    params: &ProcessParams,
) -> Result<RunSummary, ProcessError> {
    let mut summary = RunSummary::default();

    match &params.target {
        Target::File(path) => {
            summary.record(process_file(codec, sink, &params.for_file(path.clone()))?);
        }
        Target::Directory(dir) => {
            // Stable partition: files keep their enumeration order, then
            // subdirectories are descended into in theirs.
            let walker = WalkDir::new(dir)
                .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

            for entry in walker {
                let entry = entry?;
                if entry.file_type().is_file() {
                    summary.record(process_file(
                        codec,
                        sink,
                        &params.for_file(entry.into_path()),
                    )?);
                }
            }
        }
    }

    Ok(summary)
}
