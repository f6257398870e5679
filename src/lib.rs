//! # imgsquash
//!
//! Batch image shrinker. Point it at a directory tree (or a single file)
//! and every image taller than a target height is scaled down, centered
//! on a white canvas, and written back in place — then re-encoded as a
//! quality-reduced JPEG if the rewrite is still over a byte-size
//! threshold.
//!
//! # Architecture: Three Collaborating Stages
//!
//! ```text
//! FileProcessor → Resizer → OrientationResolver
//!      │              │
//!      │              └─ contain-fit + centered composite
//!      └─ gates, two-stage write policy, directory walk
//! ```
//!
//! Consumed leaf-first: the orientation resolver is a pure mapping from
//! EXIF tag to transform; the resizer applies it before any aspect math
//! and composites onto the canvas; the file processor owns all policy —
//! which files qualify, when the lossy second write fires, and the
//! depth-first walk.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Pure-Rust pixel work: orientation, fit math, resize, codec seam |
//! | [`params`] | Run/per-file parameter types ([`params::Quality`], file-XOR-directory target) |
//! | [`process`] | Per-file policy, the [`process::FileSink`] write seam, directory walk |
//!
//! # Design Decisions
//!
//! ## In-Place, Destructive Writes
//!
//! The tool overwrites source files with no backup — that is its job, and
//! pretending otherwise would just move the surprise. The write itself is
//! isolated behind the narrow [`process::FileSink`] trait so the policy
//! above it is testable, and so a staging/atomic-rename strategy could be
//! slotted in without touching the transform logic.
//!
//! ## Results, Not Exceptions
//!
//! Every candidate file yields a [`process::FileOutcome`] (processed,
//! skipped-by-extension, skipped-by-size); the directory walker folds them
//! into a [`process::RunSummary`]. Aborting the batch on the first hard
//! error is an explicit policy in the walker, not an accident of unhandled
//! propagation.
//!
//! ## No Shared Drawing Context
//!
//! Every file's pixel buffer is owned by its own transform chain and the
//! `image` crate keeps all state per-instance, so there is no global lock
//! anywhere. Sequential today; per-file parallelism would need no new
//! synchronization.
//!
//! ## Orientation Before Aspect
//!
//! A 90°/270° EXIF rotation swaps width and height, so correction happens
//! before the fit computation — a sideways-stored 3000×4000 portrait is
//! fitted as the 4000×3000 landscape it really is.

pub mod imaging;
pub mod params;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
