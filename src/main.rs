use clap::Parser;
use imgsquash::imaging::RustCodec;
use imgsquash::params::{ProcessParams, Quality, Target};
use imgsquash::process::{self, InPlaceSink};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgsquash")]
#[command(about = "Shrink oversized images in place, batch or single-file")]
#[command(long_about = "\
Shrink oversized images in place, batch or single-file

Walks a directory tree (or takes one file) and rewrites every image that
is both taller than HEIGHT and larger than MIN_SIZE_KB:

  1. EXIF orientation is corrected, then the image is scaled to fit a
     white canvas exactly HEIGHT pixels tall, centered, aspect preserved.
  2. The result overwrites the source file losslessly (BMP).
  3. If the rewritten file is still larger than MIN_SIZE_KB, it is
     re-encoded as JPEG at QUALITY and overwritten once more.

Files are modified IN PLACE with no backup. Point this at a copy if you
are not sure.

Directory walks are depth-first: all files in a directory are handled
before its subdirectories, in filesystem order.")]
#[command(version)]
struct Cli {
    /// Image file or directory tree to process (overwritten in place)
    path: PathBuf,

    /// Extension filter. Accepted for compatibility with older scripts;
    /// the fixed set .JPEG/.JPG/.PNG/.BMP is what actually applies
    extension: String,

    /// Minimum file size in KB; smaller files are left untouched
    min_size_kb: u64,

    /// Target canvas height in pixels
    height: u32,

    /// JPEG quality factor for the recompression stage (0-100, higher is
    /// better fidelity and larger output)
    quality: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let target = if cli.path.is_file() {
        Target::File(cli.path.clone())
    } else if cli.path.is_dir() {
        Target::Directory(cli.path.clone())
    } else {
        println!("{} is not a valid file or directory.", cli.path.display());
        return;
    };

    let params = ProcessParams {
        target,
        extension: cli.extension,
        min_size_kb: cli.min_size_kb,
        target_height: cli.height,
        quality: Quality::new(cli.quality),
    };

    match process::run(&RustCodec::new(), &InPlaceSink, &params) {
        Ok(summary) => {
            if matches!(params.target, Target::Directory(_)) {
                println!("{summary}");
            }
        }
        Err(e) => {
            eprintln!("\n Error");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
