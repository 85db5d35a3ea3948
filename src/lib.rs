//! heif-regions: decoder for HEIF region annotation items.
//!
//! HEIF files can carry `rgan` (region annotation) items that attach
//! geometric shapes to an image: points, rectangles, ellipses, and
//! polygons, all expressed against a reference canvas size. This crate
//! decodes the raw payload of one such item into a structured
//! [`region::RegionItem`]. It does not parse the surrounding container;
//! callers hand it the already-extracted item bytes.
//!
//! # Modules
//!
//! - [`region`]: the decoded model (`RegionItem`, `Geometry`) and decoder
//! - [`error`]: error types for heif-regions operations

pub mod error;
pub mod region;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::RegionError;
use region::{Geometry, RegionItem};

/// The heif-regions CLI application.
#[derive(Parser)]
#[command(name = "heif-regions")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Decode a region item payload and print its contents.
    Inspect(InspectArgs),
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// File containing the raw region item payload.
    input: PathBuf,

    /// Output format for the listing ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the heif-regions CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), RegionError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Inspect(args)) => run_inspect(args),
        None => {
            println!("heif-regions {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Decoder for HEIF region annotation items.");
            println!();
            println!("Run 'heif-regions --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), RegionError> {
    let data = fs::read(&args.input)?;
    let item = RegionItem::decode(&data)?;

    match args.output.as_str() {
        "json" => {
            let json =
                serde_json::to_string_pretty(&item).map_err(|source| RegionError::JsonWrite {
                    path: args.input.clone(),
                    source,
                })?;
            println!("{}", json);
        }
        _ => {
            println!(
                "Reference canvas: {} x {}",
                item.reference_width, item.reference_height
            );
            println!("Regions: {}", item.regions.len());
            for (index, geometry) in item.regions.iter().enumerate() {
                println!("  [{}] {}", index, describe_geometry(geometry));
            }
        }
    }

    Ok(())
}

/// One-line human-readable description of a geometry.
fn describe_geometry(geometry: &Geometry) -> String {
    match geometry {
        Geometry::Point { x, y } => format!("point at ({}, {})", x, y),
        Geometry::Rectangle {
            x,
            y,
            width,
            height,
        } => format!("rectangle {}x{} at ({}, {})", width, height, x, y),
        Geometry::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
        } => format!("ellipse radii {}x{} at ({}, {})", radius_x, radius_y, x, y),
        Geometry::Polygon { closed, points } => {
            let kind = if *closed { "polygon" } else { "polyline" };
            format!("{} with {} point(s)", kind, points.len())
        }
    }
}
