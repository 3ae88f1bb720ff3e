//! lzwpress CLI - LZW compression for text and grayscale images
//!
//! Text compresses to a single line of whitespace-separated codes; images
//! compress to a dimension header followed by a comma-separated code line.

mod image_io;

use clap::{Parser, Subcommand};
use lzwpress_core::CompressionStats;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Number of decoded characters shown as a preview after text decompression.
const PREVIEW_CHARS: usize = 100;

#[derive(Parser)]
#[command(name = "lzwpress")]
#[command(version, about = "LZW compression for text and grayscale images")]
#[command(long_about = "
lzwpress is a Pure Rust LZW compressor with two codecs: a generic text codec
and a fixed-width codec for grayscale images.

Examples:
  lzwpress compress notes.txt
  lzwpress decompress notes.lzw -o restored.txt
  lzwpress compress-image photo.png
  lzwpress decompress-image photo.lzw -o restored.png
  lzwpress info photo.lzw
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a text file
    #[command(alias = "c")]
    Compress {
        /// Text file to compress
        input: PathBuf,

        /// Output file (defaults to the input with a .lzw extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print statistics as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress a compressed text file
    #[command(alias = "d")]
    Decompress {
        /// Compressed file to decompress
        input: PathBuf,

        /// Output file (defaults to the input with a .txt extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compress a grayscale PNG image
    #[command(alias = "ci")]
    CompressImage {
        /// PNG file to compress
        input: PathBuf,

        /// Output file (defaults to the input with a .lzw extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print statistics as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress a compressed image file back to a grayscale PNG
    #[command(alias = "di")]
    DecompressImage {
        /// Compressed file to decompress
        input: PathBuf,

        /// Output file (defaults to the input with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show information about a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            json,
        } => cmd_compress(&input, output, json),
        Commands::Decompress { input, output } => cmd_decompress(&input, output),
        Commands::CompressImage {
            input,
            output,
            json,
        } => cmd_compress_image(&input, output, json),
        Commands::DecompressImage { input, output } => cmd_decompress_image(&input, output),
        Commands::Info { file } => cmd_info(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Statistics block printed after a compression run.
#[derive(Serialize)]
struct StatsReport {
    input_size: usize,
    compressed_size: usize,
    ratio: f64,
    difference: i64,
    input_entropy: f64,
    compressed_entropy: f64,
    average_code_length: f64,
}

impl From<&CompressionStats> for StatsReport {
    fn from(stats: &CompressionStats) -> Self {
        Self {
            input_size: stats.input_size,
            compressed_size: stats.compressed_size,
            ratio: stats.ratio,
            difference: stats.difference,
            input_entropy: stats.input_entropy,
            compressed_entropy: stats.compressed_entropy,
            average_code_length: stats.average_code_length,
        }
    }
}

fn print_stats(stats: &CompressionStats, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&StatsReport::from(stats))?);
        return Ok(());
    }

    println!();
    println!("Statistics:");
    println!("  Input size: {} symbols", stats.input_size);
    println!("  Compressed size: {} codes", stats.compressed_size);
    println!("  Compression ratio: {:.4}", stats.ratio);
    println!("  Size difference: {}", stats.difference);
    println!(
        "  Entropy: {:.4} (input) | {:.4} (compressed)",
        stats.input_entropy, stats.compressed_entropy
    );
    println!("  Average code length: {:.4}", stats.average_code_length);
    Ok(())
}

fn cmd_compress(
    input: &Path,
    output: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let codes = lzwpress_text::compress(&text)?;

    let out_path = output.unwrap_or_else(|| input.with_extension("lzw"));
    let mut writer = BufWriter::new(File::create(&out_path)?);
    lzwpress_text::format::write_codes(&mut writer, &codes)?;
    writer.flush()?;

    if !json {
        println!(
            "Compressed {} -> {} ({} codes)",
            input.display(),
            out_path.display(),
            codes.len()
        );
    }
    print_stats(&CompressionStats::new(text.as_bytes(), &codes), json)
}

fn cmd_decompress(input: &Path, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(input)?);
    let codes = lzwpress_text::format::read_codes(reader)?;
    let text = lzwpress_text::decompress(&codes)?;

    let out_path = output.unwrap_or_else(|| input.with_extension("txt"));
    fs::write(&out_path, &text)?;

    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    println!("Preview: {}", preview);
    println!(
        "Decompressed {} -> {} ({} characters)",
        input.display(),
        out_path.display(),
        text.chars().count()
    );
    Ok(())
}

fn cmd_compress_image(
    input: &Path,
    output: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = image_io::read_grayscale_png(input)?;
    let image = lzwpress_image::compress(&grid)?;

    let out_path = output.unwrap_or_else(|| input.with_extension("lzw"));
    let mut writer = BufWriter::new(File::create(&out_path)?);
    lzwpress_image::format::write(&mut writer, &image)?;
    writer.flush()?;

    if !json {
        println!(
            "Compressed {} ({}x{}) -> {} ({} codes)",
            input.display(),
            image.width,
            image.height,
            out_path.display(),
            image.codes.len()
        );
    }
    let luma = grid.to_luma8()?;
    print_stats(&CompressionStats::new(&luma, &image.codes), json)
}

fn cmd_decompress_image(
    input: &Path,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(input)?);
    let image = lzwpress_image::format::read(reader)?;
    let grid = lzwpress_image::decompress(image.width, image.height, &image.codes)?;

    let out_path = output.unwrap_or_else(|| input.with_extension("png"));
    image_io::write_grayscale_png(&out_path, &grid)?;

    println!(
        "Decompressed {} -> {} ({}x{})",
        input.display(),
        out_path.display(),
        grid.width(),
        grid.height()
    );
    Ok(())
}

fn cmd_info(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = fs::metadata(file)?;
    let contents = fs::read_to_string(file)?;

    println!("Compressed File Information");
    println!("===========================");
    println!("File: {}", file.display());
    println!("Size: {} bytes", metadata.len());

    // An image file starts with a "<width> <height>" header; a text file is
    // a single line of codes.
    let (kind, dimensions, codes) = match lzwpress_image::format::read(contents.as_bytes()) {
        Ok(image) => ("image", Some((image.width, image.height)), image.codes),
        Err(_) => (
            "text",
            None,
            lzwpress_text::format::read_codes(contents.as_bytes())?,
        ),
    };

    println!("Format: {} codes", kind);
    if let Some((width, height)) = dimensions {
        println!("Dimensions: {}x{}", width, height);
        println!("Pixels: {}", width as u64 * height as u64);
    }
    println!();
    println!("Contents:");
    println!("  Codes: {}", codes.len());
    if let Some(&highest) = codes.iter().max() {
        println!("  Highest code: {}", highest);
        println!(
            "  Dictionary entries referenced: {}",
            highest.saturating_sub(255)
        );
    }

    Ok(())
}
