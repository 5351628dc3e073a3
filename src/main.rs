use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use motif_codec::{EncodedImage, MotifCodec};
use motifpack::models::AppConfig;
use motifpack::raster_io;

#[derive(Parser)]
#[command(name = "motifpack")]
#[command(about = "Lossy motif-palette image codec with run-length encoded rows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize a PNG image and write the palette/row table pair
    Encode {
        /// Input PNG file
        input: PathBuf,

        /// Output stem; writes <STEM>.palette.csv and <STEM>.rows.csv
        /// (defaults to the input path without its extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Quantization step: channel grid spacing, 1-256
        #[arg(short = 'q', long)]
        step: Option<u16>,

        /// Pixels grouped per motif, 1-3
        #[arg(short = 'k', long)]
        pixels_per_motif: Option<usize>,

        /// Also reconstruct the lossy image to this path
        #[arg(long)]
        preview: Option<PathBuf>,

        /// Configuration file
        #[arg(long, default_value = "motifpack.yaml")]
        config: PathBuf,
    },
    /// Rebuild a PNG image from a palette/row table pair
    Decode {
        /// Palette table file
        #[arg(short, long)]
        palette: PathBuf,

        /// Row table file
        #[arg(short, long)]
        rows: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print statistics about an encoded artifact pair
    Info {
        /// Palette table file
        #[arg(short, long)]
        palette: PathBuf,

        /// Row table file
        #[arg(short, long)]
        rows: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "motifpack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Encode {
            input,
            output,
            step,
            pixels_per_motif,
            preview,
            config,
        } => run_encode_command(
            &input,
            output.as_deref(),
            step,
            pixels_per_motif,
            preview.as_deref(),
            &config,
        ),
        Commands::Decode {
            palette,
            rows,
            output,
        } => run_decode_command(&palette, &rows, &output),
        Commands::Info { palette, rows } => run_info_command(&palette, &rows),
    }
}

fn run_encode_command(
    input: &Path,
    output: Option<&Path>,
    step: Option<u16>,
    pixels_per_motif: Option<usize>,
    preview: Option<&Path>,
    config_path: &Path,
) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path);
    let step = step.unwrap_or(config.quantization_step);
    let pixels_per_motif = pixels_per_motif.unwrap_or(config.pixels_per_motif);
    let codec = MotifCodec::new(step, pixels_per_motif)?;

    let raster = raster_io::load_png(input)?;
    tracing::info!(
        width = raster.width(),
        height = raster.height(),
        step,
        pixels_per_motif,
        "Loaded image"
    );

    let encoded = codec.encode(raster.pixels(), raster.width(), raster.height())?;
    tracing::info!(
        palette_entries = encoded.palette().len(),
        rows = encoded.rows().len(),
        tokens = encoded.token_count(),
        "Encoded image"
    );

    let stem = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension(""));
    let palette_path = artifact_path(&stem, "palette.csv");
    let rows_path = artifact_path(&stem, "rows.csv");

    // Materialize both tables before touching the filesystem so a failed
    // encode leaves nothing behind.
    let palette_table = encoded.palette_table();
    let row_table = encoded.row_table();
    std::fs::write(&palette_path, palette_table)
        .with_context(|| format!("writing palette table {}", palette_path.display()))?;
    if let Err(e) = std::fs::write(&rows_path, row_table) {
        // The tables are only meaningful as a pair; do not leave half of one.
        let _ = std::fs::remove_file(&palette_path);
        return Err(e).with_context(|| format!("writing row table {}", rows_path.display()));
    }
    tracing::info!(
        palette = %palette_path.display(),
        rows = %rows_path.display(),
        "Wrote artifact pair"
    );

    if let Some(preview_path) = preview {
        let restored = encoded.decode()?;
        raster_io::save_png(&restored, preview_path)?;
        tracing::info!(preview = %preview_path.display(), "Wrote reconstruction preview");
    }

    Ok(())
}

fn run_decode_command(palette: &Path, rows: &Path, output: &Path) -> anyhow::Result<()> {
    let encoded = read_artifact(palette, rows)?;
    let raster = encoded.decode()?;
    raster_io::save_png(&raster, output)?;
    tracing::info!(
        width = raster.width(),
        height = raster.height(),
        output = %output.display(),
        "Wrote decoded image"
    );
    Ok(())
}

fn run_info_command(palette_path: &Path, rows_path: &Path) -> anyhow::Result<()> {
    let encoded = read_artifact(palette_path, rows_path)?;
    let raster = encoded.decode()?;

    let artifact_bytes = std::fs::metadata(palette_path)?.len() + std::fs::metadata(rows_path)?.len();
    let raw_bytes = (raster.width() * raster.height() * 3) as u64;

    println!("palette entries:    {}", encoded.palette().len());
    println!("pixels per motif:   {}", encoded.palette().pixels_per_motif());
    println!("referenced entries: {}", encoded.referenced_entries());
    println!("rows:               {}", encoded.rows().len());
    println!("tokens:             {}", encoded.token_count());
    println!("decoded size:       {}x{}", raster.width(), raster.height());
    if raw_bytes > 0 {
        println!(
            "artifact/raw ratio: {:.3}",
            artifact_bytes as f64 / raw_bytes as f64
        );
    }
    Ok(())
}

fn read_artifact(palette: &Path, rows: &Path) -> anyhow::Result<EncodedImage> {
    let palette_table = std::fs::read_to_string(palette)
        .with_context(|| format!("reading palette table {}", palette.display()))?;
    let row_table = std::fs::read_to_string(rows)
        .with_context(|| format!("reading row table {}", rows.display()))?;
    Ok(EncodedImage::from_tables(&palette_table, &row_table)?)
}

/// `stem` + `.suffix`, preserving any directory components of the stem.
fn artifact_path(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}
