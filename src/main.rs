//! wavio CLI - inspect and rewrite PCM WAV files

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use wavio_lib::{init, AudioBuffer, Config, Result, WavDecoder, WavEncoder};

#[derive(Parser)]
#[command(name = "wavio")]
#[command(about = "Decode, inspect and rewrite PCM WAV files", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show format information about a WAV file
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Swap the left and right channels of a stereo WAV file
    Swap {
        /// Input file path
        input: PathBuf,

        /// Output file path
        output: PathBuf,
    },

    /// Print the interpolated amplitude at a time offset
    Sample {
        /// Input file path
        input: PathBuf,

        /// Channel slot to read
        #[arg(short, long, default_value_t = 0)]
        channel: usize,

        /// Time offset in seconds
        #[arg(short, long)]
        at: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init(Config {
        verbose: cli.verbose,
        debug: cli.debug,
    })?;

    match cli.command {
        Commands::Info { input } => cmd_info(&input),
        Commands::Swap { input, output } => cmd_swap(&input, &output),
        Commands::Sample { input, channel, at } => cmd_sample(&input, channel, at),
    }
}

fn cmd_info(input: &Path) -> Result<()> {
    let buffer = WavDecoder::new().decode_file(input)?;

    println!("File:            {}", input.display());
    println!(
        "Channels:        {} ({} interleaved slots)",
        buffer.channel_count,
        buffer.slot_count()
    );
    println!("Sample rate:     {} Hz", buffer.sample_rate);
    println!("Bits per sample: {}", buffer.bytes_per_sample * 8);
    println!("Frames:          {}", buffer.frame_count());
    println!("Duration:        {:.2}s", buffer.duration_seconds());

    Ok(())
}

fn cmd_swap(input: &Path, output: &Path) -> Result<()> {
    let source = WavDecoder::new().decode_file(input)?;
    info!(frames = source.frame_count(), "decoded input");

    let mut swapped = AudioBuffer::with_format(2, source.bytes_per_sample, source.sample_rate);
    for i in 0..source.frame_count() {
        let left = source.sample_at(0, i as f64);
        let right = source.sample_at(1, i as f64);

        swapped.channels[0].push(right);
        swapped.channels[1].push(left);
    }

    WavEncoder::new().encode_file(&swapped, output)?;
    println!("Wrote {}", output.display());

    Ok(())
}

fn cmd_sample(input: &Path, channel: usize, at: f64) -> Result<()> {
    let buffer = WavDecoder::new().decode_file(input)?;

    let index = at * f64::from(buffer.sample_rate);
    let value = buffer.sample_at(channel, index);
    println!(
        "channel {} at {:.3}s (index {:.2}): {}",
        channel, at, index, value
    );

    Ok(())
}
