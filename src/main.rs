use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use demo_reports::cases::{self, DEMO_SUBJECTS, FORENSIC_OUTPUT_DIR, MEDICAL_OUTPUT_DIR};

/// Generates synthetic demo report PDFs for the fixed subject roster.
///
/// Fonts must be present under `assets/fonts` or provided via the
/// `DEMO_REPORTS_FONTS_DIR` environment variable before running the commands
/// below.
#[derive(Parser)]
#[command(author, version, about = "Synthetic demo report generator")]
struct Cli {
    /// Seed for the random source; omit for a fresh seed per run.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one medical report per subject into a flat directory.
    #[command(name = "single")]
    Single {
        /// Output directory for the generated documents.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Render paired medical and forensic reports sharing case metadata.
    #[command(name = "paired")]
    Paired,
}

fn main() {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let exam_date = Local::now().date_naive();

    let result = match cli.command {
        Commands::Single { out_dir } => {
            cases::run_single(DEMO_SUBJECTS, exam_date, &out_dir, &mut rng)
        }
        Commands::Paired => cases::run_paired(
            DEMO_SUBJECTS,
            exam_date,
            Path::new(MEDICAL_OUTPUT_DIR),
            Path::new(FORENSIC_OUTPUT_DIR),
            &mut rng,
        ),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
