use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use text2file::{GenerationReport, Generator, GeneratorOptions, Outcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "text2file",
    about = "Generate test files of various types from text content",
    version,
    author
)]
struct Cli {
    /// Content to include in the generated files
    content: String,

    /// File extensions to generate (e.g., pdf md jpg)
    extensions: Vec<String>,

    /// Directory to write the generated files to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Font file to try before the default fonts (repeatable)
    #[arg(long = "font", value_name = "PATH")]
    fonts: Vec<PathBuf>,

    /// Skip the system font search; images use --font files or the built-in font
    #[arg(long)]
    no_system_fonts: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "text2file=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.extensions.is_empty() {
        eprintln!("Error: At least one file extension must be provided.");
        std::process::exit(1);
    }

    let mut options = GeneratorOptions::new()
        .with_output_dir(cli.output_dir)
        .with_fonts(cli.fonts);
    if cli.no_system_fonts {
        options = options.without_system_fonts();
    }
    let generator = Generator::new(options);

    tracing::debug!(count = cli.extensions.len(), "generating files");
    let report = generator.generate_all(&cli.content, &cli.extensions);
    print_report(&report);

    Ok(())
}

fn print_report(report: &GenerationReport) {
    for (extension, outcome) in &report.outcomes {
        match outcome {
            Outcome::Generated(file) => println!("Generated: {}", file.file_name()),
            Outcome::Unsupported => println!("Unsupported file extension: {}", extension),
            Outcome::Unavailable(capability) => println!("Error: {}", capability),
            Outcome::Failed(error) => {
                println!("Error generating {} file: {}", extension, error)
            }
        }
    }

    if report.is_empty() {
        println!("No files were generated.");
        return;
    }

    println!("\nSuccessfully generated files:");
    for file in report.generated() {
        println!("- {}", file.file_name());
    }
}
