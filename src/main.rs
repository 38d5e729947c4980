// ABOUTME: Main entry point for the deckgen program.
// ABOUTME: Provides CLI interface and executes conversions from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use deckgen::ConversionOptions;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an HTML file to PPTX
    Html(HtmlArgs),

    /// Convert images to PPTX, one slide per image
    Images(ImagesArgs),
}

#[derive(Args)]
struct HtmlArgs {
    /// Path to the HTML file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output PPTX file
    #[arg(short, long)]
    output: PathBuf,

    /// Move content that overflows a slide onto the next slide instead of dropping it
    #[arg(long)]
    carry_overflow: bool,

    #[command(flatten)]
    deck: DeckArgs,
}

#[derive(Args)]
struct ImagesArgs {
    /// Image files, in slide order
    #[arg(short, long)]
    input: Vec<PathBuf>,

    /// Directory to collect images from
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Glob pattern for images in --dir
    #[arg(long, default_value = "*.png")]
    pattern: String,

    /// Path to output PPTX file
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    deck: DeckArgs,
}

#[derive(Args)]
struct DeckArgs {
    /// Presentation title
    #[arg(long)]
    title: Option<String>,

    /// Presentation author
    #[arg(long)]
    author: Option<String>,

    /// Presentation subject
    #[arg(long)]
    subject: Option<String>,

    /// Slide width in inches
    #[arg(long)]
    width: Option<f64>,

    /// Slide height in inches
    #[arg(long)]
    height: Option<f64>,

    /// Default font size in points
    #[arg(long)]
    font_size: Option<u32>,

    /// Default font face
    #[arg(long)]
    font_face: Option<String>,
}

impl DeckArgs {
    /// Flags override environment variables, which override defaults
    fn options(&self) -> ConversionOptions {
        let mut options = ConversionOptions::from_env();
        if let Some(title) = &self.title {
            options.title = Some(title.clone());
        }
        if let Some(author) = &self.author {
            options.author = Some(author.clone());
        }
        if let Some(subject) = &self.subject {
            options.subject = Some(subject.clone());
        }
        if let Some(width) = self.width {
            options.slide_width = width;
        }
        if let Some(height) = self.height {
            options.slide_height = height;
        }
        if let Some(size) = self.font_size {
            options.default_font_size = size;
        }
        if let Some(face) = &self.font_face {
            options.default_font_face = face.clone();
        }
        options
    }
}

fn run_html(args: &HtmlArgs) -> anyhow::Result<()> {
    deckgen::utils::validate_file_exists(&args.input)?;
    let html = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file {:?}", args.input))?;

    let mut options = args.deck.options();
    if args.carry_overflow {
        options.carry_overflow = true;
    }
    if let Some(parent) = args.input.parent() {
        options.base_dir = Some(parent.to_path_buf());
    }

    deckgen::html_to_pptx(&html, &args.output, &options)
        .with_context(|| format!("Failed to convert {:?}", args.input))?;
    println!("PPTX generated successfully: {:?}", args.output);
    Ok(())
}

fn run_images(args: &ImagesArgs) -> anyhow::Result<()> {
    let mut paths = args.input.clone();
    if let Some(dir) = &args.dir {
        paths.extend(deckgen::utils::find_images(dir, &args.pattern)?);
    }
    if paths.is_empty() {
        anyhow::bail!("No images given. Use --input or --dir.");
    }

    deckgen::images_to_pptx(&paths, &args.output, &args.deck.options())
        .context("Failed to convert images")?;
    println!(
        "PPTX generated successfully from {} images: {:?}",
        paths.len(),
        args.output
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Html(args)) => {
            println!("Executing html command...");
            run_html(args)
        }
        Some(Commands::Images(args)) => {
            println!("Executing images command...");
            run_images(args)
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
