use std::borrow::Cow;
use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use presentation_pdf::config::{DEFAULT_OUTPUT_PATH, DEFAULT_TITLE};
use presentation_pdf::content::{self, PRESENTATION};
use presentation_pdf::{GenerationConfig, GenpdfEngine, HeadingRule};

/// Renders the SkillHatch presentation notes to an A4 PDF.
///
/// Fonts are looked up under `assets/fonts` next to the binary or in the
/// directory named by `PRESENTATION_PDF_FONTS_DIR`; common system families are
/// used when the bundled Roboto files are missing.
#[derive(Parser)]
#[command(author, version, about = "Render presentation notes to a paginated PDF")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read the notes from this file instead of the built-in presentation.
    #[arg(long, value_name = "FILE", global = true)]
    content: Option<PathBuf>,

    /// How the heading conditions are combined.
    #[arg(long, value_enum, default_value_t = RuleArg::Literal, global = true)]
    heading_rule: RuleArg,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Args)]
struct GenerateArgs {
    /// Destination of the rendered PDF.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH, global = true)]
    output: PathBuf,

    /// Title stored in the PDF metadata.
    #[arg(long, default_value = DEFAULT_TITLE, global = true)]
    title: String,

    /// Add a PDF outline entry for every heading.
    #[arg(long, global = true)]
    bookmarks: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the PDF (the default when no command is given).
    Generate,

    /// Print the role assigned to every paragraph without rendering.
    Outline,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    /// Short lines ending in ':', all-caps text, or the preface.
    Literal,
    /// Only short lines, which must end in ':', be all-caps, or start the preface.
    ShortLine,
}

impl From<RuleArg> for HeadingRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Literal => HeadingRule::Literal,
            RuleArg::ShortLine => HeadingRule::ShortLine,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> presentation_pdf::Result<()> {
    let notes: Cow<'static, str> = match &cli.content {
        Some(path) => Cow::Owned(content::read_content(path)?),
        None => Cow::Borrowed(PRESENTATION),
    };
    let rule = HeadingRule::from(cli.heading_rule);

    match cli.command {
        Some(Commands::Outline) => {
            print_outline(&notes, rule);
            Ok(())
        }
        Some(Commands::Generate) | None => generate(cli.generate, &notes, rule),
    }
}

fn generate(args: GenerateArgs, notes: &str, rule: HeadingRule) -> presentation_pdf::Result<()> {
    let config = GenerationConfig::default()
        .with_output_path(args.output)
        .with_title(args.title)
        .with_heading_rule(rule);
    let mut engine = GenpdfEngine::from_config(&config).with_bookmarks(args.bookmarks);

    println!("Generating PDF to {}", config.output_path.display());
    let report = presentation_pdf::generate(&config, notes, &mut engine)?;
    info!(
        "{} pages, {} headings, {} bytes",
        report.pages,
        report.headings.len(),
        report.bytes
    );
    println!("Done");
    Ok(())
}

fn print_outline(notes: &str, rule: HeadingRule) {
    for block in presentation_pdf::classify_paragraphs(notes, rule) {
        let first_line = block.source().text().lines().next().unwrap_or_default();
        println!("{}\t{}", block.role(), first_line);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
