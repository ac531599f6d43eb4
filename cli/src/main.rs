//! retrodoc CLI - Sprint 3 review & retrospective DOCX generator

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use retrodoc::{
    build_report, to_json, to_text, Generator, JsonFormat, SourceText, DEFAULT_OUTPUT,
    DEFAULT_SOURCE,
};

#[derive(Parser)]
#[command(name = "retrodoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Generate the Sprint 3 review & retrospective DOCX report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the DOCX report (the default when no command is given)
    #[command(alias = "gen")]
    Generate {
        /// Markdown source file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SOURCE)]
        source: PathBuf,

        /// Output DOCX file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Show source and report statistics
    Info {
        /// Markdown source file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SOURCE)]
        source: PathBuf,
    },

    /// Dump the report structure as JSON
    Json {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the report as plain text
    Text,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate { source, output }) => cmd_generate(&source, &output),
        Some(Commands::Info { source }) => cmd_info(&source),
        Some(Commands::Json { output, compact }) => cmd_json(output.as_deref(), compact),
        Some(Commands::Text) => cmd_text(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Bare invocation runs the fixed-path generation
        None => cmd_generate(Path::new(DEFAULT_SOURCE), Path::new(DEFAULT_OUTPUT)),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(source: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let path = Generator::new()
        .with_source(source)
        .with_output(output)
        .run()?;

    println!("{} {}", "Generated".green(), path.display());
    Ok(())
}

fn cmd_info(source: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = SourceText::read(source)?;
    let doc = build_report();

    println!("{}", "Source".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), source.path.display());
    println!("{}: {}", "Lines".bold(), source.line_count());
    println!("{}: {}", "Words".bold(), source.word_count());
    println!("{}: {}", "Characters".bold(), source.char_count());

    println!();
    println!("{}", "Report".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Sections".bold(), doc.headings(2).count());
    println!("{}: {}", "Bullets".bold(), doc.bullets().count());

    Ok(())
}

fn cmd_json(output: Option<&Path>, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = build_report();

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_text() -> Result<(), Box<dyn std::error::Error>> {
    let doc = build_report();
    println!("{}", to_text(&doc)?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "retrodoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Sprint 3 review & retrospective DOCX generator");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/retrodoc".dimmed()
    );
    println!("License: MIT");
}
