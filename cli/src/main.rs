//! pdfcursor CLI - walk, search and extract text from PDF page layouts

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use pdfcursor::{
    load_file, search, Document, IterateLimit, Level, PageSelection, SearchOptions, TextOptions,
};

#[derive(Parser)]
#[command(name = "pdfcursor")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Walk, search and extract text from PDF page layouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document information
    Info {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Extract plain text
    Text {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Keep line breaks instead of joining lines with spaces
        #[arg(long)]
        line_breaks: bool,

        /// Keep end-of-line hyphens instead of joining the word halves
        #[arg(long)]
        keep_hyphens: bool,
    },

    /// Search the document text
    Search {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Text or pattern to look for
        #[arg(value_name = "TERM")]
        term: String,

        /// Match regardless of case
        #[arg(short, long)]
        ignore_case: bool,

        /// Only match whole words
        #[arg(short, long)]
        whole_words: bool,

        /// Treat TERM as a regular expression
        #[arg(short, long)]
        regex: bool,
    },

    /// Step a cursor through the document and print each position
    Walk {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Level to step at (page, image, region, block, line, word, character)
        #[arg(long, default_value = "word")]
        level: Level,

        /// How far the cursor may roam (e.g., "within-line", "within-document")
        #[arg(long, default_value = "within-document")]
        limit: IterateLimit,

        /// Page to start on (1-indexed)
        #[arg(long, default_value = "1")]
        page: u32,

        /// Walk backwards from the last element reachable under the limit
        #[arg(long)]
        reverse: bool,

        /// Maximum number of steps to print
        #[arg(long, default_value = "100")]
        max: usize,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { input } => cmd_info(&input),
        Commands::Text {
            input,
            output,
            pages,
            line_breaks,
            keep_hyphens,
        } => cmd_text(
            &input,
            output.as_deref(),
            pages.as_deref(),
            line_breaks,
            keep_hyphens,
        ),
        Commands::Search {
            input,
            term,
            ignore_case,
            whole_words,
            regex,
        } => cmd_search(&input, &term, ignore_case, whole_words, regex),
        Commands::Walk {
            input,
            level,
            limit,
            page,
            reverse,
            max,
        } => cmd_walk(&input, level, limit, page, reverse, max),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());

    let metadata = &doc.metadata;
    let fields = [
        ("Title", &metadata.title),
        ("Author", &metadata.author),
        ("Subject", &metadata.subject),
        ("Keywords", &metadata.keywords),
        ("Creator", &metadata.creator),
        ("Producer", &metadata.producer),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{}: {}", label.bold(), value);
        }
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Layout Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = doc.stats();
    println!("{}: {}", "Images".bold(), stats.images);
    println!("{}: {}", "Regions".bold(), stats.regions);
    println!("{}: {}", "Blocks".bold(), stats.blocks);
    println!("{}: {}", "Lines".bold(), stats.lines);
    println!("{}: {}", "Words".bold(), stats.words);
    println!("{}: {}", "Characters".bold(), stats.characters);

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
    line_breaks: bool,
    keep_hyphens: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let page_selection = if let Some(p) = pages {
        PageSelection::parse(p).map_err(pdfcursor::Error::InvalidPageRange)?
    } else {
        PageSelection::All
    };

    let doc = load_file(input)?;
    let options = TextOptions::new()
        .with_pages(page_selection)
        .with_line_breaks(line_breaks)
        .with_hyphen_joining(!keep_hyphens);

    let text = pdfcursor::to_text(&doc, &options)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_search(
    input: &Path,
    term: &str,
    ignore_case: bool,
    whole_words: bool,
    regex: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;

    let mut options = SearchOptions::new();
    options.ignore_case = ignore_case;
    options.whole_words = whole_words;
    options.regex = regex;

    let found = search(&doc, term, &options)?;
    for extent in &found {
        let areas: Vec<String> = extent
            .areas
            .iter()
            .map(|a| {
                format!(
                    "p{} [{:.1}, {:.1}, {:.1}, {:.1}]",
                    a.page, a.bbox.x1, a.bbox.y1, a.bbox.x2, a.bbox.y2
                )
            })
            .collect();
        println!(
            "{} {:?} {}",
            extent.start.to_string().dimmed(),
            extent.text,
            areas.join(" ")
        );
    }

    println!("\n{} {} matches", "Done!".green().bold(), found.len());
    Ok(())
}

fn cmd_walk(
    input: &Path,
    level: Level,
    limit: IterateLimit,
    page: u32,
    reverse: bool,
    max: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let steps = walk(&doc, level, limit, page, reverse, max)?;
    println!("\n{} {} steps", "Done!".green().bold(), steps);
    Ok(())
}

fn walk(
    doc: &Document,
    level: Level,
    limit: IterateLimit,
    page: u32,
    reverse: bool,
    max: usize,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut cursor = doc.checked_cursor(page)?;
    let mut node = cursor.seek(level, limit);

    if reverse {
        while cursor.next(level, limit).is_some() {}
        node = cursor.previous(level, limit);
    }

    let mut steps = 0;
    while let Some(current) = node {
        if steps >= max {
            break;
        }
        println!(
            "{} {} {:?}",
            cursor.to_string().dimmed(),
            current.level().to_string().cyan(),
            current.text()
        );
        steps += 1;
        node = if reverse {
            cursor.previous(level, limit)
        } else {
            cursor.next(level, limit)
        };
    }

    Ok(steps)
}

fn cmd_version() {
    println!("{} {}", "pdfcursor".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Hierarchical cursor over PDF page layouts");
    println!();
    println!("License: MIT");
}
