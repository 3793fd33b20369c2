// Sozluk Search CLI Tool
// Command-line interface for dictionary prefix search

use clap::Parser;
use regex::Regex;
use sozluk::SozlukSearch;

/// Dictionary Search Tool - prefix search with ghost completion
#[derive(Parser, Debug)]
#[command(name = "sozluk-search")]
#[command(about = "Search the etymology dictionary by word prefix", long_about = None)]
#[command(version = "0.3.0")]
struct Args {
    /// Word prefix to search for (Turkish casing folded, e.g. "kö", "İy")
    #[arg(value_name = "PREFIX")]
    prefix: String,

    /// Dictionary document to load (defaults to the embedded sample)
    #[arg(short, long, value_name = "PATH")]
    dict: Option<String>,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Show the ghost completion for the prefix
    #[arg(short, long)]
    ghost: bool,

    /// Strip markup from rendered descriptions
    #[arg(short, long)]
    plain: bool,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load search engine
    if args.verbose {
        println!("🔍 Loading dictionary...");
    }

    let search = match &args.dict {
        Some(path) => SozlukSearch::load(path)?,
        None => SozlukSearch::sample()?,
    };

    if args.verbose {
        println!("✅ Dictionary loaded: {} words\n", search.word_count());
    }

    let query = args.prefix.trim();

    // Ghost completion
    if args.ghost {
        match search.predict(query) {
            Some(ghost) => println!("👻 {}│{}  ({})", query, ghost.suffix, ghost.word),
            None => println!("👻 no completion"),
        }
        println!();
    }

    // Execute search
    let mut results = search.search(query);
    if results.len() > args.limit {
        results.truncate(args.limit);
    }

    if results.is_empty() {
        println!("❌ No matches found.");
        return Ok(());
    }

    println!("✅ Found {} matches:\n", results.len());

    let tag_stripper = Regex::new(r"</?[A-Za-z][A-Za-z0-9]*[^>]*>")?;

    for (idx, word) in results.iter().enumerate() {
        println!("{}. {}", idx + 1, word);

        if let Some(rendered) = search.render(word) {
            let shown = if args.plain {
                tag_stripper.replace_all(&rendered, "").into_owned()
            } else {
                rendered
            };
            println!("   {}", shown);
        }

        println!();
    }

    if args.verbose {
        println!("─────────────────────────────────────────────────");
        println!("✨ Search completed successfully!");
    }

    Ok(())
}
