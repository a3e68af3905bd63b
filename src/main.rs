use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use katas::objects::selector::SelectorBuilder;
use katas::objects::{Rectangle, from_json, to_json};
use katas::puzzles::dominoes::Domino;
use katas::puzzles::{
    can_make_row, compass_points, expand, extract_ranges, try_expand, zigzag_matrix,
};

/// Run the katas from the command line.
#[derive(Parser)]
#[command(name = "katas", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print a few example selectors.
    Selector,

    /// Print every expansion of a brace pattern.
    Expand {
        pattern: String,

        /// Reject patterns with unmatched braces.
        #[arg(long)]
        strict: bool,
    },

    /// Print the 32 points of the compass.
    Compass,

    /// Print the zigzag matrix of the given size.
    Zigzag { n: usize },

    /// Check whether tiles, written as A:B, can be laid in a row.
    Dominoes {
        #[arg(value_parser = parse_domino)]
        tiles: Vec<Domino>,
    },

    /// Compress a list of integers into range notation.
    Ranges {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },

    /// Parse a rectangle from JSON and print it with its area.
    Json { json: String },
}

fn parse_domino(s: &str) -> Result<Domino> {
    let Some((a, b)) = s.split_once(':') else {
        bail!("expected a tile like 3:4, got {s:?}");
    };
    Ok(Domino(a.parse()?, b.parse()?))
}

fn selector() -> Result<()> {
    let b = SelectorBuilder::new();

    println!("{}", b.id("main")?.class("container")?.class("editable")?);
    println!("{}", b.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?);

    let combined = SelectorBuilder::combine(
        &b.element("div")?.id("main")?.class("container")?.class("draggable")?,
        "+",
        &SelectorBuilder::combine(
            &b.element("table")?.id("data")?,
            "~",
            &SelectorBuilder::combine(
                &b.element("tr")?.pseudo_class("nth-of-type(even)")?,
                " ",
                &b.element("td")?.pseudo_class("nth-of-type(even)")?,
            ),
        ),
    );
    println!("{combined}");

    match b.id("main")?.element("div") {
        Ok(selector) => println!("{selector}"),
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Selector => selector()?,
        Commands::Expand { pattern, strict } => {
            let expansions = if strict { try_expand(pattern)? } else { expand(pattern) };
            for expansion in expansions {
                println!("{expansion}");
            }
        }
        Commands::Compass => {
            for point in compass_points() {
                println!("{:<5} {:>6.2}", point.abbreviation, point.azimuth);
            }
        }
        Commands::Zigzag { n } => {
            let width = n.saturating_mul(n).saturating_sub(1).to_string().len();
            for row in zigzag_matrix(n) {
                let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
                println!("{}", cells.join(" "));
            }
        }
        Commands::Dominoes { tiles } => println!("{}", can_make_row(&tiles)),
        Commands::Ranges { nums } => println!("{}", extract_ranges(&nums)),
        Commands::Json { json } => {
            let rectangle: Rectangle = from_json(&json).context("expected a rectangle")?;
            println!("{} (area {})", to_json(&rectangle)?, rectangle.area());
        }
    }

    Ok(())
}
