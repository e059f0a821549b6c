use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ledgerline_core::to_csv;
use ledgerline_extract::{ParseOutcome, fetch_pages_ordered, join_pages, parse_statement};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ledgerline", version, about = "Bank statement text to CSV converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert extracted statement text (one file per page, in page order) to CSV
    Convert {
        /// Page text files, in page order
        #[arg(required = true)]
        pages: Vec<PathBuf>,

        /// Output CSV path (default: first page file with a .csv extension)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Parse and print the first rows without writing a file
    Preview {
        /// Page text files, in page order
        #[arg(required = true)]
        pages: Vec<PathBuf>,

        /// Number of rows to print (default: 10)
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { pages, output } => convert(pages, output).await,
        Command::Preview { pages, limit } => preview(pages, limit).await,
    }
}

/// Read every page file concurrently and join the texts in page order.
async fn load_pages(paths: &[PathBuf]) -> Result<String> {
    for path in paths {
        if !path.exists() {
            bail!("page file not found: {}", path.display());
        }
    }

    let texts = fetch_pages_ordered(paths.len(), |index| {
        let path = paths[index].clone();
        async move {
            tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))
        }
    })
    .await?;

    Ok(join_pages(&texts))
}

async fn convert(pages: Vec<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let text = load_pages(&pages).await?;
    let outcome = parse_statement(&text)?;
    let csv = to_csv(&outcome.transactions)?;

    let out_path = output.unwrap_or_else(|| pages[0].with_extension("csv"));
    tokio::fs::write(&out_path, csv.as_bytes())
        .await
        .with_context(|| format!("writing {}", out_path.display()))?;

    print_summary(&outcome, pages.len());
    println!("Wrote {}", out_path.display());
    Ok(())
}

async fn preview(pages: Vec<PathBuf>, limit: usize) -> Result<()> {
    let text = load_pages(&pages).await?;
    let outcome = parse_statement(&text)?;
    let csv = to_csv(&outcome.transactions)?;

    for line in csv.lines().take(limit + 1) {
        println!("{line}");
    }
    let hidden = outcome.transactions.len().saturating_sub(limit);
    if hidden > 0 {
        println!("... {hidden} more row(s)");
    }

    print_summary(&outcome, pages.len());
    Ok(())
}

fn print_summary(outcome: &ParseOutcome, page_count: usize) {
    println!(
        "Parsed {} transaction(s) from {} page(s)",
        outcome.transactions.len(),
        page_count
    );

    let dates: Vec<NaiveDate> = outcome
        .transactions
        .iter()
        .filter_map(|t| t.date_parsed())
        .collect();
    if let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) {
        println!(
            "Statement spans {} to {}",
            first.format("%d-%b-%Y"),
            last.format("%d-%b-%Y")
        );
    }

    if outcome.reconciliation_failures > 0 {
        eprintln!(
            "warning: {} row(s) did not reconcile against the running balance; \
             their amounts were recorded as withdrawals",
            outcome.reconciliation_failures
        );
    }
}
