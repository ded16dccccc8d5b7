//! Stock comparison CLI
//!
//! Renders comparative commentary for two ticker symbols, in English or
//! Chinese, and runs the FVIFA calculator.
//!
//! # Usage
//!
//! ```bash
//! export FINANCIAL_MODELING_PREP_API_KEY="your-key"
//!
//! stock-compare compare AAPL MSFT
//! stock-compare compare BABA JD --locale zh --json
//! stock-compare fvifa --rate 6.4 --periods 10
//! RUST_LOG=debug stock-compare --log-format json compare KO PEP
//! ```

use anyhow::bail;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use compare_core::calculators::evaluate_fvifa;
use compare_core::{
    CommentaryEngine, Comparator, CompareConfig, CompareError, ComparisonPage, FactSheet,
    FmpClient, FvifaOutcome, Label, Locale, Section, Symbol,
};
use compare_utils::{LogFormat, init_tracing};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stock-compare", version)]
#[command(about = "Side-by-side stock commentary in English and Chinese", long_about = None)]
struct Cli {
    /// Log output format: text or json (level via RUST_LOG)
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two stocks
    Compare {
        /// First ticker symbol
        #[arg(value_parser = parse_symbol)]
        symbol_a: Symbol,

        /// Second ticker symbol
        #[arg(value_parser = parse_symbol)]
        symbol_b: Symbol,

        /// Output locale: en or zh
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Financial Modeling Prep API key (defaults to FINANCIAL_MODELING_PREP_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Override the API endpoint root
        #[arg(long)]
        base_url: Option<String>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Future value interest factor of an annuity
    Fvifa {
        /// Interest rate in percent, e.g. 6.4
        #[arg(long, allow_hyphen_values = true)]
        rate: String,

        /// Number of periods
        #[arg(long, allow_hyphen_values = true)]
        periods: String,

        /// Output locale: en or zh
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_symbol(raw: &str) -> Result<Symbol, CompareError> {
    Symbol::new(raw)
}

fn fact_table(sheet: &FactSheet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(sheet.header().to_vec());

    for row in &sheet.rows {
        table.add_row(vec![
            row.label.as_str(),
            row.value_a.as_str(),
            row.value_b.as_str(),
        ]);
    }
    table
}

fn print_section(section: &Section) {
    println!("## {}\n", section.heading());
    match section {
        Section::Available {
            paragraphs,
            fact_sheet,
            ..
        } => {
            for paragraph in paragraphs {
                println!("{paragraph}\n");
            }
            println!("{}\n", fact_table(fact_sheet));
        }
        Section::Unavailable { message, .. } => println!("{message}\n"),
    }
}

fn print_page(page: &ComparisonPage) {
    println!("# {}\n", page.title);
    println!("{}\n", page.intro);
    for section in &page.sections {
        print_section(section);
    }
}

async fn compare(
    symbol_a: Symbol,
    symbol_b: Symbol,
    locale: Option<Locale>,
    api_key: Option<String>,
    base_url: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut builder = CompareConfig::builder();
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    let config = builder.with_env_api_key().build()?;
    let locale = locale.unwrap_or(config.default_locale);

    let comparator = Comparator::new(Arc::new(FmpClient::new(&config)?))?;
    info!(a = %symbol_a, b = %symbol_b, %locale, "Comparing stocks");

    let page = comparator.page(&symbol_a, &symbol_b, locale).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&page);
    }
    Ok(())
}

fn fvifa(rate: &str, periods: &str, locale: Locale, json: bool) -> anyhow::Result<()> {
    let engine = CommentaryEngine::new()?;
    let outcome = evaluate_fvifa(&engine, rate, periods, locale)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    match outcome {
        FvifaOutcome::Computed {
            factor, summary, ..
        } => {
            if !json {
                println!("## {}\n", Label::FvifaHeading.text(locale));
                println!("{}: {factor}\n", Label::FvifaOutputLabel.text(locale));
                println!("{summary}");
            }
            Ok(())
        }
        FvifaOutcome::Invalid { messages } => bail!("{}", messages.join("\n")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.log_format);

    match cli.command {
        Commands::Compare {
            symbol_a,
            symbol_b,
            locale,
            api_key,
            base_url,
            json,
        } => compare(symbol_a, symbol_b, locale, api_key, base_url, json).await,
        Commands::Fvifa {
            rate,
            periods,
            locale,
            json,
        } => fvifa(&rate, &periods, locale.unwrap_or_default(), json),
    }
}
