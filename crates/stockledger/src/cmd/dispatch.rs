//! stockledger - Shop inventory bookkeeping.
//!
//! Parses the command line, prepares the data directory and routes the
//! verb to its implementation.
//!
//! # Usage
//!
//! ```bash
//! stockledger buy -p Apples -d 2024-01-01 --price 1.50 -e 2024-06-01
//! stockledger sell -p Apples -s 2024-01-02 --sell-price 2.25
//! stockledger report --now
//! stockledger report-revenue-profit --start-date 2024-01-01 --end-date 2024-01-31
//! stockledger --advance-time 3
//! ```

use crate::cmd::completions::ShellType;
use crate::cmd::report_cmd::{self, ReportDay};
use crate::cmd::trade;
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use rust_decimal::Decimal;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use stockledger_core::{BookingMethod, NaiveDate};
use stockledger_store::{Clock, LedgerStore, StoreConfig, StoreLock};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Usage guide printed by the `help` verb.
pub const USAGE_GUIDE: &str = include_str!("../../usage_guide.txt");

/// Track purchases, sales and inventory of a small shop.
#[derive(Parser, Debug)]
#[command(name = "stockledger")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    generate_completions: Option<ShellType>,

    /// Advance the current day by N days before running the command
    #[arg(
        long,
        value_name = "N",
        global = true,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    advance_time: Option<i64>,

    /// Directory holding bought.csv, sold.csv and current_day.txt
    #[arg(
        long,
        value_name = "DIR",
        env = "STOCKLEDGER_DATA_DIR",
        default_value = ".",
        global = true
    )]
    data_dir: PathBuf,

    /// Which unsold batch a sale consumes: fifo or lifo
    #[arg(
        long,
        value_name = "METHOD",
        env = "STOCKLEDGER_BOOKING",
        default_value = "fifo",
        global = true
    )]
    booking: BookingMethod,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// The command to run
    #[command(subcommand)]
    verb: Option<Verb>,
}

#[derive(Subcommand, Debug)]
enum Verb {
    /// Print the usage guide
    Help,
    /// Record a purchased batch
    Buy {
        /// Name of the product
        #[arg(short = 'p', long = "product-name", value_name = "NAME")]
        product: String,
        /// Date when bought (YYYY-MM-DD)
        #[arg(short = 'd', long = "buy-date", value_name = "DATE")]
        date: NaiveDate,
        /// Buying price of the product
        #[arg(long, value_name = "PRICE")]
        price: Decimal,
        /// Expiration date of the product (YYYY-MM-DD)
        #[arg(short = 'e', long = "expiration-date", value_name = "DATE")]
        expiration: NaiveDate,
    },
    /// Sell an unsold batch of a product
    Sell {
        /// Name of the product
        #[arg(short = 'p', long = "product-name", value_name = "NAME")]
        product: String,
        /// Date of selling (YYYY-MM-DD)
        #[arg(
            short = 's',
            long = "sell_date",
            visible_alias = "sell-date",
            value_name = "DATE"
        )]
        sell_date: NaiveDate,
        /// Selling price of the product
        #[arg(long = "sell-price", value_name = "PRICE")]
        sell_price: Decimal,
    },
    /// Show the batches bought on the current day or the day before
    Report(ReportArgs),
    /// Show revenue and profit over a date range
    ReportRevenueProfit {
        /// First day of the range (YYYY-MM-DD), included
        #[arg(long, value_name = "DATE")]
        start_date: NaiveDate,
        /// Last day of the range (YYYY-MM-DD), included
        #[arg(long, value_name = "DATE")]
        end_date: NaiveDate,
    },
    /// Set the current day
    SetDay {
        /// The new current day (YYYY-MM-DD)
        #[arg(value_name = "DATE")]
        day: NaiveDate,
    },
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct ReportArgs {
    /// Report inventory for the current day
    #[arg(long)]
    now: bool,
    /// Report inventory for the previous day
    #[arg(long)]
    yesterday: bool,
}

impl ReportArgs {
    const fn day(&self) -> ReportDay {
        if self.yesterday {
            ReportDay::Yesterday
        } else {
            ReportDay::Now
        }
    }
}

/// Main entry point for the CLI.
pub fn main() -> ExitCode {
    main_with_name("stockledger")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();

    // Handle shell completion generation
    if let Some(shell) = args.generate_completions {
        crate::cmd::completions::generate_completions::<Args>(shell, bin_name);
        return ExitCode::SUCCESS;
    }

    if args.verb.is_none() && args.advance_time.is_none() {
        Args::command()
            .error(
                ErrorKind::MissingSubcommand,
                format!("a command is required; run `{bin_name} help` for the usage guide"),
            )
            .exit();
    }

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` selects the level; `--verbose` forces debug output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut stdout = io::stdout().lock();

    // The guide needs no store, so it never touches the data directory.
    if matches!(args.verb, Some(Verb::Help)) && args.advance_time.is_none() {
        stdout.write_all(USAGE_GUIDE.as_bytes())?;
        return Ok(());
    }

    let config = StoreConfig::new(&args.data_dir);
    fs::create_dir_all(config.data_dir()).with_context(|| {
        format!(
            "failed to create data directory {}",
            config.data_dir().display()
        )
    })?;

    // Held until the command returns.
    let _lock = StoreLock::acquire(config.lock_path())?;

    let clock = Clock::from_config(&config);
    let store = LedgerStore::from_config(&config);
    store
        .ensure_initialized()
        .context("failed to initialize stores")?;

    if let Some(days) = args.advance_time {
        let day = clock
            .advance_time(days)
            .context("failed to advance time")?;
        info!(days, %day, "advanced time");
        if args.verb.is_none() {
            writeln!(stdout, "Current day is now {day}")?;
        }
    }

    let Some(verb) = &args.verb else {
        return Ok(());
    };

    match verb {
        Verb::Help => {
            stdout.write_all(USAGE_GUIDE.as_bytes())?;
        }
        Verb::Buy {
            product,
            date,
            price,
            expiration,
        } => {
            trade::buy(&store, product, *date, *price, *expiration, &mut stdout)?;
        }
        Verb::Sell {
            product,
            sell_date,
            sell_price,
        } => {
            trade::sell(
                &store,
                product,
                *sell_date,
                *sell_price,
                args.booking,
                &mut stdout,
            )?;
        }
        Verb::Report(report) => {
            report_cmd::report_inventory(&clock, &store, report.day(), &mut stdout)?;
        }
        Verb::ReportRevenueProfit {
            start_date,
            end_date,
        } => {
            report_cmd::report_revenue_profit(&store, *start_date, *end_date, &mut stdout)?;
        }
        Verb::SetDay { day } => {
            clock
                .set_current_day(*day)
                .context("failed to set current day")?;
            info!(%day, "set current day");
            writeln!(stdout, "Current day is now {day}")?;
        }
    }

    Ok(())
}
