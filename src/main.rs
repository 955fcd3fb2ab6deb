use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use ordered_list::{AbsentLast, ListError, OrderedBoundedList};

mod logger;
mod version;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementKind {
    Int,
    Text,
    OptInt,
}

impl ElementKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "int" => Some(Self::Int),
            "text" => Some(Self::Text),
            "opt-int" => Some(Self::OptInt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Text => "text",
            Self::OptInt => "opt-int",
        }
    }

    pub fn all_kinds() -> &'static [ElementKind] {
        &[ElementKind::Int, ElementKind::Text, ElementKind::OptInt]
    }
}

fn available_kinds() -> String {
    ElementKind::all_kinds()
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn kind_help_text() -> String {
    format!(
        "Element type of the values (available: {}; '-' is absent for opt-int)",
        available_kinds()
    )
}

fn parse_kind(s: &str) -> Result<ElementKind, String> {
    ElementKind::from_str(s).ok_or_else(|| {
        format!(
            "Invalid kind '{}'. Available kinds: {}",
            s,
            available_kinds()
        )
    })
}

#[derive(Parser)]
#[command(name = "ordered-list")]
#[command(about = "Insert values into a fixed-capacity sorted list and print the result")]
#[command(version = version::get_version())]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of elements the list can hold
    #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
    capacity: i64,

    #[arg(short, long, default_value = "int", value_parser = parse_kind, help = kind_help_text())]
    kind: ElementKind,

    /// Label printed in front of the element count
    #[arg(short, long, default_value = "elements")]
    label: String,

    /// Print the list as JSON instead of one element per line
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Values to insert, in order
    #[arg(allow_hyphen_values = true)]
    values: Vec<String>,
}

#[derive(Parser)]
pub enum Commands {
    /// Show detailed version information
    VersionInfo,
}

/// Fill a list from the raw values; values that do not fit are skipped.
fn fill<T>(capacity: i64, values: &[String]) -> Result<OrderedBoundedList<T>>
where
    T: Ord + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut list = OrderedBoundedList::with_signed_capacity(capacity)?;
    for raw in values {
        let value = raw
            .parse::<T>()
            .with_context(|| format!("cannot parse value '{}'", raw))?;
        if let Err(e) = list.add(value) {
            warn!("skipping '{}': {}", raw, e);
        }
    }
    info!(
        "inserted {} of {} values (capacity {})",
        list.size(),
        values.len(),
        list.capacity()
    );
    Ok(list)
}

/// Write the list followed by its describe line.
fn render<T, W>(
    writer: &mut W,
    list: &OrderedBoundedList<T>,
    json: bool,
    label: &str,
) -> Result<()>
where
    T: Display + Serialize,
    W: Write,
{
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&list.snapshot())?)?;
    } else {
        for position in 0..list.size() {
            let position = isize::try_from(position)?;
            writeln!(writer, "{}", list.element_at(position)?)?;
        }
    }
    list.describe_to(writer, label)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mut out = io::stdout().lock();
    let (capacity, values) = (cli.capacity, cli.values.as_slice());
    let (json, label) = (cli.json, cli.label.as_str());
    match cli.kind {
        ElementKind::Int => {
            let list = fill::<i64>(capacity, values)?;
            render(&mut out, &list, json, label)
        }
        ElementKind::Text => {
            let list = fill::<String>(capacity, values)?;
            render(&mut out, &list, json, label)
        }
        ElementKind::OptInt => {
            let list = fill::<AbsentLast<i64>>(capacity, values)?;
            render(&mut out, &list, json, label)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        match command {
            Commands::VersionInfo => {
                version::print_header_info();
                return Ok(());
            }
        }
    }

    logger::init_logger(logger::level_for(cli.debug))?;

    run(&cli)
}
