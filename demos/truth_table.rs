//! Prints the truth table of a propositional formula.
//!
//! Run with:
//! ```bash
//! cargo run --example truth_table -- "(p and q) or (not r -> s)"
//! ```

use clap::Parser;
use simplelog::LevelFilter;
use truth_table::table::{TruthTable, EXAMPLES};

#[derive(Debug, Parser)]
#[command(author, version, about = "Truth table generator for propositional logic")]
struct Cli {
    /// Expression over the variables p..y (words are joined with spaces)
    expression: Vec<String>,

    /// Only show the variables and the final column
    #[arg(long)]
    no_subexpressions: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if cli.expression.is_empty() {
        println!("No expression given. Try one of:");
        for example in EXAMPLES {
            println!("  {}", example);
        }
        return Ok(());
    }

    let table = TruthTable::generate(&cli.expression.join(" "))?;
    print_table(&table, !cli.no_subexpressions);

    println!();
    println!(
        "{} variable{}, {} combination{}, {} subexpression{}",
        table.num_vars(),
        plural(table.num_vars()),
        table.num_rows(),
        plural(table.num_rows()),
        table.subexpressions().len(),
        plural(table.subexpressions().len()),
    );
    println!("{} is a {}", table.expression(), table.classify());

    Ok(())
}

fn print_table(table: &TruthTable, with_subexpressions: bool) {
    let num_vars = table.num_vars();
    let last = table.num_columns() - 1;
    let shown = |i: usize| with_subexpressions || i < num_vars || i == last;

    let headers = table.headers();
    let widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(1)).collect();

    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .enumerate()
        .filter(|&(i, _)| shown(i))
        .map(|(_, (h, &w))| format!("{:^w$}", h, w = w))
        .collect();
    println!("| {} |", header.join(" | "));

    let rule: Vec<String> = widths
        .iter()
        .enumerate()
        .filter(|&(i, _)| shown(i))
        .map(|(_, &w)| "-".repeat(w))
        .collect();
    println!("|-{}-|", rule.join("-|-"));

    for row in table.rows() {
        let cells: Vec<String> = row
            .cells()
            .zip(&widths)
            .enumerate()
            .filter(|&(i, _)| shown(i))
            .map(|(_, (cell, &w))| format!("{:^w$}", cell.to_string(), w = w))
            .collect();
        println!("| {} |", cells.join(" | "));
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
