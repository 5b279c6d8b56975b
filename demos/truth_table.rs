use boole_rs::{eval_formula, print_truth_table, variables};
use clap::Parser;

/// Print the truth table of a postfix formula.
#[derive(Parser)]
struct Args {
    /// Formula in postfix notation, e.g. "AB&C|"
    formula: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    let vars = variables(&args.formula);
    if vars.is_empty() {
        println!("{} = {}", args.formula, eval_formula(&args.formula)?);
    } else {
        print_truth_table(&args.formula)?;
    }

    Ok(())
}
