use boole_rs::{conjunctive_normal_form, negation_normal_form, parse, render};
use clap::Parser;

/// Rewrite a postfix formula into its normal forms.
#[derive(Parser)]
struct Args {
    /// Formula in postfix notation, e.g. "AB&C|!"
    formula: String,

    /// Also print the parsed expression tree
    #[arg(long)]
    tree: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    if args.tree {
        let tree = parse(&args.formula)?;
        println!("{}", render(&tree));
    }

    println!("formula = {}", args.formula);
    println!("nnf     = {}", negation_normal_form(&args.formula)?);
    println!("cnf     = {}", conjunctive_normal_form(&args.formula)?);

    Ok(())
}
