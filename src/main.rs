use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fractional_bakery::config::BakeConfig;
use fractional_bakery::output::*;
use fractional_bakery::source::cldr::CLDR_UND;
use fractional_bakery::source::IcuCharacters;
use fractional_bakery::{bake, Result};

/// аргументы командной строки
#[derive(Parser, Debug)]
#[clap(
    name = "fractional_bakery",
    about = "Builds the fractional collation table from the CLDR root collation."
)]
struct Args
{
    /// TOML file with the compaction parameters (defaults are used if omitted).
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory to which the table, the summary and the reports are written.
    #[clap(short = 'o', long, default_value = "./data")]
    out: PathBuf,

    /// Skip the exhaustive self-check of implicit primaries.
    #[clap(long)]
    skip_implicit_check: bool,
}

fn main() -> ExitCode
{
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// запечь таблицу и записать результаты, false - таблица содержит нарушения
fn run(args: &Args) -> Result<bool>
{
    let config = match &args.config {
        Some(path) => BakeConfig::load(path)?,
        None => BakeConfig::default(),
    };

    let bake = bake(&*CLDR_UND, &IcuCharacters, &config, !args.skip_implicit_check)?;

    write_fractional(args.out.join("fractional_uca.txt"), &bake.table)?;
    write_summary(args.out.join("fractional_summary.txt"), &bake.table)?;
    write_validation(args.out.join("validation.txt"), &bake.report)?;
    write_stats(args.out.join("stats.txt"), &bake.table.stats)?;

    println!("entries: {}", bake.table.entries.len());
    println!(
        "primary: {}, secondary: {}",
        bake.table.primary.len(),
        bake.table.secondary.len()
    );
    println!("well-formedness errors: {}", bake.report.error_count());

    Ok(bake.report.is_well_formed())
}
