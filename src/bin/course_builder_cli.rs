use std::{
    env,
    io::{self, Read},
    process,
};

use course_builder::{
    cli::{
        quote::{quote_document, QuoteOptions},
        run_cli,
    },
    config::ConfigManager,
    errors::CourseError,
    init,
    pricing::PriceEngine,
    utils::build_info,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        if let Some(suggestion) = err.suggestion() {
            eprintln!("Did you mean `{suggestion}`?");
        }
        process::exit(1);
    }
}

fn run() -> Result<(), CourseError> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        None => run_cli(),
        Some("quote") => quote(args),
        Some("version" | "--version" | "-V") => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            Err(CourseError::InvalidArgument(format!("unknown command `{other}`")))
        }
    }
}

fn quote(args: impl Iterator<Item = String>) -> Result<(), CourseError> {
    let options = QuoteOptions::parse(args)?;
    let config = ConfigManager::from_env()?.load()?;
    let (variant, engine) = match options.variant {
        Some(variant) => (variant, PriceEngine::new(variant.price_table())),
        None => (config.variant, config.price_engine()?),
    };

    let mut document = String::new();
    io::stdin().read_to_string(&mut document)?;
    let breakdown = quote_document(&document, variant, options.step, &engine)?;
    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage:\n  course_builder_cli                 start the course wizard\n  \
         course_builder_cli quote [--variant standard|extended] [--step N] < selection.json\n  \
         course_builder_cli version"
    );
}
