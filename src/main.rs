// Rust NDFrame Engine - Main executable
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use log::{error, info};

use rust_ndframe_engine::{
    utils::{init_logging, Config},
    DataFrame, FrameData, FrameOptions, Selector,
};

fn main() {
    let matches = Command::new("ndframe")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Inspect and slice JSON tables with loc / iloc selection")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
                .takes_value(true),
        )
        .subcommand(
            Command::new("info")
                .about("Print shape, columns and dtypes")
                .arg(Arg::new("file").required(true).help("JSON table file")),
        )
        .subcommand(
            Command::new("show")
                .about("Print a selection of the table")
                .arg(Arg::new("file").required(true).help("JSON table file"))
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .value_name("SELECTOR")
                        .help("Row slice (\"0:2\") or comma separated list")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("columns")
                        .short('k')
                        .long("columns")
                        .value_name("SELECTOR")
                        .help("Column slice or comma separated list")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("by-position")
                        .short('p')
                        .long("by-position")
                        .help("Select by position (iloc) instead of label (loc)"),
                ),
        )
        .get_matches();

    // Load configuration
    let config = match matches.value_of("config") {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error loading config file: {}", err);
                Config::default()
            }
        },
        None => Config::default(),
    };

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    if let Err(err) = run(&matches, &config) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches, config: &Config) -> Result<()> {
    match matches.subcommand() {
        Some(("info", sub)) => {
            let df = load_frame(sub, config)?;
            let (rows, columns) = df.shape();
            println!("shape: {} rows x {} columns", rows, columns);
            for (name, dtype) in df.column_names().iter().zip(df.dtypes()) {
                println!("{:<20} {}", name, dtype);
            }
        }
        Some(("show", sub)) => {
            let df = load_frame(sub, config)?;
            let rows = sub.value_of("rows").map_or(Selector::All, Selector::parse);
            let columns = sub.value_of("columns").map_or(Selector::All, Selector::parse);

            let selection = if sub.is_present("by-position") {
                df.iloc(rows, columns)
            } else {
                df.loc(rows, columns)
            }
            .context("selection failed")?;
            println!("{}", selection);
        }
        _ => {
            println!("No command given; run with --help for usage");
        }
    }

    Ok(())
}

/// Read the whole table before building the frame
fn load_frame(matches: &ArgMatches, config: &Config) -> Result<DataFrame> {
    let path = matches.value_of("file").context("missing table file")?;
    let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse {} as JSON", path))?;

    let data = FrameData::from_json(&json)?;
    let df = DataFrame::new(data, FrameOptions::new().settings(config.frame_settings()))
        .with_context(|| format!("cannot build a frame from {}", path))?;

    info!("Loaded {} with shape {:?}", path, df.shape());
    Ok(df)
}
