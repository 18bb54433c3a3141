use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use log::{
    error,
    info
};

use ridership::chart::chart::build_chart;
use ridership::chart::chartoptions::ChartOptions;
use ridership::chart::charterror::ChartError;
use ridership::chart::counterrecord::{
    accumulate,
    IntervalRecord
};

fn run(options_path: &str, records_path: &str) -> Result<(), ChartError> {
    let options = ChartOptions::from_reader(options_path)?;
    let reader = BufReader::new(File::open(records_path)?);
    let mut intervals: Vec<IntervalRecord> = serde_json::from_reader(reader)?;
    intervals.sort_by(|a, b| a.ending.total_cmp(&b.ending));
    info!("{} interval records from {}", intervals.len(), records_path);

    let records = accumulate(&intervals, options.group);
    let chart = build_chart(&records, &options)?;
    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: ridership <options.json> <records.json>");
        return ExitCode::FAILURE;
    }
    match run(&args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
