//! Module blastcmp
//! blastcmp firstblast.xml secondblast.xml \[--identity \[-i\] min\] \[--output \[-o\] file\] \[--preview \[-p\]\] \[--first-name \[-f\] name\] \[--second-name \[-s\] name\] \[--max-hits nb\]
//!
//! - the two arguments are the blast xml reports to compare.
//!
//! --identity \[-i\] : minimal percent identity (0..=100) for a hit to be kept, boundary included. Default is 30.
//!
//! --output \[-o\] : csv file where to save the matches. No file is written without this option.
//!
//! --preview \[-p\] : prints the matches as a table on stdout.
//!
//! --first-name \[-f\] and --second-name \[-s\] : display names of the two reports, used in table and csv headers.
//!
//! --max-hits : bound on the number of hits scanned per report. Scanning stops once the bound is
//!         reached so later hits are never seen even if they would have matched : completeness is
//!         traded for speed on large reports. Unbounded by default.
//!
//! Matches are ranked by the first report's identity, descending. No common protein between the
//! two reports is reported as an informational message, not an error.

use clap::{Arg, ArgAction, ArgMatches, Command};

use std::path::PathBuf;
use std::time::SystemTime;

use cpu_time::ProcessTime;

// for logging (debug mostly, switched at compile time in cargo.toml)
use env_logger::Builder;

// our crate
use blastcmp::answer::{print_table, write_csv};
use blastcmp::error::BlastError;
use blastcmp::extract::{extract, ExtractionMap};
use blastcmp::files::read_report;
use blastcmp::matcher::compare;
use blastcmp::parameters::ExtractParams;

// install a logger facility
pub fn init_log() -> u64 {
    Builder::from_default_env().init();
    println!("\n ************** initializing logger *****************\n");
    return 1;
}

/// decoded command line
struct CliParams {
    first_path: PathBuf,
    second_path: PathBuf,
    extract_params: ExtractParams,
    output: Option<PathBuf>,
    preview: bool,
    first_name: String,
    second_name: String,
} // end of CliParams

#[doc(hidden)]
fn decode_args(matches: &ArgMatches) -> Result<CliParams, anyhow::Error> {
    log::debug!("in decode_args");
    //
    let first_path = PathBuf::from(matches.get_one::<String>("first_blast").unwrap());
    let second_path = PathBuf::from(matches.get_one::<String>("second_blast").unwrap());
    //
    let min_identity = matches
        .get_one::<String>("identity")
        .unwrap()
        .parse::<u32>()
        .map_err(|_| anyhow::anyhow!("identity must be an integer"))?;
    if min_identity > 100 {
        return Err(anyhow::anyhow!(
            "identity must be a percentage in 0..=100, got {}",
            min_identity
        ));
    }
    //
    let max_hits = match matches.get_one::<String>("max_hits") {
        Some(nb) => {
            let max = nb
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("max-hits must be an integer"))?;
            log::info!("scanning at most {} hits per report", max);
            Some(max)
        }
        None => None,
    };
    //
    let output = matches.get_one::<String>("output").map(PathBuf::from);
    let preview = matches.get_flag("preview");
    let first_name = matches.get_one::<String>("first_name").unwrap().clone();
    let second_name = matches.get_one::<String>("second_name").unwrap().clone();
    //
    Ok(CliParams {
        first_path,
        second_path,
        extract_params: ExtractParams::new(min_identity, max_hits),
        output,
        preview,
        first_name,
        second_name,
    })
} // end of decode_args

// the whole pipeline of one side : read, parse, extract
fn extract_side(path: &PathBuf, params: &ExtractParams) -> Result<ExtractionMap, BlastError> {
    let report = read_report(path)?;
    extract(&report, params)
} // end of extract_side

//============================================================================================

fn main() {
    let _ = init_log();
    //
    let matches = Command::new("blastcmp")
        .version("0.1.0")
        .about("Compare two blast xml reports by percent identity")
        .arg(
            Arg::new("first_blast")
                .help("first blast xml report to compare")
                .required(true)
                .value_name("FIRST_BLAST"),
        )
        .arg(
            Arg::new("second_blast")
                .help("second blast xml report to compare")
                .required(true)
                .value_name("SECOND_BLAST"),
        )
        .arg(
            Arg::new("identity")
                .short('i')
                .long("identity")
                .help("minimal percent identity for a hit to be kept")
                .default_value("30")
                .value_name("IDENTITY"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("csv file where to save the matches")
                .value_name("OUTPUT"),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .help("preview the matches as a table on stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("first_name")
                .short('f')
                .long("first-name")
                .help("display name of the first report")
                .default_value("First blast")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("second_name")
                .short('s')
                .long("second-name")
                .help("display name of the second report")
                .default_value("Second blast")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("max_hits")
                .long("max-hits")
                .help("scan at most that many hits per report, trading completeness for speed")
                .value_name("MAX_HITS"),
        )
        .get_matches();
    //
    let cli = match decode_args(&matches) {
        Ok(cli) => cli,
        Err(err) => {
            log::error!("bad arguments : {}", err);
            println!("bad arguments : {}", err);
            std::process::exit(1);
        }
    };
    println!(
        "comparing with at least {} % identity",
        cli.extract_params.get_min_identity()
    );
    //
    let start_t = SystemTime::now();
    let cpu_start = ProcessTime::now();
    // the two sides share no state, extract them in parallel
    let (first_res, second_res) = rayon::join(
        || extract_side(&cli.first_path, &cli.extract_params),
        || extract_side(&cli.second_path, &cli.extract_params),
    );
    let first = first_res.unwrap_or_else(|err| {
        log::error!("extraction failed : {}", err);
        println!("{}", err);
        std::process::exit(1);
    });
    let second = second_res.unwrap_or_else(|err| {
        log::error!("extraction failed : {}", err);
        println!("{}", err);
        std::process::exit(1);
    });
    log::info!(
        "extraction sys time(s) {:?}, cpu time(s) {:?}",
        start_t.elapsed().unwrap().as_secs(),
        cpu_start.elapsed().as_secs()
    );
    //
    let records = compare(&first, &second);
    if records.is_empty() {
        println!("no common protein between the two reports");
        return;
    }
    println!("{} matches", records.len());
    //
    if cli.preview {
        print_table(&records, &cli.first_name, &cli.second_name);
    }
    if let Some(output) = &cli.output {
        if let Err(err) = write_csv(output, &records, &cli.first_name, &cli.second_name) {
            log::error!("csv dump failed : {}", err);
            println!("{}", err);
            std::process::exit(1);
        }
        println!("output saved in {:?}", output);
    }
} // end of main
