//! Command-line shell: parse the cache configuration, replay a trace file, print the report.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use cache_sim::config::{CacheConfig, Mapping, Organization};
use cache_sim::simulator::Simulator;
use cache_sim::trace::TraceReader;
use clap::Parser;
use log::info;

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for simplelog::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => simplelog::LevelFilter::Off,
            LogLevel::Error => simplelog::LevelFilter::Error,
            LogLevel::Warn => simplelog::LevelFilter::Warn,
            LogLevel::Info => simplelog::LevelFilter::Info,
            LogLevel::Debug => simplelog::LevelFilter::Debug,
            LogLevel::Trace => simplelog::LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cache size in bytes (e.g. 128-4096).
    size: u32,

    /// Cache mapping: `dm` (direct-mapped) or `fa` (fully associative).
    mapping: Mapping,

    /// Cache organization: `uc` (unified) or `sc` (split).
    organization: Organization,

    /// Trace file with one `<I|D> <hex-address>` access per line; `-` reads stdin.
    #[arg(short, long, default_value = "mem_trace.txt")]
    trace: PathBuf,

    /// Echo every access before the report.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Switch log level.
    #[arg(value_enum, long = "loglevel", default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn open_trace(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level.into(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = CacheConfig::new(args.size, args.mapping, args.organization);
    let mut sim = Simulator::from_config(&config)?;
    info!(
        "simulating {} byte {} {} cache, trace {}",
        config.capacity_bytes,
        config.mapping,
        config.organization,
        args.trace.display()
    );

    let reader = open_trace(&args.trace).map_err(|e| {
        color_eyre::eyre::eyre!("unable to open trace file {}: {e}", args.trace.display())
    })?;
    for record in TraceReader::new(reader) {
        let record = record?;
        if args.verbose {
            println!("{record}");
        }
        sim.access(record)?;
    }

    let stats = sim.read();
    info!("{} misses", stats.misses());
    println!();
    print!("{stats}");
    Ok(())
}
