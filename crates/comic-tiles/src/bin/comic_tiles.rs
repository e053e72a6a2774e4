//! Command-line front end for comic panel detection.
//!
//! ```bash
//! # Detect tiles for every image under ./comics, four workers
//! comic-tiles --root ./data detect --jobs 4
//!
//! # Combine annotated and detected records into ./data/tiles
//! comic-tiles --root ./data merge
//!
//! # List comics that still need a manual annotation
//! comic-tiles --root ./data --ids 0..500 pending
//! ```

use std::error::Error;
use std::ops::Range;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use comic_tiles::batch::{detect_all, DetectOptions};
use comic_tiles::report::{BatchReport, PendingReview};
use comic_tiles::store::{format_id, merge_all, pending_reviews, DataLayout, MAX_COMICS};
use comic_tiles::{DetectorParams, TileDetector};

type CliResult<T> = Result<T, Box<dyn Error>>;

/// Comic panel detection with a manual-annotation fallback.
#[derive(Parser, Debug)]
#[command(name = "comic-tiles", version, about, long_about = None)]
struct Cli {
    /// Data root containing comics/, tiles_detected/, tiles_annotated/ and tiles/
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Half-open id range to process, e.g. `0..10000`
    #[arg(long, global = true, value_parser = parse_id_range, default_value = "0..10000")]
    ids: Range<u32>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = parse_level, default_value = "info")]
    log_level: LevelFilter,

    /// Emit JSON log lines (requires the `tracing` feature)
    #[cfg(feature = "tracing")]
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run automatic tile detection and write tiles_detected/<id>.txt
    Detect {
        /// JSON file with detector parameters; missing fields keep defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Worker threads (default: one per core)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Leave ids that already have a detection record untouched
        #[arg(long)]
        skip_existing: bool,

        /// Write a JSON run report here
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Combine annotated and detected records into tiles/<id>.txt
    Merge {
        /// Write a JSON run report here
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List comics that still need a manual annotation
    Pending {
        /// Write a JSON run report here
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn parse_id_range(s: &str) -> Result<Range<u32>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got `{s}`"))?;
    let start = start
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad range start `{start}`: {e}"))?;
    let end = end
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad range end `{end}`: {e}"))?;
    if start > end {
        return Err(format!("empty range {start}..{end}"));
    }
    if end > MAX_COMICS {
        return Err(format!("range end {end} exceeds {MAX_COMICS}"));
    }
    Ok(start..end)
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("unknown log level `{s}`"))
}

fn init_logging(cli: &Cli) -> CliResult<()> {
    #[cfg(feature = "tracing")]
    {
        comic_tiles::core::init_tracing(cli.log_level, cli.json_logs);
        let _ = tracing_log::LogTracer::init();
        log::set_max_level(cli.log_level);
        Ok(())
    }
    #[cfg(not(feature = "tracing"))]
    {
        comic_tiles::core::init_with_level(cli.log_level).map_err(|e| e.to_string())?;
        Ok(())
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let layout = DataLayout::new(&cli.root);
    let mut report = BatchReport::new(&cli.root, cli.ids.clone());
    let report_path = match cli.command {
        Command::Detect {
            config,
            jobs,
            skip_existing,
            report: report_path,
        } => {
            let params = match config {
                Some(path) => DetectorParams::load_json(&path)?,
                None => DetectorParams::default(),
            };
            let detector = TileDetector::new(params.clone())?;
            let options = DetectOptions { skip_existing };

            let pool = {
                let mut builder =
                    rayon::ThreadPoolBuilder::new().thread_name(|i| format!("worker-{i}"));
                if let Some(n) = jobs {
                    builder = builder.num_threads(n);
                }
                builder.build()?
            };
            info!(
                "detecting tiles for ids {}..{} on {} workers",
                cli.ids.start,
                cli.ids.end,
                pool.current_num_threads()
            );
            let summary =
                pool.install(|| detect_all(&layout, &detector, cli.ids.clone(), options));

            println!(
                "{} comics analyzed, {} valid ({:.0}%), {} skipped",
                summary.analyzed,
                summary.valid,
                100.0 * summary.valid_fraction(),
                summary.skipped
            );
            report.params = Some(params);
            report.detection = Some(summary);
            report_path
        }
        Command::Merge {
            report: report_path,
        } => {
            let summary = merge_all(&layout, cli.ids.clone());
            println!(
                "{} records merged ({} annotated, {} detected), {} without usable tiles",
                summary.merged(),
                summary.annotated,
                summary.detected,
                summary.insufficient
            );
            report.merge = Some(summary);
            report_path
        }
        Command::Pending {
            report: report_path,
        } => {
            let pending = pending_reviews(&layout, cli.ids.clone());
            for (id, status) in &pending {
                println!("{} {:?}", format_id(*id), status);
            }
            info!("{} comics need annotation", pending.len());
            report.pending = Some(
                pending
                    .into_iter()
                    .map(|(id, status)| PendingReview { id, status })
                    .collect(),
            );
            report_path
        }
    };

    if let Some(path) = report_path {
        report.write_json(&path)?;
        info!("report written to {}", path.display());
    }
    Ok(())
}
