//! Refresh loop: fetch, render and redraw until interrupted.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use url::Url;

use crate::core::config::Config;
use crate::core::endpoint::{resolve_endpoint, Mode};
use crate::core::fetch::MetricsFetcher;
use crate::core::metrics::{normalize, NormalizationError, NormalizedHost};
use crate::ui::{compose, paint, RenderOptions, TerminalSink};

/// How often the sleep between cycles checks for Ctrl+C
const SLEEP_SLICE: Duration = Duration::from_millis(100);

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Effective settings after merging flags over saved config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    pub host: Option<String>,
    pub url: Url,
    pub interval: Duration,
    pub show_all: bool,
    pub collector: bool,
    pub once: bool,
    pub json: bool,
}

impl WatchOptions {
    pub fn resolve(matches: &ArgMatches, config: &Config) -> Result<Self> {
        let host = matches
            .get_one::<String>("host")
            .cloned()
            .or_else(|| config.host.clone());
        let interval_secs = matches
            .get_one::<u64>("interval")
            .copied()
            .unwrap_or(config.interval_secs)
            .max(1);
        let show_all = flag_pair(matches, "all", "brief").unwrap_or(config.show_all);
        let collector = flag_pair(matches, "collector", "agent").unwrap_or(config.collector);

        let url = resolve_endpoint(host.as_deref(), Mode::from_collector_flag(collector))
            .context("Failed to resolve metrics endpoint")?;

        Ok(Self {
            host,
            url,
            interval: Duration::from_secs(interval_secs),
            show_all,
            collector,
            once: matches.get_flag("once"),
            json: matches.get_flag("json"),
        })
    }

    /// Config holding these settings as the new defaults
    pub fn to_config(&self) -> Config {
        Config {
            host: self.host.clone(),
            interval_secs: self.interval.as_secs(),
            show_all: self.show_all,
            collector: self.collector,
        }
    }
}

/// An on/off flag pair; `None` when neither was given
fn flag_pair(matches: &ArgMatches, on: &str, off: &str) -> Option<bool> {
    if matches.get_flag(on) {
        Some(true)
    } else if matches.get_flag(off) {
        Some(false)
    } else {
        None
    }
}

/// Execute the viewer
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let options = WatchOptions::resolve(matches, &config)?;

    if matches.get_flag("save") {
        options.to_config().save()?;
        if !options.json {
            println!("{}", "✓ Settings saved".green());
        }
    }

    let fetcher = MetricsFetcher::new(options.url.clone()).context("Failed to create HTTP client")?;
    log::debug!("Polling {} every {:?}", options.url, options.interval);

    if options.once {
        return run_once(&fetcher, &options);
    }

    let stop = Arc::new(AtomicBool::new(false));
    let stop_clone = stop.clone();
    ctrlc::set_handler(move || {
        stop_clone.store(true, Ordering::Relaxed);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    if options.json {
        return run_json_output(&fetcher, &options, &stop);
    }

    run_dashboard(&fetcher, &options, &stop)?;

    println!();
    println!("{}", "✓ Goodbye!".green());
    Ok(())
}

fn run_once(fetcher: &MetricsFetcher, options: &WatchOptions) -> Result<()> {
    let outcome = normalize(&fetcher.fetch());
    let timestamp = now_timestamp();

    if options.json {
        println!("{}", serde_json::to_string(&Snapshot::new(&timestamp, &outcome))?);
    } else {
        let report = compose(&outcome, &RenderOptions::new(options.show_all, timestamp));
        println!("{}", paint(&report));
    }
    Ok(())
}

fn run_dashboard(fetcher: &MetricsFetcher, options: &WatchOptions, stop: &AtomicBool) -> Result<()> {
    // Restores the cursor on every exit path
    let mut sink = TerminalSink::stdout()?;

    while !stop.load(Ordering::Relaxed) {
        let started = Instant::now();
        let outcome = normalize(&fetcher.fetch());
        let report = compose(&outcome, &RenderOptions::new(options.show_all, now_timestamp()));
        sink.draw(&paint(&report))?;
        log::debug!("Cycle rendered in {:?}", started.elapsed());

        sleep_interruptible(options.interval, stop);
    }

    Ok(())
}

/// Run in JSON output mode (for scripting)
fn run_json_output(fetcher: &MetricsFetcher, options: &WatchOptions, stop: &AtomicBool) -> Result<()> {
    while !stop.load(Ordering::Relaxed) {
        let outcome = normalize(&fetcher.fetch());
        let timestamp = now_timestamp();
        println!("{}", serde_json::to_string(&Snapshot::new(&timestamp, &outcome))?);

        sleep_interruptible(options.interval, stop);
    }

    Ok(())
}

/// One refresh cycle in `--json` output
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub timestamp: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<&'a [NormalizedHost]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> Snapshot<'a> {
    pub fn new(
        timestamp: &'a str,
        outcome: &'a std::result::Result<Vec<NormalizedHost>, NormalizationError>,
    ) -> Self {
        match outcome {
            Ok(hosts) => Self {
                timestamp,
                hosts: Some(hosts.as_slice()),
                error: None,
            },
            Err(e) => Self {
                timestamp,
                hosts: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Sleep for `total`, returning early once `stop` is set
pub fn sleep_interruptible(total: Duration, stop: &AtomicBool) {
    let deadline = Instant::now() + total;
    while !stop.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}
