use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use log::{error, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Duration;
use time::OffsetDateTime;

/// Human readable duration: "850ms", "12.4s", "3m 07s", "1h 02m 05s"
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs == 0 {
        return format!("{}ms", elapsed.as_millis());
    }
    if secs < 60 {
        return format!("{:.1}s", elapsed.as_secs_f64());
    }
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}h {:02}m {:02}s", h, m, s)
    } else {
        format!("{}m {:02}s", m, s)
    }
}

/// Current calendar year (UTC)
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Open a file for buffered reading, transparently gunzipping `.gz` paths
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Size the global rayon pool. `0` means one thread per core.
pub fn configure_thread_pool(threads: usize) -> usize {
    let num_threads = if threads == 0 {
        let cores = num_cpus::get();
        info!("Auto-detected {} CPU cores. Using {} threads.", cores, cores);
        cores
    } else {
        info!("Using specified {} threads.", threads);
        threads
    };

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        error!("Failed to build thread pool: {}. Using default.", e);
    }
    num_threads
}
