//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log file (default "./logs")
//! - LOG_MAX_SIZE: maximum size of a log file in bytes before rolling (default 1GB)

use chrono::Utc;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, metadata, File, OpenOptions},
    path::Path,
};

const BASE_LOG_FILE_NAME: &str = "registration-relayer.log";
const DEFAULT_MAX_LOG_SIZE: u64 = 1_073_741_824;

/// Computes the path of a rolled log file from the base path, the UTC date
/// and a sequence index.
pub fn rolled_log_path(base_file_path: &str, date_str: &str, index: u32) -> String {
    match base_file_path.strip_suffix(".log") {
        Some(trimmed) => format!("{}-{}.{}.log", trimmed, date_str, index),
        None => format!("{}-{}.{}.log", base_file_path, date_str, index),
    }
}

/// Walks the sequence indexes until it finds a log file under `max_size`
/// bytes (or one that does not exist yet) and returns that path.
pub fn next_log_path_under_limit(
    file_path: &str,
    base_file_path: &str,
    date_str: &str,
    max_size: u64,
) -> String {
    let mut final_path = file_path.to_string();
    let mut index = 1;
    while let Ok(meta) = metadata(&final_path) {
        if meta.len() > max_size {
            final_path = rolled_log_path(base_file_path, date_str, index);
            index += 1;
        } else {
            break;
        }
    }
    final_path
}

fn level_filter_from_env() -> LevelFilter {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

fn init_file_logger(level_filter: LevelFilter) {
    // Containers always log under logs/; hosts may override with LOG_DATA_DIR.
    let log_dir = if env::var("IN_DOCKER")
        .map(|val| val == "true")
        .unwrap_or(false)
    {
        "logs/".to_string()
    } else {
        env::var("LOG_DATA_DIR").unwrap_or_else(|_| "./logs".to_string())
    };
    let log_dir = format!("{}/", log_dir.trim_end_matches('/'));

    let base_file_path = format!("{}{}", log_dir, BASE_LOG_FILE_NAME);
    let date_str = Utc::now().format("%Y-%m-%d").to_string();

    // Time-based rolling first: one file series per UTC date.
    let dated_path = rolled_log_path(&base_file_path, &date_str, 1);

    if let Some(parent) = Path::new(&dated_path).parent() {
        create_dir_all(parent).expect("Failed to create log directory");
    }

    let max_size: u64 = env::var("LOG_MAX_SIZE")
        .map(|s| {
            s.parse::<u64>()
                .expect("LOG_MAX_SIZE must be a valid u64 if set")
        })
        .unwrap_or(DEFAULT_MAX_LOG_SIZE);

    // Space-based rolling second: skip past files that outgrew the limit.
    let final_path = next_log_path_under_limit(&dated_path, &base_file_path, &date_str, max_size);

    let log_file = if Path::new(&final_path).exists() {
        OpenOptions::new()
            .append(true)
            .open(&final_path)
            .unwrap_or_else(|e| panic!("Unable to open log file {}: {}", final_path, e))
    } else {
        File::create(&final_path)
            .unwrap_or_else(|e| panic!("Unable to create log file {}: {}", final_path, e))
    };

    WriteLogger::init(level_filter, Config::default(), log_file)
        .expect("Failed to initialize file logger");
}

/// Sets up logging by reading configuration from environment variables.
pub fn setup_logging() {
    let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| "stdout".to_string());
    let level_filter = level_filter_from_env();

    if log_mode.to_lowercase() == "file" {
        init_file_logger(level_filter);
    } else {
        SimpleLogger::init(level_filter, Config::default())
            .expect("Failed to initialize simple logger");
    }

    info!("Logging is successfully configured (mode: {})", log_mode);
}
