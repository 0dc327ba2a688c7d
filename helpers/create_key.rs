//! Key Generation Tool
//!
//! This tool generates a fresh relayer signing key and writes it to a file as
//! a hex string suitable for the `private_key` config entry or an environment
//! variable. It supports customizable output locations and file naming.
//!
//! # Features
//!
//! - Random key generation with the derived account address printed
//! - Timestamp-based automatic file naming
//! - Directory creation if needed
//! - Overwrite protection with force option
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin create_key -- --output-dir keys
//! ```
use alloy::signers::local::PrivateKeySigner;
use chrono::Local;
use clap::Parser;
use eyre::{Result, WrapErr};
use std::{env, fs};

/// Command line arguments for key generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory for the key file
    #[arg(short, long, default_value = ".")]
    output_dir: String,

    /// Custom output filename (optional).
    /// If not provided, generates a timestamp-based filename
    #[arg(short, long)]
    filename: Option<String>,

    /// Force overwrite if file exists
    #[arg(long)]
    force: bool,
}

/// Generates a default filename using current timestamp
///
/// # Format
///
/// Creates a filename in the format: `key_YYYYMMDD_HHMMSS.txt`
fn generate_default_filename() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("key_{}.txt", timestamp)
}

/// Main entry point for the key generation tool
///
/// # Errors
///
/// Returns error if:
/// - Directory creation fails
/// - File already exists (without --force)
/// - The key file cannot be written
fn main() -> Result<()> {
    let args = Args::parse();

    let filename = args.filename.unwrap_or_else(generate_default_filename);

    let current_dir = env::current_dir()?;
    let output_dir = current_dir.join(&args.output_dir);

    fs::create_dir_all(&output_dir)
        .wrap_err_with(|| format!("Failed to create directory: {:?}", output_dir))?;

    let key_path = output_dir.join(&filename);

    if key_path.exists() && !args.force {
        return Err(eyre::eyre!(
            "File {:?} already exists. Use --force to overwrite",
            key_path
        ));
    }

    let signer = PrivateKeySigner::random();
    let key_hex = hex::encode(signer.to_bytes());

    fs::write(&key_path, &key_hex)
        .wrap_err_with(|| format!("Failed to write key file: {:?}", key_path))?;

    println!("Generated new key:");
    println!("Relayer address: {}", signer.address());
    println!("Key file created at: {:?}", key_path);

    Ok(())
}
