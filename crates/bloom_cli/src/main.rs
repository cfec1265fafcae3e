use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use bloom_core::{
    consts::FILTER_BYTES,
    filter::{Bloom, Membership},
    filter_store::FilterStore,
    store::{ByteStore, DirStore},
};

#[derive(Parser)]
#[command(name = "bloom", about = "BLOOM-KV CLI — membership filter ops")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Create the store directory.
    Init {
        #[arg(long)]
        dir: PathBuf,
    },

    /// Record an element in the filter at a key.
    Add {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        key: String,
        #[arg(long)]
        element: String,
    },

    /// Probe the filter at a key for an element.
    Check {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        key: String,
        #[arg(long)]
        element: String,
        /// Emit a JSON report instead of the plain reply.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Inspect the raw stored value at a key (read-only, never resets).
    Info {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        key: String,
    },
}

#[derive(Serialize)]
struct CheckReport<'a> {
    key: &'a str,
    element: &'a str,
    reply: &'a str,
    possibly_present: bool,
}

fn reply(m: Membership) -> &'static str {
    match m {
        Membership::PossiblyPresent => "POSSIBLY",
        Membership::DefinitelyAbsent => "NO",
    }
}

fn open_filters(dir: &Path) -> Result<FilterStore<DirStore>> {
    Ok(FilterStore::new(DirStore::open(dir)?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Init { dir } => {
            DirStore::open(&dir)?;
            println!("init: {}", dir.display());
        }
        Cmd::Add { dir, key, element } => {
            let mut filters = open_filters(&dir)?;
            filters.add(&key, element.as_bytes())?;
            println!("OK");
        }
        Cmd::Check {
            dir,
            key,
            element,
            json,
        } => {
            let mut filters = open_filters(&dir)?;
            let m = filters.check(&key, element.as_bytes())?;
            if json {
                let report = CheckReport {
                    key: &key,
                    element: &element,
                    reply: reply(m),
                    possibly_present: m == Membership::PossiblyPresent,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", reply(m));
            }
        }
        Cmd::Info { dir, key } => {
            let store = DirStore::open(&dir)?;
            match store.read(&key)? {
                None => println!("{key}: absent"),
                Some(bytes) => {
                    let len = bytes.len();
                    match Bloom::from_bytes(bytes) {
                        Some(filter) => {
                            println!(
                                "{key}: {} bytes, {} bits set",
                                FILTER_BYTES,
                                filter.set_bits()
                            );
                            println!("{}", hex::encode(filter.as_bytes()));
                        }
                        None => println!(
                            "{key}: {len} bytes, not a valid filter (reset on next add/check)"
                        ),
                    }
                }
            }
        }
    }
    Ok(())
}
