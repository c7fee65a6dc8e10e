//! `bdr` - read-only fallback reader for beads issue logs.
//!
//! Reads `.beads/issues.jsonl` directly when the full tracker is not
//! available. Never writes to the log.

use beads_reader::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
