//! JSON output formatting

use std::io;

use serde::Serialize;

/// Serialize any report type as pretty-printed JSON.
pub fn to_json_string<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

/// Print a report as pretty-printed JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    println!("{}", to_json_string(value)?);
    Ok(())
}
