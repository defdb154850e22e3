//! Posting date caption under the product name.
//!
//! Fixed month/day/year form; no locale handling.

use shelfscan_catalog::PostedAt;

/// Caption shown for a posting date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

pub fn posted_label(posted: &PostedAt) -> String {
    match posted.instant() {
        Some(at) => at.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
