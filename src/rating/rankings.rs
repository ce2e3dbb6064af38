//! Flat ranking-file parser
//!
//! The external rating process maintains one ranking file per team size with
//! a fixed column layout, single-space separated:
//!
//! ```text
//! Player Section Games Elo
//! alice Section-A 12 1712.4
//! bob Section-A 9 1488.0
//! ```
//!
//! The first line is always a header. Long files repeat the header between
//! sections; those repeats carry the literal [`REPEATED_HEADER_LABEL`] in the
//! second column and are skipped, as is any line with fewer than four fields
//! or a rating column that does not parse. The rating (field 3) is a decimal
//! number truncated to an integer.

use crate::error::{Result, TrackerError};
use crate::types::PlayerId;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Second-column marker of a repeated header line
pub const REPEATED_HEADER_LABEL: &str = "Section";

/// Parse a ranking file into identifier/rating pairs.
///
/// Later lines for the same identifier overwrite earlier ones.
pub fn read_rankings(path: &Path) -> Result<HashMap<PlayerId, i32>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| TrackerError::RankingFileUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut ratings = HashMap::new();
    for line in content.lines().skip(1) {
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() < 4 {
            continue;
        }
        if fields[1] == REPEATED_HEADER_LABEL {
            continue;
        }
        match fields[3].parse::<f64>() {
            Ok(rating) => {
                ratings.insert(fields[0].to_string(), rating as i32);
            }
            Err(_) => {
                debug!("Skipping ranking line with unparseable rating: {}", line);
            }
        }
    }

    Ok(ratings)
}
