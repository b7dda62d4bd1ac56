use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TrendError};
use crate::models::RatingRecord;

/// Path value that reads the payload from standard input.
pub const STDIN_PATH: &str = "-";

/// Status the trends endpoint reports on success.
const SUCCESS_STATUS: &str = "success";

/// Body of the trends endpoint: either the API envelope or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TrendPayload {
    Envelope {
        status: String,
        #[serde(default)]
        trends: Vec<RatingRecord>,
    },
    Records(Vec<RatingRecord>),
}

/// Something that can provide the current list of rating records.
pub trait TrendSource {
    fn fetch(&self) -> Result<Vec<RatingRecord>>;
}

/// Reads a saved trends response from a file or stdin.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }
}

impl TrendSource for JsonSource {
    fn fetch(&self) -> Result<Vec<RatingRecord>> {
        let content = if self.is_stdin() {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(&self.path)?
        };
        parse_trends(&content)
    }
}

/// Parse a trends response body.
///
/// Records are returned in payload order and never merged. Ratings outside
/// the 1-5 scale are kept but logged.
pub fn parse_trends(content: &str) -> Result<Vec<RatingRecord>> {
    let records = match serde_json::from_str(content)? {
        TrendPayload::Envelope { status, trends } => {
            if status != SUCCESS_STATUS {
                return Err(TrendError::Api(status));
            }
            trends
        }
        TrendPayload::Records(records) => records,
    };

    for record in records.iter().filter(|r| !r.is_valid()) {
        log::warn!("rating out of range: {}", record.debug_string());
    }
    log::info!("loaded {} trend records", records.len());

    Ok(records)
}

/// Load trend records from a JSON file.
pub fn load_trends<P: AsRef<Path>>(path: P) -> Result<Vec<RatingRecord>> {
    JsonSource::new(path).fetch()
}
