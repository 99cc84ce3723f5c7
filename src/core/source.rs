//! Where the raw label → number mapping comes from.

use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::core::{data::RawDataset, error::FetchError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// HTTP(S) GET.
    Url(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    /// `-` means stdin, anything else is a path.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(path))
        }
    }

    /// Read and decode the whole document. One request, no retries.
    pub fn load(&self, timeout: Duration) -> Result<RawDataset, FetchError> {
        let t0 = Instant::now();
        let body = match self {
            Self::Url(url) => get(url, timeout)?,
            Self::File(path) => {
                let mut s = String::new();
                File::open(path)?.read_to_string(&mut s)?;
                s
            }
            Self::Stdin => {
                let mut s = String::new();
                io::stdin().lock().read_to_string(&mut s)?;
                s
            }
        };
        let raw: RawDataset = serde_json::from_str(&body)?;
        debug!(
            source = ?self,
            bytes = body.len(),
            entries = raw.len(),
            elapsed_us = t0.elapsed().as_micros(),
            "data loaded"
        );
        Ok(raw)
    }
}

fn get(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }
    Ok(resp.text()?)
}
