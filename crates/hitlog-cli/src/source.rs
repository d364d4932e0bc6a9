use anyhow::{Context, Result, bail};
use hitlog_core::log::LogReader;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Where the access log comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    Stdin,
    File(PathBuf),
    Url(String),
}

impl LogSource {
    /// Classify a command-line argument.
    ///
    /// `-` means standard input, `http://` and `https://` prefixes mean a
    /// URL, and anything else is treated as a local path.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            LogSource::Stdin
        } else if arg.starts_with("http://") || arg.starts_with("https://") {
            LogSource::Url(arg.to_string())
        } else {
            LogSource::File(PathBuf::from(arg))
        }
    }

    /// Read the whole log into memory
    pub fn read(&self, timeout: Duration) -> Result<Vec<u8>> {
        match self {
            LogSource::Stdin => {
                tracing::debug!("Reading access log from standard input");
                let content = LogReader::from_reader(io::stdin().lock())
                    .context("Failed to read access log from standard input")?;
                Ok(content.into_bytes())
            }
            LogSource::File(path) => {
                let content = LogReader::from_file(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Ok(content.into_bytes())
            }
            LogSource::Url(url) => fetch(url, timeout),
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::Stdin => f.write_str("<stdin>"),
            LogSource::File(path) => write!(f, "{}", path.display()),
            LogSource::Url(url) => f.write_str(url),
        }
    }
}

fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    tracing::info!("Fetching access log from {}", url);

    let runtime = tokio::runtime::Runtime::new()?;
    let body = runtime.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Fetching {} returned HTTP {}", url, status);
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;
        Ok::<_, anyhow::Error>(bytes)
    })?;

    tracing::info!("Fetched {} bytes of access log", body.len());
    Ok(body.to_vec())
}
