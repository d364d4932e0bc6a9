use crate::Result;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct LogReader;

impl LogReader {
    /// Read an access log from the given path
    pub fn from_file(path: &Path) -> Result<String> {
        tracing::debug!("Reading access log from: {}", path.display());

        let file = File::open(path)?;
        let content = Self::from_reader(BufReader::new(file))?;

        tracing::info!(
            "Read {} bytes of access log from {}",
            content.len(),
            path.display()
        );

        Ok(content)
    }

    /// Read an access log from any byte stream (e.g. standard input)
    pub fn from_reader<R: Read>(mut reader: R) -> Result<String> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Ok(Self::decode(&bytes).into_owned())
    }

    /// Decode raw log bytes; invalid UTF-8 sequences become U+FFFD
    pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
        let text = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = text {
            tracing::debug!("Access log contained invalid UTF-8, replaced lossily");
        }
        text
    }
}
