use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Where the text to translate comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Path to a UTF-8 file.
    File(String),
    Stdin,
}

impl InputSource {
    /// A file when a path is given, stdin otherwise.
    pub fn from_path(file: Option<&str>) -> Self {
        file.map_or(Self::Stdin, |path| Self::File(path.to_string()))
    }
}

pub struct InputReader;

impl InputReader {
    /// Reads the input, dropping trailing line breaks.
    pub fn read(source: &InputSource) -> Result<String> {
        let text = match source {
            InputSource::File(path) => Self::read_file(path)?,
            InputSource::Stdin => Self::read_stdin()?,
        };
        Ok(text.trim_end_matches(['\n', '\r']).to_string())
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the file into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
