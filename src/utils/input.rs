//! Loading input text for the command line front end
//!
//! Files are memory-mapped; `-` reads standard input into memory.

use crate::config::BuildConfig;
use anyhow::{Context, Result, bail};
use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

/// Raw input bytes, either mapped or owned
pub enum Input {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Input::Mapped(map) => &map[..],
            Input::Owned(bytes) => &bytes[..],
        }
    }
}

impl Input {
    /// Open `path`, or standard input for `-`
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str() == "-" {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read standard input")?;
            return Ok(Input::Owned(bytes));
        }

        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
        // Mapping an empty file fails on some platforms
        if len == 0 {
            return Ok(Input::Owned(Vec::new()));
        }
        let map = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map {}", path.display()))?;
        Ok(Input::Mapped(map))
    }
}

/// Apply `config` to raw input: size limit, case folding, terminator check.
///
/// The terminator itself is not appended here.
pub fn prepare<'a>(content: &'a [u8], config: &BuildConfig) -> Result<Cow<'a, [u8]>> {
    if content.len() as u64 > config.max_input_size {
        bail!(
            "Input is {} bytes, larger than max_input_size ({})",
            content.len(),
            config.max_input_size
        );
    }

    let text: Cow<'a, [u8]> = if config.case_insensitive {
        Cow::Owned(content.iter().map(|b| b.to_ascii_lowercase()).collect())
    } else {
        Cow::Borrowed(content)
    };

    if let Some(pos) = text.iter().position(|&b| b == config.terminator) {
        bail!(
            "Input contains the terminator byte {:?} at offset {}; pick another with --terminator",
            config.terminator as char,
            pos
        );
    }

    Ok(text)
}
