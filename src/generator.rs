use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::errors::{NpError, Result};
use crate::paths;

/// Sequential zero-padded pathnames in a directory.
///
/// Tokens are base-10 integers left-padded with zeros to a fixed width, so
/// lexical order of the generated filenames matches integral order. The
/// counter lives in memory only; a fresh generator over a populated
/// directory restarts from zero and relies on [`PathGenerator::next_path`]
/// probing the filesystem to skip slots taken by earlier runs.
///
/// Construction often has a side effect: if the directory doesn't exist,
/// it is created.
#[derive(Debug)]
pub struct PathGenerator {
    dir: PathBuf,
    prefix: String,
    postfix: String,
    // 10^token_width, one past the largest representable token
    limit: u32,
    count: u32,
}

impl PathGenerator {
    /// Creates a generator that pads to 3 digits, or for less than 1000
    /// invocations.
    pub fn new(dir: &Path, prefix: &str, postfix: &str) -> Result<Self> {
        let cfg = GeneratorConfig {
            prefix: prefix.to_string(),
            postfix: postfix.to_string(),
            ..GeneratorConfig::default()
        };
        Self::create(dir, cfg)
    }

    pub fn create(dir: &Path, cfg: GeneratorConfig) -> Result<Self> {
        if cfg.token_width < 1 || cfg.token_width > 9 {
            return Err(NpError::InvalidTokenWidth { width: cfg.token_width });
        }
        ensure_dir(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            prefix: cfg.prefix,
            postfix: cfg.postfix,
            limit: paths::pow10(cfg.token_width),
            count: 0,
        })
    }

    /// Maps `token` to `dir/<prefix><padded-token><postfix>`. Pure; the
    /// path may or may not exist.
    pub fn path_for_token(&self, token: u32) -> Result<PathBuf> {
        if token >= self.limit {
            return Err(NpError::TokenOverflow { token, limit: self.limit });
        }
        let name = paths::filename(&self.prefix, &paths::padded_token(token, self.limit), &self.postfix);
        Ok(self.dir.join(name))
    }

    /// Returns the next path in the sequence that does not yet exist on
    /// disk, skipping slots occupied by previous runs. The returned path is
    /// not created; turning it into a file or directory is up to the caller.
    ///
    /// Fails with [`NpError::Exhausted`] once the counter reaches the width
    /// limit. There is no wraparound and no reuse.
    ///
    /// The existence probe is not atomic with the caller's later create:
    /// two generators over the same directory (threads or processes) can
    /// both claim the same path. Accepted limitation; callers needing
    /// cross-process safety must synchronize externally.
    pub fn next_path(&mut self) -> Result<PathBuf> {
        loop {
            self.count += 1;
            if self.count >= self.limit {
                return Err(NpError::Exhausted { limit: self.limit });
            }
            let path = self.path_for_token(self.count)?;
            if !path.exists() {
                return Ok(path);
            }
        }
    }

    /// Inverse of [`PathGenerator::path_for_token`]: recovers the token
    /// from a generated path's filename. Stripping is by affix length, not
    /// by matching; a foreign filename surfaces as [`NpError::BadFilename`]
    /// when the remainder fails to parse as an integer.
    pub fn parse_token(&self, path: &Path) -> Result<u32> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| bad_filename(path))?;
        let end = name
            .len()
            .checked_sub(self.postfix.len())
            .filter(|end| *end >= self.prefix.len())
            .ok_or_else(|| bad_filename(path))?;
        let token = name
            .get(self.prefix.len()..end)
            .ok_or_else(|| bad_filename(path))?;
        token.parse::<u32>().map_err(|_| bad_filename(path))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn bad_filename(path: &Path) -> NpError {
    NpError::BadFilename { name: path.display().to_string() }
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        if dir.exists() {
            return Err(NpError::NotADirectory { path: dir.to_path_buf() });
        }
        std::fs::create_dir_all(dir)?;
        tracing::debug!("created output directory {}", dir.display());
    }
    Ok(())
}
