use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = NpError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum NpError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("token width {width} out of range, must be 1..=9")]
    InvalidTokenWidth { width: u32 },
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },
    #[error("token {token} too big for configured width, limit {limit}")]
    TokenOverflow { token: u32, limit: u32 },
    #[error("token space exhausted at {limit}, clean up or widen tokens")]
    Exhausted { limit: u32 },
    #[error("filename does not match prefix/token/postfix shape: {name}")]
    BadFilename { name: String },
}
