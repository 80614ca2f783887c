//! Error types for `placement-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid employer id: {0:?}")]
  InvalidEmployerId(String),

  #[error("invalid student id: {0:?}")]
  InvalidStudentId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
