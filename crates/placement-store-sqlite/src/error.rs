//! Error type for `placement-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Displays the driver's own message, unprefixed.
  #[error("{}", driver_message(.0))]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn driver_message(e: &tokio_rusqlite::Error) -> String {
  match e {
    tokio_rusqlite::Error::Rusqlite(inner) => inner.to_string(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn database_error_shows_driver_text_only() {
    let e = Error::from(tokio_rusqlite::Error::Rusqlite(
      rusqlite::Error::QueryReturnedNoRows,
    ));
    assert_eq!(e.to_string(), "Query returned no rows");
  }
}
