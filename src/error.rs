use thiserror::Error;

pub type RequestResult<T> = Result<T, RequestError>;

/// Rejections raised while building a request. Generation itself never fails.
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
  #[error("count {count} is outside 1..=10")]
  CountOutOfRange { count: i64 },

  #[error("group {group} is outside 1..=5")]
  GroupOutOfRange { group: i64 },

  #[error("group must be \"random\" or a number, got {0:?}")]
  InvalidGroup(String),

  #[error("unknown tone {0:?}, expected normal, bold or lucky")]
  UnknownTone(String),
}
