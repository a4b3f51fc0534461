use thiserror::Error;

#[derive(Debug, Error)]
pub enum KbSearchError {
   #[error("io error")]
   Io(#[from] std::io::Error),

   #[error("http error: {0}")]
   Http(String),

   #[error("dataset error: {0}")]
   Dataset(String),

   #[error("config error: {0}")]
   Config(String),

   #[error("serialization error")]
   Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = KbSearchError> = std::result::Result<T, E>;
