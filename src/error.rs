pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Absence is never an error; only JSON text can fail to parse or write.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
