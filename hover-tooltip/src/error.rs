#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid tooltip configuration: {source}")]
    InvalidConfiguration { #[from] source: serde_json::Error },
}
