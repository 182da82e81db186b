#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("roster error: {0}")]
    Roster(#[from] roster::RosterError),
    #[error("failed to read file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to parse scan result as JSON: {0}")]
    ScanJson(serde_json::Error),
    #[error("failed to parse scan result as YAML: {0}")]
    ScanYaml(serde_yaml::Error),
    #[error("unknown doctor: {0}")]
    UnknownDoctor(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
