use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("previous version {previous} must be older than current version {current}")]
    VersionOrder { previous: u32, current: u32 },
}
