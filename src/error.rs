use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DublinCoreError {
    #[error("HTML document is empty")]
    EmptyDocument,

    #[error("Unknown Dublin Core element: {0}")]
    UnknownElement(String),

    #[error("Invalid extraction request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, DublinCoreError>;
