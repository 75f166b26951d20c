use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttrError {
    #[error("Missing required attribute: {key}")]
    MissingAttribute { key: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, AttrError>;
