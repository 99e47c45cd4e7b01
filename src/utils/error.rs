use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgstoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Not a readable directory: {path}")]
    NotADirectory { path: String },

    #[error("No root <svg> element in document")]
    NoRootElement,

    #[error("Malformed icon document: {message}")]
    MalformedXml { message: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValue { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SvgstoreError>;
