use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("HTML formatter error: {0}")]
    Format(#[from] std::io::Error),

    #[error("Renderer produced invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
