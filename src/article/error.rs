use thiserror::Error;

use crate::markdown::error::RenderError;

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("Error rendering markdown: {0}")]
    Render(#[from] RenderError),

    #[error("Error reading article source: {0}")]
    Io(#[from] std::io::Error),
}
