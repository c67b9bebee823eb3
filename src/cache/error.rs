use thiserror::Error;

use crate::article::ArticleError;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Error listing article directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error building article: {0}")]
    Article(#[from] ArticleError),
}
