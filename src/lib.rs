pub mod article;
pub mod cache;
pub mod error;
pub mod markdown;
pub mod pages;

pub use article::Article;
pub use cache::ArticleCache;
pub use error::RestError;
