pub mod error;

pub use error::ArticleError;

use std::path::Path;

use chrono::{DateTime, Utc};
use comrak::Arena;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markdown;

/// One rendered blog article. Immutable once built.
///
/// `title` and `contents` are pre-rendered HTML fragments; `display_name` is
/// the plain-text form of the title, for listings and navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub name: String,
    pub display_name: String,
    pub title: String,
    pub contents: String,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Build an article from raw markdown source.
    ///
    /// The first top-level level-1 heading becomes the title and is removed
    /// from the body before rendering. Without one, the title falls back to
    /// heading markup around `name` and the display name to `name` itself.
    /// `updated_at` defaults to the current time when not supplied.
    pub fn from_markdown(
        name: &str,
        source: &str,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ArticleError> {
        debug!("building article {name}");

        let arena = Arena::new();
        let root = markdown::parse(&arena, source);

        let (title, display_name) = match markdown::pop_first_heading(root) {
            Some(heading) => {
                let title = markdown::render_node(heading)?;
                let runs = markdown::extract_raw_text(heading);
                (title, runs.join(" ").trim().to_string())
            }
            None => {
                let escaped = markdown::escape_text(name)?;
                (format!("<h1>{escaped}</h1>"), name.to_string())
            }
        };

        let contents = markdown::render_node(root)?;

        Ok(Self {
            name: name.to_string(),
            display_name,
            title,
            contents,
            updated_at: updated_at.unwrap_or_else(Utc::now),
        })
    }

    /// Load an article from a markdown file.
    ///
    /// `name` is the file's base name without extension; `updated_at` is the
    /// file's modification time.
    pub async fn from_file(path: &Path) -> Result<Self, ArticleError> {
        let source = tokio::fs::read_to_string(path).await?;
        let metadata = tokio::fs::metadata(path).await?;

        let updated_at = metadata.modified().ok().map(DateTime::<Utc>::from);
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_markdown(&name, &source, updated_at)
    }
}
