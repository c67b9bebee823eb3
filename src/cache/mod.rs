pub mod error;

pub use error::CacheError;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::article::Article;

/// In-memory article set rebuilt from a source directory.
///
/// Reloads serialize behind `reload_lock` while the fresh snapshot is built,
/// then swap it in whole under a brief write lock, so readers observe either
/// the previous snapshot or the new one, never a half-built state, and
/// overlapping reloads cannot publish out of order. Lookups never trigger a
/// reload.
pub struct ArticleCache {
    root: PathBuf,
    lifespan: Duration,
    reload_lock: Mutex<()>,
    inner: RwLock<Snapshot>,
}

#[derive(Default)]
struct Snapshot {
    articles: BTreeMap<String, Article>,
    last_reload: Option<DateTime<Utc>>,
}

impl ArticleCache {
    /// An empty cache bound to `root`. Serves nothing until the first
    /// `reload`.
    pub fn new(root: impl Into<PathBuf>, lifespan: Duration) -> Self {
        Self {
            root: root.into(),
            lifespan,
            reload_lock: Mutex::new(()),
            inner: RwLock::new(Snapshot::default()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Intended time between automatic reloads. Zero means reload-on-demand
    /// only.
    pub fn lifespan(&self) -> Duration {
        self.lifespan
    }

    /// Rebuild the whole article set from the markdown files in `root`.
    ///
    /// Full replacement, not a merge: articles whose files are gone
    /// disappear. Any file that fails to load aborts the reload and leaves
    /// the previous snapshot in place. Returns the number of articles
    /// loaded.
    pub async fn reload(&self) -> Result<usize, CacheError> {
        let _reloading = self.reload_lock.lock().await;

        let files = list_markdown_files(&self.root).await?;

        let mut articles = BTreeMap::new();
        for path in &files {
            let article = Article::from_file(path).await?;
            debug!("loaded article {} from {}", article.name, path.display());
            articles.insert(article.name.clone(), article);
        }

        let count = articles.len();
        let mut snapshot = self.inner.write().await;
        snapshot.articles = articles;
        snapshot.last_reload = Some(Utc::now());

        info!("article cache reloaded ({count} articles)");
        Ok(count)
    }

    /// Point lookup by article name.
    pub async fn get(&self, name: &str) -> Option<Article> {
        self.inner.read().await.articles.get(name).cloned()
    }

    /// Every cached article, oldest first by `updated_at`. Ties keep name
    /// order.
    pub async fn list_all(&self) -> Vec<Article> {
        let snapshot = self.inner.read().await;
        let mut articles: Vec<Article> = snapshot.articles.values().cloned().collect();
        articles.sort_by(|a, b| a.updated_at.cmp(&b.updated_at));
        articles
    }

    pub async fn last_reload(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.last_reload
    }

    /// Publish timestamps keyed by article name, for the JSON export.
    pub async fn timestamps(&self) -> BTreeMap<String, DateTime<Utc>> {
        let snapshot = self.inner.read().await;
        snapshot
            .articles
            .iter()
            .map(|(name, article)| (name.clone(), article.updated_at))
            .collect()
    }
}

/// Regular `*.md` files directly under `dir`. Subdirectories are ignored.
async fn list_markdown_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
