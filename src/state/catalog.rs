//! Catalog loading and indexing
//!
//! The catalog is built from three JSON files living in one data directory:
//! `categories.json`, `tags.json` and `communities.json`. All three are read
//! concurrently and the load is all-or-nothing: if any file is missing or
//! unparseable the whole load fails and no partial catalog is produced.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::data::{Category, Community, Tag};

const CATEGORIES_FILE: &str = "categories.json";
const TAGS_FILE: &str = "tags.json";
const COMMUNITIES_FILE: &str = "communities.json";

/// Community icons live in `{data_dir}/icons/{community_id}.webp`
const ICONS_DIR: &str = "icons";
/// Substitute shown when a community has no icon file
const FALLBACK_ICON: &str = "default.webp";
/// Platform icons live in `{data_dir}/icons/platforms/{platform_name}.webp`
const PLATFORM_ICONS_DIR: &str = "platforms";

/// Why a catalog load failed
///
/// Carries plain strings instead of source errors so it can ride inside a
/// cloneable iced message.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("could not read {path}: {message}")]
    Read { path: String, message: String },
    #[error("could not parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// The loaded catalog: the three datasets plus id-keyed lookup maps
///
/// The maps are built once after load and never mutated. On duplicate ids
/// the last entry wins, matching how the source data has always behaved.
#[derive(Debug, Clone)]
pub struct Catalog {
    data_dir: PathBuf,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub communities: Vec<Community>,
    categories_by_id: HashMap<String, Category>,
    tags_by_id: HashMap<String, Tag>,
}

impl Catalog {
    pub fn new(
        data_dir: PathBuf,
        categories: Vec<Category>,
        tags: Vec<Tag>,
        communities: Vec<Community>,
    ) -> Self {
        let categories_by_id = index_by_id(&categories, |c| &c.id);
        let tags_by_id = index_by_id(&tags, |t| &t.id);

        Catalog {
            data_dir,
            categories,
            tags,
            communities,
            categories_by_id,
            tags_by_id,
        }
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories_by_id.get(id)
    }

    /// Look up a tag by id
    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags_by_id.get(id)
    }

    /// Display name for a category id, falling back to the raw id when the
    /// community references a category the dataset does not define
    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.categories_by_id
            .get(id)
            .map(|c| c.name.as_str())
            .unwrap_or(id)
    }

    /// Display name for a tag id, with the same raw-id fallback
    pub fn tag_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.tags_by_id.get(id).map(|t| t.name.as_str()).unwrap_or(id)
    }

    /// Icon for a community, substituting the default icon when the
    /// community has none on disk
    pub fn icon_path(&self, community_id: &str) -> PathBuf {
        let icon = self
            .data_dir
            .join(ICONS_DIR)
            .join(format!("{}.webp", community_id));

        if icon.exists() {
            icon
        } else {
            self.data_dir.join(ICONS_DIR).join(FALLBACK_ICON)
        }
    }

    /// Icon for a platform, if one exists on disk (platforms without an
    /// icon render as a plain text button)
    pub fn platform_icon_path(&self, platform_name: &str) -> Option<PathBuf> {
        let icon = self
            .data_dir
            .join(ICONS_DIR)
            .join(PLATFORM_ICONS_DIR)
            .join(format!("{}.webp", platform_name));

        icon.exists().then_some(icon)
    }
}

/// Build an id-keyed map from a list of entities
///
/// Pure projection with no side effects; duplicate ids overwrite (last wins).
fn index_by_id<T, F>(items: &[T], id: F) -> HashMap<String, T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.insert(id(item).to_string(), item.clone());
    }
    map
}

/// Load the three datasets concurrently and build the catalog
///
/// Fails as a whole if any of the three reads or parses fails. No retry,
/// no partial data.
pub async fn load_catalog(data_dir: PathBuf) -> Result<Catalog, LoadError> {
    let (categories, tags, communities) = tokio::try_join!(
        load_dataset::<Category>(&data_dir, CATEGORIES_FILE),
        load_dataset::<Tag>(&data_dir, TAGS_FILE),
        load_dataset::<Community>(&data_dir, COMMUNITIES_FILE),
    )?;

    println!(
        "📁 Loaded {} categories, {} tags, {} communities from {}",
        categories.len(),
        tags.len(),
        communities.len(),
        data_dir.display()
    );

    Ok(Catalog::new(data_dir, categories, tags, communities))
}

/// Read and parse one dataset file as a list of entities
async fn load_dataset<T: DeserializeOwned>(
    data_dir: &Path,
    file_name: &str,
) -> Result<Vec<T>, LoadError> {
    let path = data_dir.join(file_name);

    let bytes = tokio::fs::read(&path).await.map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
