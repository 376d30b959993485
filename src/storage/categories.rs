//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};
use super::traits::CategoryStore;

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Count categories
    pub fn count(&self) -> LedgerResult<usize> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }

    /// Insert categories and write the file; memory only changes once the
    /// write has succeeded.
    fn persist(&self, batch: &[Category]) -> LedgerResult<()> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut next = categories.clone();
        for category in batch {
            next.insert(category.id, category.clone());
        }

        let mut list: Vec<_> = next.values().cloned().collect();
        list.sort_by(|a, b| a.title.cmp(&b.title));
        write_json_atomic(&self.path, &CategoryData { categories: list })?;

        *categories = next;
        Ok(())
    }
}

impl CategoryStore for CategoryRepository {
    fn find_all(&self) -> LedgerResult<Vec<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(list)
    }

    fn find_by_title(&self, title: &str) -> LedgerResult<Option<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.values().find(|c| c.title == title).cloned())
    }

    fn find_by_titles(&self, titles: &HashSet<String>) -> LedgerResult<Vec<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories
            .values()
            .filter(|c| titles.contains(&c.title))
            .cloned()
            .collect())
    }

    fn save(&self, category: &Category) -> LedgerResult<()> {
        self.persist(std::slice::from_ref(category))
    }

    fn save_many(&self, categories: &[Category]) -> LedgerResult<()> {
        if categories.is_empty() {
            return Ok(());
        }
        self.persist(categories)
    }
}
