//! Category service
//!
//! Categories are never created directly by the user. They come into
//! existence the first time a transaction or an import row references a title
//! that is not stored yet.

use std::collections::HashSet;

use tracing::debug;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;
use crate::storage::{CategoryStore, Storage};

/// Service for category lookup and lazy creation
pub struct CategoryService<'a> {
    categories: &'a dyn CategoryStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self::from_parts(&storage.categories, Some(&storage.audit))
    }

    /// Create a category service over any store, without audit logging
    pub fn with_store(categories: &'a dyn CategoryStore) -> Self {
        Self::from_parts(categories, None)
    }

    pub(crate) fn from_parts(
        categories: &'a dyn CategoryStore,
        audit: Option<&'a AuditLogger>,
    ) -> Self {
        Self { categories, audit }
    }

    /// All categories ordered by title
    pub fn list(&self) -> LedgerResult<Vec<Category>> {
        let mut categories = self.categories.find_all()?;
        categories.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(categories)
    }

    /// Return the category with this exact title, creating and saving it if
    /// it does not exist yet
    pub fn find_or_create(&self, title: &str) -> LedgerResult<Category> {
        let title = title.trim();

        if let Some(existing) = self.categories.find_by_title(title)? {
            return Ok(existing);
        }

        let category = Category::new(title);
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.categories.save(&category)?;
        self.record_created(std::slice::from_ref(&category));

        debug!(id = %category.id, title = %category.title, "category created");
        Ok(category)
    }

    /// Resolve every title in `titles` to a category.
    ///
    /// Existing categories are fetched in a single lookup. Titles that are not
    /// found are created once each, however often they repeat, and saved in one
    /// batch. The returned pool holds the new categories followed by the
    /// existing ones.
    pub fn resolve_titles(&self, titles: &[String]) -> LedgerResult<Vec<Category>> {
        let wanted: HashSet<String> = titles.iter().cloned().collect();
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let existing = self.categories.find_by_titles(&wanted)?;

        let known: HashSet<&str> = existing.iter().map(|c| c.title.as_str()).collect();
        let mut seen = HashSet::new();
        let missing: Vec<String> = titles
            .iter()
            .filter(|t| !known.contains(t.as_str()) && seen.insert(t.as_str()))
            .cloned()
            .collect();

        let created = self.categories.create_many(&missing);
        for category in &created {
            category
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;
        }

        self.categories.save_many(&created)?;
        self.record_created(&created);

        debug!(
            existing = existing.len(),
            created = created.len(),
            "resolved category titles"
        );

        let mut pool = created;
        pool.extend(existing);
        Ok(pool)
    }

    fn record_created(&self, categories: &[Category]) {
        let Some(audit) = self.audit else {
            return;
        };

        let entries: Vec<_> = categories
            .iter()
            .map(|c| {
                AuditEntry::create(
                    EntityType::Category,
                    c.id.to_string(),
                    Some(c.title.clone()),
                    c,
                )
            })
            .collect();
        audit.log_committed(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn titles(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_or_create_creates_once() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let first = service.find_or_create("Work").unwrap();
        let second = service.find_or_create("  Work ").unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(storage.categories.count().unwrap(), 1);
        assert_eq!(storage.audit.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_find_or_create_is_case_sensitive() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let lower = service.find_or_create("food").unwrap();
        let upper = service.find_or_create("Food").unwrap();

        assert_ne!(lower.id, upper.id);
    }

    #[test]
    fn test_find_or_create_rejects_empty_title() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let err = service.find_or_create("   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.categories.count().unwrap(), 0);
    }

    #[test]
    fn test_resolve_titles_dedupes_missing() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let existing = service.find_or_create("Food").unwrap();

        let pool = service
            .resolve_titles(&titles(&["Food", "Gifts", "Gifts", "Travel", "Food"]))
            .unwrap();

        assert_eq!(pool.len(), 3);
        assert_eq!(storage.categories.count().unwrap(), 3);
        assert_eq!(pool.iter().filter(|c| c.title == "Gifts").count(), 1);
        assert!(pool.iter().any(|c| c.id == existing.id));
    }

    #[test]
    fn test_resolve_titles_empty() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        assert!(service.resolve_titles(&[]).unwrap().is_empty());
        assert_eq!(storage.audit.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_list_sorted_by_title() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::with_store(&storage.categories);
        service.resolve_titles(&titles(&["Zoo", "Art", "Music"])).unwrap();

        let listed: Vec<_> = service.list().unwrap().into_iter().map(|c| c.title).collect();
        assert_eq!(listed, vec!["Art", "Music", "Zoo"]);
        assert_eq!(storage.audit.entry_count().unwrap(), 0);
    }
}
