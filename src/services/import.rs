//! CSV import service
//!
//! Imports a batch of transactions from a comma-delimited file with a header
//! line and four columns: title, type, value, category.
//!
//! The whole file is parsed before anything is written. Categories referenced
//! by the batch are then resolved in bulk, missing ones created once each, and
//! all transactions saved in a single write. Categories are committed before
//! the transactions, so a failed transaction write leaves them in place.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryId, Money, NewTransaction, Transaction, TransactionType};
use crate::services::CategoryService;
use crate::storage::{CategoryStore, Storage, TransactionStore};

/// One parsed data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub title: String,
    pub kind: TransactionType,
    pub value: Money,
    pub category_title: String,
}

/// Why a data row was left out of the batch
#[derive(Debug, Clone, PartialEq, Eq)]
enum SkipReason {
    MissingField(&'static str),
    InvalidType(String),
    InvalidValue(String),
}

fn required<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &'static str,
) -> Result<&'r str, SkipReason> {
    record
        .get(index)
        .filter(|field| !field.is_empty())
        .ok_or(SkipReason::MissingField(name))
}

fn parse_record(record: &StringRecord) -> Result<ImportRow, SkipReason> {
    let title = required(record, 0, "title")?;
    let kind = required(record, 1, "type")?;
    let value = required(record, 2, "value")?;
    let category_title = required(record, 3, "category")?;

    let kind = kind
        .parse::<TransactionType>()
        .map_err(|_| SkipReason::InvalidType(kind.to_string()))?;

    let value = match Money::parse(value) {
        Ok(v) if !v.is_negative() => v,
        _ => return Err(SkipReason::InvalidValue(value.to_string())),
    };

    Ok(ImportRow {
        title: title.to_string(),
        kind,
        value,
        category_title: category_title.to_string(),
    })
}

/// Streams import rows out of a CSV source.
///
/// Yields one `ImportRow` per usable data row and `None` once the source is
/// exhausted. Malformed rows are skipped and counted; a CSV-level read error
/// is yielded as `SourceUnreadable`.
pub struct ImportReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    source: PathBuf,
    skipped: usize,
}

/// Everything parsed from one source
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    pub rows: Vec<ImportRow>,
    /// Category title of every row, in row order, duplicates included
    pub category_titles: Vec<String>,
    pub skipped: usize,
}

impl ImportReader<File> {
    /// Open the file at `path` for import
    pub fn from_path(path: &Path) -> LedgerResult<Self> {
        let file = File::open(path).map_err(|e| LedgerError::source_unreadable(path, e))?;
        Ok(Self::new(file, path))
    }
}

impl<R: Read> ImportReader<R> {
    /// Wrap a reader; `source` names it in errors and logs
    pub fn new(reader: R, source: impl Into<PathBuf>) -> Self {
        let records = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader)
            .into_records();

        Self {
            records,
            source: source.into(),
            skipped: 0,
        }
    }

    /// Rows skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Consume the source to the end and collect the batch
    pub fn collect_batch(mut self) -> LedgerResult<ParsedBatch> {
        let mut batch = ParsedBatch::default();

        for row in self.by_ref() {
            let row = row?;
            batch.category_titles.push(row.category_title.clone());
            batch.rows.push(row);
        }

        batch.skipped = self.skipped;
        Ok(batch)
    }
}

impl<R: Read> Iterator for ImportReader<R> {
    type Item = LedgerResult<ImportRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(LedgerError::source_unreadable(&self.source, e))),
            };

            match parse_record(&record) {
                Ok(row) => return Some(Ok(row)),
                Err(reason) => {
                    self.skipped += 1;
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    match reason {
                        SkipReason::MissingField(field) => {
                            debug!(line, field, "skipping import row with missing field")
                        }
                        SkipReason::InvalidType(kind) => {
                            warn!(line, kind = %kind, "skipping import row with unknown type")
                        }
                        SkipReason::InvalidValue(value) => {
                            warn!(line, value = %value, "skipping import row with invalid value")
                        }
                    }
                }
            }
        }
    }
}

/// Service for bulk CSV import
pub struct ImportService<'a> {
    categories: &'a dyn CategoryStore,
    transactions: &'a dyn TransactionStore,
    audit: Option<&'a AuditLogger>,
    delete_source: bool,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            categories: &storage.categories,
            transactions: &storage.transactions,
            audit: Some(&storage.audit),
            delete_source: true,
        }
    }

    /// Create an import service over arbitrary stores, without audit logging
    pub fn with_stores(
        categories: &'a dyn CategoryStore,
        transactions: &'a dyn TransactionStore,
    ) -> Self {
        Self {
            categories,
            transactions,
            audit: None,
            delete_source: true,
        }
    }

    /// Leave the source file on disk after a successful import
    pub fn keep_source(mut self, keep: bool) -> Self {
        self.delete_source = !keep;
        self
    }

    /// Import every usable row of the file at `path`.
    ///
    /// The source file is removed only after all transactions are saved.
    pub fn import(&self, path: &Path) -> LedgerResult<Vec<Transaction>> {
        let batch = ImportReader::from_path(path)?.collect_batch()?;
        debug!(
            source = %path.display(),
            rows = batch.rows.len(),
            skipped = batch.skipped,
            "parsed import source"
        );

        let pool = CategoryService::from_parts(self.categories, self.audit)
            .resolve_titles(&batch.category_titles)?;

        let mut by_title: HashMap<&str, CategoryId> = HashMap::new();
        for category in &pool {
            by_title.entry(category.title.as_str()).or_insert(category.id);
        }

        let rows = batch
            .rows
            .into_iter()
            .map(|row| -> LedgerResult<NewTransaction> {
                let category_id = by_title
                    .get(row.category_title.as_str())
                    .copied()
                    .ok_or_else(|| LedgerError::category_not_found(row.category_title.clone()))?;
                Ok(NewTransaction {
                    title: row.title,
                    kind: row.kind,
                    value: row.value,
                    category_id,
                })
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let transactions = self.transactions.create_many(rows);
        self.transactions.save_many(&transactions)?;

        if let Some(audit) = self.audit {
            let source = path.display().to_string();
            let entries: Vec<_> = transactions
                .iter()
                .map(|t| {
                    AuditEntry::create(
                        EntityType::Transaction,
                        t.id.to_string(),
                        Some(t.title.clone()),
                        t,
                    )
                    .with_source(source.clone())
                })
                .collect();
            audit.log_committed(&entries);
        }

        if self.delete_source {
            fs::remove_file(path).map_err(|e| {
                LedgerError::Io(format!(
                    "Failed to remove import source {}: {}",
                    path.display(),
                    e
                ))
            })?;
        }

        info!(
            source = %path.display(),
            imported = transactions.len(),
            skipped = batch.skipped,
            "import complete"
        );
        Ok(transactions)
    }
}
