use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::debug;

use superpy_core::{CoreError, LedgerStorage};
use superpy_domain::{format_date, parse_date, Purchase, RecordId, Sale};

use crate::{atomic::replace_file, StoragePaths};

const DELIMITER: u8 = b';';

/// A persisted column: the canonical header plus names accepted when reading
/// files produced by older tooling.
struct Column {
    name: &'static str,
    aliases: &'static [&'static str],
}

const PURCHASE_COLUMNS: [Column; 5] = [
    Column { name: "ID", aliases: &[] },
    Column { name: "PRODUCT_NAME", aliases: &[] },
    Column { name: "BUY_PRICE", aliases: &[] },
    Column { name: "EXPIRATION_DATE", aliases: &[] },
    Column { name: "BUY_DATE", aliases: &[] },
];

const SALE_COLUMNS: [Column; 5] = [
    Column { name: "ID", aliases: &[] },
    Column { name: "PURCHASE_ID", aliases: &["BOUGHT_ID"] },
    Column { name: "PRODUCT_NAME", aliases: &[] },
    Column { name: "SELL_PRICE", aliases: &[] },
    Column { name: "SELL_DATE", aliases: &["SOLD_DATE"] },
];

/// Semicolon-delimited purchase and sale tables with a header row.
///
/// Header matching ignores case; output always uses the uppercase names.
#[derive(Debug, Clone)]
pub struct CsvLedgerStorage {
    purchases_path: PathBuf,
    sales_path: PathBuf,
}

impl CsvLedgerStorage {
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            purchases_path: paths.purchases.clone(),
            sales_path: paths.sales.clone(),
        }
    }

    pub fn purchases_path(&self) -> &Path {
        &self.purchases_path
    }

    pub fn sales_path(&self) -> &Path {
        &self.sales_path
    }
}

impl LedgerStorage for CsvLedgerStorage {
    fn load_purchases(&self) -> Result<Vec<Purchase>, CoreError> {
        read_table(&self.purchases_path, &PURCHASE_COLUMNS, |row| {
            Ok(Purchase {
                id: row.id(0)?,
                product_name: row.text(1)?.to_string(),
                buy_price: row.price(2)?,
                expiration_date: row.date(3)?,
                buy_date: row.date(4)?,
            })
        })
    }

    fn save_purchases(&self, purchases: &[Purchase]) -> Result<(), CoreError> {
        write_table(&self.purchases_path, &PURCHASE_COLUMNS, purchases, |p| {
            [
                p.id.to_string(),
                p.product_name.clone(),
                p.buy_price.to_string(),
                format_date(p.expiration_date),
                format_date(p.buy_date),
            ]
        })
    }

    fn load_sales(&self) -> Result<Vec<Sale>, CoreError> {
        read_table(&self.sales_path, &SALE_COLUMNS, |row| {
            Ok(Sale {
                id: row.id(0)?,
                purchase_id: row.id(1)?,
                product_name: row.text(2)?.to_string(),
                sell_price: row.price(3)?,
                sell_date: row.date(4)?,
            })
        })
    }

    fn save_sales(&self, sales: &[Sale]) -> Result<(), CoreError> {
        write_table(&self.sales_path, &SALE_COLUMNS, sales, |s| {
            [
                s.id.to_string(),
                s.purchase_id.to_string(),
                s.product_name.clone(),
                s.sell_price.to_string(),
                format_date(s.sell_date),
            ]
        })
    }
}

/// One data row with its header-resolved column positions.
struct Row<'a> {
    path: &'a Path,
    line: u64,
    record: &'a StringRecord,
    columns: &'a [Column],
    positions: &'a [usize],
}

impl Row<'_> {
    fn text(&self, column: usize) -> Result<&str, CoreError> {
        self.record
            .get(self.positions[column])
            .ok_or_else(|| self.error(column, "value is missing"))
    }

    /// Numeric and date cells tolerate padding; product names are kept verbatim.
    fn value(&self, column: usize) -> Result<&str, CoreError> {
        self.text(column).map(str::trim)
    }

    fn id(&self, column: usize) -> Result<RecordId, CoreError> {
        let raw = self.value(column)?;
        raw.parse()
            .map_err(|_| self.error(column, &format!("`{raw}` is not a record id")))
    }

    fn price(&self, column: usize) -> Result<f64, CoreError> {
        let raw = self.value(column)?;
        raw.parse()
            .map_err(|_| self.error(column, &format!("`{raw}` is not a number")))
    }

    fn date(&self, column: usize) -> Result<NaiveDate, CoreError> {
        let raw = self.value(column)?;
        parse_date(raw).map_err(|err| self.error(column, &err.to_string()))
    }

    fn error(&self, column: usize, reason: &str) -> CoreError {
        CoreError::Parse(format!(
            "{} line {}, column {}: {}",
            self.path.display(),
            self.line,
            self.columns[column].name,
            reason
        ))
    }
}

fn read_table<T>(
    path: &Path,
    columns: &[Column],
    build: impl Fn(&Row<'_>) -> Result<T, CoreError>,
) -> Result<Vec<T>, CoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "table absent, treating as empty");
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(|err| storage_error(path, err))?;
    let headers = reader
        .headers()
        .map_err(|err| storage_error(path, err))?
        .clone();
    if headers.iter().all(str::is_empty) {
        return Ok(Vec::new());
    }
    let positions = resolve_columns(path, &headers, columns)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| storage_error(path, err))?;
        let line = record.position().map_or(0, |pos| pos.line());
        let row = Row {
            path,
            line,
            record: &record,
            columns,
            positions: &positions,
        };
        records.push(build(&row)?);
    }
    debug!(path = %path.display(), rows = records.len(), "loaded table");
    Ok(records)
}

fn resolve_columns(
    path: &Path,
    headers: &StringRecord,
    columns: &[Column],
) -> Result<Vec<usize>, CoreError> {
    let normalized: Vec<String> = headers.iter().map(|h| h.to_ascii_uppercase()).collect();
    columns
        .iter()
        .map(|column| {
            std::iter::once(column.name)
                .chain(column.aliases.iter().copied())
                .find_map(|name| normalized.iter().position(|header| header == name))
                .ok_or_else(|| {
                    CoreError::Parse(format!(
                        "{}: header is missing column {}",
                        path.display(),
                        column.name
                    ))
                })
        })
        .collect()
}

fn write_table<T, const N: usize>(
    path: &Path,
    columns: &[Column; N],
    records: &[T],
    to_row: impl Fn(&T) -> [String; N],
) -> Result<(), CoreError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());
    writer
        .write_record(columns.iter().map(|column| column.name))
        .map_err(|err| storage_error(path, err))?;
    for record in records {
        writer
            .write_record(&to_row(record))
            .map_err(|err| storage_error(path, err))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| CoreError::Storage(format!("{}: {}", path.display(), err)))?;
    let data = String::from_utf8(bytes)
        .map_err(|err| CoreError::Storage(format!("{}: {}", path.display(), err)))?;
    replace_file(path, &data)?;
    debug!(path = %path.display(), rows = records.len(), "wrote table");
    Ok(())
}

fn storage_error(path: &Path, err: csv::Error) -> CoreError {
    CoreError::Storage(format!("{}: {}", path.display(), err))
}
