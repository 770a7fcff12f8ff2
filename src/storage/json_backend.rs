use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{errors::Result, ledger::Ledger};

/// Default store file, resolved against the current working directory.
pub const DEFAULT_STORE_FILE: &str = "budget_data.json";

const TMP_SUFFIX: &str = "tmp";

/// JSON persistence adapter for a single ledger file.
///
/// Saves go through a temp-file-then-rename swap so a failed write never
/// clobbers the previous store.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted ledger. `Ok(None)` signals that no store file
    /// exists yet; read and parse failures surface as errors.
    pub fn load(&self) -> Result<Option<Ledger>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let ledger = load_ledger_from_path(&self.path)?;
        tracing::debug!(path = %self.path.display(), "ledger loaded");
        Ok(Some(ledger))
    }

    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)?;
        tracing::debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }
}

pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = tmp_path(path);
    write_all(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    let ledger: Ledger = serde_json::from_str(&data)?;
    Ok(ledger)
}

/// Integrity sweep over a freshly loaded ledger. A hand-edited or corrupted
/// store can hold values the ledger operations would never produce; the data
/// is still accepted, but each violation is reported.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let mut warnings = Vec::new();
    if !ledger.income.is_finite() || ledger.income < 0.0 {
        warnings.push(format!(
            "stored income {} is not a non-negative number",
            ledger.income
        ));
    }
    for category in &ledger.expenses {
        if category.records.is_empty() {
            warnings.push(format!("category `{}` has no records", category.name));
        }
        for record in &category.records {
            if !record.amount.is_finite() || record.amount <= 0.0 {
                warnings.push(format!(
                    "expense `{}` in `{}` has non-positive amount {}",
                    record.description, category.name, record.amount
                ));
            }
        }
    }
    warnings
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
