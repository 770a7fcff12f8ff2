pub mod json_backend;

pub use json_backend::{
    ledger_warnings, load_ledger_from_path, save_ledger_to_path, JsonStore, DEFAULT_STORE_FILE,
};
