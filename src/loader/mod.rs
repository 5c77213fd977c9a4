mod csv_loader;

pub use csv_loader::{load_backup, read_backup};
