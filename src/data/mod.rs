mod loader;

pub use loader::{load_builtin, load_from_path, LoadError};
