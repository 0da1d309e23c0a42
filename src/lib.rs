pub mod api;
pub mod creator;
pub mod entry;
pub mod errors;
pub mod fs;
pub mod preview;

pub use api::{create_files, create_structure, CreateOptions};
pub use entry::{Entry, EntryKind};
pub use errors::CreationError;
pub use fs::OverwritePolicy;

/// Sets up `env_logger`, quiet unless `RUST_LOG` or `verbose` asks for more.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    let env = env_logger::Env::default().default_filter_or(default_filter);

    let _ = env_logger::Builder::from_env(env).try_init();
}
