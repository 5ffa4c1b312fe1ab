pub mod errors;
mod options;
mod scope;   // RAII guard + closure-style scoped acquisition

pub use errors::{OptError, Result};
pub use options::ScopedOptions;
pub use scope::ScopeGuard;
