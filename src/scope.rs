use std::mem;
use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::options::ScopedOptions;

/// Holds the store with a scope swapped in; the prior scope is written back
/// when the guard drops. Drop also runs during unwind, so a panicking block
/// cannot leak its scope into the caller.
pub struct ScopeGuard<'a> {
    options: &'a mut ScopedOptions,
    prior: String,
}

impl ScopedOptions {
    /// Make `name` the active scope until the returned guard drops. Guards
    /// nest; each one captures its own enclosing scope, so restoration is
    /// LIFO without an explicit stack.
    pub fn enter_scope(&mut self, name: &str) -> ScopeGuard<'_> {
        let prior = mem::replace(&mut self.scope, name.to_string());
        trace!(scope = %name, prior = %prior, "entering scope");
        ScopeGuard {
            options: self,
            prior,
        }
    }

    /// Run `block` with `name` as the active scope, restoring the previous
    /// scope afterwards on every exit path.
    pub fn with_scope<T>(
        &mut self,
        name: &str,
        block: impl FnOnce(&mut ScopedOptions) -> T,
    ) -> T {
        let mut guard = self.enter_scope(name);
        block(&mut guard)
    }
}

impl Deref for ScopeGuard<'_> {
    type Target = ScopedOptions;

    fn deref(&self) -> &ScopedOptions {
        self.options
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut ScopedOptions {
        self.options
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        trace!(scope = %self.prior, "restoring scope");
        self.options.scope = mem::take(&mut self.prior);
    }
}
