use std::collections::HashMap;
use std::sync::Arc;

/// Read-only name → IPv4 address lookup.
///
/// Names match exactly and case-sensitively. `None` means the name is not
/// served here, which is an ordinary outcome rather than a failure.
pub trait Resolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<&str>;
}

impl Resolver for HashMap<String, String> {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn resolve(&self, name: &str) -> Option<&str> {
        (**self).resolve(name)
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, name: &str) -> Option<&str> {
        (**self).resolve(name)
    }
}
