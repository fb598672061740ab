//! Mutex-guarded collection for use across threads.

use super::Collection;
use crate::{error::SitemapError, model::SitemapItem};
use parking_lot::Mutex;

/// A [`Collection`] behind a `parking_lot::Mutex`.
///
/// Every call takes the lock for its whole duration, so a serialization
/// never observes a half-applied mutation.
#[derive(Debug)]
pub struct SharedCollection<T> {
    inner: Mutex<Collection<T>>,
}

impl<T: SitemapItem> SharedCollection<T> {
    pub fn new(collection: Collection<T>) -> Self {
        Self {
            inner: Mutex::new(collection),
        }
    }

    pub fn push(&self, entry: T) {
        self.inner.lock().push(entry);
    }

    pub fn remove_entry(&self, index: usize) -> Result<T, SitemapError> {
        self.inner.lock().remove_entry(index)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn to_xml_string(&self) -> Result<String, SitemapError> {
        self.inner.lock().to_xml_string()
    }

    /// Run `f` with exclusive access, e.g. to batch several mutations.
    pub fn with<R>(&self, f: impl FnOnce(&mut Collection<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn into_inner(self) -> Collection<T> {
        self.inner.into_inner()
    }
}

impl<T: SitemapItem> Default for SharedCollection<T> {
    fn default() -> Self {
        Self::new(Collection::default())
    }
}

impl<T: SitemapItem> From<Collection<T>> for SharedCollection<T> {
    fn from(collection: Collection<T>) -> Self {
        Self::new(collection)
    }
}
