use std::ops::Deref;
use std::sync::Arc;

/// Immutable snapshot of the accumulated collection.
///
/// Every transition that changes the collection builds a new snapshot; a
/// published snapshot is never mutated, so a status retaining an older one
/// stays intact while a newer page is being appended elsewhere. Cloning only
/// bumps a reference count.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Items<T>(Arc<[T]>);

impl<T> Items<T> {
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Whether both snapshots share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Items<T> {
    /// Returns a new snapshot holding `self` followed by `page`, in order.
    pub fn appended(&self, page: Vec<T>) -> Self {
        if page.is_empty() {
            return self.clone();
        }
        let mut next = Vec::with_capacity(self.0.len() + page.len());
        next.extend_from_slice(&self.0);
        next.extend(page);
        Self::from(next)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.to_vec()
    }
}

impl<T> Clone for Items<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Items<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Self(Arc::from(items))
    }
}

impl<T> FromIterator<T> for Items<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Items<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
