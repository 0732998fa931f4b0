use std::collections::HashMap;

use super::handle::Handle;

/// Live objects of one kind, keyed by handle.
///
/// Handles come from a monotonically increasing counter and are never
/// reused within the lifetime of the table, so a deleted handle can never
/// alias a newer object. The counter stops short of the `EMPTY` sentinel.
#[derive(Debug)]
pub(crate) struct ObjectTable<H: Handle, T> {
    objects: HashMap<H, T>,
    next: u64,
}

impl<H: Handle, T> Default for ObjectTable<H, T> {
    fn default() -> Self {
        Self {
            objects: HashMap::new(),
            next: 0,
        }
    }
}

impl<H: Handle, T> ObjectTable<H, T> {
    /// Stores `object` under a fresh handle.
    pub(crate) fn insert(&mut self, object: T) -> H {
        let id = H::from_raw(self.next);
        debug_assert!(!id.is_empty(), "handle counter exhausted");
        self.next += 1;
        self.objects.insert(id, object);
        id
    }

    /// Removes the object, returning it if `id` was live.
    pub(crate) fn remove(&mut self, id: H) -> Option<T> {
        self.objects.remove(&id)
    }

    #[inline]
    pub(crate) fn contains(&self, id: H) -> bool {
        !id.is_empty() && self.objects.contains_key(&id)
    }

    #[inline]
    pub(crate) fn get(&self, id: H) -> Option<&T> {
        self.objects.get(&id)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: H) -> Option<&mut T> {
        self.objects.get_mut(&id)
    }
}
