/// Partial update of a record.
///
/// Every present field overrides the target's value; absent fields keep the
/// old value. Applying never mutates the target.
pub trait Patch {
    type Target;

    fn apply(&self, target: &Self::Target) -> Self::Target;

    /// True when no field is present
    fn is_empty(&self) -> bool;
}

/// Take the patched value when present, the current one otherwise.
pub fn merge<T: Clone>(patched: &Option<T>, current: &T) -> T {
    patched.as_ref().unwrap_or(current).clone()
}
