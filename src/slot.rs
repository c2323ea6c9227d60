// Pattern: Nullable Owner Handles
// A slot that may or may not hold an owner. Unlike `ExclusiveOwner` itself,
// a slot has an observable empty state: transferring out leaves it vacant,
// and touching a vacant slot is a reportable error, not undefined behavior.

use thiserror::Error;

use crate::owner::ExclusiveOwner;

/// Returned when a slot is accessed after its owner was transferred out
/// (or was never installed).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("slot is empty: the owner was already transferred out")]
pub struct EmptyAccess;

/// A nullable handle to an [`ExclusiveOwner`].
#[derive(Debug, Default)]
pub struct OwnerSlot<T = i32> {
    inner: Option<ExclusiveOwner<T>>,
}

impl<T> OwnerSlot<T> {
    pub fn new(owner: ExclusiveOwner<T>) -> Self {
        OwnerSlot { inner: Some(owner) }
    }

    /// An empty slot, holding no resource.
    pub fn vacant() -> Self {
        OwnerSlot { inner: None }
    }

    /// Installs an owner, handing back the previous occupant if any.
    pub fn put(&mut self, owner: ExclusiveOwner<T>) -> Option<ExclusiveOwner<T>> {
        self.inner.replace(owner)
    }

    /// Moves the owner out, leaving the slot vacant.
    ///
    /// Transferring out of an already-vacant slot is a logic error and
    /// surfaces as [`EmptyAccess`].
    pub fn transfer_out(&mut self) -> Result<ExclusiveOwner<T>, EmptyAccess> {
        self.inner.take().ok_or(EmptyAccess)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }
}

impl<T: Copy> OwnerSlot<T> {
    /// Reads the held value through the handle.
    pub fn read(&self) -> Result<T, EmptyAccess> {
        self.inner.as_ref().map(|owner| owner.read()).ok_or(EmptyAccess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_vacant_read_is_empty_access() {
        let slot: OwnerSlot = OwnerSlot::vacant();
        assert_eq!(slot.read(), Err(EmptyAccess));
    }

    #[test]
    fn test_transfer_out_leaves_slot_vacant() {
        let mut slot = OwnerSlot::new(ExclusiveOwner::new(7));
        assert!(!slot.is_empty());

        let owner = slot.transfer_out().expect("slot was occupied");
        assert_eq!(owner.read(), 7);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_transfer_out_twice_is_an_error() {
        let mut slot = OwnerSlot::new(ExclusiveOwner::new(7));

        let first = slot.transfer_out();
        assert!(first.is_ok());

        let second = slot.transfer_out();
        assert_eq!(second.map(|owner| owner.read()), Err(EmptyAccess));
    }

    #[test]
    fn test_put_returns_previous_occupant() {
        let mut slot = OwnerSlot::new(ExclusiveOwner::new(1));

        let previous = slot.put(ExclusiveOwner::new(2));
        assert_eq!(previous.map(|owner| owner.read()), Some(1));
        assert_eq!(slot.read(), Ok(2));
    }

    #[test]
    fn test_put_into_vacant_slot() {
        let mut slot = OwnerSlot::vacant();
        assert!(slot.put(ExclusiveOwner::new(9)).is_none());
        assert_eq!(slot.read(), Ok(9));
    }

    #[test]
    fn test_dropping_vacant_slot_is_noop() {
        let mut slot = OwnerSlot::new(ExclusiveOwner::new(3));
        let owner = slot.transfer_out().expect("slot was occupied");

        // The slot no longer owns anything; dropping it must not disturb
        // the transferred owner.
        drop(slot);
        assert_eq!(owner.read(), 3);
    }

    #[quickcheck]
    fn put_then_read_roundtrips(v: i32) -> bool {
        OwnerSlot::new(ExclusiveOwner::new(v)).read() == Ok(v)
    }

    #[quickcheck]
    fn transfer_out_preserves_value(v: i32) -> bool {
        let mut slot = OwnerSlot::new(ExclusiveOwner::new(v));
        slot.transfer_out().map(|owner| owner.read()) == Ok(v) && slot.is_empty()
    }
}
