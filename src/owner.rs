// Pattern: Exclusive Ownership
// A move-only owner of one heap slot. Transfer relocates the resource;
// duplication does not type-check.

/// An exclusive owner of a single heap-allocated slot.
///
/// Exactly one owner exists per underlying resource. The type implements
/// neither [`Clone`] nor [`Copy`], so duplicating an owner is rejected by the
/// compiler rather than checked at runtime:
///
/// ```compile_fail
/// use ownership_tour::ExclusiveOwner;
///
/// let a = ExclusiveOwner::new(7);
/// let b = ExclusiveOwner::clone(&a); // no `Clone` impl exists
/// ```
///
/// Transfer consumes the source, so a moved-from owner cannot be used again:
///
/// ```compile_fail
/// use ownership_tour::ExclusiveOwner;
///
/// let a = ExclusiveOwner::new(7);
/// let b = ExclusiveOwner::transfer(a);
/// a.read(); // `a` was moved into `b`
/// ```
///
/// The happy path:
///
/// ```
/// use ownership_tour::ExclusiveOwner;
///
/// let a = ExclusiveOwner::new(7);
/// let b = ExclusiveOwner::transfer(a);
/// assert_eq!(b.read(), 7);
/// ```
// No `&self`-duplicating traits: a Clone or Copy impl would break the
// single-owner invariant.
#[derive(Debug)]
pub struct ExclusiveOwner<T = i32> {
    slot: Box<T>,
}

impl<T> ExclusiveOwner<T> {
    /// Allocates one slot holding `value`.
    pub fn new(value: T) -> Self {
        ExclusiveOwner {
            slot: Box::new(value),
        }
    }

    /// Takes ownership of `source`'s resource.
    ///
    /// A move relocates the box pointer; the heap slot itself is untouched,
    /// so no allocation or copy happens here. The `source` binding is dead
    /// after the call.
    pub fn transfer(source: ExclusiveOwner<T>) -> ExclusiveOwner<T> {
        source
    }

    /// Borrows the held value without moving it.
    pub fn get(&self) -> &T {
        &self.slot
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.slot
    }

    /// Consumes the owner and returns the payload, releasing the slot.
    pub fn into_inner(self) -> T {
        *self.slot
    }
}

impl<T: Copy> ExclusiveOwner<T> {
    /// Returns the held value.
    pub fn read(&self) -> T {
        *self.slot
    }
}
