use core::num::NonZero;

// Narrow in unit tests so the arena limit is reachable.
#[cfg(test)]
type Slot = u16;
#[cfg(not(test))]
type Slot = u32;

/// Position of a node in the [`Arena`](super::arena::Arena).
///
/// Every node carries three optional links (left, right, parent), so the
/// handle keeps a niche: slot `n` is stored as `n + 1`, and `None` is the
/// zero bit pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Slot>);

impl Handle {
    /// Highest slot a handle can name.
    pub(crate) const MAX: usize = Slot::MAX as usize - 1;

    #[inline]
    pub(crate) const fn from_slot(slot: usize) -> Self {
        assert!(slot <= Self::MAX, "`Handle::from_slot()` - `slot` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        let stored = slot as Slot + 1;
        match NonZero::new(stored) {
            Some(stored) => Self(stored),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}
