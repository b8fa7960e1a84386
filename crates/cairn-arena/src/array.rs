//! Growable arrays carved out of the arena.
//!
//! A [`DynamicArray`] is a two-word header followed by its slots:
//!
//! ```text
//! addr + 0: length
//! addr + 1: capacity
//! addr + 2: slot 0 (T::WORDS words)
//! ...
//! ```
//!
//! Slots `[0, length)` hold values; `[length, capacity)` are reserved.

use std::fmt;
use std::marker::PhantomData;

use cairn_core::{Addr, ArenaError, Slot, Word};
use tracing::{debug, trace};

use crate::arena::Arena;

const LEN: usize = 0;
const CAP: usize = 1;
const HEADER_WORDS: usize = 2;

/// How a [`DynamicArray::push`] found room for the new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Growth {
    /// There was spare capacity; nothing moved.
    Fit,
    /// The array was the arena tip and claimed one more slot in place.
    Extended,
    /// The array was copied to a larger region. The old region is
    /// abandoned (never reclaimed).
    Relocated {
        /// Header address before the push.
        from: Addr,
        /// Header address after the push.
        to: Addr,
    },
}

/// A growable, capacity-tracked sequence of `T` slots in an [`Arena`].
///
/// The handle is just the header address. It is deliberately neither
/// `Clone` nor `Copy`: [`push`](Self::push) may relocate the header, and
/// taking `&mut self` there is what keeps a pre-relocation alias from
/// existing. Use [`StableArray`](crate::StableArray) when the handle has
/// to be shared.
#[must_use]
pub struct DynamicArray<T> {
    addr: Addr,
    _slot: PhantomData<fn() -> T>,
}

impl<T: Slot> DynamicArray<T> {
    /// Allocate a header and `capacity` reserved slots. Length starts at 0.
    pub fn create(arena: &mut Arena, capacity: usize) -> Self {
        let addr = arena.alloc(HEADER_WORDS + capacity * T::WORDS);
        arena.write(addr, CAP, capacity as Word);
        Self::from_addr(addr)
    }

    /// Adopt an existing header address.
    ///
    /// The address must be the current header of a `DynamicArray<T>` in
    /// the same arena. Adopting a header that has since relocated reads
    /// abandoned storage.
    pub fn from_addr(addr: Addr) -> Self {
        Self {
            addr,
            _slot: PhantomData,
        }
    }

    /// Address of the header.
    pub fn addr(&self) -> Addr {
        self.addr
    }

    /// Number of defined slots.
    pub fn len(&self, arena: &Arena) -> usize {
        arena.read(self.addr, LEN) as usize
    }

    /// Whether no slot is defined.
    pub fn is_empty(&self, arena: &Arena) -> bool {
        self.len(arena) == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self, arena: &Arena) -> usize {
        arena.read(self.addr, CAP) as usize
    }

    fn slot(&self, index: usize) -> Addr {
        self.addr.offset(HEADER_WORDS + index * T::WORDS)
    }

    fn check(&self, arena: &Arena, index: usize) -> Result<(), ArenaError> {
        let capacity = self.capacity(arena);
        if index >= capacity {
            return Err(ArenaError::IndexOutOfBounds { index, capacity });
        }
        Ok(())
    }

    /// Read slot `index`, checked against the capacity.
    ///
    /// Slots in `[length, capacity)` read back as whatever the arena holds
    /// there (zero words unless written).
    pub fn get(&self, arena: &Arena, index: usize) -> Result<T, ArenaError> {
        self.check(arena, index)?;
        Ok(self.get_unchecked(arena, index))
    }

    /// Write slot `index`, checked against the capacity. Does not change
    /// the length.
    pub fn set(&self, arena: &mut Arena, index: usize, value: T) -> Result<(), ArenaError> {
        self.check(arena, index)?;
        self.set_unchecked(arena, index, value);
        Ok(())
    }

    /// Read slot `index` without a capacity check.
    ///
    /// The caller guarantees `index < len`. A larger index reads words
    /// belonging to whatever follows the array; one past the arena cursor
    /// panics.
    pub fn get_unchecked(&self, arena: &Arena, index: usize) -> T {
        arena.load(self.slot(index), 0)
    }

    /// Write slot `index` without a capacity check.
    ///
    /// The caller guarantees `index < len`. A larger index overwrites
    /// whatever follows the array.
    pub fn set_unchecked(&self, arena: &mut Arena, index: usize, value: T) {
        arena.store(self.slot(index), 0, &value);
    }

    /// Append a value, growing when full.
    ///
    /// With spare capacity the value is written in place. A full array
    /// that is the arena tip claims one more slot in place. Otherwise the
    /// array relocates to a region of `capacity + 1 + extra_capacity`
    /// slots and this handle is rewritten to the new header.
    pub fn push(&mut self, arena: &mut Arena, value: T, extra_capacity: usize) -> Growth {
        let len = self.len(arena);
        let capacity = self.capacity(arena);

        let growth = if len < capacity {
            Growth::Fit
        } else if arena.try_extend(self.slot(capacity), T::WORDS) {
            arena.write(self.addr, CAP, (capacity + 1) as Word);
            trace!(addr = %self.addr, capacity = capacity + 1, "array extended in place");
            Growth::Extended
        } else {
            let from = self.addr;
            self.relocate(arena, len, capacity + 1 + extra_capacity);
            Growth::Relocated {
                from,
                to: self.addr,
            }
        };

        self.set_unchecked(arena, len, value);
        arena.write(self.addr, LEN, (len + 1) as Word);
        growth
    }

    /// Append a value without any capacity check. Never relocates.
    ///
    /// The caller guarantees `len < capacity`. Otherwise the write lands
    /// on whatever follows the array.
    pub fn push_unchecked(&self, arena: &mut Arena, value: T) {
        let len = self.len(arena);
        debug_assert!(len < self.capacity(arena), "push_unchecked on a full array");
        self.set_unchecked(arena, len, value);
        arena.write(self.addr, LEN, (len + 1) as Word);
    }

    fn relocate(&mut self, arena: &mut Arena, len: usize, new_capacity: usize) {
        let from = self.addr;
        let to = arena.alloc(HEADER_WORDS + new_capacity * T::WORDS);
        let live = HEADER_WORDS + len * T::WORDS;
        arena.copy_words(from, to, live);
        arena.write(to, CAP, new_capacity as Word);
        arena.note_relocation(live);
        debug!(%from, %to, len, new_capacity, "array relocated");
        self.addr = to;
    }

    /// Iterate over the defined slots in index order.
    pub fn iter<'a>(&'a self, arena: &'a Arena) -> impl Iterator<Item = T> + 'a
    where
        T: 'a,
    {
        (0..self.len(arena)).map(move |i| self.get_unchecked(arena, i))
    }

    /// Collect the defined slots.
    pub fn to_vec(&self, arena: &Arena) -> Vec<T> {
        self.iter(arena).collect()
    }
}

impl<T> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("addr", &self.addr)
            .finish()
    }
}

impl<T> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr
    }
}

impl<T> Eq for DynamicArray<T> {}
