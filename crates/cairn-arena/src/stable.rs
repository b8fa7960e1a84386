//! Relocation-proof array handles.
//!
//! A [`StableArray`] points at a one-word arena cell that in turn holds
//! the address of a [`DynamicArray`] header. Growth rewrites the cell,
//! so every copy of the handle keeps resolving to the live array.

use std::fmt;
use std::marker::PhantomData;

use cairn_core::{Addr, ArenaError, Slot, Word};

use crate::arena::Arena;
use crate::array::{DynamicArray, Growth};

/// A copyable handle to a growable array that survives relocation.
///
/// Costs one extra word and one extra read per operation compared with
/// a bare [`DynamicArray`]. A handle decoded from a zero word is null;
/// every operation through it panics.
pub struct StableArray<T> {
    cell: Option<Addr>,
    _slot: PhantomData<fn() -> T>,
}

impl<T> Clone for StableArray<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StableArray<T> {}

impl<T: Slot> StableArray<T> {
    /// Allocate the indirection cell and an array of `capacity` slots.
    ///
    /// The cell is allocated first so the array starts as the arena tip
    /// and its first growth can happen in place.
    pub fn create(arena: &mut Arena, capacity: usize) -> Self {
        let cell = arena.alloc(1);
        let array = DynamicArray::<T>::create(arena, capacity);
        arena.write(cell, 0, array.addr().to_word());
        Self::from_cell(cell)
    }

    /// Adopt an existing indirection cell.
    pub fn from_cell(cell: Addr) -> Self {
        Self {
            cell: Some(cell),
            _slot: PhantomData,
        }
    }

    /// Whether this handle was decoded from an unwritten slot.
    pub fn is_null(&self) -> bool {
        self.cell.is_none()
    }

    /// Address of the indirection cell. Stable for the arena's lifetime.
    ///
    /// # Panics
    ///
    /// Panics on a null handle.
    pub fn cell(&self) -> Addr {
        self.cell.expect("dereferenced a null stable array handle")
    }

    /// The array the cell currently points at.
    ///
    /// The returned handle is only valid until the next push through
    /// this `StableArray`.
    pub fn current(&self, arena: &Arena) -> DynamicArray<T> {
        let addr = Addr::from_word(arena.read(self.cell(), 0))
            .expect("stable array cell never holds the null word");
        DynamicArray::from_addr(addr)
    }

    /// Number of defined slots.
    pub fn len(&self, arena: &Arena) -> usize {
        self.current(arena).len(arena)
    }

    /// Whether no slot is defined.
    pub fn is_empty(&self, arena: &Arena) -> bool {
        self.len(arena) == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self, arena: &Arena) -> usize {
        self.current(arena).capacity(arena)
    }

    /// Checked read; see [`DynamicArray::get`].
    pub fn get(&self, arena: &Arena, index: usize) -> Result<T, ArenaError> {
        self.current(arena).get(arena, index)
    }

    /// Checked write; see [`DynamicArray::set`].
    pub fn set(&self, arena: &mut Arena, index: usize, value: T) -> Result<(), ArenaError> {
        self.current(arena).set(arena, index, value)
    }

    /// Unchecked read; see [`DynamicArray::get_unchecked`].
    pub fn get_unchecked(&self, arena: &Arena, index: usize) -> T {
        self.current(arena).get_unchecked(arena, index)
    }

    /// Unchecked write; see [`DynamicArray::set_unchecked`].
    pub fn set_unchecked(&self, arena: &mut Arena, index: usize, value: T) {
        self.current(arena).set_unchecked(arena, index, value)
    }

    /// Append a value, updating the cell if the array relocates.
    pub fn push(&self, arena: &mut Arena, value: T, extra_capacity: usize) -> Growth {
        let mut array = self.current(arena);
        let growth = array.push(arena, value, extra_capacity);
        if let Growth::Relocated { to, .. } = growth {
            arena.write(self.cell(), 0, to.to_word());
        }
        growth
    }

    /// Append without a capacity check; see [`DynamicArray::push_unchecked`].
    pub fn push_unchecked(&self, arena: &mut Arena, value: T) {
        self.current(arena).push_unchecked(arena, value)
    }

    /// Collect the defined slots.
    pub fn to_vec(&self, arena: &Arena) -> Vec<T> {
        self.current(arena).to_vec(arena)
    }
}

/// Stored as the cell address. The zero word loads as a null handle.
impl<T> Slot for StableArray<T> {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        self.cell.store(out);
    }

    fn load(words: &[Word]) -> Self {
        Self {
            cell: Addr::from_word(words[0]),
            _slot: PhantomData,
        }
    }
}

impl<T> fmt::Debug for StableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StableArray")
            .field("cell", &self.cell)
            .finish()
    }
}

impl<T> PartialEq for StableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell
    }
}

impl<T> Eq for StableArray<T> {}
