//! Sequence that picks its storage layout from its length.
//!
//! Provides [`AdaptiveList`], which keeps nothing for an empty list, the value itself
//! for a single element, a `heapless::Vec<T, N>` for `2..=N` elements and a
//! `std::collections::LinkedList` beyond that. Crossing a boundary moves every element
//! into the new layout in one step; shrinking back below a boundary moves them back.
//!
//! [`AnyList`] provides an object-safe trait over `AdaptiveList` and `Vec`.

use core::mem;
use std::collections::linked_list;
use std::collections::LinkedList;
use std::fmt;
use std::slice;

use log::trace;

use crate::error::ListError;

/// A trait for abstraction over list types that grow and shrink at the tail.
pub trait AnyList<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn get(&self, index: usize) -> Option<&T>;
    fn set(&mut self, index: usize, value: T) -> bool;
}

impl<T> AnyList<T> for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, value: T) {
        self.push(value);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
    fn set(&mut self, index: usize, value: T) -> bool {
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl<T, const N: usize> AnyList<T> for AdaptiveList<T, N> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, value: T) {
        self.push(value);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn set(&mut self, index: usize, value: T) -> bool {
        self.set(index, value)
    }
}

/// The storage layout an [`AdaptiveList`] is currently using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// No elements, no storage.
    Empty,
    /// Exactly one element, stored inline.
    Scalar,
    /// `2..=N` elements in the fixed-capacity buffer.
    Buffer,
    /// More than `N` elements in the linked chain.
    Chain,
}

impl Representation {
    /// Returns the layout a list of `len` elements must use when its buffer holds
    /// `capacity` elements.
    pub const fn for_len(len: usize, capacity: usize) -> Self {
        match len {
            0 => Representation::Empty,
            1 => Representation::Scalar,
            _ if len <= capacity => Representation::Buffer,
            _ => Representation::Chain,
        }
    }
}

/// A list that stores up to `N` elements inline, then switches to a linked chain.
///
/// # Layouts
/// * **Empty:** no elements.
/// * **Scalar:** one element, no container around it.
/// * **Buffer:** `2..=N` elements in a `heapless::Vec<T, N>`.
/// * **Chain:** `N + 1` or more elements in a `LinkedList<T>`; `get`/`set` scan from the head.
///
/// The layout is a pure function of the length (see [`Representation::for_len`]), so
/// a list that grows past `N` and shrinks back returns to the buffer.
///
/// Out-of-range reads return `None` and out-of-range writes return `false`; no
/// operation panics on caller input.
pub struct AdaptiveList<T, const N: usize = 5> {
    len: usize,
    data: ListData<T, N>,
}

/// Internal storage for `AdaptiveList`. Exactly one layout is live at a time.
#[derive(Clone)]
enum ListData<T, const N: usize> {
    Empty,
    Scalar(T),
    Buffer(heapless::Vec<T, N>),
    Chain(LinkedList<T>),
}

impl<T, const N: usize> ListData<T, N> {
    fn representation(&self) -> Representation {
        match self {
            ListData::Empty => Representation::Empty,
            ListData::Scalar(_) => Representation::Scalar,
            ListData::Buffer(_) => Representation::Buffer,
            ListData::Chain(_) => Representation::Chain,
        }
    }

    fn stored_len(&self) -> usize {
        match self {
            ListData::Empty => 0,
            ListData::Scalar(_) => 1,
            ListData::Buffer(buffer) => buffer.len(),
            ListData::Chain(chain) => chain.len(),
        }
    }
}

impl<T, const N: usize> AdaptiveList<T, N> {
    /// Number of elements the inline buffer holds before the list switches to a chain.
    pub const INLINE_CAPACITY: usize = N;

    /// Creates a new empty list.
    ///
    /// Fails to compile if `N < 2`: the buffer must take both elements when a scalar
    /// is promoted.
    pub fn new() -> Self {
        const {
            assert!(N >= 2, "AdaptiveList N must be at least 2");
        }

        Self {
            len: 0,
            data: ListData::Empty,
        }
    }

    // --- Inspection ---

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the layout currently holding the elements.
    #[inline]
    pub fn representation(&self) -> Representation {
        self.data.representation()
    }

    // --- Modification ---

    /// Appends an element to the back of the list, converting the layout when the
    /// new length crosses a boundary.
    pub fn push(&mut self, value: T) {
        self.data = match mem::replace(&mut self.data, ListData::Empty) {
            ListData::Empty => ListData::Scalar(value),
            ListData::Scalar(first) => Self::promote_scalar(first, value),
            ListData::Buffer(mut buffer) => match buffer.push(value) {
                Ok(()) => ListData::Buffer(buffer),
                Err(value) => Self::spill_to_chain(buffer, value),
            },
            ListData::Chain(mut chain) => {
                chain.push_back(value);
                ListData::Chain(chain)
            }
        };
        self.len += 1;
        self.debug_check();
    }

    /// Removes the last element and returns it, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        let (data, value) = match mem::replace(&mut self.data, ListData::Empty) {
            ListData::Empty => return None,
            ListData::Scalar(value) => (ListData::Empty, value),
            ListData::Buffer(mut buffer) => {
                let Some(value) = buffer.pop() else {
                    unreachable!("buffer holds at least two elements");
                };
                (Self::settle_buffer(buffer), value)
            }
            ListData::Chain(mut chain) => {
                let Some(value) = chain.pop_back() else {
                    unreachable!("chain holds more than N elements");
                };
                (Self::settle_chain(chain), value)
            }
        };
        self.data = data;
        self.len -= 1;
        self.debug_check();
        Some(value)
    }

    // --- Access ---

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    ///
    /// O(1) up to `N` elements; a chain is walked from its head.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        match &self.data {
            ListData::Empty => None,
            ListData::Scalar(value) => Some(value),
            ListData::Buffer(buffer) => buffer.get(index),
            ListData::Chain(chain) => chain.iter().nth(index),
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        match &mut self.data {
            ListData::Empty => None,
            ListData::Scalar(value) => Some(value),
            ListData::Buffer(buffer) => buffer.get_mut(index),
            ListData::Chain(chain) => chain.iter_mut().nth(index),
        }
    }

    /// Overwrites the element at `index`. Returns `false` and drops `value` if
    /// `index` is out of bounds. Never changes the layout.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Overwrites the element at `index` and returns the previous one.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(ListError::IndexOutOfBounds { index, len }),
        }
    }

    /// Renders the list as `[a, b, c]`.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    // --- Internal Helpers ---

    fn elements(&self) -> Elements<'_, T> {
        match &self.data {
            ListData::Empty => Elements::Scalar(None.into_iter()),
            ListData::Scalar(value) => Elements::Scalar(Some(value).into_iter()),
            ListData::Buffer(buffer) => Elements::Buffer(buffer.iter()),
            ListData::Chain(chain) => Elements::Chain(chain.iter()),
        }
    }

    fn promote_scalar(first: T, second: T) -> ListData<T, N> {
        trace!("promoting scalar to buffer (len 2, capacity {})", N);
        let mut buffer: heapless::Vec<T, N> = heapless::Vec::new();
        match (buffer.push(first), buffer.push(second)) {
            (Ok(()), Ok(())) => ListData::Buffer(buffer),
            _ => unreachable!("buffer capacity is at least 2"),
        }
    }

    #[inline(never)]
    fn spill_to_chain(buffer: heapless::Vec<T, N>, value: T) -> ListData<T, N> {
        trace!("spilling full buffer to chain (len {})", N + 1);
        let mut chain: LinkedList<T> = buffer.into_iter().collect();
        chain.push_back(value);
        ListData::Chain(chain)
    }

    /// Picks the layout for a buffer that has just lost an element.
    fn settle_buffer(mut buffer: heapless::Vec<T, N>) -> ListData<T, N> {
        if buffer.len() >= 2 {
            return ListData::Buffer(buffer);
        }
        trace!("demoting buffer to scalar");
        match buffer.pop() {
            Some(value) => ListData::Scalar(value),
            None => ListData::Empty,
        }
    }

    /// Picks the layout for a chain that has just lost its tail.
    #[inline(never)]
    fn settle_chain(chain: LinkedList<T>) -> ListData<T, N> {
        if chain.len() > N {
            return ListData::Chain(chain);
        }
        trace!("rebuilding buffer from chain (len {})", chain.len());
        let mut buffer: heapless::Vec<T, N> = heapless::Vec::new();
        for value in chain {
            if buffer.push(value).is_err() {
                unreachable!("chain of at most N elements fits the buffer");
            }
        }
        Self::settle_buffer(buffer)
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(self.data.stored_len(), self.len);
        debug_assert_eq!(
            self.data.representation(),
            Representation::for_len(self.len, N)
        );
    }
}

/// Borrowing walk over the elements in order, whatever the layout.
enum Elements<'a, T> {
    Scalar(std::option::IntoIter<&'a T>),
    Buffer(slice::Iter<'a, T>),
    Chain(linked_list::Iter<'a, T>),
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Elements::Scalar(iter) => iter.next(),
            Elements::Buffer(iter) => iter.next(),
            Elements::Chain(iter) => iter.next(),
        }
    }
}

// --- Trait Implementations ---

impl<T, const N: usize> Default for AdaptiveList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for AdaptiveList<T, N> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            data: self.data.clone(),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for AdaptiveList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for AdaptiveList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.elements().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq, const N: usize> PartialEq for AdaptiveList<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elements().eq(other.elements())
    }
}
impl<T: Eq, const N: usize> Eq for AdaptiveList<T, N> {}

impl<T, const N: usize> Extend<T> for AdaptiveList<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, const N: usize> FromIterator<T> for AdaptiveList<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = AdaptiveList::new();
        list.extend(iter);
        list
    }
}

// --- Test Suite ---
