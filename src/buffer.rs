/*!
The contiguous byte buffer and the component index table.

A stored URL is one NUL-terminated allocation plus nine offsets delimiting
the eight component regions. All mutation funnels through
[`Buf::splice`](struct.Buf.html#method.splice), which shifts the suffix
(including the NUL) in place, and [`Table::splice`](struct.Table.html#method.splice),
which updates every affected offset in a single pass.
*/

use crate::error::{ErrorKind, Result};
use crate::host::HostType;
use std::iter;
use std::str;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The implementation maximum for an encoded URL, excluding the NUL.
pub(crate) const MAX_LENGTH: usize = (u32::MAX - 1) as usize;

/// The eight component regions, in buffer order. Each region carries its
/// leading delimiter when present: `scheme` ends with `:`, `user` starts
/// with `//`, `password` ends with `@`, `port` starts with `:`, `query`
/// with `?`, and `fragment` with `#`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Id {
    Scheme = 0,
    User = 1,
    Password = 2,
    Host = 3,
    Port = 4,
    Path = 5,
    Query = 6,
    Fragment = 7,
}

/// The component index table: `offsets[i]` is where component `i` starts,
/// `offsets[8]` is the total length. Carries the derived metadata alongside
/// so readers never re-parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Table {
    offsets: [usize; 9],
    pub(crate) host_type: HostType,
    pub(crate) port_number: Option<u16>,
    pub(crate) nseg: usize,
    pub(crate) nparam: usize,
}

/// The owned byte buffer. Always holds the encoded URL followed by a single
/// NUL byte; capacity grows geometrically and never shrinks short of
/// `clear`.
#[derive(Clone, Debug)]
pub(crate) struct Buf {
    bytes: Vec<u8>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Id {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Table {
    #[inline]
    pub(crate) fn start(&self, id: Id) -> usize {
        self.offsets[id.index()]
    }

    #[inline]
    pub(crate) fn end(&self, id: Id) -> usize {
        self.offsets[id.index() + 1]
    }

    #[inline]
    pub(crate) fn len(&self, id: Id) -> usize {
        self.end(id) - self.start(id)
    }

    #[inline]
    pub(crate) fn total(&self) -> usize {
        self.offsets[8]
    }

    /// Set boundary `index` directly; used to re-split a freshly written
    /// multi-component region.
    pub(crate) fn set_boundary(&mut self, index: usize, at: usize) {
        self.offsets[index] = at;
    }

    /// Record that the byte range covering components `first..=last` was
    /// replaced by `new_len` bytes: every offset in `(first, last]` becomes
    /// `start(first) + new_len` (component `first` owns the new bytes until
    /// a re-split says otherwise) and every later offset shifts by the net
    /// delta.
    pub(crate) fn splice(&mut self, first: Id, last: Id, new_len: usize) {
        let start = self.start(first);
        let old_end = self.end(last);
        let new_end = start + new_len;
        for index in (first.index() + 1)..=last.index() {
            self.offsets[index] = new_end;
        }
        for index in (last.index() + 1)..=8 {
            self.offsets[index] = self.offsets[index] - old_end + new_end;
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Table::default();
    }
}

impl Default for Buf {
    fn default() -> Self {
        Self { bytes: vec![0] }
    }
}

impl Buf {
    pub(crate) fn from_bytes(src: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(src.len() + 1);
        bytes.extend_from_slice(src);
        bytes.push(0);
        Self { bytes }
    }

    /// The encoded length, excluding the trailing NUL.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    pub(crate) fn as_str(&self) -> &str {
        str::from_utf8(self.as_bytes()).expect("stored URL is ASCII")
    }

    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &[u8] {
        &self.bytes[start..end]
    }

    #[inline]
    pub(crate) fn slice_mut(&mut self, start: usize, end: usize) -> &mut [u8] {
        &mut self.bytes[start..end]
    }

    /// Replace `[start, end)` with `new_len` zero bytes, shifting the
    /// suffix and the NUL. Fails with `TooLarge` (and no other observable
    /// effect) if the result would exceed the implementation maximum.
    pub(crate) fn splice(&mut self, start: usize, end: usize, new_len: usize) -> Result<()> {
        let total = self.len() - (end - start) + new_len;
        if total > MAX_LENGTH {
            bail!(ErrorKind::TooLarge(total));
        }
        if total + 1 > self.bytes.capacity() {
            log::trace!("Buf::splice() growing past {} bytes", self.bytes.capacity());
        }
        let _ = self
            .bytes
            .splice(start..end, iter::repeat(0u8).take(new_len))
            .count();
        Ok(())
    }

    pub(crate) fn write(&mut self, at: usize, src: &[u8]) {
        self.bytes[at..at + src.len()].copy_from_slice(src);
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.bytes.reserve(additional);
    }

    /// Drop the content, keep the allocation.
    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
        self.bytes.push(0);
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
