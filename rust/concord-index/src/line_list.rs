//! Ordered, deduplicated list of the line numbers on which a word occurs.
//!
//! Line numbers normally arrive in ascending order, since input is scanned
//! from top to bottom. The list is therefore biased towards appends: a number
//! greater than the current tail is pushed in O(1) amortized time, while an
//! earlier number falls back to an ordered insert into the backing array.

/// A 1-based line (or page) number.
pub type LineNumber = u32;

/// Result of adding a number to a [`LineList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The number was greater than the tail and became the new tail.
    Appended,
    /// The number was inserted before the tail at the given position.
    Inserted(usize),
    /// The number was already present; the list is unchanged.
    Duplicate,
}

impl Placement {
    /// Returns `true` if the list was modified.
    pub fn is_new(&self) -> bool {
        !matches!(self, Placement::Duplicate)
    }
}

/// Strictly ascending sequence of distinct line numbers.
///
/// The tail bookmark is the last slot of the backing vector. A list is never
/// empty: it is created with the first occurrence of its word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineList {
    lines: Vec<LineNumber>,
}

impl LineList {
    /// Creates a list holding a single number.
    pub fn new(first: LineNumber) -> LineList {
        LineList { lines: vec![first] }
    }

    /// Adds `line` to the list, keeping it ascending and free of duplicates.
    ///
    /// Numbers above the tail take the fast path (a push). Numbers below the
    /// tail are located by binary search over the ordered prefix and spliced
    /// in; an exact match leaves the list untouched.
    pub fn append_or_insert(&mut self, line: LineNumber) -> Placement {
        let tail = self.tail();
        if line > tail {
            self.lines.push(line);
            return Placement::Appended;
        }
        if line == tail {
            return Placement::Duplicate;
        }
        match self.lines.binary_search(&line) {
            Ok(_) => Placement::Duplicate,
            Err(pos) => {
                self.lines.insert(pos, line);
                Placement::Inserted(pos)
            }
        }
    }

    /// The greatest number recorded so far.
    pub fn tail(&self) -> LineNumber {
        // Lists are created non-empty and never shrink.
        self.lines[self.lines.len() - 1]
    }

    /// The smallest number recorded so far.
    pub fn head(&self) -> LineNumber {
        self.lines[0]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false`; provided for API symmetry with other collections.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: LineNumber) -> bool {
        self.lines.binary_search(&line).is_ok()
    }

    pub fn as_slice(&self) -> &[LineNumber] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineNumber> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a LineList {
    type Item = &'a LineNumber;
    type IntoIter = std::slice::Iter<'a, LineNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
