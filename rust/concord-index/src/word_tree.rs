//! Binary search tree mapping each distinct word to the lines it occurs on.
//!
//! The tree is unbalanced: its shape is purely a function of insertion order,
//! and alphabetically sorted input degrades it into a list. To keep that case
//! safe, every walk over the tree (insert, lookup, traversal, depth and drop)
//! is iterative, so no operation consumes stack proportional to the depth.

use std::cmp::Ordering;

use concord_common::{Result, verify_arg};

use crate::line_list::{LineList, LineNumber, Placement};

/// One distinct word seen in the input together with its occurrence lines.
///
/// Every word in `left` compares less than `text` and every word in `right`
/// compares greater (byte-wise).
#[derive(Debug)]
pub struct WordEntry {
    text: String,
    lines: LineList,
    left: Option<Box<WordEntry>>,
    right: Option<Box<WordEntry>>,
}

impl WordEntry {
    fn new(text: &str, line: LineNumber) -> WordEntry {
        WordEntry {
            text: text.to_string(),
            lines: LineList::new(line),
            left: None,
            right: None,
        }
    }

    /// The normalized word.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ascending, deduplicated occurrence lines of the word.
    pub fn lines(&self) -> &LineList {
        &self.lines
    }
}

/// Describes the mutation performed by [`WordTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The word was not present; a new entry was created.
    NewWord,
    /// The word was present and the line was added to its list.
    NewLine,
    /// The word was already recorded on that line.
    Duplicate,
}

/// Cross-reference index: words ordered by byte-wise comparison, each with
/// its line list.
#[derive(Debug, Default)]
pub struct WordTree {
    root: Option<Box<WordEntry>>,
    len: usize,
    occurrences: usize,
}

impl WordTree {
    /// Creates an empty tree.
    pub fn new() -> WordTree {
        WordTree::default()
    }

    /// Records that `word` occurs on `line`.
    ///
    /// Descends from the root by comparing `word` with each entry's text. An
    /// empty child slot receives a freshly allocated entry; a matching entry
    /// gets `line` added to its list. The new entry is fully built before it
    /// is linked, so a failed allocation never leaves a partial node behind.
    ///
    /// # Errors
    /// Returns an `InvalidArgument` error, leaving the tree unchanged, if
    /// `word` is empty or `line` is zero.
    pub fn insert(&mut self, word: &str, line: LineNumber) -> Result<InsertOutcome> {
        verify_arg!(word, !word.is_empty());
        verify_arg!(line, line >= 1);

        let mut slot = &mut self.root;
        while let Some(entry) = slot {
            match word.as_bytes().cmp(entry.text.as_bytes()) {
                Ordering::Less => slot = &mut entry.left,
                Ordering::Greater => slot = &mut entry.right,
                Ordering::Equal => {
                    let placement = entry.lines.append_or_insert(line);
                    if let Placement::Inserted(pos) = placement {
                        log::trace!(
                            "out-of-order line {line} for '{word}' inserted at position {pos}"
                        );
                    }
                    return Ok(if placement.is_new() {
                        self.occurrences += 1;
                        InsertOutcome::NewLine
                    } else {
                        InsertOutcome::Duplicate
                    });
                }
            }
        }

        *slot = Some(Box::new(WordEntry::new(word, line)));
        self.len += 1;
        self.occurrences += 1;
        Ok(InsertOutcome::NewWord)
    }

    /// Looks up `word` using the same comparison rule as [`insert`](Self::insert).
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        let mut node = self.root.as_deref();
        while let Some(entry) = node {
            node = match word.as_bytes().cmp(entry.text.as_bytes()) {
                Ordering::Less => entry.left.as_deref(),
                Ordering::Greater => entry.right.as_deref(),
                Ordering::Equal => return Some(entry),
            };
        }
        None
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of distinct (word, line) pairs recorded.
    pub fn occurrence_count(&self) -> usize {
        self.occurrences
    }

    /// Number of entries on the longest root-to-leaf path; zero when empty.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&WordEntry, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|root| (root, 1)));
        while let Some((entry, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(entry.left.as_deref().map(|child| (child, depth + 1)));
            stack.extend(entry.right.as_deref().map(|child| (child, depth + 1)));
        }
        max_depth
    }

    /// In-order traversal: entries in ascending word order.
    ///
    /// Each call starts a fresh traversal; the tree is not modified.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl Drop for WordTree {
    fn drop(&mut self) {
        // Detach children before each entry is dropped so that freeing a
        // degenerate tree does not recurse once per level.
        let mut pending: Vec<Box<WordEntry>> = self.root.take().into_iter().collect();
        while let Some(mut entry) = pending.pop() {
            pending.extend(entry.left.take());
            pending.extend(entry.right.take());
        }
    }
}

/// Iterator over the entries of a [`WordTree`] in ascending word order.
pub struct Iter<'a> {
    stack: Vec<&'a WordEntry>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a WordEntry>) {
        while let Some(entry) = node {
            self.stack.push(entry);
            node = entry.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a WordEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.push_left_spine(entry.right.as_deref());
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a WordTree {
    type Item = &'a WordEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(tree: &WordTree) -> Vec<(String, Vec<LineNumber>)> {
        tree.iter()
            .map(|entry| (entry.text().to_string(), entry.lines().as_slice().to_vec()))
            .collect()
    }

    #[test]
    fn test_empty_tree() {
        let tree = WordTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.iter().count(), 0);
        assert!(tree.get("fox").is_none());
    }

    #[test]
    fn test_insert_outcomes() {
        let mut tree = WordTree::new();
        assert_eq!(tree.insert("fox", 1).unwrap(), InsertOutcome::NewWord);
        assert_eq!(tree.insert("fox", 1).unwrap(), InsertOutcome::Duplicate);
        assert_eq!(tree.insert("fox", 5).unwrap(), InsertOutcome::NewLine);
        assert_eq!(tree.insert("dog", 3).unwrap(), InsertOutcome::NewWord);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.occurrence_count(), 3);
    }

    #[test]
    fn test_rejects_empty_word_and_zero_line() {
        let mut tree = WordTree::new();
        tree.insert("fox", 1).unwrap();

        let err = tree.insert("", 2).unwrap_err();
        assert!(err.is_invalid_arg());
        let err = tree.insert("dog", 0).unwrap_err();
        assert!(err.is_invalid_arg());

        assert_eq!(export(&tree), vec![("fox".to_string(), vec![1])]);
    }

    #[test]
    fn test_in_order_export() {
        let mut tree = WordTree::new();
        for (word, line) in [
            ("the", 1),
            ("fox", 1),
            ("the", 2),
            ("dog", 3),
            ("fox", 1),
            ("fox", 5),
        ] {
            tree.insert(word, line).unwrap();
        }
        assert_eq!(
            export(&tree),
            vec![
                ("dog".to_string(), vec![3]),
                ("fox".to_string(), vec![1, 5]),
                ("the".to_string(), vec![1, 2]),
            ]
        );
        // Traversal is repeatable.
        assert_eq!(export(&tree), export(&tree));
        assert_eq!(tree.iter().len(), 3);
    }

    #[test]
    fn test_out_of_order_lines() {
        let mut tree = WordTree::new();
        for line in [5, 2, 8, 2] {
            tree.insert("cat", line).unwrap();
        }
        assert_eq!(tree.get("cat").unwrap().lines().as_slice(), &[2, 5, 8]);
    }

    #[test]
    fn test_byte_order_comparison() {
        let mut tree = WordTree::new();
        for word in ["b", "B", "a", "ab", "A"] {
            tree.insert(word, 1).unwrap();
        }
        let words: Vec<&str> = tree.iter().map(|entry| entry.text()).collect();
        assert_eq!(words, vec!["A", "B", "a", "ab", "b"]);
    }

    #[test]
    fn test_lookup_and_depth() {
        let mut tree = WordTree::new();
        for word in ["m", "f", "t", "a", "h"] {
            tree.insert(word, 1).unwrap();
        }
        assert_eq!(tree.depth(), 3);
        for word in ["m", "f", "t", "a", "h"] {
            assert!(tree.contains(word), "missing {word}");
        }
        assert!(!tree.contains("z"));
        assert!(!tree.contains("g"));
    }

    #[test]
    fn test_sorted_input_degenerates_without_overflow() {
        let mut tree = WordTree::new();
        let words: Vec<String> = (0..5_000).map(|i| format!("w{i:06}")).collect();
        for (i, word) in words.iter().enumerate() {
            tree.insert(word, i as u32 + 1).unwrap();
        }
        assert_eq!(tree.depth(), words.len());
        assert_eq!(tree.iter().count(), words.len());
        assert!(tree.contains("w004999"));
        drop(tree);
    }
}
