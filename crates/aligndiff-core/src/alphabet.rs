//! The closed symbol set over which alignment matching is defined.

use serde::{Deserialize, Serialize};

/// The set of byte values that can match during correlation.
///
/// Bytes outside the alphabet never match anything and never contribute
/// to an alignment score. The default covers the 95 printable ASCII code
/// points (space through `~`), which suits text files; callers comparing
/// other data can widen the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    first: u8,
    last: u8,
}

impl Alphabet {
    /// Printable ASCII: `0x20` (space) through `0x7E` (`~`), inclusive.
    pub fn printable_ascii() -> Self {
        Self {
            first: b' ',
            last: b'~',
        }
    }

    /// An alphabet covering an inclusive byte range.
    pub fn from_range(first: u8, last: u8) -> Self {
        debug_assert!(first <= last);
        Self { first, last }
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Always false; an alphabet holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the symbols in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + use<> {
        self.first..=self.last
    }

    /// Whether a byte belongs to the alphabet.
    pub fn contains(&self, byte: u8) -> bool {
        (self.first..=self.last).contains(&byte)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::printable_ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_ascii_has_95_symbols() {
        let alphabet = Alphabet::printable_ascii();
        assert_eq!(alphabet.len(), 95);
        assert_eq!(alphabet.symbols().count(), 95);
    }

    #[test]
    fn test_contains() {
        let alphabet = Alphabet::printable_ascii();
        assert!(alphabet.contains(b' '));
        assert!(alphabet.contains(b'~'));
        assert!(alphabet.contains(b'a'));
        assert!(!alphabet.contains(0x1F));
        assert!(!alphabet.contains(0x7F));
        assert!(!alphabet.contains(0xFF));
    }

    #[test]
    fn test_custom_range() {
        let alphabet = Alphabet::from_range(0, 255);
        assert_eq!(alphabet.len(), 256);
        assert!(alphabet.contains(0));
        assert!(alphabet.contains(255));
    }
}
