/// A character-offset range `[start, end)` into the source text.
///
/// All parsed elements store spans rather than copied text, enabling lossless
/// round-trip: slicing the source with any span reproduces the exact input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in characters; an inverted span counts as empty.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `pos` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(!Span::new(2, 7).is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn inverted_span_saturates() {
        assert_eq!(Span::new(7, 2).len(), 0);
        assert!(Span::new(7, 2).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let sp = Span::new(2, 5);
        assert!(!sp.contains(1));
        assert!(sp.contains(2));
        assert!(sp.contains(4));
        assert!(!sp.contains(5));
    }
}
