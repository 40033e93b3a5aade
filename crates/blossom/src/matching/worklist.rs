//! Breadth-first queue of `(outer vertex, incident edge)` items.
//!
//! Items are appended when a vertex becomes outer and consumed through a
//! cursor that only moves forward within one search. All edges of an outer
//! vertex are examined before those of any vertex labeled after it.

use super::types::{EdgeId, Vertex};

#[derive(Clone, Debug, Default)]
pub struct OuterWorklist {
    items: Vec<(Vertex, EdgeId)>,
    cursor: usize,
}

impl OuterWorklist {
    pub fn extend_from(&mut self, x: Vertex, incident: &[EdgeId]) {
        self.items.extend(incident.iter().map(|&e| (x, e)));
    }

    /// Next unexamined item, or `None` once the search is exhausted.
    pub fn choose_next(&mut self) -> Option<(Vertex, EdgeId)> {
        let item = self.items.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(item)
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.items.len() - self.cursor
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_and_exhaustion() {
        let mut wl = OuterWorklist::default();
        assert_eq!(wl.choose_next(), None);
        wl.extend_from(1, &[EdgeId(0), EdgeId(2)]);
        assert_eq!(wl.choose_next(), Some((1, EdgeId(0))));
        wl.extend_from(3, &[EdgeId(1)]);
        assert_eq!(wl.pending(), 2);
        assert_eq!(wl.choose_next(), Some((1, EdgeId(2))));
        assert_eq!(wl.choose_next(), Some((3, EdgeId(1))));
        assert_eq!(wl.choose_next(), None);
        // Exhausted stays exhausted until cleared.
        assert_eq!(wl.choose_next(), None);
        wl.clear();
        wl.extend_from(2, &[EdgeId(5)]);
        assert_eq!(wl.choose_next(), Some((2, EdgeId(5))));
    }
}
