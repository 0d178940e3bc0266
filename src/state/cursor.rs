//! Clamped selection cursors for lists and grids.

/// Selection over a fixed-length list. Moves clamp at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    index: usize,
    len: usize,
}

impl ListCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Selected index, or `None` for an empty list.
    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    /// Change the list length, keeping the selection in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }
}

/// Selection over items laid out row-major in `columns` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    cursor: ListCursor,
}

impl GridCursor {
    pub fn new(len: usize) -> Self {
        Self {
            cursor: ListCursor::new(len),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.cursor.selected()
    }

    pub fn select(&mut self, index: usize) {
        self.cursor.select(index);
    }

    pub fn left(&mut self, columns: usize) {
        if let Some(i) = self.selected() {
            if columns > 1 && i % columns > 0 {
                self.cursor.select(i - 1);
            }
        }
    }

    pub fn right(&mut self, columns: usize) {
        if let Some(i) = self.selected() {
            if columns > 1 && i % columns + 1 < columns {
                self.cursor.select(i + 1);
            }
        }
    }

    pub fn up(&mut self, columns: usize) {
        if let Some(i) = self.selected() {
            if i >= columns.max(1) {
                self.cursor.select(i - columns.max(1));
            }
        }
    }

    /// Move down a row. A partial last row clamps to its final item.
    pub fn down(&mut self, columns: usize) {
        if let Some(i) = self.selected() {
            let step = columns.max(1);
            let rows = self.cursor.len().div_ceil(step);
            if i / step + 1 < rows {
                self.cursor.select(i + step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_cursor_clamps() {
        let mut c = ListCursor::new(3);
        c.previous();
        assert_eq!(c.selected(), Some(0));
        c.next();
        c.next();
        c.next();
        assert_eq!(c.selected(), Some(2));
        c.select(10);
        assert_eq!(c.selected(), Some(2));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut c = ListCursor::new(0);
        c.next();
        assert_eq!(c.selected(), None);
        c.set_len(2);
        assert_eq!(c.selected(), Some(0));
    }

    #[test]
    fn test_set_len_shrinks_selection() {
        let mut c = ListCursor::new(5);
        c.select(4);
        c.set_len(2);
        assert_eq!(c.selected(), Some(1));
    }

    #[test]
    fn test_grid_moves_three_columns() {
        // 0 1 2
        // 3 4 5
        let mut g = GridCursor::new(6);
        g.right(3);
        g.right(3);
        g.right(3);
        assert_eq!(g.selected(), Some(2));
        g.down(3);
        assert_eq!(g.selected(), Some(5));
        g.down(3);
        assert_eq!(g.selected(), Some(5));
        g.left(3);
        g.up(3);
        assert_eq!(g.selected(), Some(1));
        g.up(3);
        assert_eq!(g.selected(), Some(1));
    }

    #[test]
    fn test_grid_partial_last_row() {
        // 0 1
        // 2 3
        // 4
        let mut g = GridCursor::new(5);
        g.select(3);
        g.down(2);
        assert_eq!(g.selected(), Some(4));
    }

    #[test]
    fn test_single_column_left_right_noop() {
        let mut g = GridCursor::new(4);
        g.select(2);
        g.left(1);
        g.right(1);
        assert_eq!(g.selected(), Some(2));
        g.down(1);
        assert_eq!(g.selected(), Some(3));
    }
}
