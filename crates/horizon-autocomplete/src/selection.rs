//! The selected-row index and its wraparound navigation.

/// Tracks which result row is selected.
///
/// The index is either `None` or a valid index into the current results;
/// callers reset it whenever the results are replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    /// A selection with nothing selected.
    pub const fn none() -> Self {
        Self { index: None }
    }

    /// The selected index.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Clear the selection.
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Select `index` if it is valid for `count` rows.
    ///
    /// Returns `false` and leaves the selection untouched otherwise.
    pub fn set(&mut self, index: usize, count: usize) -> bool {
        if index < count {
            self.index = Some(index);
            true
        } else {
            false
        }
    }

    /// Move the selection by `delta` rows with wraparound and return the new
    /// index.
    ///
    /// From no selection, moving down selects the first row and moving up
    /// selects the last. With no rows there is nothing to select.
    ///
    /// ```
    /// use horizon_autocomplete::Selection;
    ///
    /// let mut selection = Selection::none();
    /// assert_eq!(selection.step(1, 3), Some(0));
    /// assert_eq!(selection.step(-1, 3), Some(2));
    /// assert_eq!(selection.step(1, 3), Some(0));
    /// ```
    pub fn step(&mut self, delta: isize, count: usize) -> Option<usize> {
        if count == 0 {
            self.index = None;
            return None;
        }

        let next = match self.index {
            Some(current) => wrap(current as isize + delta, count),
            None if delta < 0 => count - 1,
            None => 0,
        };
        self.index = Some(next);
        self.index
    }
}

fn wrap(position: isize, count: usize) -> usize {
    position.rem_euclid(count as isize) as usize
}
