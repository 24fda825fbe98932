use pupiletra_core::{Direction, Position};

/// Result of feeding a pointer event to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionUpdate {
    /// A new selection was started at the given cell.
    Started,
    /// The cell was appended to the selection.
    Extended,
    /// The event did not change the selection.
    Ignored,
}

/// An in-progress drag selection.
///
/// The selection always forms a straight run. The second cell must neighbour
/// the first one and locks the direction; afterwards only the next cell along
/// that direction is accepted. The run can grow but never shrink, branch, or
/// turn.
///
/// # Examples
///
/// ```
/// use pupiletra_core::{Direction, Position};
/// use pupiletra_game::{Selection, SelectionUpdate};
///
/// let mut selection = Selection::new(Position::new(0, 0));
///
/// // Not a neighbour of the first cell
/// assert_eq!(selection.extend(Position::new(0, 2)), SelectionUpdate::Ignored);
///
/// assert_eq!(selection.extend(Position::new(1, 1)), SelectionUpdate::Extended);
/// assert_eq!(selection.direction(), Some(Direction::SouthEast));
///
/// // Off the locked line
/// assert_eq!(selection.extend(Position::new(2, 1)), SelectionUpdate::Ignored);
/// assert_eq!(selection.extend(Position::new(2, 2)), SelectionUpdate::Extended);
/// assert_eq!(selection.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Position>,
    direction: Option<Direction>,
}

impl Selection {
    /// Starts a selection at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            cells: vec![start],
            direction: None,
        }
    }

    /// Returns the selected cells in drag order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the locked direction, once the selection has two cells.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a selection holds at least its starting cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` is part of the selection.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Feeds the cell the pointer just entered.
    pub fn extend(&mut self, pos: Position) -> SelectionUpdate {
        let accepted = match (self.cells.as_slice(), self.direction) {
            ([first], None) => {
                if first.is_adjacent(pos) {
                    self.direction = Direction::between(*first, pos);
                    true
                } else {
                    false
                }
            }
            ([.., last], Some(direction)) => last.neighbor(direction) == Some(pos),
            _ => false,
        };

        if accepted {
            self.cells.push(pos);
            SelectionUpdate::Extended
        } else {
            SelectionUpdate::Ignored
        }
    }

    pub(crate) fn into_cells(self) -> Vec<Position> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_cell_locks_direction() {
        for direction in Direction::ALL {
            let start = Position::new(2, 2);
            let mut selection = Selection::new(start);
            let next = start.neighbor(direction).expect("interior cell");
            assert_eq!(selection.extend(next), SelectionUpdate::Extended);
            assert_eq!(selection.direction(), Some(direction));
        }
    }

    #[test]
    fn test_same_cell_is_ignored() {
        let start = Position::new(1, 1);
        let mut selection = Selection::new(start);
        assert_eq!(selection.extend(start), SelectionUpdate::Ignored);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.direction(), None);
    }

    #[test]
    fn test_cannot_shrink_or_turn() {
        let mut selection = Selection::new(Position::new(0, 0));
        selection.extend(Position::new(0, 1));
        selection.extend(Position::new(0, 2));

        // back onto an already selected cell
        assert!(selection.extend(Position::new(0, 1)).is_ignored());
        // turning south
        assert!(selection.extend(Position::new(1, 2)).is_ignored());
        // skipping a cell
        assert!(selection.extend(Position::new(0, 4)).is_ignored());

        assert_eq!(
            selection.cells(),
            [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
        assert!(selection.extend(Position::new(0, 3)).is_extended());
    }

    #[test]
    fn test_far_cell_does_not_lock_direction() {
        let mut selection = Selection::new(Position::new(3, 3));
        assert!(selection.extend(Position::new(0, 0)).is_ignored());
        assert_eq!(selection.direction(), None);
        // a later neighbour in another direction still locks normally
        assert!(selection.extend(Position::new(3, 4)).is_extended());
        assert_eq!(selection.direction(), Some(Direction::East));
    }

    #[test]
    fn test_cannot_extend_past_origin() {
        let mut selection = Selection::new(Position::new(0, 1));
        selection.extend(Position::new(0, 0));
        assert_eq!(selection.direction(), Some(Direction::West));
        // nothing exists west of column 0, and nothing else is accepted
        assert!(selection.extend(Position::new(0, 2)).is_ignored());
        assert!(selection.extend(Position::new(1, 0)).is_ignored());
    }
}
