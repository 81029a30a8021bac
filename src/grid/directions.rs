use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// One of the four neighbour edges of a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in flag order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The direction pointing back along the same edge.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unwrapped `(dx, dy)` step to the neighbour in this direction.
    #[must_use]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Left => 0x01,
            Direction::Right => 0x02,
            Direction::Up => 0x04,
            Direction::Down => 0x08,
        }
    }
}

/// Set of open edges of a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directions(u8);

impl Directions {
    /// No open edges.
    pub const NONE: Directions = Directions(0);

    /// Every edge open.
    pub const ALL: Directions = Directions(0x0F);

    /// Returns `true` when no edge is open.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the edge in `dir` is open.
    #[must_use]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Returns `true` if any edge of `other` is open here.
    #[must_use]
    pub fn intersects(self, other: Directions) -> bool {
        self.0 & other.0 != 0
    }

    /// Opens the edge in `dir`.
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Number of open edges.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the open edges in flag order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl From<Direction> for Directions {
    fn from(dir: Direction) -> Self {
        Directions(dir.bit())
    }
}

impl BitOr for Directions {
    type Output = Directions;

    fn bitor(self, rhs: Self) -> Self {
        Directions(self.0 | rhs.0)
    }
}

impl BitOr<Direction> for Directions {
    type Output = Directions;

    fn bitor(self, rhs: Direction) -> Self {
        Directions(self.0 | rhs.bit())
    }
}

impl BitOr for Direction {
    type Output = Directions;

    fn bitor(self, rhs: Self) -> Directions {
        Directions(self.bit() | rhs.bit())
    }
}

impl BitOrAssign for Directions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Direction> for Directions {
    fn bitor_assign(&mut self, rhs: Direction) {
        self.0 |= rhs.bit();
    }
}

impl fmt::Debug for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
