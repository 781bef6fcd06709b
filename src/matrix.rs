// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

// Declaration order is the canonical search order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    // (row delta, col delta)
    #[inline(always)]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    #[inline(always)]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    // Right and Down follow reading order.
    #[inline(always)]
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    #[inline(always)]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Down | Direction::Up)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Up => "up",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // caller guarantees row and col are in range.
    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn at(&self, coord: Coord) -> usize {
        self.at_row_col(coord.row, coord.col)
    }

    #[inline(always)]
    pub fn coord_of(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i8, (idx % cols) as i8)
    }

    // None when stepping off the board.
    #[inline(always)]
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        self.step_by(coord, direction, 1)
    }

    pub fn step_by(&self, coord: Coord, direction: Direction, amount: i8) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let row = coord.row as i16 + dr as i16 * amount as i16;
        let col = coord.col as i16 + dc as i16 * amount as i16;
        if row >= 0 && row < self.rows as i16 && col >= 0 && col < self.cols as i16 {
            Some(Coord::new(row as i8, col as i8))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(coord, direction))
    }
}
