use strum::VariantArray;

/// Number of piece shapes.
pub const NB_SHAPES: usize = 6;
/// Number of orientations / cardinal directions.
pub const NB_DIRS: usize = 4;

/// The shape of a piece, before any rotation is applied.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, VariantArray)]
pub enum Shape {
    /// No pipe at all.
    #[default]
    Empty,
    /// A dead end with a single stub.
    Endpoint,
    /// A straight pipe through the cell.
    Segment,
    /// A quarter-turn bend.
    Corner,
    /// A three-way junction.
    Tee,
    /// A four-way junction.
    Cross,
}

/// A cardinal direction, doubling as a clockwise quarter-turn count from each
/// shape's canonical form.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, VariantArray)]
pub enum Direction {
    /// Towards the top of the grid; rotation count 0.
    #[default]
    North,
    /// Towards the right; rotation count 1.
    East,
    /// Towards the bottom; rotation count 2.
    South,
    /// Towards the left; rotation count 3.
    West,
}

impl Direction {
    /// The direction pointing back at this one.
    pub fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// Rotate by `steps` clockwise quarter turns; negative steps rotate
    /// counterclockwise.
    pub fn rotated(self, steps: i32) -> Self {
        Self::VARIANTS[(self as i32 + steps).rem_euclid(NB_DIRS as i32) as usize]
    }
}

/// Hard-coding of pieces (shape & orientation) as 4-bit half-edge masks.
/// The bits encode the presence of a half-edge in the N-E-S-W directions, most
/// significant first. Binary 1100 is therefore "└", a corner facing north.
const EDGE_CODES: [[u8; NB_DIRS]; NB_SHAPES] = [
    [0b0000, 0b0000, 0b0000, 0b0000], // empty
    [0b1000, 0b0100, 0b0010, 0b0001], // endpoint ^ > v <
    [0b1010, 0b0101, 0b1010, 0b0101], // segment | - | -
    [0b1100, 0b0110, 0b0011, 0b1001], // corner └ ┌ ┐ ┘
    [0b1101, 0b1110, 0b0111, 0b1011], // tee ┴ ├ ┬ ┤
    [0b1111, 0b1111, 0b1111, 0b1111], // cross +
];

/// Encode a shape and an orientation into its 4-bit half-edge mask.
pub fn encode(shape: Shape, orientation: Direction) -> u8 {
    EDGE_CODES[shape as usize][orientation as usize]
}

/// Decode a 4-bit half-edge mask back into a shape and an orientation, by
/// exhaustive reverse lookup over the code table.
///
/// For the rotation-symmetric shapes (empty, segment, cross) several
/// orientations share a mask; the lowest orientation wins.
///
/// # Panics
/// If `code` does not fit in 4 bits.
pub fn decode(code: u8) -> Option<(Shape, Direction)> {
    assert!(code < 16);
    Shape::VARIANTS
        .iter()
        .flat_map(|s| Direction::VARIANTS.iter().map(move |o| (*s, *o)))
        .find(|(s, o)| encode(*s, *o) == code)
}

/// One cell's content: a shape plus the rotation applied to it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Piece {
    /// The shape of this piece.
    pub shape: Shape,
    /// The clockwise rotation applied to the shape.
    pub orientation: Direction,
}

impl Piece {
    /// Whether this piece has a pipe stub pointing in `dir`.
    pub fn has_half_edge(self, dir: Direction) -> bool {
        encode(self.shape, self.orientation) & mask(dir) != 0
    }

    /// Grow this piece by one half-edge in `dir`, e.g. turning a segment into
    /// a tee. This is the state-building primitive of the puzzle generator.
    ///
    /// # Panics
    /// If the piece already has a half-edge in `dir`; callers must check with
    /// [`has_half_edge`](Self::has_half_edge) first.
    pub fn with_half_edge(self, dir: Direction) -> Self {
        let code = encode(self.shape, self.orientation);
        assert!(code & mask(dir) == 0);
        // every 4-bit mask decodes, so the grown code does too
        let (shape, orientation) = decode(code | mask(dir)).unwrap();
        Self { shape, orientation }
    }
}

/// Single-bit mask selecting the half-edge in direction `dir`.
fn mask(dir: Direction) -> u8 {
    0b1000 >> dir as usize
}
