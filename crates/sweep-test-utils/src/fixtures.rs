//! Standard move-list fixtures with known answers.
//!
//! Every fixture starts at the origin; the distinct count does not depend
//! on the start position.

/// A named move list and the number of distinct cells it cleans.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub moves: &'static [(&'static str, u64)],
    pub expected: u64,
}

/// The fixture table.
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "basic",
        moves: &[("north", 1)],
        expected: 2,
    },
    Fixture {
        name: "basic_overlap",
        moves: &[("north", 1), ("south", 1)],
        expected: 2,
    },
    Fixture {
        name: "suite",
        moves: &[("north", 1), ("west", 1), ("south", 1), ("south", 1)],
        expected: 5,
    },
    Fixture {
        name: "suite_overlap",
        moves: &[
            ("north", 1),
            ("west", 1),
            ("south", 1),
            ("east", 1),
            ("north", 1),
        ],
        expected: 4,
    },
    Fixture {
        name: "empty",
        moves: &[],
        expected: 1,
    },
    Fixture {
        name: "long_basic",
        moves: &[("north", 5)],
        expected: 6,
    },
    Fixture {
        name: "long_overlap",
        moves: &[("north", 5), ("south", 5)],
        expected: 6,
    },
    Fixture {
        name: "partial_overlap",
        moves: &[("north", 3), ("south", 6)],
        expected: 7,
    },
    Fixture {
        name: "revisit_row",
        moves: &[("east", 5), ("west", 5)],
        expected: 6,
    },
    Fixture {
        name: "crossing_corner",
        moves: &[("east", 4), ("north", 4)],
        expected: 9,
    },
    Fixture {
        name: "square_loop",
        moves: &[("east", 3), ("north", 3), ("west", 3), ("south", 3)],
        expected: 12,
    },
    Fixture {
        name: "plus_through_start",
        moves: &[("east", 2), ("west", 4), ("east", 2), ("north", 2), ("south", 4)],
        expected: 9,
    },
];
