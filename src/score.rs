use std::{
    convert::TryFrom,
    fmt,
    ops::{Index, IndexMut},
};

use serde::Serialize;

/// Games needed to take a set, given a two-game lead.
pub const GAMES_PER_SET: u32 = 6;
/// Points needed to take a game, given a two-point lead.
pub const POINTS_PER_GAME: u32 = 4;
const WINNING_MARGIN: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::A => "A",
            Side::B => "B",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<char> for Side {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'A' => Ok(Side::A),
            'B' => Ok(Side::B),
            _ => Err(value),
        }
    }
}

/// One value per side, indexable by [`Side`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerSide<T> {
    pub a: T,
    pub b: T,
}

impl<T> PerSide<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }
}

/// How far a single point cascaded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointOutcome {
    Point,
    Game,
    Set,
}

/// Display label for a side's points in the current game.
/// Serialises to the same text `Display` prints.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum PointLabel {
    #[serde(rename = "0")]
    Love,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "40")]
    Forty,
    #[serde(rename = "AD")]
    Advantage,
}

impl PointLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointLabel::Love => "0",
            PointLabel::Fifteen => "15",
            PointLabel::Thirty => "30",
            PointLabel::Forty => "40",
            PointLabel::Advantage => "AD",
        }
    }
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sets, games and points for both sides.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub sets: PerSide<u32>,
    pub games: PerSide<u32>,
    pub points: PerSide<u32>,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when all six counters are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Awards one point to `side` and closes the game and set if they are won.
    pub fn award_point(&mut self, side: Side) -> PointOutcome {
        self.points[side] += 1;

        if !wins(self.points, side, POINTS_PER_GAME) {
            return PointOutcome::Point;
        }
        self.games[side] += 1;
        self.points = PerSide::default();

        if !wins(self.games, side, GAMES_PER_SET) {
            return PointOutcome::Game;
        }
        self.sets[side] += 1;
        self.games = PerSide::default();

        PointOutcome::Set
    }

    pub fn point_label(&self, side: Side) -> PointLabel {
        label_for(self.points[side], self.points[side.opponent()])
    }

    /// Whether the counters are in a state no sequence of points can leave
    /// them in: a game or set that should already have closed.
    pub fn is_quiescent(&self) -> bool {
        [Side::A, Side::B].into_iter().all(|side| {
            !wins(self.points, side, POINTS_PER_GAME) && !wins(self.games, side, GAMES_PER_SET)
        })
    }
}

fn wins(counts: PerSide<u32>, side: Side, target: u32) -> bool {
    let own = counts[side];
    let other = counts[side.opponent()];
    own >= target && own >= other + WINNING_MARGIN
}

// Deuce collapses to "40" for both sides; past deuce only the leader shows "AD".
fn label_for(points: u32, other: u32) -> PointLabel {
    match points {
        0 => PointLabel::Love,
        1 => PointLabel::Fifteen,
        2 => PointLabel::Thirty,
        3 => PointLabel::Forty,
        _ => {
            if points == other {
                PointLabel::Forty
            } else if points > other {
                PointLabel::Advantage
            } else {
                PointLabel::Forty
            }
        }
    }
}
