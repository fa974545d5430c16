use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What a tile currently shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Field,
    Hole,
    Hat,
    Path,
}

impl Marker {
    /// Glyph used when the board is rendered
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Field => " 🟩 ",
            Self::Hole => " ⬛ ",
            Self::Hat => " 👑 ",
            Self::Path => " 🔹 ",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    /// Neighbouring position one step in `direction`, or `None` when that would
    /// leave the board. Only one axis changes per step.
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Pos> {
        let (x, y) = match direction {
            Direction::Up => (Some(self.x), self.y.checked_sub(1)),
            Direction::Down => (Some(self.x), self.y.checked_add(1)),
            Direction::Left => (self.x.checked_sub(1), Some(self.y)),
            Direction::Right => (self.x.checked_add(1), Some(self.y)),
        };

        match (x, y) {
            (Some(x), Some(y)) if x < width && y < height => Some(Pos { x, y }),
            _ => None,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// Share of the board covered by holes, in percent
    pub fn hole_percent(self) -> usize {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
        }
    }

    /// Number of holes on a `width` x `height` board, rounded down
    pub fn hole_count(self, width: usize, height: usize) -> usize {
        width * height * self.hole_percent() / 100
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameParams {
    pub width: usize,
    pub height: usize,
    pub difficulty: Difficulty,
}

impl GameParams {
    pub fn hole_count(&self) -> usize {
        self.difficulty.hole_count(self.width, self.height)
    }
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            difficulty: Difficulty::Hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_on_one_axis() {
        let pos = Pos { x: 4, y: 4 };
        assert_eq!(pos.step(Direction::Up, 10, 10), Some(Pos { x: 4, y: 3 }));
        assert_eq!(pos.step(Direction::Down, 10, 10), Some(Pos { x: 4, y: 5 }));
        assert_eq!(pos.step(Direction::Left, 10, 10), Some(Pos { x: 3, y: 4 }));
        assert_eq!(pos.step(Direction::Right, 10, 10), Some(Pos { x: 5, y: 4 }));
    }

    #[test]
    fn test_step_off_the_edges() {
        let corner = Pos { x: 0, y: 0 };
        assert_eq!(corner.step(Direction::Left, 10, 10), None);
        assert_eq!(corner.step(Direction::Up, 10, 10), None);

        let far = Pos { x: 9, y: 9 };
        assert_eq!(far.step(Direction::Right, 10, 10), None);
        assert_eq!(far.step(Direction::Down, 10, 10), None);
    }

    #[test]
    fn test_hole_count_rounds_down() {
        let params = GameParams {
            width: 5,
            height: 5,
            difficulty: Difficulty::Easy,
        };
        assert_eq!(params.hole_count(), 2);

        let params = GameParams {
            width: 3,
            height: 7,
            difficulty: Difficulty::Medium,
        };
        assert_eq!(params.hole_count(), 3);

        assert_eq!(GameParams::default().hole_count(), 20);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("EASY".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_hole_count_per_difficulty() {
        assert_eq!(Difficulty::Easy.hole_count(10, 10), 10);
        assert_eq!(Difficulty::Medium.hole_count(10, 10), 15);
        assert_eq!(Difficulty::Hard.hole_count(10, 10), 20);
        assert_eq!(Difficulty::Hard.hole_count(1, 2), 0);
    }

    #[test]
    fn test_partial_params_fill_from_default() {
        let params: GameParams = serde_json::from_str(r#"{"width": 6, "difficulty": "easy"}"#)
            .expect("valid params");
        assert_eq!(params.width, 6);
        assert_eq!(params.height, 10);
        assert_eq!(params.difficulty, Difficulty::Easy);
    }
}
