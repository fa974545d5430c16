use hatfinder_common::models::{Marker, Pos};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub marker: Marker,
    pos: Pos,
}

impl Tile {
    pub fn new(marker: Marker, x: usize, y: usize) -> Self {
        Self {
            marker,
            pos: Pos { x, y },
        }
    }

    pub fn x(&self) -> usize {
        self.pos.x
    }

    pub fn y(&self) -> usize {
        self.pos.y
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn is_field(&self) -> bool {
        self.marker == Marker::Field
    }
}
