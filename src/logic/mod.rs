use hatfinder_common::{
    models::{Difficulty, Direction, GameParams, Marker, Pos},
    protocol::MoveOutcome,
};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::data::Tile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("placement capacity exceeded: {requested} tiles requested, {available} empty")]
    PlacementCapacityExceeded { requested: usize, available: usize },
    #[error("player has not been placed on the board")]
    PlayerNotPlaced,
}

/// The board together with the player's position on it.
///
/// Tiles are stored row-major; `board[x + y * width]` is the tile at column `x`,
/// row `y`. The player is not drawn separately: the tile they stand on is marked
/// as path like every tile they walked over.
#[derive(Debug)]
pub struct GameField {
    width: usize,
    height: usize,
    difficulty: Difficulty,
    board: Vec<Tile>,
    player: Option<Pos>,
}

impl GameField {
    /// Builds and populates a field using the thread-local RNG
    pub fn new(params: GameParams) -> Result<Self, FieldError> {
        Self::with_rng(params, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        params: GameParams,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        let mut field = Self::blank(params)?;
        field.initialize_field_special_tiles(rng)?;
        Ok(field)
    }

    /// A field with every tile empty and no player yet
    pub fn blank(params: GameParams) -> Result<Self, FieldError> {
        if params.width == 0 || params.height == 0 {
            return Err(FieldError::InvalidDimensions {
                width: params.width,
                height: params.height,
            });
        }

        let mut field = Self {
            width: params.width,
            height: params.height,
            difficulty: params.difficulty,
            board: Vec::new(),
            player: None,
        };
        field.initialize_board();
        Ok(field)
    }

    /// A blank field with the player dropped on `start` and extra markers applied
    #[cfg(test)]
    pub(crate) fn with_layout(
        width: usize,
        height: usize,
        start: Pos,
        markers: &[(Pos, Marker)],
    ) -> Self {
        let params = GameParams {
            width,
            height,
            difficulty: Difficulty::Easy,
        };
        let mut field = Self::blank(params).expect("valid size");
        for (pos, marker) in markers {
            field.tile_mut(*pos).expect("in bounds").marker = *marker;
        }
        field.tile_mut(start).expect("in bounds").marker = Marker::Path;
        field.player = Some(start);
        field
    }

    fn initialize_board(&mut self) {
        self.board = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Tile::new(Marker::Field, x, y)))
            .collect();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_position(&self) -> Option<Pos> {
        self.player
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        if !self.validate_pos(&pos) {
            return None;
        }
        self.board.get(pos.x + pos.y * self.width)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.board.chunks(self.width)
    }

    pub fn count(&self, marker: Marker) -> usize {
        self.board.iter().filter(|tile| tile.marker == marker).count()
    }

    fn validate_pos(&self, pos: &Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn tile_mut(&mut self, pos: Pos) -> Option<&mut Tile> {
        if !self.validate_pos(&pos) {
            return None;
        }
        self.board.get_mut(pos.x + pos.y * self.width)
    }

    /// Marks `count` randomly chosen empty tiles with `marker` and returns their
    /// positions in placement order.
    ///
    /// Fails without touching the board when fewer than `count` empty tiles remain.
    pub fn generate_valid_tiles<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        marker: Marker,
        rng: &mut R,
    ) -> Result<Vec<Pos>, FieldError> {
        let available = self.count(Marker::Field);
        if count > available {
            return Err(FieldError::PlacementCapacityExceeded {
                requested: count,
                available,
            });
        }

        let mut placed = Vec::with_capacity(count);
        while placed.len() < count {
            let pos = Pos {
                x: rng.random_range(0..self.width),
                y: rng.random_range(0..self.height),
            };

            if let Some(tile) = self.tile_mut(pos)
                && tile.is_field()
            {
                tile.marker = marker;
                placed.push(pos);
            }
        }

        debug!("Placed {} {:?} tiles", placed.len(), marker);
        Ok(placed)
    }

    pub fn generate_holes<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<Pos>, FieldError> {
        let holes = self.difficulty.hole_count(self.width, self.height);
        self.generate_valid_tiles(holes, Marker::Hole, rng)
    }

    /// Places the hat, then the player's starting tile, then the holes. The hat and
    /// the start go first so holes can never land on them.
    pub fn initialize_field_special_tiles<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), FieldError> {
        self.generate_valid_tiles(1, Marker::Hat, rng)?;
        let start = self.generate_valid_tiles(1, Marker::Path, rng)?;
        self.player = start.first().copied();
        self.generate_holes(rng)?;
        Ok(())
    }

    pub fn try_move_player(&mut self, direction: Direction) -> Result<MoveOutcome, FieldError> {
        let current = self.player.ok_or(FieldError::PlayerNotPlaced)?;

        let Some(target) = current.step(direction, self.width, self.height) else {
            debug!("Move {:?} from {} leaves the board", direction, current);
            return Ok(MoveOutcome::OutOfBounds);
        };

        let Some(tile) = self.tile_mut(target) else {
            return Ok(MoveOutcome::OutOfBounds);
        };

        let outcome = match tile.marker {
            Marker::Hole => MoveOutcome::Hazard,
            Marker::Hat => MoveOutcome::Win,
            Marker::Field | Marker::Path => {
                tile.marker = Marker::Path;
                self.player = Some(target);
                MoveOutcome::Moved
            }
        };

        debug!(
            "Move {:?} from {} to {}: {:?}",
            direction, current, target, outcome
        );
        Ok(outcome)
    }

    /// One line per row, each tile drawn with its marker symbol
    pub fn render(&self) -> String {
        let mut field = String::new();
        for row in self.rows() {
            for tile in row {
                field.push_str(tile.marker.symbol());
            }
            field.push('\n');
        }
        field
    }
}
