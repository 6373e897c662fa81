//! Game state module - manages the complete game state
//!
//! This module ties together the board, the active piece, the RNG and scoring.
//! It consumes already-decoded [`GameAction`]s and advances the game one
//! discrete step per [`GameState::tick`]. Pacing (how long to wait between
//! ticks) is left to the caller via [`GameState::drop_interval`].

use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::geometry::{Piece, PiecePoints};
use crate::pieces::random_piece;
use crate::rng::SimpleRng;
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvent {
    /// The active piece was locked and a new one spawned
    pub locked: bool,
    /// Rows removed by this tick
    pub lines_cleared: u32,
    /// Points awarded by this tick
    pub score_gained: u64,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    position: Point,
    rng: SimpleRng,
    score: u64,
    lines: u32,
    level: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game on the standard 20x10 board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_size(BOARD_HEIGHT, BOARD_WIDTH, seed)
    }

    /// Create a new game on an empty `height` x `width` board.
    ///
    /// The first piece is drawn at random and placed at the spawn position.
    /// Panics on zero dimensions.
    pub fn with_size(height: usize, width: usize, seed: u32) -> Self {
        let board = Board::new(width, height);
        let mut rng = SimpleRng::new(seed);
        let first = random_piece(&mut rng);
        let mut state = Self {
            position: Self::spawn_position_for(&board),
            board,
            active: first.clone(),
            rng,
            score: 0,
            lines: 0,
            level: 0,
            game_over: false,
        };
        state.spawn_piece(first);
        state
    }

    fn spawn_position_for(board: &Board) -> Point {
        Point::new((board.width() / 2) as i32, 0)
    }

    /// Where new pieces appear: horizontally centered, top row
    pub fn spawn_position(&self) -> Point {
        Self::spawn_position_for(&self.board)
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (puzzles, tests)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Absolute cells of the falling piece (may include cells above the board)
    pub fn active_cells(&self) -> PiecePoints {
        self.active.cells(self.position).collect()
    }

    /// Gravity interval for the current level
    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(drop_interval_ms(self.level) as u64)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active_kind = Some(self.active.kind());
        out.active_cells = self.active_cells();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Place `piece` at the spawn position as the new active piece.
    ///
    /// Returns false and ends the game if it overlaps the board there.
    pub fn spawn_piece(&mut self, piece: Piece) -> bool {
        self.active = piece;
        self.position = self.spawn_position();

        if self.board.collides(&self.active, self.position) {
            self.game_over = true;
            info!(
                kind = self.active.kind().as_str(),
                score = self.score,
                lines = self.lines,
                "spawn blocked, game over"
            );
            return false;
        }

        debug!(kind = self.active.kind().as_str(), "spawned piece");
        true
    }

    /// Try to shift the active piece; reverts and returns false on collision
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let moved = self.position + Point::new(dx, dy);
        if self.board.collides(&self.active, moved) {
            return false;
        }
        self.position = moved;
        true
    }

    /// Apply one player command.
    ///
    /// Rotation is applied without any bounds or overlap check, unlike moves,
    /// which are undone when they collide. Returns whether the state changed.
    #[instrument(level = "trace", skip(self))]
    pub fn handle_input(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        match action {
            GameAction::Rotate => {
                self.active = self.active.rotated();
                true
            }
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveDown => self.try_move(0, 1),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Quit => {
                info!(score = self.score, "quit requested");
                self.game_over = true;
                true
            }
            GameAction::None => false,
        }
    }

    /// Advance the game by one step.
    ///
    /// Gravity moves the piece down one row. If it cannot move, it is locked
    /// where it was and a random piece spawns; a blocked spawn ends the game.
    /// Full rows are cleared at the end of every tick, including the tick that
    /// ended the game.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) -> TickEvent {
        let mut event = TickEvent::default();
        if self.game_over {
            return event;
        }

        self.level = level_for_lines(self.lines);

        self.position.y += 1;
        if self.board.collides(&self.active, self.position) {
            self.position.y -= 1;
            self.board.lock(&self.active, self.position);
            debug!(
                kind = self.active.kind().as_str(),
                x = self.position.x,
                y = self.position.y,
                "locked piece"
            );
            event.locked = true;

            let next = random_piece(&mut self.rng);
            self.spawn_piece(next);
        }

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            let gained = line_clear_score(cleared);
            self.lines = self.lines.saturating_add(cleared as u32);
            self.score = self.score.saturating_add(gained);
            self.level = level_for_lines(self.lines);
            info!(
                rows = cleared,
                gained,
                score = self.score,
                level = self.level,
                "cleared rows"
            );
            event.lines_cleared = cleared as u32;
            event.score_gained = gained;
        }

        event
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
