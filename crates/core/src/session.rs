//! Game session - the top-level state machine.
//!
//! Serializes commands and gravity ticks into one mutable state: board,
//! active piece, next piece, progress, and the clock. The session is in one
//! of three states - Playing, Paused, or the terminal GameOver - carried as
//! two flags. Movement commands return whether they changed anything;
//! rejected commands mutate nothing.
//!
//! The scheduler is a host capability, so the operations that can touch the
//! clock registration (`new_game`, `tick`) borrow it explicitly. Commands
//! that never reschedule (movement, rotation, pause) do not.

use gridfall_types::{PieceKind, TickOutcome};

use crate::board::Board;
use crate::clock::{GameClock, Scheduler};
use crate::piece::ActivePiece;
use crate::scoring::Progress;
use crate::snapshot::GameSnapshot;
use crate::source::PieceSource;

/// One running game. Hosts construct one per game; there is no global state.
#[derive(Debug)]
pub struct GameSession<P: PieceSource> {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    progress: Progress,
    clock: GameClock,
    source: P,
    paused: bool,
    game_over: bool,
}

impl<P: PieceSource> GameSession<P> {
    /// Create a session and start its first game.
    pub fn new(source: P, sched: &mut impl Scheduler) -> Self {
        let mut source = source;
        let first = source.next_piece();
        let next = source.next_piece();
        let mut session = Self {
            board: Board::new(),
            active: ActivePiece::spawn(first),
            next,
            progress: Progress::new(),
            clock: GameClock::new(),
            source,
            paused: false,
            game_over: false,
        };
        session.clock.start(sched, session.progress.tick_period_ms());
        session
    }

    /// Reset everything and start over. Valid from any state, including
    /// GameOver; always reports a change.
    pub fn new_game(&mut self, sched: &mut impl Scheduler) -> bool {
        self.board.clear();
        self.progress = Progress::new();
        self.paused = false;
        self.game_over = false;
        self.next = self.source.next_piece();
        self.spawn_next();
        self.clock.start(sched, self.progress.tick_period_ms());
        true
    }

    /// Flip Playing <-> Paused; no-op in GameOver.
    ///
    /// Pausing never touches the clock registration - ticks keep firing and
    /// the tick handler checks the flag, so resuming needs no reschedule.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1, 0)
    }

    pub fn move_down(&mut self) -> bool {
        self.shift(0, 1)
    }

    pub fn rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.active.attempt_rotate(&self.board)
    }

    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.active.attempt_move(&self.board, dx, dy)
    }

    /// One gravity step, driven by the game clock.
    pub fn tick(&mut self, sched: &mut impl Scheduler) -> TickOutcome {
        if self.game_over {
            return TickOutcome::GameOver;
        }
        if self.paused {
            return TickOutcome::Continue;
        }

        if self.active.attempt_move(&self.board, 0, 1) {
            return TickOutcome::Continue;
        }

        // Landing: lock, clear, score, then hand over to the next piece.
        self.board.commit(&self.active.cells(), self.active.kind());
        let cleared = self.board.clear_full_rows();
        self.progress.on_lines_cleared(cleared);
        if self.progress.maybe_level_up() {
            self.clock
                .reschedule(sched, self.progress.tick_period_ms());
        }

        self.spawn_next();
        if !self.active.can_move(&self.board, 0, 0) {
            self.game_over = true;
            self.clock.stop(sched);
            return TickOutcome::GameOver;
        }

        TickOutcome::Landed
    }

    /// Promote the saved next piece to active and draw a fresh next.
    fn spawn_next(&mut self) {
        self.active = ActivePiece::spawn(self.next);
        self.next = self.source.next_piece();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn tick_period_ms(&self) -> u32 {
        self.progress.tick_period_ms()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Fill `out` with the current frame state; allocation-free.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active_kind = self.active.kind();
        out.active_cells = self.active.cells();
        out.next_kind = self.next;
        out.score = self.progress.score();
        out.level = self.progress.level();
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
