//! Terminal game runner (default binary).
//!
//! Owns the event loop: renders the session snapshot, polls input until the
//! next gravity deadline, and feeds due clock fires back into the session.
//! Commands and ticks are dispatched one at a time from this single loop,
//! which is the serialization boundary the core assumes.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{DeadlineScheduler, GameSession, GameSnapshot, RandomPieces};
use gridfall::input::{map_key, should_quit};
use gridfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use gridfall::types::Command;

/// Input poll timeout while no gravity fire is pending (game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sched = DeadlineScheduler::new();
    let mut session = GameSession::new(RandomPieces::new(seed()), &mut sched);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next gravity fire.
        let timeout = sched
            .next_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Held-key repeat relies on terminal auto-repeat, so
                    // repeat events dispatch exactly like presses.
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(command) = map_key(key) {
                            dispatch(&mut session, &mut sched, command);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity: at most one fire is ever pending.
        while sched.poll(Instant::now()) {
            session.tick(&mut sched);
        }
    }
}

fn dispatch(
    session: &mut GameSession<RandomPieces>,
    sched: &mut DeadlineScheduler,
    command: Command,
) {
    match command {
        Command::NewGame => session.new_game(sched),
        Command::TogglePause => session.toggle_pause(),
        Command::MoveLeft => session.move_left(),
        Command::MoveRight => session.move_right(),
        Command::MoveDown => session.move_down(),
        Command::Rotate => session.rotate(),
    };
}

/// Piece-sequence seed: `GRIDFALL_SEED` when set and valid, else wall clock.
fn seed() -> u32 {
    if let Ok(value) = std::env::var("GRIDFALL_SEED") {
        if let Ok(seed) = value.parse() {
            return seed;
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
