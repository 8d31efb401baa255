//! Terminal block puzzle runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer for output. A
//! keyboard cursor stands in for dragging: pick a hand slot, move the
//! anchor, drop. The loop is event-driven; nothing moves on its own.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use block_puzzle::config::AppConfig;
use block_puzzle::core::{
    DropError, DropOutcome, GameState, HighScoreStore, MemoryHighScore, SimpleRng,
};
use block_puzzle::input::{handle_key_event, should_quit, CursorAction, DragCursor};
use block_puzzle::logging;
use block_puzzle::store::FileHighScore;
use block_puzzle::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};

const HELP: &str = "arrows/hjkl move  1-3/tab pick  enter drop  r restart  q quit";

type Game = GameState<SimpleRng, Box<dyn HighScoreStore>>;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(seed = config.seed, "starting block-puzzle");

    let mut game: Game = GameState::with_store(config.seed, open_store(&config));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = game.score(), high_score = game.high_score(), "exiting");
    result
}

fn open_store(config: &AppConfig) -> Box<dyn HighScoreStore> {
    if config.no_persist {
        return Box::new(MemoryHighScore::default());
    }
    let store = match &config.highscore_path {
        Some(path) => Ok(FileHighScore::new(path)),
        None => FileHighScore::at_default_path(),
    };
    match store {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(error = %err, "no high score location, keeping it in memory");
            Box::new(MemoryHighScore::default())
        }
    }
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut cursor = DragCursor::new();
    let mut status = String::from(HELP);

    loop {
        let viewport = TerminalRenderer::viewport().unwrap_or(Viewport::new(80, 24));
        let snap = game.snapshot();
        let filled = snap.hand.map(|slot| slot.is_some());
        cursor.settle(&filled);

        let preview = snap.hand[cursor.slot()]
            .and_then(|piece| game.preview(piece.id, cursor.row(), cursor.col()));
        let hud = HudView {
            cursor: Some((cursor.row(), cursor.col())),
            selected_slot: Some(cursor.slot()),
            preview_cells: preview.as_ref().map(|p| p.cells.as_slice()).unwrap_or(&[]),
            preview_valid: preview.as_ref().is_some_and(|p| p.valid),
            status: &status,
        };
        view.render_into_with_hud(&snap, Some(&hud), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(command) = handle_key_event(key) else {
                    continue;
                };

                match cursor.apply(command, &filled) {
                    CursorAction::Drop { slot, row, col } => {
                        let Some(piece) = snap.hand[slot] else {
                            continue;
                        };
                        status = match game.attempt_drop(piece.id, row, col) {
                            Ok(_) => game
                                .take_last_event()
                                .map(|event| describe_drop(&event))
                                .unwrap_or_default(),
                            Err(err) => describe_reject(err),
                        };
                    }
                    CursorAction::Restart => {
                        game.restart();
                        cursor.reset();
                        status = String::from(HELP);
                    }
                    CursorAction::Moved | CursorAction::Ignored => {}
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn describe_drop(event: &DropOutcome) -> String {
    if event.game_over {
        return format!("Game over! Final score {}. Press r to restart.", event.score.score);
    }
    let lines = event.cleared.lines();
    if lines == 0 {
        return String::new();
    }
    let mut s = format!("Cleared {} line{} +{}", lines, if lines == 1 { "" } else { "s" }, event.score.points);
    if event.score.combo > 1 {
        s.push_str(&format!("  combo x{}", event.score.combo));
    }
    if event.score.new_high_score {
        s.push_str("  new best!");
    }
    s
}

fn describe_reject(err: DropError) -> String {
    match err {
        DropError::GameOver => String::from("Game over. Press r to restart."),
        DropError::InvalidPlacement { .. } => String::from("That piece does not fit there."),
        DropError::UnknownPiece(_) => err.to_string(),
    }
}
