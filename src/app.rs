//! Session controller sitting between input, the engine, and the view.
//!
//! On a slide that changes the board it spawns a tile, starts the tween for
//! the new animation trace, and checks for a win or a dead board. Input that
//! arrives while the tween runs is dropped so the trace being drawn is never
//! replaced mid-animation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::AppConfig;
use crate::core::{GameSnapshot, GameState, TileRng};
use crate::term::{Overlay, Tween};
use crate::types::{Direction, GameAction};

pub struct App<R = StdRng> {
    game: GameState<R>,
    tween: Tween,
    overlay: Overlay,
    /// Set once the win banner has been shown this game.
    win_announced: bool,
    snap: GameSnapshot,
}

impl App<StdRng> {
    /// Build a session from config; without a configured seed one is drawn at random.
    pub fn new(config: &AppConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, "new session");
        Self::with_game(
            GameState::with_rng(StdRng::seed_from_u64(seed)),
            config.animation_ms,
        )
    }
}

impl<R: TileRng> App<R> {
    pub fn with_game(game: GameState<R>, animation_ms: u32) -> Self {
        let mut app = Self {
            game,
            tween: Tween::new(animation_ms),
            overlay: Overlay::None,
            win_announced: false,
            snap: GameSnapshot::default(),
        };
        app.refresh();
        app
    }

    /// Apply one player action. Returns whether the board changed.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        if self.tween.is_running() {
            return false;
        }

        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Slide(direction) => self.slide(direction),
        }
    }

    fn slide(&mut self, direction: Direction) -> bool {
        if self.overlay == Overlay::Won {
            self.overlay = Overlay::None;
        }

        if !self.game.apply_move(direction) {
            self.refresh();
            return false;
        }

        self.game.spawn_random_tile();
        self.tween.start();

        if self.game.has_won() && !self.win_announced {
            self.win_announced = true;
            self.overlay = Overlay::Won;
            info!(score = self.game.score(), "reached 2048");
        }
        if self.game.is_game_over() {
            self.overlay = Overlay::GameOver;
            info!(
                score = self.game.score(),
                max_tile = self.game.board().max_tile(),
                "game over"
            );
        }

        self.refresh();
        true
    }

    fn restart(&mut self) {
        info!(score = self.game.score(), "restart");
        self.game.initialize();
        self.tween.stop();
        self.overlay = Overlay::None;
        self.win_announced = false;
        self.refresh();
    }

    /// Advance the animation clock.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.tween.advance(elapsed_ms);
    }

    fn refresh(&mut self) {
        self.game.snapshot_into(&mut self.snap);
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snap
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_running()
    }

    /// Tween progress while animating, None once settled.
    pub fn tween_progress(&self) -> Option<f32> {
        self.tween.is_running().then(|| self.tween.progress())
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }
}
