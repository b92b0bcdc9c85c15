use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::{AudioCues, Cue};
use crate::game::{GameConfig, GameEngine, GameState, Phase};
use crate::input::{InputHandler, KeyCommand};
use crate::render::Renderer;
use crate::stats::SessionStats;

pub struct App {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: Option<AudioCues>,
    should_quit: bool,
}

impl App {
    /// Build a session. Audio init failure just means a silent session.
    pub fn new(config: GameConfig, mute: bool) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        let audio = if mute { None } else { AudioCues::load().ok() };

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Simulation ticks at the configured rate (default 8 Hz)
        let mut tick_timer = interval(Duration::from_millis(self.engine.config().tick_ms));

        // Terminal redraw is decoupled from the simulation, roughly 30 FPS
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    self.advance_simulation();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Ctrl+C delivered as a signal rather than a key event
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let command = self.input_handler.handle_key_event(key);

        match self.state.phase {
            Phase::Playing => match command {
                // Steering applies immediately; the snake's own guard keeps
                // multiple presses per tick from chaining into a reversal
                KeyCommand::Steer(direction) => self.state.snake.steer(direction),
                KeyCommand::Quit => self.should_quit = true,
                KeyCommand::Other => {}
            },
            Phase::GameOver => match command {
                KeyCommand::Quit => self.should_quit = true,
                // Any other key restarts
                _ => self.reset_game(),
            },
        }
    }

    fn advance_simulation(&mut self) {
        if self.state.phase != Phase::Playing {
            return;
        }

        let outcome = self.engine.step(&mut self.state);

        if outcome.ate {
            self.play(Cue::Eat);
        }
        if outcome.crash.is_some() {
            // Fires exactly once: the engine reports a crash only on the
            // Playing -> GameOver transition
            self.play(Cue::Crash);
            self.stats.on_game_over(self.state.score);
        }
    }

    fn play(&self, cue: Cue) {
        if let Some(audio) = self.audio.as_ref() {
            audio.play(cue);
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.stats.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use crate::game::Direction;

    fn muted_app() -> App {
        App::new(GameConfig::default(), true)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_initialization() {
        let app = muted_app();
        assert_eq!(app.state.phase, Phase::Playing);
        assert_eq!(app.state.score, 0);
        assert!(app.audio.is_none());
    }

    #[test]
    fn test_steering_while_playing() {
        let mut app = muted_app();
        app.handle_event(press(KeyCode::Up));
        assert_eq!(app.state.snake.direction(), Direction::Up);
    }

    #[test]
    fn test_any_key_restarts_after_game_over() {
        let mut app = muted_app();
        app.state.score = 7;
        app.state.phase = Phase::GameOver;

        // An unbound key still restarts
        app.handle_event(press(KeyCode::Char('x')));

        assert_eq!(app.state.phase, Phase::Playing);
        assert_eq!(app.state.score, 0);
        assert_eq!(app.state.snake.len(), 3);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_key_quits_in_both_phases() {
        let mut app = muted_app();
        app.handle_event(press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = muted_app();
        app.state.phase = Phase::GameOver;
        app.handle_event(press(KeyCode::Esc));
        assert!(app.should_quit);
        assert_eq!(app.state.phase, Phase::GameOver);
    }

    #[test]
    fn test_steering_ignored_after_game_over_triggers_reset_instead() {
        let mut app = muted_app();
        app.state.phase = Phase::GameOver;
        app.handle_event(press(KeyCode::Down));
        // A direction key on the game-over screen is "any key"
        assert_eq!(app.state.phase, Phase::Playing);
    }

    #[test]
    fn test_no_simulation_while_game_over() {
        let mut app = muted_app();
        app.state.phase = Phase::GameOver;
        let head = app.state.snake.head();

        app.advance_simulation();
        assert_eq!(app.state.snake.head(), head);
    }
}
