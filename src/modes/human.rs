use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{error, info, warn};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{Stdout, stdout};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::time::interval;

use crate::game::{
    BoardConfig, Color, Players, Position, SingleTracker, Snake, SnakeConfig, SnakeId,
    TickOutcome,
};
use crate::gameloop::{GameHandler, LoopHandle, start_loop};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::{GameMetrics, RateCounter};
use crate::render::{Counters, Renderer};

const FOOD_COLOR: Color = Color::INDIAN_RED;

/// How often the input task checks whether the loop died on its own
const WATCHDOG_PERIOD: Duration = Duration::from_millis(100);

/// The game-loop side of a human game.
///
/// Runs on the loop thread. Key presses arrive over `intents` and are applied
/// at the start of the next step, so the players are only ever touched by
/// the loop.
pub struct Arcade<B: Backend> {
    terminal: Terminal<B>,
    renderer: Renderer,
    intents: UnboundedReceiver<KeyAction>,
    metrics: GameMetrics,
    ups: RateCounter,
    fps: RateCounter,
    show_counters: bool,
    frame_budget: Duration,
    last_frame: Instant,
    epoch: Instant,
}

impl<B: Backend> Arcade<B> {
    pub fn new(
        terminal: Terminal<B>,
        board: &BoardConfig,
        intents: UnboundedReceiver<KeyAction>,
    ) -> Self {
        let now = Instant::now();
        Self {
            terminal,
            renderer: Renderer::new(board),
            intents,
            metrics: GameMetrics::new(),
            ups: RateCounter::default(),
            fps: RateCounter::default(),
            show_counters: board.show_counters,
            frame_budget: board.frame_budget(),
            last_frame: now,
            epoch: now,
        }
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    fn apply(&mut self, players: &mut Players, action: KeyAction) {
        match action {
            KeyAction::Steer(player, direction) => players.steer(player, direction),
            KeyAction::Restart => {
                info!("restarting");
                players.reset();
                self.metrics.on_restart();
            }
            // Handled by the input task
            KeyAction::Quit | KeyAction::None => {}
        }
    }
}

impl<B: Backend> GameHandler for Arcade<B> {
    type State = Players;

    fn integrate(&mut self, mut players: Players, t: f64, delta: f64) -> Players {
        while let Ok(action) = self.intents.try_recv() {
            self.apply(&mut players, action);
        }

        // A death resets the score, so remember what it was
        let scores: Vec<u32> = players.snakes().iter().map(Snake::score).collect();
        let outcomes = players.tick(t, delta);
        for (outcome, score) in outcomes.iter().zip(scores) {
            if let TickOutcome::Died(cause) = outcome {
                self.metrics.on_death(score, *cause);
            }
        }
        for snake in players.snakes() {
            self.metrics.observe_score(snake.score());
        }

        self.ups.tick(self.epoch.elapsed().as_secs_f64());
        players
    }

    fn render(&mut self, players: &Players, _t: f64, _alpha: f64) {
        self.metrics.update();
        let counters = self.show_counters.then(|| Counters {
            fps: self.fps.rate(),
            ups: self.ups.rate(),
        });

        let renderer = &self.renderer;
        let metrics = &self.metrics;
        if let Err(err) = self
            .terminal
            .draw(|frame| renderer.render(frame, players, metrics, counters))
        {
            error!("failed to draw frame: {err}");
        }
        self.fps.tick(self.epoch.elapsed().as_secs_f64());

        // Hold the frame rate down; the loop catches up on steps afterwards
        let spent = self.last_frame.elapsed();
        if spent < self.frame_budget {
            thread::sleep(self.frame_budget - spent);
        }
        self.last_frame = Instant::now();
    }
}

type TerminalArcade = Arcade<CrosstermBackend<Stdout>>;

pub struct HumanMode {
    board: BoardConfig,
    snakes: Vec<SnakeConfig>,
}

impl HumanMode {
    /// One snake config per player; a second config makes it a two-player
    /// game. Extra configs are ignored.
    pub fn new(board: BoardConfig, snakes: Vec<SnakeConfig>) -> Self {
        Self { board, snakes }
    }

    /// Build the snakes for a new game, each with its own food
    pub fn spawn_players(&self) -> Players {
        let food = || {
            SingleTracker::new(
                self.board.edges(),
                self.board.square_size,
                self.board.buffer,
                FOOD_COLOR,
            )
        };

        match self.snakes.as_slice() {
            [] => {
                let config = SnakeConfig::for_board(&self.board);
                Players::Single(Snake::with_tracker(SnakeId(0), config, food()))
            }
            [config] => Players::Single(Snake::with_tracker(SnakeId(0), config.clone(), food())),
            [first, second, ..] => {
                let edges = self.board.edges();
                let row = edges.center().y;
                let thirds = [
                    (edges.left + edges.width() / 3.0).floor(),
                    (edges.left + 2.0 * edges.width() / 3.0).floor(),
                ];

                let mut configs = [first.clone(), second.clone()];
                for (index, config) in configs.iter_mut().enumerate() {
                    if config.starting_position.is_none() {
                        config.starting_position = Some(Position::new(thirds[index], row));
                    }
                    config.rival = Some(SnakeId(1 - index as u8));
                }

                let [first, second] = configs;
                Players::Duo([
                    Snake::with_tracker(SnakeId(0), first, food()),
                    Snake::with_tracker(SnakeId(1), second, food()),
                ])
            }
        }
    }

    /// Play until the user quits, returning the session statistics
    pub async fn run(self) -> Result<GameMetrics> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let (intents, intents_rx) = unbounded_channel();
        let arcade = Arcade::new(terminal, &self.board, intents_rx);
        let handle = match start_loop(arcade, self.board.update_period(), self.spawn_players()) {
            Ok(handle) => handle,
            Err(err) => {
                restore_terminal()?;
                return Err(err).context("Failed to start game loop");
            }
        };

        let result = pump_events(&handle, &intents).await;

        handle.stop();
        let joined = tokio::task::spawn_blocking(move || handle.join())
            .await
            .context("Failed to wait for game loop")?;

        restore_terminal()?;

        let (arcade, mut players) = match joined {
            Ok(parts) => parts,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        players.stop();
        result?;

        Ok(arcade.metrics)
    }
}

/// Forward key presses to the loop until the user quits or the loop exits
async fn pump_events(
    handle: &LoopHandle<TerminalArcade>,
    intents: &UnboundedSender<KeyAction>,
) -> Result<()> {
    let input_handler = InputHandler::new();
    let mut event_stream = EventStream::new();
    let mut watchdog = interval(WATCHDOG_PERIOD);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match input_handler.handle_key_event(key) {
                            KeyAction::Quit => break,
                            KeyAction::None => {}
                            action => {
                                if intents.send(action).is_err() {
                                    warn!("game loop stopped taking input");
                                    break;
                                }
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                    None => break,
                }
            }

            _ = watchdog.tick() => {
                if handle.is_finished() {
                    warn!("game loop exited on its own");
                    break;
                }
            }

            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(stdout(), LeaveAlternateScreen, Show).context("Failed to leave alternate screen")?;
    Ok(())
}
