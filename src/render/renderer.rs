use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{self, BoardConfig, Players, Shape};
use crate::metrics::GameMetrics;

/// Colors of the terminal grid cells, top row first
pub type Raster = Vec<Vec<Option<game::Color>>>;

/// Frame and step rates shown in the header
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Counters {
    pub fps: f64,
    pub ups: f64,
}

/// Maps rendering space back onto whole terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cell_size: f64,
    pub buffer: f64,
    pub columns: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn for_board(board: &BoardConfig) -> Self {
        Self {
            cell_size: board.square_size,
            buffer: board.buffer,
            columns: usize::from(board.squares_wide),
            rows: usize::from(board.squares_high),
        }
    }

    fn to_cell(&self, value: f64) -> f64 {
        ((value - self.buffer) / self.cell_size).round()
    }

    /// Fill the cells each shape covers, later shapes over earlier ones.
    ///
    /// A shape covers `[round(min), round(max))` on both axes, so a segment
    /// between cells lands on whichever cell holds most of it. Board y grows
    /// upwards and terminal rows grow downwards.
    pub fn rasterize(&self, shapes: &[Shape]) -> Raster {
        let mut raster = vec![vec![None; self.columns]; self.rows];
        if self.cell_size <= 0.0 {
            return raster;
        }

        for shape in shapes {
            let x0 = self.to_cell(shape.min.x).max(0.0) as usize;
            let x1 = (self.to_cell(shape.max.x).max(0.0) as usize).min(self.columns);
            let y0 = self.to_cell(shape.min.y).max(0.0) as usize;
            let y1 = (self.to_cell(shape.max.y).max(0.0) as usize).min(self.rows);

            for y in y0..y1 {
                let row = &mut raster[self.rows - 1 - y];
                for cell in &mut row[x0.min(x1)..x1] {
                    *cell = Some(shape.color);
                }
            }
        }

        raster
    }
}

fn tui_color(color: game::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

const PLAYER_LABELS: [&str; 2] = ["P1", "P2"];

pub struct Renderer {
    viewport: Viewport,
    show_grid: bool,
}

impl Renderer {
    pub fn new(board: &BoardConfig) -> Self {
        Self {
            viewport: Viewport::for_board(board),
            show_grid: board.show_grid,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Food first, then every snake on top
    pub fn shapes(&self, players: &Players) -> Vec<Shape> {
        let snakes = players.snakes();
        let mut shapes: Vec<Shape> = snakes.iter().flat_map(|s| s.tracker().paint()).collect();
        shapes.extend(snakes.iter().flat_map(|s| s.paint()));
        shapes
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        players: &Players,
        metrics: &GameMetrics,
        counters: Option<Counters>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(players, metrics, counters);
        frame.render_widget(stats, chunks[0]);

        let game_area = self.center(chunks[1]);
        let grid = self.render_grid(players);
        frame.render_widget(grid, game_area);

        let controls = self.render_controls(players);
        frame.render_widget(controls, chunks[2]);
    }

    /// Two terminal columns per cell plus the border
    fn center(&self, area: Rect) -> Rect {
        let width = (self.viewport.columns * 2 + 2).min(usize::from(area.width)) as u16;
        let height = (self.viewport.rows + 2).min(usize::from(area.height)) as u16;
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    fn render_grid(&self, players: &Players) -> Paragraph<'_> {
        let raster = self.viewport.rasterize(&self.shapes(players));
        let background = Style::default().bg(tui_color(game::Color::CORNSILK));

        let lines: Vec<Line> = raster
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Some(color) => Span::styled("  ", Style::default().bg(tui_color(color))),
                        None if self.show_grid => Span::styled(
                            "· ",
                            background.fg(tui_color(game::Color::LIGHT_GRAY)),
                        ),
                        None => Span::styled("  ", background),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(tui_color(game::Color::DARK_SLATE_GRAY)))
                .title(" Snake "),
        )
    }

    fn render_stats(
        &self,
        players: &Players,
        metrics: &GameMetrics,
        counters: Option<Counters>,
    ) -> Paragraph<'_> {
        let mut spans = Vec::new();
        for (snake, label) in players.snakes().iter().zip(PLAYER_LABELS) {
            let color = snake
                .config()
                .colors
                .first()
                .copied()
                .map(tui_color)
                .unwrap_or(Color::White);
            spans.push(Span::styled(format!("{label}: "), Style::default().fg(color)));
            spans.push(Span::styled(
                snake.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("    "));
        }

        spans.push(Span::styled("Best: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            metrics.high_score.to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("    "));
        spans.push(Span::styled("Time: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(metrics.format_time(), Style::default().fg(Color::White)));

        if let Some(counters) = counters {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                format!("FPS {:.0}  UPS {:.0}", counters.fps, counters.ups),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_controls(&self, players: &Players) -> Paragraph<'_> {
        let mut spans = vec![Span::styled("↑↓←→", Style::default().fg(Color::Cyan))];
        if players.snakes().len() > 1 {
            spans.push(Span::raw(" / "));
            spans.push(Span::styled("WASD", Style::default().fg(Color::Cyan)));
        }
        spans.extend([
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}
