use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameEngine, GameOverCause, GameState, GameStatus, Grid};
use crate::input::InputMode;

/// What occupies one board cell on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Food,
    Body,
    Head,
}

/// Tile at column `col`, row `row`. The head is drawn over body and food.
pub fn tile_at(state: &GameState, grid: &Grid, col: i32, row: i32) -> Tile {
    let cell = grid.cell_at(col, row);
    if cell == state.snake.head() {
        Tile::Head
    } else if state.snake.contains(cell) {
        Tile::Body
    } else if cell == state.food {
        Tile::Food
    } else {
        Tile::Empty
    }
}

pub struct Renderer {
    input_mode: InputMode,
}

impl Renderer {
    pub fn new(input_mode: InputMode) -> Self {
        Self { input_mode }
    }

    pub fn render(&self, frame: &mut Frame, engine: &GameEngine) {
        let state = engine.state();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.status {
            GameStatus::Over(cause) => {
                frame.render_widget(self.render_game_over(state, cause), game_area);
            }
            GameStatus::Idle | GameStatus::Running => {
                frame.render_widget(self.render_grid(state, engine.grid()), game_area);
            }
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, state: &GameState, grid: &Grid) -> Paragraph<'static> {
        let side = grid.cells_per_side();
        let mut lines = Vec::with_capacity(side as usize);

        for row in 0..side {
            let spans: Vec<Span> = (0..side)
                .map(|col| match tile_at(state, grid, col, row) {
                    Tile::Head => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Tile::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                    Tile::Food => Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Tile::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                })
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState) -> Paragraph<'static> {
        let status = match state.status {
            GameStatus::Idle => "idle",
            GameStatus::Running if state.arbiter.current().is_none() => "waiting for input",
            GameStatus::Running => "running",
            GameStatus::Over(_) => "over",
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score_display(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Status: ", Style::default().fg(Color::Yellow)),
            Span::styled(status, Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, cause: GameOverCause) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![Span::styled(
                format!("The snake {}", cause.describe()),
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score_display(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let mut spans = Vec::new();
        if self.input_mode.accepts_keyboard() {
            spans.push(Span::styled("↑↓←→", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" or "));
            spans.push(Span::styled("WASD", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" to move | "));
        }
        if self.input_mode.accepts_pose() {
            spans.push(Span::styled("pose", Style::default().fg(Color::Magenta)));
            spans.push(Span::raw(" to steer | "));
        }
        spans.push(Span::styled("R", Style::default().fg(Color::Green)));
        spans.push(Span::raw(" to restart | "));
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(InputMode::default())
    }
}
