use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{segment_shape, GameState, Phase, Position, SegmentShape};
use crate::stats::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_stats(state, stats);
        frame.render_widget(header, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(state);
        frame.render_widget(grid, game_area);

        if state.phase == Phase::GameOver {
            let overlay_area = centered_rect(game_area, 44, 7);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(self.render_game_over(state), overlay_area);
        }

        let controls = self.render_controls(state);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let snake_glyphs = snake_glyphs(state);
        let mut lines = Vec::new();

        for y in 0..state.grid_height {
            let mut spans = Vec::new();

            for x in 0..state.grid_width {
                let pos = Position::new(x, y);

                let cell = if let Some(glyph) = snake_glyphs.get(&pos) {
                    glyph.clone()
                } else if pos == state.food.cell() {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if is_wall_ring(state, pos) {
                    Span::styled("▒ ", Style::default().fg(Color::Blue))
                } else if state.is_in_playable_area(pos) {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                } else {
                    Span::raw("  ")
                };

                spans.push(cell);
            }

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

    fn render_stats(&self, state: &GameState, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "ANY KEY",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, state: &GameState) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ];
        if state.phase == Phase::GameOver {
            spans.push(Span::raw(" | any key restarts"));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph per snake cell: head distinct, straight segments square, turn
/// segments and the tail rounded.
fn snake_glyphs(state: &GameState) -> HashMap<Position, Span<'static>> {
    let body = state.snake.cells();
    let mut glyphs = HashMap::with_capacity(body.len());

    for (i, &cell) in body.iter().enumerate() {
        let span = if i == 0 {
            Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else if i == body.len() - 1 {
            Span::styled("○ ", Style::default().fg(Color::Green))
        } else {
            let shape = segment_shape(body[i - 1], cell, body[i + 1]);
            let glyph = match shape {
                SegmentShape::Square => "□ ",
                SegmentShape::Rounded => "○ ",
            };
            Span::styled(glyph, Style::default().fg(Color::Green))
        };
        // Earlier segments win when the body transiently overlaps itself
        glyphs.entry(cell).or_insert(span);
    }

    glyphs
}

/// The one-cell ring sitting just outside the playable interior
fn is_wall_ring(state: &GameState, pos: Position) -> bool {
    let m = state.wall_margin;
    if m == 0 {
        return false;
    }
    let (lo_x, hi_x) = (m - 1, state.grid_width - m);
    let (lo_y, hi_y) = (m - 1, state.grid_height - m);

    let on_x_edge = (pos.x == lo_x || pos.x == hi_x) && pos.y >= lo_y && pos.y <= hi_y;
    let on_y_edge = (pos.y == lo_y || pos.y == hi_y) && pos.x >= lo_x && pos.x <= hi_x;
    on_x_edge || on_y_edge
}

/// Fixed-size rect centered inside `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
