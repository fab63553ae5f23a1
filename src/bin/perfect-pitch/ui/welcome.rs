//! Welcome screen

use perfect_pitch::game::{RoundState, ROUND_LENGTH};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_welcome(frame: &mut Frame, area: Rect, state: &RoundState) {
    let block = Block::default().borders(Borders::ALL);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Perfect Pitch",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Listen to a note, then pick its name. {ROUND_LENGTH} notes per round."
        )),
        Line::from("Replay the note as often as you like before answering."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Best score:", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(" {} / {}", state.best_score, ROUND_LENGTH),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
