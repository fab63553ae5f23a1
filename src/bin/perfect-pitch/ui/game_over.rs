//! Game-over screen

use perfect_pitch::game::RoundState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::score_bar::render_score_bar;

pub fn render_game_over(frame: &mut Frame, area: Rect, state: &RoundState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    render_score_bar(frame, chunks[0], state);

    let perfect = state.is_perfect();
    let accent = if perfect { Color::Green } else { Color::Yellow };
    let bold = Style::default().fg(accent).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    if perfect {
        lines.push(Line::from(Span::styled("Perfect Pitch!", bold)));
        lines.push(Line::from("Every note named correctly."));
    } else {
        lines.push(Line::from(Span::styled("Game Over", bold)));
    }
    lines.push(Line::from(""));

    // Show how the final answer went before the summary
    if let Some(feedback) = &state.feedback {
        let color = if feedback.is_correct() {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            feedback.to_string(),
            Style::default().fg(color),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(format!(
        "Final score: {} / {}",
        state.score, state.total_attempts
    )));
    if let Some(accuracy) = state.accuracy() {
        lines.push(Line::from(format!("Accuracy: {accuracy}%")));
    }
    lines.push(Line::from(format!("Best score: {}", state.best_score)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to play again",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);
}
