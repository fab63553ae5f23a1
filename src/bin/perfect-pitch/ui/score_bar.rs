//! Score bar widget - shows score, attempts, accuracy and attempts left

use perfect_pitch::game::{RoundState, ROUND_LENGTH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the score bar
pub fn render_score_bar(frame: &mut Frame, area: Rect, state: &RoundState) {
    let block = Block::default()
        .title(" perfect pitch ")
        .borders(Borders::ALL);

    let value = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Gray);

    let mut spans = vec![
        Span::styled(" Score: ", label),
        Span::styled(format!("{}", state.score), value),
        Span::styled("   Attempts: ", label),
        Span::styled(format!("{}/{}", state.total_attempts, ROUND_LENGTH), value),
    ];

    // Accuracy only makes sense once something has been answered
    if let Some(accuracy) = state.accuracy() {
        spans.push(Span::styled("   Accuracy: ", label));
        spans.push(Span::styled(format!("{accuracy}%"), value));
    }

    if !state.is_game_over {
        spans.push(Span::styled("   Left: ", label));
        spans.push(Span::styled(format!("{}", state.attempts_remaining()), value));
    }

    spans.push(Span::styled(
        format!("   Best: {}/{}", state.best_score, ROUND_LENGTH),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
