//! Game screen: score, play prompt, answer options and feedback

use perfect_pitch::game::{Feedback, RoundState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::score_bar::render_score_bar;

pub fn render_game(frame: &mut Frame, area: Rect, state: &RoundState, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score bar
            Constraint::Length(3), // Play prompt
            Constraint::Min(5),    // Options
            Constraint::Length(4), // Feedback
        ])
        .split(area);

    render_score_bar(frame, chunks[0], state);
    render_play_prompt(frame, chunks[1], state);
    render_options(frame, chunks[2], state, selected);
    if let Some(feedback) = &state.feedback {
        render_feedback(frame, chunks[3], feedback);
    }
}

fn render_play_prompt(frame: &mut Frame, area: Rect, state: &RoundState) {
    let line = if state.is_loading {
        Line::from(Span::styled("…", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(
            "▶ Play note [Space]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_options(frame: &mut Frame, area: Rect, state: &RoundState, selected: usize) {
    let block = Block::default()
        .title(" Which note was played? ")
        .borders(Borders::ALL);

    let enabled = state.options_enabled();
    let lines: Vec<Line> = state
        .options
        .iter()
        .enumerate()
        .map(|(i, note)| {
            let style = if !enabled {
                Style::default().fg(Color::DarkGray)
            } else if i == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("  [{}]  {:<3}  ", i + 1, note.label()), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: &Feedback) {
    let color = if feedback.is_correct() {
        Color::Green
    } else {
        Color::Red
    };

    let lines = vec![
        Line::from(Span::styled(
            feedback.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
