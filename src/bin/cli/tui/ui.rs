use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use atlas_lib::catalog::Direction as AskDirection;
use atlas_lib::quiz::SessionView;

use super::app_state::{TuiState, View};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = outer[0];
    let status_area = outer[1];

    match state.view {
        View::Flashcards => draw_flashcards(f, main_area, state),
        View::Quiz => draw_quiz(f, main_area, state),
        View::Progress => draw_progress(f, main_area, state),
        View::ConfirmReset => draw_confirm(f, main_area),
    }

    draw_status_bar(f, status_area, state);
}

fn draw_flashcards(f: &mut Frame, area: Rect, state: &TuiState) {
    let (position, total) = state.flashcards.position();
    let ask = match state.flashcards.direction() {
        AskDirection::Capital => "What is the capital of",
        AskDirection::Country => "Which country has this capital",
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}:", ask),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            state.flashcards.prompt().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if state.flashcards.is_revealed() {
        lines.push(Line::from(Span::styled(
            state.flashcards.answer().to_string(),
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "(press Space to reveal)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Flashcards {} / {} ", position, total));
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn draw_quiz(f: &mut Frame, area: Rect, state: &TuiState) {
    let lines: Vec<Line> = match state.session.view() {
        SessionView::Presenting { question, remaining } => {
            let ask = match question.direction {
                AskDirection::Capital => "Select the correct capital for",
                AskDirection::Country => "Select the correct country for",
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{}:", ask),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    question.prompt().to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            for (i, option) in question.options.iter().enumerate() {
                lines.push(Line::from(format!("  {}. {}", i + 1, option)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Questions remaining: {}", remaining),
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
        SessionView::Answered { question, feedback, remaining } => {
            let ask = match question.direction {
                AskDirection::Capital => "Select the correct capital for",
                AskDirection::Country => "Select the correct country for",
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{}:", ask),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    question.prompt().to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            for (i, option) in question.options.iter().enumerate() {
                let style = if option.as_str() == question.correct_answer() {
                    Style::default().fg(Color::Green)
                } else if *option == feedback.selected && !feedback.is_correct {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {}. {}", i + 1, option),
                    style,
                )));
            }
            lines.push(Line::from(""));
            if feedback.is_correct {
                lines.push(Line::from(Span::styled(
                    "Correct!",
                    Style::default().fg(Color::Green),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    format!("Incorrect, the answer is {}.", question.correct_answer()),
                    Style::default().fg(Color::Red),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("Questions remaining: {}", remaining),
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
        SessionView::Completed => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Congratulations!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("You have mastered all countries and capitals."),
            Line::from("You have achieved 70%+ accuracy on every question."),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to reset your progress and play again.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let block = Block::default().borders(Borders::ALL).title(" Quiz ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_progress(f: &mut Frame, area: Rect, state: &TuiState) {
    let summary = state.app.summary();

    let name_width = summary
        .items
        .iter()
        .map(|row| row.country.len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    for row in summary.items.iter().skip(state.progress_scroll) {
        let pct = row.accuracy.round() as u32;
        let color = if pct >= 70 {
            Color::Green
        } else if pct >= 40 {
            Color::Yellow
        } else {
            Color::Red
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<width$}  ", row.country, width = name_width)),
            Span::styled(format!("{:>3}% mastered", pct), Style::default().fg(color)),
            Span::styled(
                format!("  ({} correct out of {} attempts)", row.correct, row.attempts),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let title = format!(
        " Progress: {} mastered, {} learning, {} not started ",
        summary.mastered, summary.learning, summary.not_started
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_confirm(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("Reset your progress?"),
        Line::from("This will clear all your mastery data."),
        Line::from(""),
        Line::from(Span::styled(
            "Press y to confirm, any other key to cancel.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let block = Block::default().borders(Borders::ALL).title(" Reset ");
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    let text = if let Some(message) = &state.flash_message {
        message.clone()
    } else {
        match state.view {
            View::Flashcards => {
                "Space flip · h/l navigate · Tab switch view · q quit".to_string()
            }
            View::Quiz => "1-4 answer · Enter next · Tab switch view · q quit".to_string(),
            View::Progress => "j/k scroll · r reset · Tab switch view · q quit".to_string(),
            View::ConfirmReset => "y confirm · any other key cancels".to_string(),
        }
    };

    let style = if state.flash_message.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), area);
}
