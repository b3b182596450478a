//! TUI rendering with ratatui
//!
//! Single game screen plus the final score dialog.

use super::app::{App, MessageStyle};
use crate::output::formatters::{round_badge, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Game card
            Constraint::Length(3), // Guess input
            Constraint::Length(3), // Score
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_game_card(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_score(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);

    if !app.engine.ui_state().is_playing() {
        render_final_score_dialog(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 UNSCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_card(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.ui_state();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Word count badge
            Constraint::Min(1),    // Scrambled word
            Constraint::Length(2), // Instructions
        ])
        .split(inner);

    let badge = Paragraph::new(Span::styled(
        format!(
            " {} ",
            round_badge(state.current_word_count, state.max_rounds)
        ),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    f.render_widget(badge, rows[0]);

    // Vertically centre the word in its row
    let padding = rows[1].height.saturating_sub(1) / 2;
    let mut word_lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    word_lines.push(Line::from(Span::styled(
        spaced_letters(&state.current_scrambled_word),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    let word = Paragraph::new(word_lines).alignment(Alignment::Center);
    f.render_widget(word, rows[1]);

    let instructions = Paragraph::new("Unscramble the word using all the letters.")
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(instructions, rows[2]);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.ui_state();

    let (title, color) = if state.is_guessed_word_wrong {
        (" Wrong Guess! ", Color::Red)
    } else {
        (" Enter your word ", Color::Yellow)
    };

    let input = Paragraph::new(state.user_guess.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.ui_state();
    let max_score = app.engine.config().max_score();
    let percent = if max_score == 0 {
        0
    } else {
        (u64::from(state.score) * 100 / u64::from(max_score)).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("score: {}", state.score));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Best: {} | Avg: {:.0}",
        app.stats.games_played,
        app.stats.best_score,
        app.stats.average_score()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.engine.ui_state().is_playing() {
        "Enter: Submit | Tab: Skip | Ctrl-N: New Game | Esc: Quit"
    } else {
        "p: Play Again | q: Exit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_final_score_dialog(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 9, f.area());
    let score = app.engine.ui_state().score;

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🎉 Congratulations! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("You scored: {score}")),
        Line::from(""),
        Line::from(vec![
            Span::styled("[p] Play Again", Style::default().fg(Color::Cyan)),
            Span::raw("    "),
            Span::styled("[q] Exit", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let dialog = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

/// Rectangle of `percent_x` width and `height` rows centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
