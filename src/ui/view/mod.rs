//! View layer
//!
//! Pure mapping from `FormView` to widgets

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus, FormView, Outcome};
use crate::bmi::HeightUnit;
use components::{
    ACCENT, ERROR, LABEL, hex_color, render_button, render_input_widget, render_unit_selector,
};
use layouts::centered_rect;

const CARD_HEIGHT: u16 = 22;
const ERROR_TEXT: &str = "Xahiş edirik, bütün məlumatları düzgün daxil edin!";

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CARD_HEIGHT), // form
            Constraint::Length(3),        // help
        ])
        .split(frame.area());

    render_form(frame, &app.view, centered_rect(60, CARD_HEIGHT, chunks[0]));
    render_help(frame, &app.view, chunks[1]);
}

fn render_form(frame: &mut Frame, view: &FormView, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(1), // unit
            Constraint::Length(3), // height
            Constraint::Length(3), // weight
            Constraint::Length(3), // button
            Constraint::Length(1), // error
            Constraint::Length(4), // result
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new("BMI Hesablama Kalkulyatoru")
        .alignment(Alignment::Center)
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    render_unit_selector(frame, chunks[1], view.unit, view.focus == Focus::Unit);

    // min/max of the original form, shown as a hint only
    let height_title = match view.unit {
        HeightUnit::Cm => "Boy (50-250 cm)",
        HeightUnit::M => "Boy (0.5-2.5 m)",
    };
    render_input_widget(
        frame,
        chunks[2],
        height_title,
        &view.height,
        "Boyu daxil edin",
        view.focus == Focus::Height,
    );
    render_input_widget(
        frame,
        chunks[3],
        "Çəki (kg, 10-500)",
        &view.weight,
        "Çəkini daxil edin",
        view.focus == Focus::Weight,
    );

    render_button(frame, chunks[4], "Hesabla", view.focus == Focus::Calculate);

    if view.error.is_some() {
        let error = Paragraph::new(ERROR_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(ERROR));
        frame.render_widget(error, chunks[5]);
    }

    if let Some(outcome) = &view.outcome {
        render_result(frame, outcome, chunks[6]);
    }
}

fn render_result(frame: &mut Frame, outcome: &Outcome, area: Rect) {
    let result = &outcome.result;
    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("BMI: {}", result.display_value()),
            Style::default()
                .fg(hex_color(result.color()))
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(result.band.label(), Style::default().fg(ACCENT)),
        Line::styled(
            outcome.calculated_at.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_help(frame: &mut Frame, view: &FormView, area: Rect) {
    let help_text = match view.focus {
        Focus::Unit => "[←/→] vahid  [Tab] növbəti  [Enter] hesabla  [q/Esc] çıxış",
        Focus::Height | Focus::Weight => {
            "[Tab] növbəti  [Backspace] sil  [Del] təmizlə  [Enter] hesabla  [Esc] çıxış"
        }
        Focus::Calculate => "[Space/Enter] hesabla  [Tab] növbəti  [q/Esc] çıxış",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(LABEL))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
