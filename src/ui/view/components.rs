//! Reusable widgets
//!
//! Input boxes, the unit selector and the calculate button

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::bmi::HeightUnit;

pub const ACCENT: Color = Color::Rgb(0xff, 0x63, 0x47);
pub const LABEL: Color = Color::Rgb(0x44, 0x44, 0x44);
pub const BORDER: Color = Color::Rgb(0xdd, 0xdd, 0xdd);
pub const ERROR: Color = Color::Red;

/// Converts a "#rrggbb" token into a terminal color.
pub fn hex_color(token: &str) -> Color {
    token.parse().unwrap_or(Color::Reset)
}

/// [component] Titled input box; shows `placeholder` while empty.
///
/// Places the terminal cursor at the end of the text when focused.
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let border = if is_focused { ACCENT } else { BORDER };
    let text = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD))
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);

    if is_focused {
        let offset = value.chars().count() as u16;
        frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
    }
}

/// [component] "Boy: [cm]  m" selector line
pub fn render_unit_selector(frame: &mut Frame, area: Rect, unit: HeightUnit, is_focused: bool) {
    let option = |candidate: HeightUnit| {
        let label = format!(" {} ", candidate);
        if candidate == unit {
            let mut style = Style::default().fg(Color::White).bg(ACCENT);
            if is_focused {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            Span::styled(label, style)
        } else {
            Span::styled(label, Style::default().fg(LABEL))
        }
    };

    let line = Line::from(vec![
        Span::styled("Boy: ", Style::default().fg(LABEL)),
        option(HeightUnit::Cm),
        Span::raw(" "),
        option(HeightUnit::M),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// [component] Full-width button
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let style = if is_focused {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#4caf50"), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(hex_color("not a color"), Color::Reset);
    }
}
