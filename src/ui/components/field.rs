//! Text field rendering

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field height in rows (bordered single line)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a single-line field. Empty fields show their placeholder dimmed.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_enabled: bool,
) {
    let border_style = if is_active && is_enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if field.is_empty() || !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(field.display_value(), value_style)];
    if is_active && is_enabled {
        if field.is_empty() {
            spans.insert(0, Span::styled("▌", Style::default().fg(Color::Green)));
        } else {
            spans.push(Span::styled("▌", Style::default().fg(Color::Green)));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
