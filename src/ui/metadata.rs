//! Page metadata view: the JSON-LD descriptors

use super::widgets::render_section;
use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

/// Draw the structured data documents
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("schema.org structured data ({COPY_SHORTCUT} to copy)"),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    match app.structured_data.documents() {
        Ok(documents) => {
            for doc in documents {
                let style = Style::default().fg(Color::Cyan);
                lines.extend(
                    doc.lines()
                        .map(|l| Line::from(Span::styled(l.to_string(), style))),
                );
                lines.push(Line::from(""));
            }
        }
        Err(err) => {
            lines.push(Line::from(Span::styled(
                format!("Failed to serialize structured data: {err}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    render_section(frame, area, View::Metadata.title(), lines, app.state.scroll_offset);
}
