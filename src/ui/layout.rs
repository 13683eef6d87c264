//! Layout components (header, sidebar, nav menu, status bar)

use super::components::{render_button, render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use crate::state::{CaptureFocus, SubmissionPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Header height in rows
pub const HEADER_HEIGHT: u16 = 3;
/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;
/// Terminals narrower than this get the collapsible nav menu instead of the
/// sidebar and inline links
pub const NARROW_WIDTH: u16 = 80;

const HEADER_CTA_WIDTH: u16 = 22;

/// Areas of the page frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub status: Rect,
}

/// Whether a terminal of this width shows the section sidebar
pub fn sidebar_visible(width: u16) -> bool {
    width >= NARROW_WIDTH
}

/// Split the frame into header, optional sidebar, content and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    if !sidebar_visible(area.width) {
        return PageLayout {
            header: rows[0],
            sidebar: None,
            main: rows[1],
            status: rows[2],
        };
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[1]);

    PageLayout {
        header: rows[0],
        sidebar: Some(columns[0]),
        main: columns[1],
        status: rows[2],
    }
}

/// Map a click position to the index of a sidebar entry in
/// [`View::NAVIGABLE`]
pub fn sidebar_item_at(row: u16, column: u16) -> Option<usize> {
    if column >= SIDEBAR_WIDTH || row < HEADER_HEIGHT {
        return None;
    }
    let idx = ((row - HEADER_HEIGHT) / BUTTON_HEIGHT) as usize;
    (idx < View::NAVIGABLE.len()).then_some(idx)
}

/// Draw the header: brand, inline links on wide terminals and the early
/// access call to action
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let wide = sidebar_visible(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(if wide { HEADER_CTA_WIDTH } else { 0 }),
        ])
        .split(area);

    let mut spans = vec![
        Span::styled(" 🌱 ", Style::default().fg(Color::Green)),
        Span::styled(
            app.content.brand.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    if wide {
        for link in &app.content.navigation {
            let is_current = View::from_anchor(&link.href) == Some(app.state.current_view);
            let style = if is_current {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(link.name.as_str(), style));
            spans.push(Span::raw("  "));
        }
    } else {
        let label = if app.state.nav_menu.is_open {
            "[m] Close"
        } else {
            "[m] Menu"
        };
        spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if wide {
        render_button(
            frame,
            chunks[1],
            &app.content.hero.primary_cta.name,
            matches!(app.state.current_view, View::GetStarted),
            true,
        );
    }
}

/// Draw the sidebar with one boxed button per section
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = View::NAVIGABLE
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::NAVIGABLE.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx],
            &(idx + 1).to_string(),
            view.title(),
            app.state.current_view == *view,
        );
    }
}

/// Draw the collapsible navigation menu below the header
pub fn draw_nav_menu(frame: &mut Frame, app: &App) {
    let items = app.nav_menu_items();
    let area = frame.area();
    let width = items
        .iter()
        .map(|l| l.name.chars().count() as u16)
        .max()
        .unwrap_or(0)
        + 6;
    let menu_area = Rect {
        x: area.x + 1,
        y: area.y + HEADER_HEIGHT.min(area.height),
        width: width.min(area.width.saturating_sub(1)),
        height: (items.len() as u16 + 2).min(area.height.saturating_sub(HEADER_HEIGHT)),
    };

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            if idx == app.state.nav_menu.selected_index {
                Line::from(Span::styled(
                    format!("› {}", link.name),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", link.name))
            }
        })
        .collect();

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Clear, menu_area);
    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.anchor()),
        Style::default().fg(Color::Green),
    )];

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    if app.state.nav_menu.is_open {
        return "j/k:nav  Enter:go  Esc:close".to_string();
    }

    let form = &app.state.capture_form;
    match app.state.current_view {
        View::Splash => "Press any key to skip".to_string(),
        View::Home => "←/→:choose  Enter:go  Tab:next  1-7:jump  m:menu  q:quit".to_string(),
        View::About | View::HowItWorks => {
            "j/k:scroll  Enter:get started  Tab:next  m:menu".to_string()
        }
        View::Impact | View::Contact => "j/k:scroll  Tab:next  PgUp:prev  m:menu".to_string(),
        View::Metadata => format!("j/k:scroll  {COPY_SHORTCUT}:copy JSON-LD  Tab:prev"),
        View::GetStarted => match form.phase() {
            SubmissionPhase::Pending => "Joining...".to_string(),
            SubmissionPhase::Succeeded => "Enter:join another  PgDn:next".to_string(),
            SubmissionPhase::Failed(_) => "Enter:retry  Esc:dismiss".to_string(),
            SubmissionPhase::Idle => match form.focus {
                CaptureFocus::Email => "type email  Tab:next field  Enter:submit".to_string(),
                CaptureFocus::Role => "←/→:choose role  Tab:next field  Enter:submit".to_string(),
                CaptureFocus::Submit => "Enter:submit  Tab:next field  PgDn:next".to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_has_sidebar() {
        let layout = create_layout(Rect::new(0, 0, 120, 40));
        let sidebar = layout.sidebar.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(sidebar.y, HEADER_HEIGHT);
        assert_eq!(layout.main.x, SIDEBAR_WIDTH);
        assert_eq!(layout.status.y, 39);
    }

    #[test]
    fn test_narrow_layout_has_no_sidebar() {
        let layout = create_layout(Rect::new(0, 0, 60, 30));
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.main.width, 60);
    }

    #[test]
    fn test_sidebar_item_at() {
        assert_eq!(sidebar_item_at(HEADER_HEIGHT, 2), Some(0));
        assert_eq!(sidebar_item_at(HEADER_HEIGHT + BUTTON_HEIGHT, 2), Some(1));
        assert_eq!(sidebar_item_at(HEADER_HEIGHT + BUTTON_HEIGHT * 6 + 2, 2), Some(6));
        assert_eq!(sidebar_item_at(HEADER_HEIGHT + BUTTON_HEIGHT * 7, 2), None);
        assert_eq!(sidebar_item_at(1, 2), None);
        assert_eq!(sidebar_item_at(HEADER_HEIGHT, SIDEBAR_WIDTH), None);
    }
}
