//! Common reusable UI components for the TUI
//!
//! Standard layout, title, help bar and button rendering shared by the
//! sign-in screens so they look alike.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Standard 3-section screen layout (title, content, help)
///
/// Returns a 3-element array with fixed-height title and help sections,
/// and a flexible-height content section.
///
/// # Example
/// ```no_run
/// # use ratatui::layout::Rect;
/// # use login_flow::tui::widgets::common::render_screen_layout;
/// # let area = Rect::default();
/// let chunks = render_screen_layout(area);
/// // chunks[0] = title area (height: 3)
/// // chunks[1] = content area (flexible)
/// // chunks[2] = help area (height: 3)
/// ```
pub fn render_screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(0),    // Content
        Constraint::Length(3), // Help
    ])
    .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

/// Render a styled title bar
///
/// Creates a centered title with cyan borders.
pub fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

/// Render help text with keyboard shortcuts
///
/// Takes an array of (key, description) tuples and renders them
/// as a centered help bar at the bottom of the screen.
pub fn render_help(frame: &mut Frame, area: Rect, items: &[(&str, &str)]) {
    let spans: Vec<Span> = items
        .iter()
        .map(|(key, desc)| Span::raw(format!("[{}] {}  ", key, desc)))
        .collect();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Calculate a centered rectangle
///
/// Returns a rectangle centered within the given area, with the specified
/// percentage of width and height.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `r` - Parent rectangle to center within
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub focused: bool,
}

/// Style for a button in the given state
///
/// Disabled buttons are dimmed regardless of focus.
pub fn button_style(state: ButtonState) -> Style {
    if !state.enabled {
        Style::default().fg(Color::DarkGray)
    } else if state.focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Render a bordered, centered button label
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let text = if state.focused && state.enabled {
        format!("> {} <", label)
    } else {
        label.to_string()
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(button_style(state));
    frame.render_widget(widget, area);
}
