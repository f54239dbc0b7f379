use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{Photo, Post};
use crate::tui::app::{Page, TuiApp};

/// Width of one vault grid cell, including padding.
const CELL_WIDTH: u16 = 28;

pub fn render(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.page {
        Page::Feed => render_feed_page(frame, app, chunks[0]),
        Page::Vault => render_vault_page(frame, app, chunks[0]),
    }
    render_status_bar(frame, app, chunks[1]);
}

/// Number of grid columns that fit in the given terminal width.
pub fn grid_columns(width: u16) -> usize {
    (width.saturating_sub(2) / CELL_WIDTH).max(1) as usize
}

fn render_feed_page(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let Some(feed) = &app.feed else {
        render_loading(frame, " Feed ", area);
        return;
    };

    let cards: Vec<ListItem> = feed
        .posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let expanded = app.toggles.is_expanded(i);
            let mut lines = post_card_lines(post, expanded);
            lines.push(Line::from(""));

            let style = if i == app.post_index {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Text::from(lines)).style(style)
        })
        .collect();

    let title = format!(" Feed ({} posts) ", feed.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let list = List::new(cards).block(block);
    let mut state = ListState::default();
    state.select(Some(app.post_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// The lines of one post card: id and title, then the toggle label when the
/// post has comments, then the comments themselves when expanded.
pub fn post_card_lines(post: &Post, expanded: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("ID : {}", post.id),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Title : {}", post.title)),
    ];

    if post.has_comments() {
        let label = if expanded { "HIDE" } else { "SHOW" };
        lines.push(Line::from(Span::styled(
            format!("{} Comments [{}]", post.comments.len(), label),
            Style::default().fg(Color::Yellow),
        )));
    }

    if expanded {
        for comment in &post.comments {
            lines.push(Line::from(Span::styled(
                format!("  {} | {}", comment.post_id, comment.id),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {} | {}", comment.name, comment.email),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(format!("  {}", comment.body)));
        }
    }

    lines
}

fn render_vault_page(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let Some(photos) = &app.photos else {
        render_loading(frame, " Vault ", area);
        return;
    };

    let columns = grid_columns(area.width);
    let rows: Vec<ListItem> = photos
        .chunks(columns)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, photo)| {
                    let selected = row * columns + col == app.photo_index;
                    let style = if selected {
                        Style::default()
                            .bg(Color::Cyan)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Span::styled(photo_cell(photo), style)
                })
                .collect();
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Vault ({} photos) ", photos.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let list = List::new(rows).block(block);
    let mut state = ListState::default();
    state.select(Some(app.photo_index / columns));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One fixed-width grid cell: photo id and truncated title.
pub fn photo_cell(photo: &Photo) -> String {
    let width = CELL_WIDTH as usize - 2;
    let label = format!("[{:>3}] {}", photo.id, photo.title);
    let truncated: String = if label.chars().count() > width {
        label.chars().take(width - 1).chain(std::iter::once('…')).collect()
    } else {
        label
    };
    format!("{truncated:<width$}  ")
}

fn render_loading(frame: &mut Frame, title: &str, area: Rect) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("Loading").block(block);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let status = if app.is_loading {
        format!("Loading {}...", app.page.title().to_lowercase())
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        match app.page {
            Page::Feed => {
                "j/k:Navigate  Enter:Comments  Tab:Vault  R:Refresh  q:Quit".to_string()
            }
            Page::Vault => {
                "h/j/k/l:Navigate  o:Open  Tab:Feed  R:Refresh  q:Quit".to_string()
            }
        }
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}
