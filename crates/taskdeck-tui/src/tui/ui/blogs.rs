/*
[INPUT]:  AppState blog post snapshot and feed scroll state
[OUTPUT]: Blog cards rendered into Ratatui frame
[POS]:    TUI UI blog feed panel rendering
[UPDATE]: When card format changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem};

use taskdeck_feed::BlogPost;

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

/// One card per post: bold title line followed by the body.
///
/// If the fetch failed or has not completed, the slice is empty and the
/// panel simply shows no cards.
pub(in crate::tui) fn blog_cards(posts: &[BlogPost]) -> Vec<Text<'static>> {
    posts
        .iter()
        .map(|post| {
            Text::from(vec![
                Line::from(Span::styled(
                    post.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    post.body.clone(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ])
        })
        .collect()
}

pub(in crate::tui) fn draw_blog_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let items = if app.blogs.is_empty() {
        vec![ListItem::new("No blog posts loaded")]
    } else {
        blog_cards(&app.blogs).into_iter().map(ListItem::new).collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Blogs"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.blog_state);
}
