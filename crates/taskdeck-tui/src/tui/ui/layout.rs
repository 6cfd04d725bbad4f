/*
[INPUT]:  Frame layout regions and the active panel
[OUTPUT]: Tab bar rendered into Ratatui frame
[POS]:    TUI UI layout helpers
[UPDATE]: When panels are added or renamed
*/

use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::tui::app::Panel;
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current_panel: Panel,
) {
    let titles = vec![Line::from("Tasks"), Line::from("Blogs"), Line::from("Logs")];
    let selected = match current_panel {
        Panel::Tasks => 0,
        Panel::Blogs => 1,
        Panel::Logs => 2,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Panels"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}
