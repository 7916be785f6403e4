//! Paints a composed [`DashboardFrame`] onto the terminal.
//!
//! This is the only place where chart text meets ratatui widgets; the
//! controller and charts never import drawing primitives.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::charts::{TextPanel, Tint};
use super::dashboard::DashboardFrame;
use super::theme::Theme;

pub fn render(frame: &mut Frame, dash: &DashboardFrame, theme: &Theme) {
    paint_header(frame, dash, theme);
    paint_panel(frame, &dash.gauges, dash.layout.gauges, theme, Alignment::Left);
    paint_panel(frame, &dash.cores, dash.layout.cores, theme, Alignment::Left);
    paint_panel(frame, &dash.memory, dash.layout.memory, theme, Alignment::Left);
    paint_panel(frame, &dash.network, dash.layout.network, theme, Alignment::Left);
    paint_panel(
        frame,
        &dash.processes,
        dash.layout.processes,
        theme,
        Alignment::Left,
    );
    paint_panel(frame, &dash.footer, dash.layout.footer, theme, Alignment::Center);
}

/// Header gets special treatment: a load-colored pulse dot in front of
/// the centered title line.
fn paint_header(frame: &mut Frame, dash: &DashboardFrame, theme: &Theme) {
    let area = dash.layout.header;
    if area.width == 0 || area.height == 0 {
        return;
    }

    let title = dash.header.lines.first().cloned().unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(
            "● ",
            Style::default().fg(theme.usage_color(dash.cpu_percent)),
        ),
        Span::styled(title, theme.title_style()),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(Tint::Frame)),
        );
    frame.render_widget(widget, area);
}

fn paint_panel(
    frame: &mut Frame,
    panel: &TextPanel,
    area: Rect,
    theme: &Theme,
    alignment: Alignment,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(panel.tint));
    if let Some(title) = &panel.title {
        block = block.title(Span::styled(format!(" {} ", title), theme.title_style()));
    }

    let text: Vec<Line> = panel.lines.iter().map(|l| Line::from(l.as_str())).collect();
    let widget = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(alignment)
        .block(block);
    frame.render_widget(widget, area);
}
