//! Responsive dashboard layout.
//!
//! Named region rectangles computed from the current terminal size via
//! ratatui's constraint solver. The whole tree is rebuilt on every
//! tick, so a resize never leaves stale geometry behind.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The region map for one frame: three vertical bands (header, body,
/// footer), with the body split 2:1:2 into top/middle/processes and
/// the top and middle rows halved horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub gauges: Rect,
    pub cores: Rect,
    pub memory: Rect,
    pub network: Rect,
    pub processes: Rect,
    pub footer: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect) -> Self {
        let bands = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(2), // Gauges + cores
                Constraint::Fill(1), // Memory + network
                Constraint::Fill(2), // Process table
            ])
            .split(bands[1]);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Fill(1)])
            .split(body[0]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Fill(1)])
            .split(body[1]);

        Self {
            header: bands[0],
            gauges: top[0],
            cores: top[1],
            memory: middle[0],
            network: middle[1],
            processes: body[2],
            footer: bands[2],
        }
    }
}
