//! Application shell and event loop.
//!
//! Owns the terminal, the telemetry collector, and the dashboard
//! controller. The loop polls for input, ticks the dashboard at the
//! configured refresh interval, and paints the latest composed frame.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::constants::EVENT_POLL_MS;
use crate::monitor::SystemCollector;
use crate::ui::{self, Dashboard, Theme};

pub struct App {
    dashboard: Dashboard,
    collector: SystemCollector,
    theme: Theme,
    refresh_interval: Duration,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let collector = SystemCollector::new(config.history_size);
        let theme = Theme::by_name(&config.theme).unwrap_or_default();

        Self {
            dashboard: Dashboard::new(),
            collector,
            theme,
            refresh_interval: Duration::from_millis(config.refresh_interval_ms),
        }
    }

    /// Run the main event loop. Returns when the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let size = terminal.size()?;
        let mut frame = self.dashboard.render(&mut self.collector, size.width, size.height);
        let mut last_refresh = Instant::now();

        loop {
            terminal.draw(|f| ui::paint::render(f, &frame, &self.theme))?;

            let mut recompose = false;
            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                match event::read()? {
                    Event::Key(key) => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('p') => self.dashboard.toggle_pause(),
                        // Sort changes take effect on the next tick
                        KeyCode::Char('c') => self.dashboard.set_process_sort("cpu"),
                        KeyCode::Char('m') => self.dashboard.set_process_sort("memory"),
                        KeyCode::Char('t') => self.theme = self.theme.next_builtin(),
                        _ => {}
                    },
                    Event::Resize(_, _) => recompose = true,
                    _ => {}
                }
            }

            if recompose || last_refresh.elapsed() >= self.refresh_interval {
                let size = terminal.size()?;
                frame = self.dashboard.render(&mut self.collector, size.width, size.height);
                last_refresh = Instant::now();
            }
        }

        // Cleanup
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        println!("\nstatsman stopped.\n");
        Ok(())
    }
}
