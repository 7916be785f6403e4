//! Color themes.
//!
//! A theme maps the semantic panel tints and usage levels onto
//! concrete terminal colors. Built-ins can be cycled at runtime with
//! the `t` key.

use ratatui::style::{Color, Modifier, Style};

use super::charts::Tint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub text: Color,
    pub text_dim: Color,
    /// Header/footer chrome borders.
    pub frame: Color,
    /// "No data" placeholder borders.
    pub no_data: Color,
    /// Vertical bar chart borders.
    pub chart: Color,
    /// Horizontal bar chart borders.
    pub bars: Color,
    /// Process table borders.
    pub table: Color,
    /// Gauge stack borders.
    pub gauges: Color,
    pub ok: Color,
    pub warn: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

impl Theme {
    pub fn default_dark() -> Self {
        Self {
            name: "default",
            text: Color::Gray,
            text_dim: Color::DarkGray,
            frame: Color::LightBlue,
            no_data: Color::Red,
            chart: Color::Blue,
            bars: Color::Green,
            table: Color::Magenta,
            gauges: Color::Cyan,
            ok: Color::Green,
            warn: Color::Yellow,
            danger: Color::Red,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox",
            text: Color::Rgb(235, 219, 178),
            text_dim: Color::Rgb(146, 131, 116),
            frame: Color::Rgb(131, 165, 152),
            no_data: Color::Rgb(251, 73, 52),
            chart: Color::Rgb(69, 133, 136),
            bars: Color::Rgb(152, 151, 26),
            table: Color::Rgb(177, 98, 134),
            gauges: Color::Rgb(104, 157, 106),
            ok: Color::Rgb(184, 187, 38),
            warn: Color::Rgb(250, 189, 47),
            danger: Color::Rgb(251, 73, 52),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord",
            text: Color::Rgb(216, 222, 233),
            text_dim: Color::Rgb(76, 86, 106),
            frame: Color::Rgb(136, 192, 208),
            no_data: Color::Rgb(191, 97, 106),
            chart: Color::Rgb(94, 129, 172),
            bars: Color::Rgb(163, 190, 140),
            table: Color::Rgb(180, 142, 173),
            gauges: Color::Rgb(143, 188, 187),
            ok: Color::Rgb(163, 190, 140),
            warn: Color::Rgb(235, 203, 139),
            danger: Color::Rgb(191, 97, 106),
        }
    }

    fn builtins() -> [Theme; 3] {
        [Self::default_dark(), Self::gruvbox(), Self::nord()]
    }

    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::builtins().into_iter().find(|t| t.name == name)
    }

    /// The next built-in after this one, wrapping around.
    pub fn next_builtin(&self) -> Self {
        let builtins = Self::builtins();
        let idx = builtins
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        builtins[(idx + 1) % builtins.len()].clone()
    }

    pub fn tint_color(&self, tint: Tint) -> Color {
        match tint {
            Tint::NoData => self.no_data,
            Tint::Chart => self.chart,
            Tint::Bars => self.bars,
            Tint::Table => self.table,
            Tint::Gauges => self.gauges,
            Tint::Frame => self.frame,
        }
    }

    pub fn border_style(&self, tint: Tint) -> Style {
        Style::default().fg(self.tint_color(tint))
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Color ramp for load levels: green below 60, yellow below 85,
    /// red above.
    pub fn usage_color(&self, percent: f64) -> Color {
        if percent < 60.0 {
            self.ok
        } else if percent < 85.0 {
            self.warn
        } else {
            self.danger
        }
    }
}
