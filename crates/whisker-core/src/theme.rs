// File: crates/whisker-core/src/theme.rs
// Summary: Light/Dark theming for box-plot and bar preview rendering.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub median: skia::Color,
    pub outlier: skia::Color,
    /// Series colors, cycled when there are more series than entries.
    pub palette: Vec<skia::Color>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            median: skia::Color::from_argb(255, 255, 230, 70),
            outlier: skia::Color::from_argb(255, 220, 80, 80),
            palette: vec![
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 150, 60),
                skia::Color::from_argb(255, 190, 120, 255),
                skia::Color::from_argb(255, 240, 100, 160),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            median: skia::Color::from_argb(255, 20, 20, 30),
            outlier: skia::Color::from_argb(255, 200, 60, 60),
            palette: vec![
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 230, 120, 30),
                skia::Color::from_argb(255, 130, 70, 200),
                skia::Color::from_argb(255, 200, 60, 120),
            ],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            median: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16),     // orange
            outlier: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f),    // red
            palette: vec![
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
                skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                skia::Color::from_argb(255, 0xd3, 0x36, 0x82), // magenta
            ],
        }
    }

    /// Color for series `i`.
    pub fn series_color(&self, i: usize) -> skia::Color {
        if self.palette.is_empty() {
            return self.axis_line;
        }
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::dark)
}
