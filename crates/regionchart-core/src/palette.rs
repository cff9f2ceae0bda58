// File: crates/regionchart-core/src/palette.rs
// Summary: Fallback line colors; the host palette is reached through `ColorPalette`.

use std::collections::HashMap;

/// Source of colors for lines without a persisted fill.
/// Contract: the same key yields the same color for the palette's lifetime.
pub trait ColorPalette {
    fn color_for(&mut self, key: &str) -> String;
}

/// Colors handed out in order, one per distinct key.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#01B8AA", "#374649", "#FD625E", "#F2C80F", "#5F6B6D",
    "#8AD4EB", "#FE9666", "#A66999", "#3599B8", "#DFBFBF",
];

/// In-process stand-in for the host palette.
#[derive(Clone, Debug)]
pub struct SequentialPalette {
    colors: Vec<String>,
    assigned: HashMap<String, String>,
}

impl SequentialPalette {
    pub fn new(colors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        let colors = if colors.is_empty() { DEFAULT_COLORS.iter().map(|c| c.to_string()).collect() } else { colors };
        Self { colors, assigned: HashMap::new() }
    }

    pub fn assigned(&self) -> usize { self.assigned.len() }
}

impl Default for SequentialPalette {
    fn default() -> Self { Self::new(DEFAULT_COLORS) }
}

impl ColorPalette for SequentialPalette {
    fn color_for(&mut self, key: &str) -> String {
        if let Some(c) = self.assigned.get(key) { return c.clone(); }
        // wraps around once every color is taken
        let c = self.colors[self.assigned.len() % self.colors.len()].clone();
        self.assigned.insert(key.to_string(), c.clone());
        c
    }
}
