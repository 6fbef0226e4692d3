use adminkit_theme::{SidenavVariant, ThemePalette};
use serde::{Deserialize, Serialize};

/// Appearance settings for the dashboard shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    pub palette: ThemePalette,
    pub variant: SidenavVariant,
}

impl ShellSettings {
    pub fn with_palette(mut self, palette: ThemePalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_variant(mut self, variant: SidenavVariant) -> Self {
        self.variant = variant;
        self
    }
}
