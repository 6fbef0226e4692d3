use std::time::Duration;

use crate::breakpoint::Breakpoint;

/// Width of the side navigation pane.
pub const SIDENAV_WIDTH: f32 = 225.0;

/// Height of the top navigation bar.
pub const TOPNAV_HEIGHT: f32 = 56.0;

/// Duration of the sidenav slide transition.
pub const SIDENAV_SLIDE: Duration = Duration::from_millis(150);

/// Duration of the scrim fade transition.
pub const SCRIM_FADE: Duration = Duration::from_millis(300);

/// Stacking order of the shell chrome. Higher layers draw on top; the
/// topnav stays above the sidenav, which stays above the scrim.
pub const TOPNAV_LAYER: u16 = 1039;
pub const SIDENAV_LAYER: u16 = 1038;
pub const SCRIM_LAYER: u16 = 1037;

/// Overlay drawn behind the sidenav while it covers narrow content.
///
/// Pressing it is the expected close affordance; the shell itself only
/// reports the press and never mutates the toggle flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrim {
    pub opacity: f32,
    pub fade: Duration,
}

impl Default for Scrim {
    fn default() -> Self {
        Self {
            opacity: 0.5,
            fade: SCRIM_FADE,
        }
    }
}

/// Resolved shell geometry for one `(toggled, breakpoint)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellGeometry {
    /// Horizontal translation applied to the sidenav pane.
    pub sidenav_offset: f32,
    /// Left margin applied to the content pane.
    pub content_margin: f32,
    /// Overlay scrim, present only while the sidenav covers narrow content.
    pub scrim: Option<Scrim>,
}

impl ShellGeometry {
    /// Whether the sidenav is on screen.
    pub fn sidenav_visible(&self) -> bool {
        self.sidenav_offset == 0.0
    }

    /// Whether the sidenav floats over the content instead of docking
    /// beside it.
    pub fn sidenav_overlays(&self) -> bool {
        self.scrim.is_some()
    }
}

/// Resolve the sidenav and content geometry for a toggle flag and breakpoint.
///
/// The flag means "deviate from the breakpoint default", not "sidenav is
/// open": narrow viewports hide the sidenav unless toggled, wide viewports
/// show it unless toggled. Total over all four input combinations and free
/// of state, so re-applying the same inputs always yields an equal value.
pub fn resolve_geometry(toggled: bool, breakpoint: Breakpoint) -> ShellGeometry {
    match (breakpoint, toggled) {
        (Breakpoint::Narrow, false) => ShellGeometry {
            sidenav_offset: -SIDENAV_WIDTH,
            content_margin: 0.0,
            scrim: None,
        },
        (Breakpoint::Narrow, true) => ShellGeometry {
            sidenav_offset: 0.0,
            content_margin: 0.0,
            scrim: Some(Scrim::default()),
        },
        (Breakpoint::Wide, false) => ShellGeometry {
            sidenav_offset: 0.0,
            content_margin: 0.0,
            scrim: None,
        },
        (Breakpoint::Wide, true) => ShellGeometry {
            sidenav_offset: -SIDENAV_WIDTH,
            content_margin: -SIDENAV_WIDTH,
            scrim: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_untoggled_hides_the_sidenav() {
        let geometry = resolve_geometry(false, Breakpoint::Narrow);
        assert_eq!(geometry.sidenav_offset, -SIDENAV_WIDTH);
        assert_eq!(geometry.content_margin, 0.0);
        assert_eq!(geometry.scrim, None);
        assert!(!geometry.sidenav_visible());
    }

    #[test]
    fn narrow_toggled_overlays_with_a_scrim() {
        let geometry = resolve_geometry(true, Breakpoint::Narrow);
        assert_eq!(geometry.sidenav_offset, 0.0);
        assert_eq!(geometry.content_margin, 0.0);
        assert_eq!(geometry.scrim, Some(Scrim::default()));
        assert_eq!(geometry.scrim.unwrap().opacity, 0.5);
        assert!(geometry.sidenav_visible());
        assert!(geometry.sidenav_overlays());
    }

    #[test]
    fn wide_untoggled_docks_the_sidenav() {
        let geometry = resolve_geometry(false, Breakpoint::Wide);
        assert_eq!(geometry.sidenav_offset, 0.0);
        assert_eq!(geometry.content_margin, 0.0);
        assert_eq!(geometry.scrim, None);
        assert!(geometry.sidenav_visible());
        assert!(!geometry.sidenav_overlays());
    }

    #[test]
    fn wide_toggled_collapses_sidenav_and_margin() {
        let geometry = resolve_geometry(true, Breakpoint::Wide);
        assert_eq!(geometry.sidenav_offset, -SIDENAV_WIDTH);
        assert_eq!(geometry.content_margin, -SIDENAV_WIDTH);
        assert_eq!(geometry.scrim, None);
    }

    #[test]
    fn resolution_is_idempotent() {
        for toggled in [false, true] {
            for breakpoint in [Breakpoint::Narrow, Breakpoint::Wide] {
                assert_eq!(
                    resolve_geometry(toggled, breakpoint),
                    resolve_geometry(toggled, breakpoint),
                );
            }
        }
    }

    #[test]
    fn chrome_layers_are_ordered() {
        assert!(TOPNAV_LAYER > SIDENAV_LAYER);
        assert!(SIDENAV_LAYER > SCRIM_LAYER);
    }
}
