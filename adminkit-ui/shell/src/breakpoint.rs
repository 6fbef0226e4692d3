/// Viewport width at which the sidenav switches between overlay and docked.
pub const SIDENAV_BREAKPOINT: f32 = 992.0;

/// Viewport width at which charts and tables switch to compact sizing.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Layout bucket the current viewport width falls into.
///
/// Narrow viewports treat the sidenav as a modal overlay, wide viewports
/// dock it beside the content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    /// Resolve the sidenav bucket for a viewport width.
    ///
    /// The boundary is half-open: widths below [`SIDENAV_BREAKPOINT`] are
    /// `Narrow`, the threshold itself is `Wide`.
    pub fn from_width(width: f32) -> Self {
        if width < SIDENAV_BREAKPOINT {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Sizing bucket for chart containers and table typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Compact,
    Regular,
}

impl SizeClass {
    /// Resolve the sizing bucket for a viewport width.
    ///
    /// Half-open like [`Breakpoint::from_width`]: widths below
    /// [`COMPACT_BREAKPOINT`] are `Compact`, the threshold itself is
    /// `Regular`.
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT {
            Self::Compact
        } else {
            Self::Regular
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidenav_boundary_is_half_open() {
        assert_eq!(Breakpoint::from_width(991.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(992.0), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(1920.0), Breakpoint::Wide);
    }

    #[test]
    fn sizing_boundary_is_half_open() {
        assert_eq!(SizeClass::from_width(767.0), SizeClass::Compact);
        assert_eq!(SizeClass::from_width(768.0), SizeClass::Regular);
    }

    #[test]
    fn buckets_are_independent_between_thresholds() {
        // 768..992 is regular sizing but still a narrow sidenav.
        assert_eq!(SizeClass::from_width(800.0), SizeClass::Regular);
        assert_eq!(Breakpoint::from_width(800.0), Breakpoint::Narrow);
    }
}
