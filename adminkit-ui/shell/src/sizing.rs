use crate::breakpoint::SizeClass;

/// Font size of data-table chrome (length selector, filter, pagination).
pub const DATA_TABLE_CHROME_FONT: f32 = 13.6;

/// Cell padding applied to responsive tables in compact sizing.
pub const COMPACT_CELL_PADDING: f32 = 8.0;

/// Table body font size in regular sizing. Matches the data-table chrome
/// font by coincidence of the source values; the tokens are independent.
pub const TABLE_FONT_REGULAR: f32 = 13.6;

/// Table body font size in compact sizing.
pub const TABLE_FONT_COMPACT: f32 = 12.8;

/// Chart containers sized by the responsive rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Area,
    Bar,
    Pie,
}

/// Fixed chart container height for a sizing bucket.
///
/// All chart kinds currently share the same pair of heights; the kind is
/// part of the signature because each container is sized by its own rule.
pub fn chart_height(_kind: ChartKind, class: SizeClass) -> f32 {
    match class {
        SizeClass::Regular => 320.0,
        SizeClass::Compact => 240.0,
    }
}

/// Table body font size for a sizing bucket.
pub fn table_font_size(class: SizeClass) -> f32 {
    match class {
        SizeClass::Regular => TABLE_FONT_REGULAR,
        SizeClass::Compact => TABLE_FONT_COMPACT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::SizeClass;

    #[test]
    fn chart_heights_switch_between_two_fixed_values() {
        for kind in [ChartKind::Area, ChartKind::Bar, ChartKind::Pie] {
            assert_eq!(chart_height(kind, SizeClass::Regular), 320.0);
            assert_eq!(chart_height(kind, SizeClass::Compact), 240.0);
        }
    }

    #[test]
    fn table_font_shrinks_in_compact_sizing() {
        assert_eq!(table_font_size(SizeClass::Regular), 13.6);
        assert_eq!(table_font_size(SizeClass::Compact), 12.8);
    }
}
