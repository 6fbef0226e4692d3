use std::f32::consts::FRAC_PI_2;

/// Indentation applied to each nested menu level.
pub const NESTED_INDENT: f32 = 24.0;

/// Entry in the side navigation menu.
///
/// Groups own their `collapsed` flag independently; nothing in this module
/// couples two groups, so any number may be open at once.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    /// Uppercase section heading between link groups.
    Heading(String),
    /// Leaf link.
    Link { title: String, active: bool },
    /// Collapsible group of child entries.
    Group {
        title: String,
        collapsed: bool,
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    /// Title shown for the entry.
    pub fn title(&self) -> &str {
        match self {
            Self::Heading(title) => title,
            Self::Link { title, .. } => title,
            Self::Group { title, .. } => title,
        }
    }
}

/// Flattened visible menu row.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow<'a> {
    /// Zero-based nesting depth (`0` for top-level rows).
    pub depth: usize,
    /// Borrowed source entry.
    pub node: &'a MenuNode,
}

impl MenuRow<'_> {
    /// Left indent of the row.
    pub fn indent(&self) -> f32 {
        self.depth as f32 * NESTED_INDENT
    }
}

/// Rotation of a group's collapse arrow, in radians.
///
/// Open groups point the arrow down (no rotation); collapsed groups rotate
/// it a quarter turn counter-clockwise.
pub fn indicator_rotation(collapsed: bool) -> f32 {
    if collapsed { -FRAC_PI_2 } else { 0.0 }
}

/// Flatten the menu into its visible rows.
///
/// Rows keep authored order. A group row is always emitted; its children are
/// emitted only while the group is not collapsed.
pub fn flatten_menu(nodes: &[MenuNode]) -> Vec<MenuRow<'_>> {
    let mut rows = Vec::new();
    for node in nodes {
        push_node(node, 0, &mut rows);
    }
    rows
}

fn push_node<'a>(
    node: &'a MenuNode,
    depth: usize,
    rows: &mut Vec<MenuRow<'a>>,
) {
    rows.push(MenuRow { depth, node });

    if let MenuNode::Group {
        collapsed: false,
        children,
        ..
    } = node
    {
        for child in children {
            push_node(child, depth + 1, rows);
        }
    }
}
