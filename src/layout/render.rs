//! Render: recursive layout and composition of a node tree.
//!
//! Every successful render of a node yields exactly `height` lines, each
//! exactly `width` columns wide. Leaves enforce this on their content;
//! internal nodes rely on it when gluing their children together.

use super::distribute::allocate;
use super::extent::{Extent, Orientation};
use super::node::{Internal, Leaf, Node};
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::measure::{display_width, strip_ansi};

impl Node {
    /// Render with the default configuration.
    pub fn render(&mut self, extent: Extent) -> Result<Vec<String>, LayoutError> {
        render(self, extent, &LayoutConfig::default())
    }

    /// Render with an explicit configuration.
    pub fn render_with(
        &mut self,
        extent: Extent,
        config: &LayoutConfig,
    ) -> Result<Vec<String>, LayoutError> {
        render(self, extent, config)
    }
}

/// Lay out `node` at `extent` and compose the result.
///
/// The node's own `hidden` flag is not consulted; it only matters to the
/// node's parent. Fails with [`LayoutError::InvalidConfig`] before touching
/// the tree if `config` cannot produce exact rectangles.
pub fn render(
    node: &mut Node,
    extent: Extent,
    config: &LayoutConfig,
) -> Result<Vec<String>, LayoutError> {
    config.validate()?;
    render_node(node, extent, config)
}

fn render_node(
    node: &mut Node,
    extent: Extent,
    config: &LayoutConfig,
) -> Result<Vec<String>, LayoutError> {
    match node {
        Node::Leaf(leaf) => render_leaf(leaf, extent, config),
        Node::Internal(internal) => render_internal(internal, extent, config),
    }
}

fn render_leaf(
    leaf: &mut Leaf,
    extent: Extent,
    config: &LayoutConfig,
) -> Result<Vec<String>, LayoutError> {
    let content = leaf.content_mut();
    content.resize(extent.width, extent.height);

    let mut lines = Vec::with_capacity(usize::from(extent.height));
    for line in content.lines() {
        lines.extend(
            line.split('\n')
                .map(|part| part.strip_suffix('\r').unwrap_or(part).to_string()),
        );
    }
    log::trace!("leaf '{}' at {extent:?}: {} lines", leaf.name(), lines.len());

    if lines.len() > usize::from(extent.height) {
        return Err(LayoutError::ContentTooTall {
            name: leaf.name().to_string(),
            lines: lines.len(),
            height: extent.height,
        });
    }
    lines.resize(usize::from(extent.height), String::new());

    let max = usize::from(extent.width);
    for (index, line) in lines.iter_mut().enumerate() {
        if let Some(character) = strip_ansi(line).chars().find(|c| c.is_control()) {
            return Err(LayoutError::ControlCharacter {
                name: leaf.name().to_string(),
                line: index,
                character,
            });
        }
        let width = display_width(line);
        if width > max {
            return Err(LayoutError::ContentTooWide {
                name: leaf.name().to_string(),
                line: index,
                width,
                max: extent.width,
            });
        }
        line.extend(std::iter::repeat(config.fill).take(max - width));
    }
    Ok(lines)
}

fn render_internal(
    node: &mut Internal,
    extent: Extent,
    config: &LayoutConfig,
) -> Result<Vec<String>, LayoutError> {
    let orientation = node.orientation();
    let sizes = allocate(node, extent.along(orientation))?;

    let visible = node
        .children_mut()
        .iter_mut()
        .enumerate()
        .filter(|(_, child)| !child.is_hidden());

    let mut blocks = Vec::with_capacity(sizes.len());
    for ((index, child), size) in visible.zip(sizes) {
        if size == 0 {
            continue;
        }
        let lines = render_node(child, extent.with_along(orientation, size), config)
            .map_err(|err| err.in_child(index, orientation))?;
        blocks.push(lines);
    }

    let border = node.has_border();
    Ok(match orientation {
        Orientation::Vertical => {
            stack(blocks, extent.width, border.then_some(config.vertical_separator))
        }
        Orientation::Horizontal => {
            join_rows(&blocks, extent.height, border.then_some(config.horizontal_separator))
        }
    })
}

/// Concatenate blocks top-to-bottom, with a separator row between them.
fn stack(blocks: Vec<Vec<String>>, width: u16, separator: Option<char>) -> Vec<String> {
    let capacity = blocks.iter().map(Vec::len).sum::<usize>() + blocks.len();
    let mut out = Vec::with_capacity(capacity);
    for (i, block) in blocks.into_iter().enumerate() {
        if let Some(sep) = separator.filter(|_| i > 0) {
            out.push(std::iter::repeat(sep).take(usize::from(width)).collect());
        }
        out.extend(block);
    }
    out
}

/// Concatenate blocks left-to-right row by row, with a separator column between them.
fn join_rows(blocks: &[Vec<String>], height: u16, separator: Option<char>) -> Vec<String> {
    (0..usize::from(height))
        .map(|row| {
            let mut line = String::new();
            for (i, block) in blocks.iter().enumerate() {
                if let Some(sep) = separator.filter(|_| i > 0) {
                    line.push(sep);
                }
                line.push_str(&block[row]);
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Content, Text};

    fn leaf(name: &str, text: &str) -> Node {
        Node::leaf(name, Text::new(text)).unwrap()
    }

    fn assert_rectangle(lines: &[String], extent: Extent) {
        assert_eq!(lines.len(), usize::from(extent.height));
        for line in lines {
            assert_eq!(display_width(line), usize::from(extent.width), "{line:?}");
        }
    }

    /// Produces no lines at all.
    struct Blank;

    impl Content for Blank {
        fn resize(&mut self, _width: u16, _height: u16) {}

        fn lines(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_leaf_pads_to_rectangle() {
        let mut node = leaf("A", "abc\ndef");
        let lines = node.render(Extent::new(5, 2)).unwrap();
        assert_eq!(lines, vec!["abc  ", "def  "]);
    }

    #[test]
    fn test_leaf_pads_missing_rows() {
        let mut node = leaf("A", "x");
        let lines = node.render(Extent::new(3, 3)).unwrap();
        assert_eq!(lines, vec!["x  ", "   ", "   "]);
    }

    #[test]
    fn test_leaf_forwards_extent() {
        let mut node = leaf("A", "");
        node.render(Extent::new(7, 4)).unwrap();
        let text = node.content().unwrap().downcast_ref::<Text>().unwrap();
        assert_eq!(text.extent(), Extent::new(7, 4));
    }

    #[test]
    fn test_leaf_too_many_lines() {
        let mut node = leaf("A", "1\n2\n3");
        assert_eq!(
            node.render(Extent::new(5, 2)),
            Err(LayoutError::ContentTooTall {
                name: "A".to_string(),
                lines: 3,
                height: 2,
            })
        );
    }

    #[test]
    fn test_leaf_line_too_wide() {
        let mut node = leaf("A", "ok\ntoo wide");
        assert_eq!(
            node.render(Extent::new(5, 2)),
            Err(LayoutError::ContentTooWide {
                name: "A".to_string(),
                line: 1,
                width: 8,
                max: 5,
            })
        );
    }

    #[test]
    fn test_leaf_wide_chars_measured_by_columns() {
        let mut node = leaf("A", "日本");
        let lines = node.render(Extent::new(5, 1)).unwrap();
        assert_eq!(lines, vec!["日本 "]);
        assert!(leaf("B", "日本").render(Extent::new(3, 1)).is_err());
    }

    #[test]
    fn test_leaf_styled_lines_padded_by_printable_width() {
        let mut node = leaf("A", "\x1b[1mhi\x1b[0m");
        let lines = node.render(Extent::new(4, 1)).unwrap();
        assert_eq!(lines, vec!["\x1b[1mhi\x1b[0m  "]);
    }

    #[test]
    fn test_leaf_embedded_newlines_split() {
        let mut node = Node::leaf("A", Multi).unwrap();
        let lines = node.render(Extent::new(2, 3)).unwrap();
        assert_eq!(lines, vec!["a ", "b ", "c "]);
    }

    struct Multi;

    impl Content for Multi {
        fn resize(&mut self, _width: u16, _height: u16) {}

        fn lines(&self) -> Vec<String> {
            vec!["a\nb".to_string(), "c".to_string()]
        }
    }

    #[test]
    fn test_empty_content_fills_extent() {
        let mut node = Node::leaf("blank", Blank).unwrap();
        let config = LayoutConfig::default().with_fill('.');
        let lines = node.render_with(Extent::new(2, 2), &config).unwrap();
        assert_eq!(lines, vec!["..", ".."]);
    }

    #[test]
    fn test_horizontal_border() {
        let mut node: Node = Internal::horizontal([leaf("a", "child0"), leaf("b", "child1")])
            .with_border(true)
            .into();
        // 11 - 1 separator = 10, five columns each; "child0" no longer fits.
        assert!(node.render(Extent::new(11, 1)).unwrap_err().is_content_overflow());

        let mut node: Node = Internal::horizontal([leaf("a", "left"), leaf("b", "right")])
            .with_border(true)
            .into();
        let lines = node.render(Extent::new(11, 1)).unwrap();
        assert_eq!(lines, vec!["left |right"]);
        assert_eq!(lines[0].find('|'), Some(5));
    }

    #[test]
    fn test_horizontal_border_scenario() {
        let mut node: Node = Internal::horizontal([leaf("a", "c0"), leaf("b", "c1")])
            .with_border(true)
            .into();
        let lines = node.render(Extent::new(11, 2)).unwrap();
        assert_eq!(lines, vec!["c0   |c1   ", "     |     "]);
    }

    #[test]
    fn test_vertical_even_heights() {
        let mut node = Node::vertical([leaf("a", "a"), leaf("b", "b"), leaf("c", "c")]);
        let lines = node.render(Extent::new(1, 10)).unwrap();
        assert_eq!(lines, vec!["a", " ", " ", " ", "b", " ", " ", "c", " ", " "]);
    }

    #[test]
    fn test_vertical_border_rows() {
        let mut node: Node = Internal::vertical([leaf("a", "top"), leaf("b", "bot")])
            .with_border(true)
            .into();
        let lines = node.render(Extent::new(4, 3)).unwrap();
        assert_eq!(lines, vec!["top ", "----", "bot "]);
    }

    #[test]
    fn test_custom_separators() {
        let config = LayoutConfig::box_drawing();
        let mut node: Node = Internal::vertical([
            leaf("a", "a"),
            Internal::horizontal([leaf("b", "b"), leaf("c", "c")])
                .with_border(true)
                .into(),
        ])
        .with_border(true)
        .into();
        let lines = node.render_with(Extent::new(3, 3), &config).unwrap();
        assert_eq!(lines, vec!["a  ", "───", "b│c"]);
    }

    #[test]
    fn test_hidden_child_excluded() {
        let mut node = Node::horizontal([leaf("a", "a"), leaf("b", "b").hidden(true)]);
        let lines = node.render(Extent::new(4, 1)).unwrap();
        assert_eq!(lines, vec!["a   "]);
    }

    #[test]
    fn test_hidden_child_not_resized() {
        let mut node = Node::horizontal([leaf("a", ""), leaf("b", "").hidden(true)]);
        node.render(Extent::new(4, 1)).unwrap();
        let hidden = node.children()[1].content().unwrap().downcast_ref::<Text>().unwrap();
        assert_eq!(hidden.extent(), Extent::ZERO);
    }

    #[test]
    fn test_zero_extent_child_skipped() {
        let mut node: Node = Internal::vertical([leaf("a", "a"), leaf("b", "b"), leaf("c", "c")])
            .with_size_fn(|_, extent| vec![1, 0, extent - 1])
            .into();
        let lines = node.render(Extent::new(1, 2)).unwrap();
        assert_eq!(lines, vec!["a", "c"]);
        let skipped = node.children()[1].content().unwrap().downcast_ref::<Text>().unwrap();
        assert_eq!(skipped.extent(), Extent::ZERO);
    }

    #[test]
    fn test_zero_extent_child_keeps_rectangle_with_border() {
        let mut node: Node = Internal::horizontal([leaf("a", "a"), leaf("b", "b"), leaf("c", "c")])
            .with_border(true)
            .with_size_fn(|_, extent| vec![0, 1, extent - 1])
            .into();
        let extent = Extent::new(6, 1);
        let lines = node.render(extent).unwrap();
        assert_rectangle(&lines, extent);
        assert_eq!(lines, vec!["b|c   "]);
    }

    #[test]
    fn test_zero_height_child_keeps_rectangle_with_border() {
        let mut node: Node = Internal::vertical([leaf("a", "a"), leaf("b", "b"), leaf("c", "c")])
            .with_border(true)
            .with_size_fn(|_, extent| vec![0, 1, extent - 1])
            .into();
        // 5 rows - 2 reserved = 3 -> [0, 1, 2]; the unused separator row goes to "c".
        let extent = Extent::new(2, 5);
        let lines = node.render(extent).unwrap();
        assert_rectangle(&lines, extent);
        assert_eq!(lines, vec!["b ", "--", "c ", "  ", "  "]);
    }

    #[test]
    fn test_invalid_config_rejected_before_render() {
        let mut node: Node = Internal::horizontal([leaf("a", "a"), leaf("b", "b")])
            .with_border(true)
            .into();
        let wide = LayoutConfig::default().with_fill('日');
        assert!(matches!(
            node.render_with(Extent::new(5, 1), &wide),
            Err(LayoutError::InvalidConfig(_))
        ));
        let wide = LayoutConfig::default().with_separators('日', '-');
        assert!(matches!(
            render(&mut node, Extent::new(5, 1), &wide),
            Err(LayoutError::InvalidConfig(_))
        ));
        let text = node.children()[0].content().unwrap().downcast_ref::<Text>().unwrap();
        assert_eq!(text.extent(), Extent::ZERO);
    }

    /// Hands back its text as a single, unsplit line.
    struct Raw(&'static str);

    impl Content for Raw {
        fn resize(&mut self, _width: u16, _height: u16) {}

        fn lines(&self) -> Vec<String> {
            vec![self.0.to_string()]
        }
    }

    #[test]
    fn test_crlf_line_endings_split() {
        let mut node = Node::leaf("A", Raw("one\r\ntwo\r")).unwrap();
        let lines = node.render(Extent::new(3, 2)).unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_control_characters_rejected() {
        let mut node = leaf("A", "ok\na\tb");
        assert_eq!(
            node.render(Extent::new(3, 2)),
            Err(LayoutError::ControlCharacter {
                name: "A".to_string(),
                line: 1,
                character: '\t',
            })
        );
        assert!(leaf("B", "a\rb").render(Extent::new(3, 1)).is_err());
    }

    #[test]
    fn test_no_visible_children_is_error() {
        let mut node = Node::vertical([leaf("a", "a").hidden(true)]);
        assert!(matches!(
            node.render(Extent::new(3, 3)),
            Err(LayoutError::NoVisibleChildren { .. })
        ));
    }

    #[test]
    fn test_errors_carry_path() {
        let mut node = Node::vertical([
            leaf("top", ""),
            Node::horizontal([leaf("left", ""), leaf("right", "far too wide")]),
        ]);
        let err = node.render(Extent::new(10, 4)).unwrap_err();
        assert_eq!(
            err.path(),
            vec![(1, Orientation::Vertical), (1, Orientation::Horizontal)]
        );
        assert!(matches!(
            err.root_cause(),
            LayoutError::ContentTooWide { name, .. } if name == "right"
        ));
    }

    #[test]
    fn test_insufficient_space_nested() {
        let mut node = Node::horizontal([
            leaf("a", ""),
            Internal::horizontal([leaf("b", ""), leaf("c", "")])
                .with_border(true)
                .into(),
        ]);
        // The inner node gets one column, all of which the separator needs.
        let err = node.render(Extent::new(2, 1)).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.path(), vec![(1, Orientation::Horizontal)]);
        assert!(node.render(Extent::new(4, 1)).is_ok());
    }

    #[test]
    fn test_nested_tree_is_rectangle() {
        let mut node: Node = Internal::vertical([
            leaf("header", "header"),
            Internal::horizontal([leaf("l", "l"), leaf("m", "日本"), leaf("r", "r")])
                .with_border(true)
                .into(),
            leaf("footer", ""),
        ])
        .with_size_fn(|_, extent| vec![1, extent - 2, 1])
        .with_border(true)
        .into();
        for (w, h) in [(20, 8), (14, 5), (17, 22)] {
            let extent = Extent::new(w, h);
            let lines = node.render(extent).unwrap();
            assert_rectangle(&lines, extent);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut node: Node = Internal::horizontal([
            leaf("a", "one\ntwo"),
            Node::vertical([leaf("b", "three"), leaf("c", "four")]),
        ])
        .with_border(true)
        .into();
        let extent = Extent::new(13, 6);
        let first = node.render(extent).unwrap();
        let second = node.render(extent).unwrap();
        assert_eq!(first, second);
    }
}
