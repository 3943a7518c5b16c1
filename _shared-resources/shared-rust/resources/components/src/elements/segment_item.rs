// Segment Item
// One renderable slot in a segment control row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Widget,
};

/// A slot in the segment row: either nothing or a styled label
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentItemView<'a> {
    Empty,
    Label(Line<'a>),
}

impl<'a> SegmentItemView<'a> {
    /// Build the view for `index`; indices past the end render as `Empty`
    pub fn for_index(items: &'a [String], index: usize, selected: bool, normal: Style, highlight: Style) -> Self {
        match items.get(index) {
            Some(name) => {
                let style = if selected { highlight } else { normal };
                SegmentItemView::Label(Line::styled(name.as_str(), style))
            }
            None => SegmentItemView::Empty,
        }
    }

    /// Intrinsic width in cells
    pub fn width(&self) -> u16 {
        match self {
            SegmentItemView::Empty => 0,
            SegmentItemView::Label(line) => line.width().min(u16::MAX as usize) as u16,
        }
    }
}

impl Widget for SegmentItemView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            SegmentItemView::Empty => {}
            SegmentItemView::Label(line) => line.render(area, buf),
        }
    }
}
