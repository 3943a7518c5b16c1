// Geometry Reader
// Invisible widgets that make a rendered area's size observable to an owner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
};
use std::hash::Hash;
use crate::core::{Size, SizePreferences};

/// Transparent filler that reports its area's size into a preference channel
/// Paints nothing; the buffer is left untouched
#[derive(Debug, Clone, Copy)]
pub struct GeometryReader<K> {
    key: K,
}

impl<K> GeometryReader<K> {
    pub const fn new(key: K) -> Self {
        Self { key }
    }
}

impl<K> StatefulWidget for GeometryReader<K>
where
    K: Copy + Eq + Hash + Ord,
{
    type State = SizePreferences<K>;

    fn render(self, area: Rect, _buf: &mut Buffer, state: &mut Self::State) {
        state.report(self.key, Size::from(area));
    }
}

/// Wraps a widget and writes its rendered size into a bound `Size`
pub struct SizeAware<W> {
    inner: W,
}

impl<W: Widget> SizeAware<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Widget> StatefulWidget for SizeAware<W> {
    type State = Size;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Size) {
        self.inner.render(area, buf);

        // Seed with the bound value so any difference, including back to zero, is delivered
        let mut channel: SizePreferences<()> = SizePreferences::new();
        channel.report((), *state);
        channel.on_preference_change((), |_| {});
        GeometryReader::new(()).render(area, buf, &mut channel);
        channel.on_preference_change((), |size| *state = size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_reader_reports_area_and_paints_nothing() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        let before = buf.clone();
        let mut channel: SizePreferences<u8> = SizePreferences::new();

        GeometryReader::new(4u8).render(area, &mut buf, &mut channel);

        assert_eq!(channel.value(4), Size::new(12.0, 3.0));
        assert_eq!(buf, before);
    }

    #[test]
    fn test_reader_rerender_same_size_is_quiet() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        let mut channel: SizePreferences<u8> = SizePreferences::new();

        GeometryReader::new(0u8).render(area, &mut buf, &mut channel);
        assert!(channel.on_preference_change(0, |_| {}));

        GeometryReader::new(0u8).render(area, &mut buf, &mut channel);
        assert!(!channel.has_pending());
    }

    #[test]
    fn test_size_aware_binds_size() {
        let area = Rect::new(2, 1, 20, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 4));
        let mut size = Size::ZERO;

        SizeAware::new(Paragraph::new("hello")).render(area, &mut buf, &mut size);

        assert_eq!(size, Size::new(20.0, 2.0));
        assert_eq!(buf[(2, 1)].symbol(), "h");
    }

    #[test]
    fn test_size_aware_collapses_to_zero() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 4));
        let mut size = Size::ZERO;

        SizeAware::new(Paragraph::new("hello")).render(Rect::new(0, 0, 20, 2), &mut buf, &mut size);
        assert_eq!(size, Size::new(20.0, 2.0));

        SizeAware::new(Paragraph::new("hello")).render(Rect::new(0, 0, 0, 0), &mut buf, &mut size);
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn test_size_aware_same_size_keeps_binding() {
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        let mut size = Size::new(8.0, 1.0);

        SizeAware::new(Paragraph::new("x")).render(area, &mut buf, &mut size);
        assert_eq!(size, Size::new(8.0, 1.0));
    }
}
