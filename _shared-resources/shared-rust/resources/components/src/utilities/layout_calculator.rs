// Layout calculator for segment control geometry
// Spacing and indicator placement derived from measured sizes

use crate::core::Size;

/// Derived geometry for one render of a segment control
/// Never stored; recomputed from measurements and selection every frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SegmentLayout {
    /// Gap between items, also used as the leading and trailing padding
    pub spacing: f32,
    /// Width of the selection indicator
    pub indicator_width: f32,
    /// Indicator x offset, relative to the first item's origin
    pub indicator_offset: f32,
}

/// Layout calculator for segment control computations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutCalculator {
    fixed_spacing: Option<f32>,
}

impl LayoutCalculator {
    /// Create a calculator; `Some` spacing left-aligns, `None` centers the row
    pub const fn new(fixed_spacing: Option<f32>) -> Self {
        Self { fixed_spacing }
    }

    pub const fn is_centered(&self) -> bool {
        self.fixed_spacing.is_none()
    }

    /// Compute spacing, indicator width and indicator offset in one go
    pub fn calculate(&self, item_sizes: &[Size], control_width: f32, selection: usize) -> SegmentLayout {
        let spacing = self.spacing(item_sizes, control_width);
        SegmentLayout {
            spacing,
            indicator_width: Self::indicator_width(item_sizes, selection),
            indicator_offset: Self::indicator_offset(item_sizes, selection, spacing),
        }
    }

    /// Spacing between items
    /// Leftover width is split into N+1 equal gaps so the row sits centered.
    /// Zero until the control and every item have been measured.
    /// A measured empty label (zero width, one row tall) counts as measured.
    pub fn spacing(&self, item_sizes: &[Size], control_width: f32) -> f32 {
        if let Some(fixed) = self.fixed_spacing {
            return fixed;
        }

        if item_sizes.is_empty()
            || control_width == 0.0
            || item_sizes.iter().any(Size::is_zero)
        {
            return 0.0;
        }

        let item_width_sum: f32 = item_sizes.iter().map(|size| size.width.round()).sum();
        let gaps = (item_sizes.len() + 1) as f32;
        ((control_width - item_width_sum) / gaps).max(0.0)
    }

    /// Width of the selected item, zero while unmeasured or out of range
    pub fn indicator_width(item_sizes: &[Size], selection: usize) -> f32 {
        item_sizes.get(selection).map(|size| size.width).unwrap_or(0.0)
    }

    /// Offset of the indicator from the first item's origin
    pub fn indicator_offset(item_sizes: &[Size], selection: usize, spacing: f32) -> f32 {
        if selection == 0 || Self::indicator_width(item_sizes, selection) == 0.0 {
            return 0.0;
        }

        let preceding: f32 = item_sizes
            .iter()
            .take(selection)
            .map(|size| size.width)
            .sum();
        preceding + spacing * selection as f32
    }

    /// Origin of item `index` measured from the control's left edge
    /// The leading gap equals the spacing (horizontal padding of the row)
    pub fn item_origin(item_sizes: &[Size], index: usize, spacing: f32) -> f32 {
        let preceding: f32 = item_sizes
            .iter()
            .take(index)
            .map(|size| size.width)
            .sum();
        spacing + preceding + spacing * index as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(values: &[f32]) -> Vec<Size> {
        values.iter().map(|w| Size::new(*w, 1.0)).collect()
    }

    #[test]
    fn test_centered_spacing() {
        let calc = LayoutCalculator::new(None);
        let sizes = widths(&[20.0, 30.0, 50.0, 25.0]);
        assert_eq!(calc.spacing(&sizes, 300.0), 35.0); // (300 - 125) / 5
    }

    #[test]
    fn test_scenario_selection_two() {
        let calc = LayoutCalculator::new(None);
        let sizes = widths(&[20.0, 30.0, 50.0, 25.0]);
        let layout = calc.calculate(&sizes, 300.0, 2);
        assert_eq!(layout.spacing, 35.0);
        assert_eq!(layout.indicator_offset, 120.0); // 20 + 30 + 35 * 2
        assert_eq!(layout.indicator_width, 50.0);
    }

    #[test]
    fn test_fixed_spacing_scenario() {
        let calc = LayoutCalculator::new(Some(20.0));
        let sizes = widths(&[20.0, 30.0, 50.0, 25.0]);
        let layout = calc.calculate(&sizes, 300.0, 2);
        assert_eq!(layout.spacing, 20.0);
        assert_eq!(layout.indicator_offset, 90.0); // 20 + 30 + 20 * 2
        assert!(!calc.is_centered());
    }

    #[test]
    fn test_fixed_spacing_ignores_measurements() {
        let calc = LayoutCalculator::new(Some(4.0));
        assert_eq!(calc.spacing(&widths(&[0.0, 0.0]), 0.0), 4.0);
        assert_eq!(calc.spacing(&widths(&[90.0, 90.0]), 10.0), 4.0);
    }

    #[test]
    fn test_spacing_zero_until_measured() {
        let calc = LayoutCalculator::new(None);
        assert_eq!(calc.spacing(&widths(&[20.0, 30.0]), 0.0), 0.0);
        assert_eq!(calc.spacing(&[Size::new(20.0, 1.0), Size::ZERO], 300.0), 0.0);
    }

    #[test]
    fn test_spacing_counts_measured_empty_label() {
        let calc = LayoutCalculator::new(None);
        // "aa", "", "bb": the empty label reported 0x1
        assert_eq!(calc.spacing(&widths(&[2.0, 0.0, 2.0]), 20.0), 4.0); // (20 - 4) / 4
        let layout = calc.calculate(&widths(&[2.0, 0.0, 2.0]), 20.0, 1);
        assert_eq!(layout.indicator_width, 0.0);
        assert_eq!(layout.indicator_offset, 0.0);
    }

    #[test]
    fn test_spacing_empty_items() {
        let calc = LayoutCalculator::new(None);
        assert_eq!(calc.spacing(&[], 300.0), 0.0);
        let layout = calc.calculate(&[], 300.0, 0);
        assert_eq!(layout, SegmentLayout::default());
    }

    #[test]
    fn test_spacing_never_negative() {
        let calc = LayoutCalculator::new(None);
        assert_eq!(calc.spacing(&widths(&[80.0, 80.0]), 100.0), 0.0);
    }

    #[test]
    fn test_spacing_rounds_item_widths() {
        let calc = LayoutCalculator::new(None);
        // 10.4 + 10.4 rounds to 20, not 20.8 -> 21
        let sizes = widths(&[10.4, 10.4]);
        assert_eq!(calc.spacing(&sizes, 50.0), 10.0);
    }

    #[test]
    fn test_offset_zero_for_first_item() {
        let sizes = widths(&[20.0, 30.0]);
        assert_eq!(LayoutCalculator::indicator_offset(&sizes, 0, 35.0), 0.0);
        assert_eq!(LayoutCalculator::indicator_offset(&widths(&[0.0, 0.0]), 0, 35.0), 0.0);
    }

    #[test]
    fn test_offset_zero_while_selected_unmeasured() {
        let sizes = widths(&[20.0, 0.0]);
        assert_eq!(LayoutCalculator::indicator_offset(&sizes, 1, 5.0), 0.0);
    }

    #[test]
    fn test_indicator_width_out_of_range() {
        let sizes = widths(&[20.0]);
        assert_eq!(LayoutCalculator::indicator_width(&sizes, 3), 0.0);
        assert_eq!(LayoutCalculator::indicator_offset(&sizes, 3, 5.0), 0.0);
    }

    #[test]
    fn test_item_origin() {
        let sizes = widths(&[20.0, 30.0, 50.0, 25.0]);
        assert_eq!(LayoutCalculator::item_origin(&sizes, 0, 35.0), 35.0);
        assert_eq!(LayoutCalculator::item_origin(&sizes, 2, 35.0), 155.0); // 35 + 50 + 70
        // Indicator lines up with the selected label
        let offset = LayoutCalculator::indicator_offset(&sizes, 2, 35.0);
        assert_eq!(35.0 + offset, LayoutCalculator::item_origin(&sizes, 2, 35.0));
    }
}
