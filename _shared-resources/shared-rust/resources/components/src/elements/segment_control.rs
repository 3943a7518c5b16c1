// Segment Control Component
// A row of selectable labels with an animated indicator under the active one

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{StatefulWidget, Widget},
};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use crate::core::{Size, SizePreferences};
use crate::elements::geometry_reader::GeometryReader;
use crate::elements::segment_item::SegmentItemView;
use crate::utilities::{IndicatorAnimation, IndicatorFrame, LayoutCalculator, SegmentLayout};

/// Reporting identity inside a segment control's preference channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentSlot {
    /// The control's own bounding box
    Control,
    /// The label at this index
    Item(usize),
}

/// Visual settings for a segment control
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentControlStyle {
    pub normal: Style,
    pub selected: Style,
    pub indicator: Style,
    pub divider: Style,
    pub indicator_symbol: &'static str,
    pub divider_symbol: &'static str,
    /// Blank rows between the labels and the indicator
    pub bottom_padding: u16,
}

impl Default for SegmentControlStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::Gray),
            selected: Style::default().fg(Color::Blue),
            indicator: Style::default().fg(Color::White),
            divider: Style::default().fg(Color::DarkGray),
            indicator_symbol: symbols::line::THICK_HORIZONTAL,
            divider_symbol: symbols::line::HORIZONTAL,
            bottom_padding: 1,
        }
    }
}

/// State owned by one segment control instance
#[derive(Debug, Clone)]
pub struct SegmentControlState {
    items: Vec<String>,
    /// Index aligned with `items`; zero until that label reports
    item_sizes: Vec<Size>,
    control_size: Size,
    appeared: bool,
    preferences: SizePreferences<SegmentSlot>,
    /// Label rectangles from the last render, for hit testing
    item_bounds: Vec<Rect>,
    animation: IndicatorAnimation,
}

impl SegmentControlState {
    pub fn new(items: Vec<String>) -> Self {
        let item_sizes = vec![Size::ZERO; items.len()];
        Self {
            items,
            item_sizes,
            control_size: Size::ZERO,
            appeared: false,
            preferences: SizePreferences::new(),
            item_bounds: Vec::new(),
            animation: IndicatorAnimation::default(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item_sizes(&self) -> &[Size] {
        &self.item_sizes
    }

    pub fn control_size(&self) -> Size {
        self.control_size
    }

    pub fn item_bounds(&self) -> &[Rect] {
        &self.item_bounds
    }

    /// Replace the item list
    /// A different list discards every measurement; an identical one keeps them.
    /// Returns true if the list changed.
    pub fn set_items(&mut self, items: Vec<String>) -> bool {
        if items == self.items {
            return false;
        }

        debug!(old = self.items.len(), new = items.len(), "segment items replaced");
        self.item_sizes = vec![Size::ZERO; items.len()];
        self.items = items;
        self.item_bounds.clear();
        self.preferences.clear();
        true
    }

    /// Re-arm the one-shot control size read (e.g. after a terminal resize)
    pub fn invalidate_control_size(&mut self) {
        self.appeared = false;
    }

    /// Derived geometry for the current measurements
    pub fn layout(&self, fixed_spacing: Option<f32>, selection: usize) -> SegmentLayout {
        LayoutCalculator::new(fixed_spacing).calculate(&self.item_sizes, self.control_size.width, selection)
    }

    /// Whether the indicator is still moving at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_animating(now)
    }

    /// Select item `index` through the selection binding
    /// Out-of-range indices are ignored. Returns true if the selection changed.
    pub fn on_item_tap(&self, index: usize, selection: &mut usize) -> bool {
        if index >= self.items.len() {
            trace!(index, count = self.items.len(), "ignored tap outside segment items");
            return false;
        }
        if *selection == index {
            return false;
        }

        debug!(from = *selection, to = index, "segment selection changed");
        *selection = index;
        true
    }

    /// Index of the label under a terminal cell, from the last render
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        self.item_bounds
            .iter()
            .position(|bounds| bounds.contains(Position::new(column, row)))
    }

    /// Left click on a label selects it
    pub fn handle_mouse(&self, mouse: &MouseEvent, selection: &mut usize) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match self.item_at(mouse.column, mouse.row) {
            Some(index) => self.on_item_tap(index, selection),
            None => false,
        }
    }

    /// Move to the next item, wrapping to the first
    pub fn select_next(&self, selection: &mut usize) -> bool {
        let count = self.items.len();
        if count == 0 {
            return false;
        }
        let next = if selection.saturating_add(1) >= count { 0 } else { *selection + 1 };
        self.on_item_tap(next, selection)
    }

    /// Move to the previous item, wrapping to the last
    pub fn select_previous(&self, selection: &mut usize) -> bool {
        let count = self.items.len();
        if count == 0 {
            return false;
        }
        let previous = if *selection == 0 || *selection >= count {
            count - 1
        } else {
            *selection - 1
        };
        self.on_item_tap(previous, selection)
    }

    /// Jump to a 1-based item number (digit keys)
    pub fn select_number(&self, number: usize, selection: &mut usize) -> bool {
        match number.checked_sub(1) {
            Some(index) => self.on_item_tap(index, selection),
            None => false,
        }
    }

    /// Keyboard navigation: Left/Right, h/l and digit keys
    pub fn handle_key(&self, key: &KeyEvent, selection: &mut usize) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.select_previous(selection),
            KeyCode::Right | KeyCode::Char('l') => self.select_next(selection),
            KeyCode::Char(c) => c
                .to_digit(10)
                .map(|digit| self.select_number(digit as usize, selection))
                .unwrap_or(false),
            _ => false,
        }
    }

    /// First layout pass: report the control and every label, then take the changes
    fn measure(&mut self, area: Rect, buf: &mut Buffer) {
        GeometryReader::new(SegmentSlot::Control).render(area, buf, &mut self.preferences);
        if !self.appeared {
            self.control_size = self.preferences.value(SegmentSlot::Control);
            self.appeared = true;
            debug!(width = self.control_size.width, height = self.control_size.height, "segment control appeared");
        }

        for (index, item) in self.items.iter().enumerate() {
            let width = Line::raw(item.as_str()).width().min(u16::MAX as usize) as u16;
            let intrinsic = Rect { x: area.x, y: area.y, width, height: 1 };
            GeometryReader::new(SegmentSlot::Item(index)).render(intrinsic, buf, &mut self.preferences);
        }

        if !self.preferences.has_pending() {
            return;
        }
        for (slot, size) in self.preferences.drain_changes() {
            if let SegmentSlot::Item(index) = slot {
                if let Some(item_size) = self.item_sizes.get_mut(index) {
                    trace!(index, width = size.width, "segment item measured");
                    *item_size = size;
                }
            }
        }
    }
}

/// Per-frame segment control widget
/// The selection is read here and written back through `SegmentControlState` handlers
#[derive(Debug, Clone)]
pub struct SegmentControl {
    selection: usize,
    fixed_spacing: Option<f32>,
    divider: bool,
    style: SegmentControlStyle,
    animation_duration: Option<Duration>,
    now: Option<Instant>,
}

impl SegmentControl {
    pub fn new(selection: usize) -> Self {
        Self {
            selection,
            fixed_spacing: None,
            divider: false,
            style: SegmentControlStyle::default(),
            animation_duration: None,
            now: None,
        }
    }

    /// Fixed gap between items; the row is left-aligned when set
    pub fn fixed_spacing(mut self, spacing: Option<f32>) -> Self {
        self.fixed_spacing = spacing;
        self
    }

    pub fn divider(mut self, divider: bool) -> Self {
        self.divider = divider;
        self
    }

    pub fn style(mut self, style: SegmentControlStyle) -> Self {
        self.style = style;
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = Some(duration);
        self
    }

    /// Render as of `now` instead of the wall clock
    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    /// Rows needed: label row, bottom padding, indicator row
    pub fn height(&self) -> u16 {
        self.style.bottom_padding.saturating_add(2)
    }
}

impl StatefulWidget for SegmentControl {
    type State = SegmentControlState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let now = self.now.unwrap_or_else(Instant::now);
        if let Some(duration) = self.animation_duration {
            state.animation.set_duration(duration);
        }

        state.measure(area, buf);
        let layout = state.layout(self.fixed_spacing, self.selection);

        // Labels
        state.item_bounds.clear();
        for index in 0..state.items.len() {
            let view = SegmentItemView::for_index(
                &state.items,
                index,
                index == self.selection,
                self.style.normal,
                self.style.selected,
            );
            let x = f32::from(area.x) + LayoutCalculator::item_origin(&state.item_sizes, index, layout.spacing);
            let bounds = cell_span(x, f32::from(view.width()), area.y, area);
            view.render(bounds, buf);
            state.item_bounds.push(bounds);
        }

        // Indicator row
        let indicator_y = area.y.saturating_add(1).saturating_add(self.style.bottom_padding);
        if indicator_y >= area.bottom() {
            return;
        }
        if self.divider {
            buf.set_stringn(
                area.x,
                indicator_y,
                self.style.divider_symbol.repeat(area.width as usize),
                area.width as usize,
                self.style.divider,
            );
        }

        let target = IndicatorFrame::new(layout.indicator_offset, layout.indicator_width);
        if state.animation.retarget(target, now) {
            debug!(
                spacing = layout.spacing,
                offset = target.offset,
                width = target.width,
                "segment indicator retargeted"
            );
        }
        let frame = state.animation.frame_at(now);
        let x = f32::from(area.x) + layout.spacing + frame.offset;
        let bar = cell_span(x, frame.width, indicator_y, area);
        if !bar.is_empty() {
            buf.set_stringn(
                bar.x,
                bar.y,
                self.style.indicator_symbol.repeat(bar.width as usize),
                bar.width as usize,
                self.style.indicator,
            );
        }
    }
}

/// Round a fractional horizontal span to whole cells on row `y`, clipped to `bounds`
fn cell_span(x: f32, width: f32, y: u16, bounds: Rect) -> Rect {
    let left = x.round().max(0.0) as u16;
    let right = (x + width).round().max(0.0) as u16;
    Rect {
        x: left,
        y,
        width: right.saturating_sub(left),
        height: 1,
    }
    .intersection(bounds)
}
