//! A selectable multi-section text component.

use crate::bidi::Direction;
use crate::error::Result;
use crate::layout::line_breaker::word_at;
use crate::layout::{CharacterPosition, LineLayout, Point, Selection, SelectionDrag, SelectionOptions};
use crate::measure::TextMeasurer;
use crate::store::{SectionId, SectionStore, TextSection};

/// Owns the sections, their wrapped layout and the selection state of
/// one text component.
///
/// Every edit, width change or measurer change re-wraps eagerly, so the
/// layout handed to readers is always consistent with the sections. A
/// re-wrap invalidates character positions, so it also drops any
/// selection and gesture in flight.
pub struct TextView {
    store: SectionStore,
    measurer: Box<dyn TextMeasurer>,
    page_width: f32,
    layout: LineLayout,
    drag: SelectionDrag,
    selection: Option<Selection>,
}

impl TextView {
    pub fn new(measurer: impl TextMeasurer + 'static, page_width: f32) -> Self {
        Self::with_options(measurer, page_width, SelectionOptions::default())
    }

    pub fn with_options(
        measurer: impl TextMeasurer + 'static,
        page_width: f32,
        options: SelectionOptions,
    ) -> Self {
        Self {
            store: SectionStore::new(),
            measurer: Box::new(measurer),
            page_width,
            layout: LineLayout::empty(),
            drag: SelectionDrag::with_options(options),
            selection: None,
        }
    }

    pub fn append(&mut self, text: impl Into<String>, direction: Direction) -> SectionId {
        let id = self.store.append(text, direction);
        self.relayout();
        id
    }

    pub fn insert_before(
        &mut self,
        before: SectionId,
        text: impl Into<String>,
        direction: Direction,
    ) -> Result<SectionId> {
        let id = self.store.insert_before(before, text, direction)?;
        self.relayout();
        Ok(id)
    }

    pub fn replace(&mut self, id: SectionId, text: impl Into<String>) -> Result<SectionId> {
        let id = self.store.replace(id, text)?;
        self.relayout();
        Ok(id)
    }

    pub fn set_direction(&mut self, id: SectionId, direction: Direction) -> Result<()> {
        self.store.set_direction(id, direction)?;
        self.relayout();
        Ok(())
    }

    pub fn set_page_width(&mut self, page_width: f32) {
        if page_width != self.page_width {
            self.page_width = page_width;
            self.relayout();
        }
    }

    /// Swap the measurer, e.g. after a font change.
    pub fn set_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Box::new(measurer);
        self.relayout();
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.drag.set_selectable(selectable);
    }

    pub fn is_selectable(&self) -> bool {
        self.drag.is_selectable()
    }

    pub fn sections(&self) -> &[TextSection] {
        self.store.sections()
    }

    pub fn store(&self) -> &SectionStore {
        &self.store
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }

    pub fn line_count(&self) -> usize {
        self.layout.line_count()
    }

    pub fn minimum_size_y_required(&self) -> f32 {
        self.layout.minimum_size_y_required()
    }

    /// Resolve a point against the current layout.
    pub fn position_at(&self, point: Point) -> Option<CharacterPosition> {
        self.layout.resolve(point)
    }

    /// Pointer pressed: start (or restart) a drag selection.
    pub fn selection_start(&mut self, point: Point) -> Option<&Selection> {
        let selection = self.drag.press(&self.layout, point)?;
        self.selection = Some(selection);
        self.selection.as_ref()
    }

    /// Pointer moved: extend the drag selection. `None` while idle.
    pub fn selection_continue(&mut self, point: Point) -> Option<&Selection> {
        let selection = self.drag.move_to(&self.layout, point)?;
        self.selection = Some(selection);
        self.selection.as_ref()
    }

    /// Pointer released: finish the drag selection. `None` while idle.
    pub fn selection_finish(&mut self, point: Point) -> Option<&Selection> {
        let selection = self.drag.release(&self.layout, point)?;
        self.selection = Some(selection);
        self.selection.as_ref()
    }

    /// Abandon the gesture in flight and clear the selection.
    pub fn selection_cancel(&mut self) {
        self.drag.cancel();
        self.selection = None;
    }

    /// The last selection produced, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_text(&self) -> Option<String> {
        self.selection.as_ref().map(|s| s.text(&self.layout))
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Select every character of the layout.
    pub fn select_all(&mut self) -> Option<&Selection> {
        if !self.drag.is_selectable() {
            return None;
        }
        self.drag.cancel();
        self.selection = self.layout.select_all(self.drag.options());
        self.selection.as_ref()
    }

    /// Select the word (or run of non-word characters) under `point`,
    /// limited to the wrapped line it sits on.
    pub fn select_word_at(&mut self, point: Point) -> Option<&Selection> {
        if !self.drag.is_selectable() {
            return None;
        }
        let position = self.layout.resolve(point)?;
        let line = self.layout.line(position.line_number)?;
        let word = word_at(&line.text, position.index)?;

        let start = CharacterPosition::new(
            position.line_number,
            word.range.start,
            line.char_at(word.range.start),
        );
        let last = word.range.end - 1;
        let end = CharacterPosition::new(position.line_number, last, line.char_at(last));

        self.drag.cancel();
        self.selection = self
            .layout
            .selection_of_with(start, end, self.drag.options())
            .ok();
        self.selection.as_ref()
    }

    fn relayout(&mut self) {
        self.layout = LineLayout::wrap(
            self.store.sections(),
            self.page_width,
            self.measurer.as_mut(),
        );
        if self.drag.is_active() || self.selection.is_some() {
            log::debug!("layout rebuilt, dropping selection");
        }
        self.drag.cancel();
        self.selection = None;
    }
}
