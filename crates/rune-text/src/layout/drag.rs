use crate::layout::{CharacterPosition, LineLayout, Point, Selection, SelectionOptions};

/// State of one pointer-drag selection gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Active {
        anchor: CharacterPosition,
        current: CharacterPosition,
    },
}

/// Drives a selection from press/move/release events.
///
/// `Idle -> Active` on press, `Active -> Idle` on release or cancel. A
/// press while `Active` restarts the gesture from the new point. Each
/// handler returns the selection it produced, or `None` when the event
/// was not consumed.
#[derive(Debug, Clone)]
pub struct SelectionDrag {
    state: DragState,
    selectable: bool,
    options: SelectionOptions,
}

impl SelectionDrag {
    pub fn new() -> Self {
        Self::with_options(SelectionOptions::default())
    }

    pub fn with_options(options: SelectionOptions) -> Self {
        Self {
            state: DragState::Idle,
            selectable: true,
            options,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Active { .. })
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Turning selection off abandons any gesture in flight.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
        if !selectable {
            self.cancel();
        }
    }

    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }

    /// Start a gesture at `point`.
    ///
    /// Produces a single-point selection of the character under the
    /// pointer. Ignored when not selectable or before any layout exists.
    pub fn press(&mut self, layout: &LineLayout, point: Point) -> Option<Selection> {
        if !self.selectable {
            return None;
        }
        let position = layout.resolve(point)?;
        if self.is_active() {
            log::debug!("press while dragging, restarting selection");
        }
        self.state = DragState::Active {
            anchor: position,
            current: position,
        };
        log::trace!("selection drag started at {:?}", position);
        self.selection(layout, position, position)
    }

    /// Extend the active gesture to `point`.
    pub fn move_to(&mut self, layout: &LineLayout, point: Point) -> Option<Selection> {
        let anchor = self.active_anchor()?;
        let current = layout.resolve(point)?;
        self.state = DragState::Active { anchor, current };
        self.selection(layout, anchor, current)
    }

    /// Finish the active gesture at `point`, returning the final selection.
    pub fn release(&mut self, layout: &LineLayout, point: Point) -> Option<Selection> {
        let anchor = self.active_anchor()?;
        let current = layout.resolve(point);
        self.state = DragState::Idle;
        let current = current?;
        log::trace!("selection drag finished at {:?}", current);
        self.selection(layout, anchor, current)
    }

    /// Abandon the gesture without producing a selection.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::debug!("selection drag cancelled");
        }
        self.state = DragState::Idle;
    }

    fn active_anchor(&self) -> Option<CharacterPosition> {
        if !self.selectable {
            return None;
        }
        match self.state {
            DragState::Active { anchor, .. } => Some(anchor),
            DragState::Idle => None,
        }
    }

    fn selection(
        &mut self,
        layout: &LineLayout,
        anchor: CharacterPosition,
        current: CharacterPosition,
    ) -> Option<Selection> {
        match layout.selection_of_with(anchor, current, &self.options) {
            Ok(selection) => Some(selection),
            Err(err) => {
                log::warn!("dropping selection drag: {err}");
                self.state = DragState::Idle;
                None
            }
        }
    }
}

impl Default for SelectionDrag {
    fn default() -> Self {
        Self::new()
    }
}
