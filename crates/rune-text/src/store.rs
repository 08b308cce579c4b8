//! Ordered store of independently addressable text sections.

use core::fmt;

use hashbrown::HashMap;

use crate::bidi::Direction;
use crate::error::{Result, TextError};

/// Opaque, stable identifier of a [`TextSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(u64);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A span of input text with its own reading direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSection {
    id: SectionId,
    text: String,
    direction: Direction,
}

impl TextSection {
    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Ordered list of text sections.
///
/// Edits never trigger wrapping; callers re-wrap after changing the
/// store. `revision` increases on every successful edit.
#[derive(Debug, Default)]
pub struct SectionStore {
    sections: Vec<TextSection>,
    positions: HashMap<SectionId, usize>,
    next_id: u64,
    revision: u64,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section after the last one.
    pub fn append(&mut self, text: impl Into<String>, direction: Direction) -> SectionId {
        let id = self.allocate_id();
        self.positions.insert(id, self.sections.len());
        self.sections.push(TextSection {
            id,
            text: text.into(),
            direction,
        });
        self.revision += 1;
        id
    }

    /// Insert a new section immediately before `before`.
    pub fn insert_before(
        &mut self,
        before: SectionId,
        text: impl Into<String>,
        direction: Direction,
    ) -> Result<SectionId> {
        let at = self.position_of(before).ok_or(TextError::UnknownSection(before))?;
        let id = self.allocate_id();
        self.sections.insert(
            at,
            TextSection {
                id,
                text: text.into(),
                direction,
            },
        );
        for (pos, section) in self.sections.iter().enumerate().skip(at) {
            self.positions.insert(section.id, pos);
        }
        self.revision += 1;
        Ok(id)
    }

    /// Replace the text of `id` in place. The id is retained and returned.
    pub fn replace(&mut self, id: SectionId, text: impl Into<String>) -> Result<SectionId> {
        let at = self.position_of(id).ok_or(TextError::UnknownSection(id))?;
        self.sections[at].text = text.into();
        self.revision += 1;
        Ok(id)
    }

    /// Change the reading direction of `id`.
    pub fn set_direction(&mut self, id: SectionId, direction: Direction) -> Result<()> {
        let at = self.position_of(id).ok_or(TextError::UnknownSection(id))?;
        self.sections[at].direction = direction;
        self.revision += 1;
        Ok(())
    }

    pub fn get(&self, id: SectionId) -> Option<&TextSection> {
        self.position_of(id).map(|at| &self.sections[at])
    }

    /// Index of `id` in store order.
    pub fn position_of(&self, id: SectionId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// All sections in store order.
    pub fn sections(&self) -> &[TextSection] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextSection> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn allocate_id(&mut self) -> SectionId {
        let id = SectionId(self.next_id);
        self.next_id += 1;
        id
    }
}
