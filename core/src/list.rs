//! Controller-side list state: an ordered sequence of view models mirroring
//! the visible rows one-to-one.

use crate::item::ItemViewModel;
use crate::viewmodel::ListUpdate;

/// The in-memory list the UI renders from.
///
/// `apply` is the only mutation path. Update and delete locate elements by
/// identifier with a linear scan; list sizes here are human-scale, so an
/// index keyed by id would buy nothing. Both tolerate unknown ids (late or
/// duplicate completions arrive as no-ops), which also makes every
/// instruction idempotent.
#[derive(Debug, Default)]
pub struct ListState {
    items: Vec<ItemViewModel>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ItemViewModel] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply one UI-update instruction.
    pub fn apply(&mut self, update: ListUpdate) {
        match update {
            ListUpdate::ReplaceAll(models) => self.items = models,
            ListUpdate::Append(models) => self.items.extend(models),
            ListUpdate::UpdateById(models) => {
                for model in models {
                    if let Some(existing) =
                        self.items.iter_mut().find(|existing| existing.id == model.id)
                    {
                        *existing = model;
                    }
                }
            }
            ListUpdate::DeleteById(models) => {
                for model in models {
                    self.items.retain(|existing| existing.id != model.id);
                }
            }
        }
    }
}
