//! Approval checklists attached at review time.

use super::WorkOrderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistItemId(Uuid);

impl ChecklistItemId {
    /// Creates a new random checklist item identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a checklist item identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ChecklistItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChecklistItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an approval checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    id: ChecklistItemId,
    text: String,
    completed: bool,
}

impl ChecklistItem {
    fn new(text: String) -> Result<Self, WorkOrderDomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(WorkOrderDomainError::EmptyChecklistItem);
        }
        Ok(Self {
            id: ChecklistItemId::new(),
            text: trimmed.to_owned(),
            completed: false,
        })
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ChecklistItemId {
        self.id
    }

    /// Returns the item text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the item has been ticked off.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }
}

/// Checklist captured when a work order is approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalChecklist {
    items: Vec<ChecklistItem>,
}

impl ApprovalChecklist {
    /// Builds a checklist from item texts.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::EmptyChecklist`] when no texts are
    /// given, or [`WorkOrderDomainError::EmptyChecklistItem`] when any text
    /// is blank after trimming.
    pub fn from_texts(
        texts: impl IntoIterator<Item = String>,
    ) -> Result<Self, WorkOrderDomainError> {
        let items: Vec<ChecklistItem> = texts
            .into_iter()
            .map(ChecklistItem::new)
            .collect::<Result<_, _>>()?;
        if items.is_empty() {
            return Err(WorkOrderDomainError::EmptyChecklist);
        }
        Ok(Self { items })
    }

    /// Returns the checklist items in presentation order.
    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the checklist has no items.
    ///
    /// Construction forbids this, but deserialized data may not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of ticked-off items.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Returns whether every item has been ticked off.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|item| item.completed)
    }

    /// Flips the completion flag of the identified item.
    ///
    /// Returns the new completion state of the item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::ChecklistItemNotFound`] when no item
    /// has the identifier.
    pub fn toggle(&mut self, item_id: ChecklistItemId) -> Result<bool, WorkOrderDomainError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(WorkOrderDomainError::ChecklistItemNotFound(item_id))?;
        item.completed = !item.completed;
        Ok(item.completed)
    }
}
