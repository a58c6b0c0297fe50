//! The to-do state store.
//!
//! [`TodoStore`] owns the three pieces of widget state (the draft text, the ordered item
//! collection and the edit target) and exposes the user-facing operations. Every operation
//! returns a [`StoreAction`] so the caller can decide whether to re-render and whether to move
//! focus back to the text field (see [`StoreAction::requests_focus`]).
//!
//! Blank submissions, deletes of unknown ids and updates against an edit target that has since
//! been removed all degrade to no-ops; there is no error type.
use crate::input::KeyEvent;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    pub id: ItemId,
    pub title: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(ItemId),
}

impl EditMode {
    pub fn target(self) -> Option<ItemId> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, EditMode::Editing(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SetDraft(String),
    Submit,
    Delete(ItemId),
    Reset,
    BeginEdit(ItemId),
    SubmitOnKey(KeyEvent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreAction {
    None,
    DraftChanged,
    Added(ItemId),
    /// `matched` is false when the edit target no longer exists in the collection.
    Updated { id: ItemId, matched: bool },
    Deleted { id: ItemId, removed: bool },
    Reset,
    EditStarted(ItemId),
}

impl StoreAction {
    /// Whether the text field should regain focus after this action.
    pub fn requests_focus(self) -> bool {
        matches!(
            self,
            StoreAction::Added(_)
                | StoreAction::Updated { .. }
                | StoreAction::Deleted { .. }
                | StoreAction::Reset
                | StoreAction::EditStarted(_)
        )
    }

    pub fn is_none(self) -> bool {
        self == StoreAction::None
    }
}

/// Hands out unique, strictly increasing ids.
///
/// Ids are the creation time in milliseconds since the Unix epoch. If the clock has not advanced
/// (or went backwards) since the last id, the previous id plus one is used instead.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    last: Option<u64>,
    clock: fn() -> u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl IdGenerator {
    pub fn from_clock() -> Self {
        Self {
            last: None,
            clock: unix_millis,
        }
    }

    /// Ignores wall time; yields `start`, `start + 1`, ...
    pub fn sequential(start: u64) -> Self {
        Self {
            last: start.checked_sub(1),
            clock: zero_clock,
        }
    }

    pub fn next_id(&mut self) -> ItemId {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(id);
        ItemId(id)
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().min(u64::MAX as u128) as u64)
        .unwrap_or(0)
}

fn zero_clock() -> u64 {
    0
}

#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    draft: String,
    items: Vec<TodoItem>,
    mode: EditMode,
    ids: IdGenerator,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn edit_target(&self) -> Option<ItemId> {
        self.mode.target()
    }

    pub fn apply(&mut self, command: Command) -> StoreAction {
        match command {
            Command::SetDraft(text) => self.set_draft(text),
            Command::Submit => self.submit(),
            Command::Delete(id) => self.delete(id),
            Command::Reset => self.reset(),
            Command::BeginEdit(id) => self.begin_edit(id),
            Command::SubmitOnKey(key) => self.submit_on_key(&key),
        }
    }

    /// Replaces the draft verbatim. No trimming happens here.
    pub fn set_draft(&mut self, text: impl Into<String>) -> StoreAction {
        self.draft = text.into();
        StoreAction::DraftChanged
    }

    /// Commits the draft: updates the edit target if one is set, otherwise appends a new item.
    ///
    /// The stored title is the untrimmed draft. A draft that is empty after trimming is ignored
    /// and leaves all state (including the draft) untouched.
    pub fn submit(&mut self) -> StoreAction {
        if self.draft.trim().is_empty() {
            tracing::trace!("ignoring blank submit");
            return StoreAction::None;
        }

        let title = std::mem::take(&mut self.draft);
        match std::mem::take(&mut self.mode) {
            EditMode::Editing(id) => {
                let matched = match self.items.iter_mut().find(|item| item.id == id) {
                    Some(item) => {
                        item.title = title;
                        true
                    }
                    None => false,
                };
                tracing::debug!(%id, matched, "updated item");
                StoreAction::Updated { id, matched }
            }
            EditMode::Idle => {
                let id = self.ids.next_id();
                self.items.push(TodoItem { id, title });
                tracing::debug!(%id, len = self.items.len(), "added item");
                StoreAction::Added(id)
            }
        }
    }

    /// Removes the item with `id`. The edit target is left alone even if it pointed at `id`.
    pub fn delete(&mut self, id: ItemId) -> StoreAction {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        tracing::debug!(%id, removed, "deleted item");
        StoreAction::Deleted { id, removed }
    }

    /// Clears the collection and the draft. The edit target is left alone.
    pub fn reset(&mut self) -> StoreAction {
        self.items.clear();
        self.draft.clear();
        tracing::debug!("reset store");
        StoreAction::Reset
    }

    /// Loads the item's current title into the draft and marks it as the edit target.
    pub fn begin_edit(&mut self, id: ItemId) -> StoreAction {
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            tracing::trace!(%id, "begin_edit on unknown item");
            return StoreAction::None;
        };
        self.draft = item.title.clone();
        self.mode = EditMode::Editing(id);
        tracing::debug!(%id, "editing item");
        StoreAction::EditStarted(id)
    }

    pub fn submit_on_key(&mut self, key: &KeyEvent) -> StoreAction {
        if key.is_confirm() {
            self.submit()
        } else {
            StoreAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    fn store() -> TodoStore {
        TodoStore::with_id_generator(IdGenerator::sequential(1))
    }

    fn titles(s: &TodoStore) -> Vec<&str> {
        s.items().iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn submit_appends_untrimmed_draft() {
        let mut s = store();
        s.set_draft("  Buy milk ");
        assert_eq!(s.submit(), StoreAction::Added(ItemId(1)));
        assert_eq!(titles(&s), vec!["  Buy milk "]);
        assert_eq!(s.draft(), "");
        assert_eq!(s.mode(), EditMode::Idle);
    }

    #[test]
    fn blank_submit_keeps_draft() {
        let mut s = store();
        s.set_draft(" \t ");
        assert_eq!(s.submit(), StoreAction::None);
        assert!(s.is_empty());
        assert_eq!(s.draft(), " \t ");
    }

    #[test]
    fn edit_round_trip_without_changes_keeps_title() {
        let mut s = store();
        s.set_draft("a");
        s.submit();
        s.set_draft("b");
        s.submit();

        assert_eq!(s.begin_edit(ItemId(1)), StoreAction::EditStarted(ItemId(1)));
        assert_eq!(s.draft(), "a");
        assert_eq!(s.edit_target(), Some(ItemId(1)));
        assert_eq!(
            s.submit(),
            StoreAction::Updated {
                id: ItemId(1),
                matched: true
            }
        );
        assert_eq!(titles(&s), vec!["a", "b"]);
        assert_eq!(s.mode(), EditMode::Idle);
    }

    #[test]
    fn delete_keeps_dangling_edit_target() {
        let mut s = store();
        s.set_draft("a");
        s.submit();
        s.begin_edit(ItemId(1));
        assert_eq!(
            s.delete(ItemId(1)),
            StoreAction::Deleted {
                id: ItemId(1),
                removed: true
            }
        );
        assert_eq!(s.edit_target(), Some(ItemId(1)));

        s.set_draft("ghost");
        assert_eq!(
            s.submit(),
            StoreAction::Updated {
                id: ItemId(1),
                matched: false
            }
        );
        assert!(s.is_empty());
        assert_eq!(s.draft(), "");
        assert_eq!(s.mode(), EditMode::Idle);
    }

    #[test]
    fn reset_keeps_edit_target() {
        let mut s = store();
        s.set_draft("a");
        s.submit();
        s.begin_edit(ItemId(1));
        assert_eq!(s.reset(), StoreAction::Reset);
        assert!(s.is_empty());
        assert_eq!(s.draft(), "");
        assert!(s.mode().is_editing());
    }

    #[test]
    fn begin_edit_unknown_id_is_noop() {
        let mut s = store();
        s.set_draft("draft");
        assert_eq!(s.begin_edit(ItemId(42)), StoreAction::None);
        assert_eq!(s.draft(), "draft");
        assert_eq!(s.mode(), EditMode::Idle);
    }

    #[test]
    fn only_enter_submits_on_key() {
        let mut s = store();
        s.set_draft("x");
        assert_eq!(
            s.submit_on_key(&KeyEvent::new(KeyCode::Char('x'))),
            StoreAction::None
        );
        assert_eq!(s.len(), 0);
        assert_eq!(
            s.submit_on_key(&KeyEvent::new(KeyCode::Enter)),
            StoreAction::Added(ItemId(1))
        );
    }

    #[test]
    fn focus_is_requested_only_after_mutations() {
        assert!(!StoreAction::None.requests_focus());
        assert!(!StoreAction::DraftChanged.requests_focus());
        assert!(StoreAction::Reset.requests_focus());
        assert!(
            StoreAction::Deleted {
                id: ItemId(9),
                removed: false
            }
            .requests_focus()
        );
    }

    #[test]
    fn clock_ids_stay_unique_when_time_stalls() {
        let mut ids = IdGenerator {
            last: None,
            clock: || 1_000,
        };
        assert_eq!(ids.next_id(), ItemId(1_000));
        assert_eq!(ids.next_id(), ItemId(1_001));
        assert_eq!(ids.next_id(), ItemId(1_002));
    }
}
