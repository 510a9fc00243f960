//! Todo Page State Store
//!
//! Page state lives in a `reactive_stores` store for field-level reactivity.
//! Every user interaction is a `TodoAction`; `TodoState::apply` derives the
//! next state from a snapshot without touching the previous one.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::Serialize;

use crate::models::{Todo, TodoId, SEED_TODOS};

/// `KeyboardEvent.keyCode` for Enter
pub const ENTER_KEY_CODE: u32 = 13;

/// What the next Enter in the draft input does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EditMode {
    /// Append a new todo
    #[default]
    Creating,
    /// Rename the todo with this id
    Editing(TodoId),
}

impl EditMode {
    pub fn is_editing(&self, id: TodoId) -> bool {
        *self == EditMode::Editing(id)
    }
}

/// Todo page state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Serialize, Store)]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<Todo>,
    /// Shared text input buffer (create and rename)
    pub draft_text: String,
    /// Create vs. edit submission mode
    pub edit_mode: EditMode,
}

/// A user interaction on the todo page
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    /// Row clicked
    ToggleChecked(TodoId),
    /// Key pressed in the draft input (key code, current input value)
    SubmitDraft { key_code: u32, value: String },
    ClearCompleted,
    /// "Edit" clicked on a row
    BeginEdit(Todo),
    MarkAllComplete,
    /// Draft input changed
    UpdateDraftText(String),
}

impl TodoAction {
    pub fn label(&self) -> &'static str {
        match self {
            TodoAction::ToggleChecked(_) => "toggle_checked",
            TodoAction::SubmitDraft { .. } => "submit_draft",
            TodoAction::ClearCompleted => "clear_completed",
            TodoAction::BeginEdit(_) => "begin_edit",
            TodoAction::MarkAllComplete => "mark_all_complete",
            TodoAction::UpdateDraftText(_) => "update_draft_text",
        }
    }
}

/// Why a draft submission was ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Key other than Enter
    NotEnter(u32),
    /// Enter on an empty input
    EmptyDraft,
}

impl std::fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitRejected::NotEnter(code) => write!(f, "key code {} is not Enter", code),
            SubmitRejected::EmptyDraft => write!(f, "draft is empty"),
        }
    }
}

impl std::error::Error for SubmitRejected {}

impl TodoState {
    /// State with the sample todos shown on first load
    pub fn seeded() -> Self {
        Self {
            todos: SEED_TODOS.iter().map(|name| Todo::new(*name)).collect(),
            ..Default::default()
        }
    }

    /// Derive the state that follows `action`
    pub fn apply(&self, action: TodoAction) -> Result<Self, SubmitRejected> {
        match action {
            TodoAction::ToggleChecked(id) => Ok(self.toggle_checked(id)),
            TodoAction::SubmitDraft { key_code, value } => self.submit_draft(key_code, &value),
            TodoAction::ClearCompleted => Ok(self.clear_completed()),
            TodoAction::BeginEdit(todo) => Ok(self.begin_edit(&todo)),
            TodoAction::MarkAllComplete => Ok(self.mark_all_complete()),
            TodoAction::UpdateDraftText(value) => Ok(self.update_draft_text(value)),
        }
    }

    /// Flip one todo's `checked`, leaving edit mode
    pub fn toggle_checked(&self, id: TodoId) -> Self {
        let todos = self
            .todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    Todo { checked: !todo.checked, ..todo.clone() }
                } else {
                    todo.clone()
                }
            })
            .collect();

        Self {
            todos,
            draft_text: String::new(),
            edit_mode: EditMode::Creating,
        }
    }

    /// Enter in the draft input: create a todo, or rename the one being edited
    pub fn submit_draft(&self, key_code: u32, value: &str) -> Result<Self, SubmitRejected> {
        if key_code != ENTER_KEY_CODE {
            return Err(SubmitRejected::NotEnter(key_code));
        }
        if value.is_empty() {
            return Err(SubmitRejected::EmptyDraft);
        }

        let todos = match self.edit_mode {
            EditMode::Creating => {
                let mut todos = self.todos.clone();
                todos.push(Todo::new(value));
                todos
            }
            // A target removed in the meantime matches nothing; edit mode is dropped anyway
            EditMode::Editing(id) => self
                .todos
                .iter()
                .map(|todo| {
                    if todo.id == id {
                        Todo { name: value.to_string(), ..todo.clone() }
                    } else {
                        todo.clone()
                    }
                })
                .collect(),
        };

        Ok(Self {
            todos,
            draft_text: String::new(),
            edit_mode: EditMode::Creating,
        })
    }

    /// Drop every checked todo
    pub fn clear_completed(&self) -> Self {
        Self {
            todos: active_todos(&self.todos),
            ..self.clone()
        }
    }

    /// Prefill the draft with `todo`'s name and switch to edit mode
    pub fn begin_edit(&self, todo: &Todo) -> Self {
        Self {
            todos: self.todos.clone(),
            draft_text: todo.name.clone(),
            edit_mode: EditMode::Editing(todo.id),
        }
    }

    pub fn mark_all_complete(&self) -> Self {
        Self {
            todos: self
                .todos
                .iter()
                .map(|todo| Todo { checked: true, ..todo.clone() })
                .collect(),
            ..self.clone()
        }
    }

    pub fn update_draft_text(&self, value: String) -> Self {
        Self {
            draft_text: value,
            ..self.clone()
        }
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.checked).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.checked).count()
    }
}

/// Unchecked todos, in list order
pub fn active_todos(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| !todo.checked).cloned().collect()
}

/// Checked todos, in list order
pub fn completed_todos(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.checked).cloned().collect()
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the current state out of the store without subscribing
pub fn store_snapshot(store: &TodoStore) -> TodoState {
    TodoState {
        todos: store.todos().get_untracked(),
        draft_text: store.draft_text().get_untracked(),
        edit_mode: store.edit_mode().get_untracked(),
    }
}

/// Write back only the fields that changed
pub fn store_replace(store: &TodoStore, next: TodoState) {
    if store.todos().with_untracked(|todos| *todos != next.todos) {
        store.todos().set(next.todos);
    }
    if store.draft_text().with_untracked(|text| *text != next.draft_text) {
        store.draft_text().set(next.draft_text);
    }
    if store.edit_mode().get_untracked() != next.edit_mode {
        store.edit_mode().set(next.edit_mode);
    }
}

/// Apply an action to the store, logging the outcome
pub fn dispatch(store: &TodoStore, action: TodoAction) {
    let label = action.label();
    match store_snapshot(store).apply(action) {
        Ok(next) => {
            log::debug!(
                "[TodoPage] {}: {} active, {} completed, {:?}",
                label,
                next.active_count(),
                next.completed_count(),
                next.edit_mode
            );
            if log::log_enabled!(log::Level::Trace) {
                match serde_json::to_string(&next) {
                    Ok(json) => log::trace!("[TodoPage] state {}", json),
                    Err(e) => log::warn!("[TodoPage] failed to serialize state: {}", e),
                }
            }
            store_replace(store, next);
        }
        Err(rejected) => log::trace!("[TodoPage] {} ignored: {}", label, rejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn type_and_enter(state: &TodoState, text: &str) -> TodoState {
        state
            .update_draft_text(text.to_string())
            .submit_draft(ENTER_KEY_CODE, text)
            .unwrap()
    }

    fn names(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|todo| todo.name.as_str()).collect()
    }

    #[test]
    fn test_add_todo() {
        let state = type_and_enter(&TodoState::default(), "Buy milk");

        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].name, "Buy milk");
        assert!(!state.todos[0].checked);
        assert_eq!(state.draft_text, "");
        assert_eq!(state.edit_mode, EditMode::Creating);
    }

    #[test]
    fn test_new_todos_append_in_order() {
        let state = type_and_enter(&TodoState::default(), "a");
        let state = type_and_enter(&state, "b");
        let state = type_and_enter(&state, "c");
        assert_eq!(names(&state.todos), ["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_moves_todo_to_completed() {
        let state = type_and_enter(&TodoState::default(), "Buy milk");
        let id = state.todos[0].id;

        let state = state.apply(TodoAction::ToggleChecked(id)).unwrap();

        assert!(state.todos[0].checked);
        assert!(active_todos(&state.todos).is_empty());
        assert_eq!(names(&completed_todos(&state.todos)), ["Buy milk"]);

        // Clicking the completed row brings it back
        let state = state.toggle_checked(id);
        assert!(!state.todos[0].checked);
        assert_eq!(names(&active_todos(&state.todos)), ["Buy milk"]);
    }

    #[test]
    fn test_toggle_clears_draft_and_edit_mode() {
        let state = type_and_enter(&TodoState::default(), "a");
        let state = type_and_enter(&state, "b");
        let a = state.todos[0].clone();
        let b_id = state.todos[1].id;

        let state = state.begin_edit(&a).update_draft_text("half typed".to_string());
        let state = state.toggle_checked(b_id);

        assert_eq!(state.draft_text, "");
        assert_eq!(state.edit_mode, EditMode::Creating);
        assert!(!state.todos[0].checked);
        assert!(state.todos[1].checked);
    }

    #[test]
    fn test_toggle_unknown_id_changes_nothing_but_input() {
        let state = type_and_enter(&TodoState::default(), "a");
        let toggled = state.toggle_checked(TodoId::new());
        assert_eq!(toggled.todos, state.todos);
    }

    #[test]
    fn test_edit_renames_in_place() {
        let state = type_and_enter(&TodoState::default(), "first");
        let state = type_and_enter(&state, "Buy milk");
        let state = type_and_enter(&state, "last");
        let target = state.todos[1].clone();

        let state = state.apply(TodoAction::BeginEdit(target.clone())).unwrap();
        assert_eq!(state.draft_text, "Buy milk");
        assert_eq!(state.edit_mode, EditMode::Editing(target.id));
        assert!(state.edit_mode.is_editing(target.id));

        let state = state
            .apply(TodoAction::UpdateDraftText("Buy oat milk".to_string()))
            .unwrap()
            .apply(TodoAction::SubmitDraft {
                key_code: ENTER_KEY_CODE,
                value: "Buy oat milk".to_string(),
            })
            .unwrap();

        assert_eq!(names(&state.todos), ["first", "Buy oat milk", "last"]);
        assert_eq!(state.todos[1].id, target.id);
        assert!(!state.todos[1].checked);
        assert_eq!(state.edit_mode, EditMode::Creating);
        assert_eq!(state.draft_text, "");
    }

    #[test]
    fn test_edit_keeps_checked_flag() {
        let state = type_and_enter(&TodoState::default(), "done already");
        let state = state.mark_all_complete();
        let target = state.todos[0].clone();

        let state = state.begin_edit(&target);
        let state = state.submit_draft(ENTER_KEY_CODE, "renamed").unwrap();

        assert_eq!(state.todos[0].name, "renamed");
        assert!(state.todos[0].checked);
    }

    #[test]
    fn test_edit_of_removed_todo_is_dropped() {
        let state = type_and_enter(&TodoState::default(), "keep");
        let state = type_and_enter(&state, "gone");
        let gone = state.todos[1].clone();

        let state = state.toggle_checked(gone.id);
        let state = state.begin_edit(&gone);
        let state = state.clear_completed();
        assert_eq!(state.edit_mode, EditMode::Editing(gone.id));

        let state = state.submit_draft(ENTER_KEY_CODE, "renamed").unwrap();

        assert_eq!(names(&state.todos), ["keep"]);
        assert_eq!(state.edit_mode, EditMode::Creating);
        assert_eq!(state.draft_text, "");
    }

    #[test]
    fn test_begin_edit_does_not_touch_todos() {
        let state = TodoState::seeded();
        let edited = state.begin_edit(&state.todos[0]);
        assert_eq!(edited.todos, state.todos);
    }

    #[test]
    fn test_submit_rejections() {
        let state = type_and_enter(&TodoState::default(), "a").update_draft_text("b".to_string());

        assert_eq!(
            state.submit_draft(65, "b"),
            Err(SubmitRejected::NotEnter(65))
        );
        assert_eq!(
            state.submit_draft(ENTER_KEY_CODE, ""),
            Err(SubmitRejected::EmptyDraft)
        );
        assert_eq!(
            SubmitRejected::NotEnter(65).to_string(),
            "key code 65 is not Enter"
        );
    }

    #[test]
    fn test_clear_completed() {
        let state = type_and_enter(&TodoState::default(), "active");
        let state = type_and_enter(&state, "done");
        let state = state.toggle_checked(state.todos[1].id);

        let state = state.apply(TodoAction::ClearCompleted).unwrap();

        assert_eq!(names(&state.todos), ["active"]);
        assert!(!state.todos[0].checked);
    }

    #[test]
    fn test_clear_completed_keeps_input_state() {
        let state = type_and_enter(&TodoState::default(), "a");
        let state = state.begin_edit(&state.todos[0].clone());
        let cleared = state.clear_completed();
        assert_eq!(cleared.draft_text, "a");
        assert_eq!(cleared.edit_mode, state.edit_mode);
    }

    #[test]
    fn test_mark_all_complete() {
        let state = TodoState::seeded();
        let state = state.toggle_checked(state.todos[1].id);

        let state = state.apply(TodoAction::MarkAllComplete).unwrap();

        assert!(state.todos.iter().all(|todo| todo.checked));
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.completed_count(), 2);
        assert_eq!(names(&state.todos), SEED_TODOS);
    }

    #[test]
    fn test_update_draft_text_is_verbatim() {
        let state = TodoState::default().update_draft_text("  spaced  ".to_string());
        assert_eq!(state.draft_text, "  spaced  ");
        let state = state.update_draft_text(String::new());
        assert_eq!(state.draft_text, "");
    }

    #[test]
    fn test_seeded_state() {
        let state = TodoState::seeded();
        assert_eq!(names(&state.todos), SEED_TODOS);
        assert_eq!(state.active_count(), 2);
        assert_eq!(state.edit_mode, EditMode::Creating);
    }

    // ── Property tests ──────────────────────────────────────────────────

    /// Interactions, with rows addressed by index into the current list
    #[derive(Debug, Clone)]
    enum Op {
        Toggle(usize),
        Submit(u32, String),
        ClearCompleted,
        BeginEdit(usize),
        MarkAll,
        Type(String),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..16).prop_map(Op::Toggle),
            (prop_oneof![Just(ENTER_KEY_CODE), 0u32..256], "[a-z ]{0,6}")
                .prop_map(|(key, value)| Op::Submit(key, value)),
            Just(Op::ClearCompleted),
            (0usize..16).prop_map(Op::BeginEdit),
            Just(Op::MarkAll),
            "[a-z ]{0,6}".prop_map(Op::Type),
        ]
    }

    fn to_action(state: &TodoState, op: &Op) -> Option<TodoAction> {
        let pick = |i: usize| state.todos.get(i % state.todos.len().max(1)).cloned();
        match op {
            Op::Toggle(i) => pick(*i).map(|todo| TodoAction::ToggleChecked(todo.id)),
            Op::Submit(key_code, value) => Some(TodoAction::SubmitDraft {
                key_code: *key_code,
                value: value.clone(),
            }),
            Op::ClearCompleted => Some(TodoAction::ClearCompleted),
            Op::BeginEdit(i) => pick(*i).map(TodoAction::BeginEdit),
            Op::MarkAll => Some(TodoAction::MarkAllComplete),
            Op::Type(value) => Some(TodoAction::UpdateDraftText(value.clone())),
        }
    }

    fn run(ops: &[Op]) -> TodoState {
        let mut state = TodoState::seeded();
        for op in ops {
            if let Some(action) = to_action(&state, op) {
                if let Ok(next) = state.apply(action) {
                    state = next;
                }
            }
        }
        state
    }

    fn assert_partition(state: &TodoState) {
        let active = active_todos(&state.todos);
        let completed = completed_todos(&state.todos);
        assert_eq!(active.len() + completed.len(), state.todos.len());

        let mut ids: Vec<String> = active
            .iter()
            .chain(completed.iter())
            .map(|todo| todo.id.to_string())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.todos.len());

        // Projections keep list order
        let in_order = |view: &[Todo]| {
            let positions: Vec<usize> = view
                .iter()
                .map(|v| state.todos.iter().position(|t| t.id == v.id).unwrap())
                .collect();
            positions.windows(2).all(|w| w[0] < w[1])
        };
        assert!(in_order(&active));
        assert!(in_order(&completed));
    }

    proptest! {
        #[test]
        fn prop_views_partition_todos(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let mut state = TodoState::seeded();
            for op in &ops {
                if let Some(action) = to_action(&state, op) {
                    if let Ok(next) = state.apply(action) {
                        state = next;
                    }
                }
                assert_partition(&state);
            }
        }

        #[test]
        fn prop_toggle_preserves_count(
            ops in proptest::collection::vec(op_strategy(), 0..20),
            toggles in proptest::collection::vec(0usize..16, 0..20),
        ) {
            let mut state = run(&ops);
            let count = state.todos.len();
            for i in toggles {
                if let Some(todo) = state.todos.get(i % count.max(1)).cloned() {
                    state = state.toggle_checked(todo.id);
                }
                prop_assert_eq!(state.todos.len(), count);
            }
        }

        #[test]
        fn prop_rejected_submit_leaves_state(
            ops in proptest::collection::vec(op_strategy(), 0..20),
            key_code in 0u32..256,
            value in "[a-z]{1,6}",
        ) {
            let state = run(&ops);
            prop_assume!(key_code != ENTER_KEY_CODE);
            prop_assert_eq!(
                state.apply(TodoAction::SubmitDraft { key_code, value }),
                Err(SubmitRejected::NotEnter(key_code))
            );
            prop_assert_eq!(
                state.apply(TodoAction::SubmitDraft { key_code: ENTER_KEY_CODE, value: String::new() }),
                Err(SubmitRejected::EmptyDraft)
            );
        }

        #[test]
        fn prop_clear_completed_idempotent(ops in proptest::collection::vec(op_strategy(), 0..30)) {
            let state = run(&ops);
            let once = state.clear_completed();
            let twice = once.clear_completed();
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.completed_count(), 0);
            prop_assert_eq!(active_todos(&once.todos), active_todos(&state.todos));
        }

        #[test]
        fn prop_mark_all_complete_idempotent(ops in proptest::collection::vec(op_strategy(), 0..30)) {
            let state = run(&ops);
            let once = state.mark_all_complete();
            prop_assert!(active_todos(&once.todos).is_empty());
            prop_assert_eq!(once.todos.len(), state.todos.len());
            prop_assert_eq!(once.mark_all_complete(), once);
        }
    }
}
