//! The to-do list widget.
//!
//! [`TodoView`] wires a [`TodoStore`] to a [`TextInput`], a list of rows with "Edit"/"Delete"
//! controls, an action button and a "Reset" control. Input events are translated into store
//! [`Command`]s; every store outcome goes through one post-action step that resyncs the text
//! field with the draft and asks the [`FocusController`] to return focus to the field.
//!
//! The widget is event-loop agnostic: feed it [`InputEvent`]s, call
//! [`TodoView::render_ref`] each frame, and place the terminal cursor at
//! [`TodoView::cursor_pos`].
use crate::focus::FocusController;
use crate::focus::FocusTarget;
use crate::help::HelpBar;
use crate::help::HelpBarOptions;
use crate::input::InputEvent;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::keymap::TodoKeymap;
use crate::render;
use crate::store::Command;
use crate::store::ItemId;
use crate::store::StoreAction;
use crate::store::TodoStore;
use crate::text_input::TextInput;
use crate::text_input::TextInputAction;
use crate::text_input::TextInputOptions;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Widget;

#[derive(Clone, Debug)]
pub struct TodoViewOptions {
    pub title: String,
    pub placeholder: String,
    pub empty_text: String,
    pub add_label: String,
    pub update_label: String,
    pub edit_label: String,
    pub delete_label: String,
    pub reset_label: String,
    pub show_border: bool,
    pub show_help: bool,
    pub keymap: TodoKeymap,
}

impl Default for TodoViewOptions {
    fn default() -> Self {
        Self {
            title: "Add Your Tasks Here...".to_string(),
            placeholder: "Enter a task...".to_string(),
            empty_text: "No tasks yet".to_string(),
            add_label: "Add".to_string(),
            update_label: "Update".to_string(),
            edit_label: "Edit".to_string(),
            delete_label: "Delete".to_string(),
            reset_label: "Reset".to_string(),
            show_border: true,
            show_help: true,
            keymap: TodoKeymap::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoViewAction {
    /// The event was not handled.
    None,
    /// Only presentation changed (cursor, focus, scroll).
    Redraw,
    Store(StoreAction),
}

/// Clickable regions recorded during the last render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Input,
    ActionButton,
    Edit(ItemId),
    Delete(ItemId),
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Hit {
    area: Rect,
    target: HitTarget,
}

#[derive(Clone, Debug)]
pub struct TodoView {
    store: TodoStore,
    input: TextInput,
    focus: FocusController,
    options: TodoViewOptions,

    list_cursor: usize,
    list_offset: usize,
    list_height: u16,
    reveal_cursor: bool,

    input_area: Option<Rect>,
    hits: Vec<Hit>,
}

impl Default for TodoView {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoView {
    pub fn new() -> Self {
        Self::with_options(TodoViewOptions::default())
    }

    pub fn with_options(options: TodoViewOptions) -> Self {
        let mut v = Self {
            store: TodoStore::default(),
            input: TextInput::default(),
            focus: FocusController::default(),
            options: TodoViewOptions::default(),
            list_cursor: 0,
            list_offset: 0,
            list_height: 0,
            reveal_cursor: false,
            input_area: None,
            hits: Vec::new(),
        };
        v.set_options(options);
        v
    }

    pub fn with_store(mut self, store: TodoStore) -> Self {
        self.store = store;
        self.input.set_value(self.store.draft());
        self.clamp_list_cursor();
        self
    }

    pub fn options(&self) -> &TodoViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TodoViewOptions) {
        self.input.set_options(TextInputOptions {
            placeholder: options.placeholder.clone(),
            ..self.input.options().clone()
        });
        self.options = options;
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus.current()
    }

    pub fn is_mounted(&self) -> bool {
        self.focus.is_mounted()
    }

    pub fn list_cursor(&self) -> Option<usize> {
        (!self.store.is_empty()).then_some(self.list_cursor)
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hits
            .iter()
            .find(|h| contains(h.area, x, y))
            .map(|h| h.target)
    }

    /// Button label for the current edit state.
    pub fn action_label(&self) -> &str {
        if self.store.mode().is_editing() {
            &self.options.update_label
        } else {
            &self.options.add_label
        }
    }

    /// Applies a store command and runs the post-action step.
    pub fn dispatch(&mut self, command: Command) -> TodoViewAction {
        let action = self.store.apply(command);
        self.after_store_action(action)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> TodoViewAction {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Paste(s) => {
                if self.focus.current() != FocusTarget::Input {
                    return TodoViewAction::None;
                }
                self.handle_input_action(InputEvent::Paste(s))
            }
            InputEvent::Mouse(m) => self.handle_mouse(m),
        }
    }

    /// Terminal cursor position while the text field has focus.
    pub fn cursor_pos(&self) -> Option<(u16, u16)> {
        if !self.focus.is_input_focused() {
            return None;
        }
        self.input.cursor_pos(self.input_area?)
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.hits.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let inner = if self.options.show_border {
            let block = Block::bordered().border_style(theme.border);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        buf.set_style(inner, theme.text_primary);

        let help_h = u16::from(self.options.show_help);
        let [heading, input_row, _, list_area, reset_row, help_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(help_h),
        ])
        .areas(inner);

        self.render_heading(heading, buf, theme);
        self.render_input_row(input_row, buf, theme);
        self.render_list(list_area, buf, theme);
        self.render_reset(reset_row, buf, theme);
        if self.options.show_help {
            self.render_help(help_row, buf, theme);
        }

        if self.input_area.is_some() {
            self.focus.mount();
        }
    }

    fn after_store_action(&mut self, action: StoreAction) -> TodoViewAction {
        if action.is_none() {
            return TodoViewAction::None;
        }
        if self.input.value() != self.store.draft() {
            self.input.set_value(self.store.draft());
        }
        if let StoreAction::Added(_) = action {
            self.list_cursor = self.store.len().saturating_sub(1);
            self.reveal_cursor = true;
        }
        self.clamp_list_cursor();
        self.focus.settle(!self.store.is_empty());
        if action.requests_focus() {
            self.focus.request_input();
        }
        TodoViewAction::Store(action)
    }

    fn handle_key(&mut self, key: KeyEvent) -> TodoViewAction {
        let keymap = &self.options.keymap;
        let has_items = !self.store.is_empty();
        if keymap.next_focus.matches(&key) {
            self.focus.cycle(has_items, false);
            return TodoViewAction::Redraw;
        }
        if keymap.prev_focus.matches(&key) {
            self.focus.cycle(has_items, true);
            return TodoViewAction::Redraw;
        }

        match self.focus.current() {
            FocusTarget::Input => self.handle_input_action(InputEvent::Key(key)),
            FocusTarget::AddButton => {
                if keymap.activate.matches(&key) {
                    self.dispatch(Command::Submit)
                } else if keymap.back_to_input.matches(&key) {
                    self.focus.focus(FocusTarget::Input);
                    TodoViewAction::Redraw
                } else {
                    TodoViewAction::None
                }
            }
            FocusTarget::ResetButton => {
                if keymap.activate.matches(&key) {
                    self.dispatch(Command::Reset)
                } else if keymap.back_to_input.matches(&key) {
                    self.focus.focus(FocusTarget::Input);
                    TodoViewAction::Redraw
                } else {
                    TodoViewAction::None
                }
            }
            FocusTarget::List => self.handle_list_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> TodoViewAction {
        let keymap = &self.options.keymap;
        if keymap.back_to_input.matches(&key) {
            self.focus.focus(FocusTarget::Input);
            return TodoViewAction::Redraw;
        }
        if keymap.cursor_up.matches(&key) {
            return self.move_list_cursor(-1);
        }
        if keymap.cursor_down.matches(&key) {
            return self.move_list_cursor(1);
        }

        let Some(id) = self.store.items().get(self.list_cursor).map(|i| i.id) else {
            return TodoViewAction::None;
        };
        if keymap.edit.matches(&key) {
            self.dispatch(Command::BeginEdit(id))
        } else if keymap.delete.matches(&key) {
            self.dispatch(Command::Delete(id))
        } else {
            TodoViewAction::None
        }
    }

    fn handle_input_action(&mut self, event: InputEvent) -> TodoViewAction {
        match self.input.input(event) {
            TextInputAction::Changed => {
                self.dispatch(Command::SetDraft(self.input.value().to_string()))
            }
            TextInputAction::Confirm(key) => self.dispatch(Command::SubmitOnKey(key)),
            TextInputAction::None => TodoViewAction::Redraw,
        }
    }

    fn handle_mouse(&mut self, m: MouseEvent) -> TodoViewAction {
        match m.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(target) = self.hit_test(m.x, m.y) else {
                    return TodoViewAction::None;
                };
                match target {
                    HitTarget::Input => {
                        self.focus.focus(FocusTarget::Input);
                        TodoViewAction::Redraw
                    }
                    HitTarget::ActionButton => self.dispatch(Command::Submit),
                    HitTarget::Edit(id) => self.dispatch(Command::BeginEdit(id)),
                    HitTarget::Delete(id) => self.dispatch(Command::Delete(id)),
                    HitTarget::Reset => self.dispatch(Command::Reset),
                }
            }
            MouseEventKind::ScrollUp => self.scroll_list(-1),
            MouseEventKind::ScrollDown => self.scroll_list(1),
            _ => TodoViewAction::None,
        }
    }

    fn move_list_cursor(&mut self, delta: i64) -> TodoViewAction {
        let len = self.store.len();
        if len == 0 {
            return TodoViewAction::None;
        }
        let next = (self.list_cursor as i64 + delta).clamp(0, len as i64 - 1) as usize;
        if next == self.list_cursor {
            return TodoViewAction::None;
        }
        self.list_cursor = next;
        TodoViewAction::Redraw
    }

    fn scroll_list(&mut self, delta: i64) -> TodoViewAction {
        let max = self
            .store
            .len()
            .saturating_sub(self.list_height.max(1) as usize);
        let next = (self.list_offset as i64 + delta).clamp(0, max as i64) as usize;
        if next == self.list_offset {
            return TodoViewAction::None;
        }
        self.list_offset = next;
        TodoViewAction::Redraw
    }

    fn clamp_list_cursor(&mut self) {
        self.list_cursor = self.list_cursor.min(self.store.len().saturating_sub(1));
    }

    fn ensure_list_cursor_visible(&mut self) {
        let h = self.list_height as usize;
        let max = self.store.len().saturating_sub(h);
        // A freshly added row is scrolled into view whatever has focus.
        if h > 0 && (self.reveal_cursor || self.focus.current() == FocusTarget::List) {
            if self.list_cursor < self.list_offset {
                self.list_offset = self.list_cursor;
            } else if self.list_cursor >= self.list_offset + h {
                self.list_offset = self.list_cursor + 1 - h;
            }
            self.reveal_cursor = false;
        }
        self.list_offset = self.list_offset.min(max);
    }

    fn render_heading(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        render_centered(area, buf, &self.options.title, theme.heading);
    }

    fn render_input_row(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            self.input_area = None;
            return;
        }
        let focus = self.focus.current();
        let label = format!("[ {} ]", self.action_label());
        let button_w = render::str_width(&label).min(area.width);
        let button = Rect::new(area.x + area.width - button_w, area.y, button_w, 1);
        let button_style = if focus == FocusTarget::AddButton {
            theme.button.patch(theme.focused)
        } else {
            theme.button
        };
        render::render_str_clipped(button.x, button.y, 0, button.width, buf, &label, button_style);
        self.hits.push(Hit {
            area: button,
            target: HitTarget::ActionButton,
        });

        // "› " prompt, then the field, then one blank column before the button.
        let field_w = area.width.saturating_sub(button_w + 1);
        let prompt_style = if focus == FocusTarget::Input {
            theme.accent
        } else {
            theme.text_muted
        };
        render::render_str_clipped(area.x, area.y, 0, field_w.min(2), buf, "› ", prompt_style);
        let field = Rect::new(area.x + 2.min(field_w), area.y, field_w.saturating_sub(2), 1);
        self.input.set_options(TextInputOptions {
            style: theme.text_primary,
            placeholder_style: theme.text_muted,
            ..self.input.options().clone()
        });
        self.input.render_ref(field, buf);

        if field.width == 0 {
            self.input_area = None;
            return;
        }
        self.input_area = Some(field);
        self.hits.push(Hit {
            area: field,
            target: HitTarget::Input,
        });
    }

    fn render_list(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.list_height = area.height;
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.store.is_empty() {
            render_centered(
                Rect::new(area.x, area.y, area.width, 1),
                buf,
                &self.options.empty_text,
                theme.text_muted,
            );
            return;
        }

        self.ensure_list_cursor_visible();
        let (area, scrollbar_x) = if self.store.len() > area.height as usize && area.width >= 2 {
            (
                Rect::new(area.x, area.y, area.width - 1, area.height),
                Some(area.x + area.width - 1),
            )
        } else {
            (area, None)
        };
        let list_focused = self.focus.current() == FocusTarget::List;
        let edit = format!("[{}]", self.options.edit_label);
        let delete = format!("[{}]", self.options.delete_label);
        let edit_w = render::str_width(&edit);
        let delete_w = render::str_width(&delete);
        let controls_w = edit_w + 1 + delete_w;

        let visible = self
            .store
            .items()
            .iter()
            .enumerate()
            .skip(self.list_offset)
            .take(area.height as usize);
        for (row, (idx, item)) in visible.enumerate() {
            let y = area.y + row as u16;
            let is_cursor = list_focused && idx == self.list_cursor;
            let title_style = if is_cursor {
                theme.text_primary.patch(theme.focused)
            } else {
                theme.text_primary
            };

            // Controls need room for themselves plus at least a couple of title columns.
            let show_controls = area.width > controls_w + 3;
            let title_w = if show_controls {
                area.width - controls_w - 1
            } else {
                area.width
            };
            let row_area = Rect::new(area.x, y, title_w, 1);
            buf.set_style(row_area, title_style);
            render::render_str_clipped(
                area.x + 1,
                y,
                0,
                title_w.saturating_sub(1),
                buf,
                &item.title,
                title_style,
            );

            if !show_controls {
                continue;
            }
            let edit_area = Rect::new(area.x + area.width - controls_w, y, edit_w, 1);
            let delete_area = Rect::new(edit_area.x + edit_w + 1, y, delete_w, 1);
            render::render_str_clipped(
                edit_area.x,
                y,
                0,
                edit_w,
                buf,
                &edit,
                theme.edit_button,
            );
            render::render_str_clipped(
                delete_area.x,
                y,
                0,
                delete_w,
                buf,
                &delete,
                theme.danger,
            );
            self.hits.push(Hit {
                area: edit_area,
                target: HitTarget::Edit(item.id),
            });
            self.hits.push(Hit {
                area: delete_area,
                target: HitTarget::Delete(item.id),
            });
        }

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, area.y, 1, area.height),
                buf,
                self.list_offset,
                self.store.len(),
                theme.text_muted,
            );
        }
    }

    fn render_reset(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if self.store.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }
        let label = format!("[ {} ]", self.options.reset_label);
        let style = if self.focus.current() == FocusTarget::ResetButton {
            theme.text_primary.patch(theme.focused)
        } else {
            theme.text_primary
        };
        let w = render::str_width(&label).min(area.width);
        let x = area.x + (area.width - w) / 2;
        render::render_str_clipped(x, area.y, 0, w, buf, &label, style);
        self.hits.push(Hit {
            area: Rect::new(x, area.y, w, 1),
            target: HitTarget::Reset,
        });
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let bindings = self.options.keymap.help_for(self.focus.current());
        HelpBar::with_options(
            bindings,
            HelpBarOptions {
                style: theme.text_muted,
                key_style: theme.accent,
                ..Default::default()
            },
        )
        .render_ref(area, buf);
    }
}

fn render_centered(area: Rect, buf: &mut Buffer, text: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let w = render::str_width(text).min(area.width);
    let x = area.x + (area.width - w) / 2;
    render::render_str_clipped(x, area.y, 0, area.width - (x - area.x), buf, text, style);
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::keymap::key;
    use crate::keymap::key_char;
    use crate::store::IdGenerator;

    fn view() -> TodoView {
        TodoView::new().with_store(TodoStore::with_id_generator(IdGenerator::sequential(1)))
    }

    fn mounted() -> TodoView {
        let mut v = view();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        v.render_ref(area, &mut buf, &Theme::default());
        v
    }

    fn type_str(v: &mut TodoView, s: &str) {
        for c in s.chars() {
            v.handle_event(InputEvent::Key(key_char(c)));
        }
    }

    fn press(v: &mut TodoView, code: KeyCode) -> TodoViewAction {
        v.handle_event(InputEvent::Key(key(code)))
    }

    #[test]
    fn first_render_mounts_and_focuses_input() {
        let mut v = view();
        assert!(!v.is_mounted());
        assert_eq!(v.cursor_pos(), None);
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        v.render_ref(area, &mut buf, &Theme::default());
        assert!(v.is_mounted());
        assert_eq!(v.focus(), FocusTarget::Input);
        assert!(v.cursor_pos().is_some());
    }

    #[test]
    fn typing_updates_draft_and_enter_adds() {
        let mut v = mounted();
        type_str(&mut v, "Buy milk");
        assert_eq!(v.store().draft(), "Buy milk");
        assert_eq!(
            press(&mut v, KeyCode::Enter),
            TodoViewAction::Store(StoreAction::Added(ItemId(1)))
        );
        assert_eq!(v.store().items()[0].title, "Buy milk");
        assert_eq!(v.store().draft(), "");
        assert_eq!(v.input.value(), "");
    }

    #[test]
    fn list_edit_loads_title_and_returns_focus() {
        let mut v = mounted();
        type_str(&mut v, "a");
        press(&mut v, KeyCode::Enter);
        press(&mut v, KeyCode::Tab);
        press(&mut v, KeyCode::Tab);
        assert_eq!(v.focus(), FocusTarget::List);

        v.handle_event(InputEvent::Key(key_char('e')));
        assert_eq!(v.focus(), FocusTarget::Input);
        assert_eq!(v.input.value(), "a");
        assert_eq!(v.action_label(), "Update");

        type_str(&mut v, "b");
        press(&mut v, KeyCode::Enter);
        assert_eq!(v.store().items()[0].title, "ab");
        assert_eq!(v.action_label(), "Add");
    }

    #[test]
    fn deleting_last_item_pulls_focus_back() {
        let mut v = mounted();
        type_str(&mut v, "a");
        press(&mut v, KeyCode::Enter);
        v.handle_event(InputEvent::Key(key(KeyCode::BackTab)));
        assert_eq!(v.focus(), FocusTarget::ResetButton);
        v.handle_event(InputEvent::Key(key(KeyCode::BackTab)));
        assert_eq!(v.focus(), FocusTarget::List);
        press(&mut v, KeyCode::Delete);
        assert!(v.store().is_empty());
        assert_eq!(v.focus(), FocusTarget::Input);
    }

    #[test]
    fn blank_enter_does_not_move_focus_or_change_state() {
        let mut v = mounted();
        type_str(&mut v, "  ");
        assert_eq!(press(&mut v, KeyCode::Enter), TodoViewAction::None);
        assert_eq!(v.store().draft(), "  ");
        assert!(v.store().is_empty());
    }

    #[test]
    fn submit_from_add_button_returns_focus_to_input() {
        let mut v = mounted();
        type_str(&mut v, "a");
        press(&mut v, KeyCode::Tab);
        assert_eq!(v.focus(), FocusTarget::AddButton);
        assert_eq!(
            press(&mut v, KeyCode::Enter),
            TodoViewAction::Store(StoreAction::Added(ItemId(1)))
        );
        assert_eq!(v.focus(), FocusTarget::Input);
    }

    #[test]
    fn reset_from_reset_button_returns_focus_to_input() {
        let mut v = mounted();
        type_str(&mut v, "a");
        press(&mut v, KeyCode::Enter);
        type_str(&mut v, "half typed");
        press(&mut v, KeyCode::BackTab);
        assert_eq!(v.focus(), FocusTarget::ResetButton);
        assert_eq!(
            press(&mut v, KeyCode::Enter),
            TodoViewAction::Store(StoreAction::Reset)
        );
        assert!(v.store().is_empty());
        assert_eq!(v.input.value(), "");
        assert_eq!(v.focus(), FocusTarget::Input);
    }

    #[test]
    fn delete_with_items_left_returns_focus_to_input() {
        let mut v = mounted();
        type_str(&mut v, "a");
        press(&mut v, KeyCode::Enter);
        type_str(&mut v, "b");
        press(&mut v, KeyCode::Enter);
        press(&mut v, KeyCode::Tab);
        press(&mut v, KeyCode::Tab);
        assert_eq!(v.focus(), FocusTarget::List);

        v.handle_event(InputEvent::Key(key_char('d')));
        assert_eq!(v.store().len(), 1);
        assert_eq!(v.focus(), FocusTarget::Input);
    }

    #[test]
    fn default_view_matches_new() {
        let mut v = TodoView::default();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        v.render_ref(area, &mut buf, &Theme::default());
        let screen: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("Enter a task..."));
        assert!(screen.contains("No tasks yet"));
        assert_eq!(v.action_label(), "Add");
    }

    #[test]
    fn added_items_scroll_into_view_without_list_focus() {
        let mut v = view();
        let area = Rect::new(0, 0, 44, 10);
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);
        v.render_ref(area, &mut buf, &theme);
        for i in 0..10 {
            type_str(&mut v, &format!("task{i}"));
            press(&mut v, KeyCode::Enter);
        }
        assert_eq!(v.focus(), FocusTarget::Input);

        let mut buf = Buffer::empty(area);
        v.render_ref(area, &mut buf, &theme);
        let rows: Vec<String> = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect()
            })
            .collect();
        assert!(rows.iter().any(|r| r.contains("task9")));
        assert!(!rows.iter().any(|r| r.contains("task0")));

        let list_rows = v.list_height;
        assert!(list_rows > 0 && (list_rows as usize) < 10);
        let thumb = rows
            .iter()
            .filter(|r| r.chars().nth(42) == Some('█'))
            .count();
        assert!(thumb >= 1);
    }

    #[test]
    fn focus_requests_before_mount_are_skipped() {
        let mut v = view();
        v.dispatch(Command::SetDraft("x".into()));
        v.focus.focus(FocusTarget::AddButton);
        v.dispatch(Command::Submit);
        assert_eq!(v.store().len(), 1);
        assert_eq!(v.focus(), FocusTarget::AddButton);
    }

    #[test]
    fn clicks_hit_row_controls() {
        let mut v = mounted();
        type_str(&mut v, "first");
        press(&mut v, KeyCode::Enter);
        type_str(&mut v, "second");
        press(&mut v, KeyCode::Enter);

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        v.render_ref(area, &mut buf, &theme);

        let delete_first = v
            .hits
            .iter()
            .find(|h| h.target == HitTarget::Delete(ItemId(1)))
            .map(|h| h.area)
            .unwrap();
        v.handle_event(InputEvent::Mouse(MouseEvent::click(
            delete_first.x,
            delete_first.y,
        )));
        assert_eq!(v.store().len(), 1);
        assert_eq!(v.store().items()[0].title, "second");
    }
}
