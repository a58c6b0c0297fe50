use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::render;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

#[derive(Clone, Debug, Default)]
pub struct TextInputOptions {
    pub style: Style,
    pub placeholder: String,
    pub placeholder_style: Style,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextInputAction {
    None,
    Changed,
    /// Enter was pressed. The text is left as-is; the owner decides what a confirm means.
    Confirm(KeyEvent),
}

/// Single-line text field.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    value: String,
    cursor: usize, // char index
    scroll_x: u32, // display columns
    options: TextInputOptions,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TextInputOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &TextInputOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TextInputOptions) {
        self.options = options;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text and parks the cursor at its end.
    pub fn set_value(&mut self, text: impl Into<String>) {
        self.value = flatten_newlines(&text.into());
        self.cursor = self.value.chars().count();
        self.scroll_x = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn input(&mut self, event: InputEvent) -> TextInputAction {
        match event {
            InputEvent::Paste(s) => {
                let s = flatten_newlines(&s);
                if s.is_empty() {
                    return TextInputAction::None;
                }
                for ch in s.chars() {
                    self.insert_char(ch);
                }
                TextInputAction::Changed
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(_) => TextInputAction::None,
        }
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.ensure_cursor_visible(area.width);
        buf.set_style(area, self.options.style);

        if self.value.is_empty() && !self.options.placeholder.is_empty() {
            render::render_str_clipped(
                area.x,
                area.y,
                0,
                area.width,
                buf,
                &self.options.placeholder,
                self.options.placeholder_style,
            );
            return;
        }

        render::render_str_clipped(
            area.x,
            area.y,
            self.scroll_x,
            area.width,
            buf,
            &self.value,
            self.options.style,
        );
    }

    /// Terminal cursor position for `area`, if the cursor column is on screen.
    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let x = (self.cursor_display_x() as u32).checked_sub(self.scroll_x)?;
        if x >= area.width as u32 {
            return None;
        }
        Some((area.x + x as u16, area.y))
    }

    fn handle_key(&mut self, key: KeyEvent) -> TextInputAction {
        if key.is_confirm() {
            return TextInputAction::Confirm(key);
        }
        if let Some(c) = key.printable() {
            self.insert_char(c);
            return TextInputAction::Changed;
        }
        match key.code {
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return TextInputAction::None;
                }
                let start = byte_index_from_char_index(&self.value, self.cursor - 1);
                let end = byte_index_from_char_index(&self.value, self.cursor);
                self.value.replace_range(start..end, "");
                self.cursor -= 1;
                TextInputAction::Changed
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_len() {
                    return TextInputAction::None;
                }
                let start = byte_index_from_char_index(&self.value, self.cursor);
                let end = byte_index_from_char_index(&self.value, self.cursor + 1);
                self.value.replace_range(start..end, "");
                TextInputAction::Changed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextInputAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                TextInputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                TextInputAction::None
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                TextInputAction::None
            }
            _ => TextInputAction::None,
        }
    }

    fn insert_char(&mut self, ch: char) {
        let byte_idx = byte_index_from_char_index(&self.value, self.cursor);
        self.value.insert(byte_idx, ch);
        self.cursor += 1;
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn cursor_display_x(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor)
            .map(render::char_width)
            .sum()
    }

    fn ensure_cursor_visible(&mut self, width: u16) {
        // One column is kept free for the cursor past the last char.
        let cx = self.cursor_display_x() as u32;
        let w = width.max(1) as u32;
        if cx < self.scroll_x {
            self.scroll_x = cx;
        } else if cx >= self.scroll_x + w {
            self.scroll_x = cx + 1 - w;
        }
    }
}

fn byte_index_from_char_index(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    match s.char_indices().nth(char_idx) {
        Some((i, _)) => i,
        None => s.len(),
    }
}

fn flatten_newlines(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
