use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub heading: Style,
    pub accent: Style,
    pub focused: Style,
    pub button: Style,
    pub edit_button: Style,
    pub danger: Style,
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            heading: Style::default().bold(),
            accent: Style::default().cyan(),
            focused: Style::default().reversed(),
            button: Style::default().blue().bold(),
            edit_button: Style::default().yellow(),
            danger: Style::default().red(),
            border: Style::default().dark_gray(),
        }
    }
}
