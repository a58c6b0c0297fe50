use crate::keymap::Binding;
use crate::render;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

#[derive(Clone, Debug)]
pub struct HelpBarOptions {
    pub style: Style,
    pub key_style: Style,
    pub separator: String,
}

impl Default for HelpBarOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            key_style: Style::default(),
            separator: " • ".to_string(),
        }
    }
}

/// Key legend for the focused region, drawn on a single row.
#[derive(Clone, Debug)]
pub struct HelpBar {
    bindings: Vec<Binding>,
    options: HelpBarOptions,
}

impl HelpBar {
    pub fn with_options(bindings: Vec<Binding>, options: HelpBarOptions) -> Self {
        Self { bindings, options }
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, self.options.style);
        render::render_spans_clipped(
            area.x,
            area.y,
            area.width,
            buf,
            &self.legend(),
            self.options.style,
        );
    }

    fn legend(&self) -> Vec<Span<'_>> {
        let style = self.options.style;
        self.bindings
            .iter()
            .enumerate()
            .flat_map(|(i, b)| {
                let sep = (i > 0).then(|| Span::styled(self.options.separator.as_str(), style));
                sep.into_iter().chain([
                    Span::styled(b.help_key.as_str(), self.options.key_style),
                    Span::styled(" ", style),
                    Span::styled(b.help_desc.as_str(), style),
                ])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    fn row(buf: &Buffer, w: u16) -> String {
        (0..w)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn keys_take_key_style_and_legend_clips() {
        let bindings = vec![
            Binding::new("tab", "next", Vec::new()),
            Binding::new("esc", "input", Vec::new()),
        ];
        let hb = HelpBar::with_options(
            bindings,
            HelpBarOptions {
                key_style: Style::default().add_modifier(Modifier::BOLD),
                ..Default::default()
            },
        );
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        hb.render_ref(area, &mut buf);
        assert_eq!(row(&buf, 8), "tab next");
        let style = |x: u16| buf.cell((x, 0)).unwrap().style().add_modifier;
        assert!(style(0).contains(Modifier::BOLD));
        assert!(!style(4).contains(Modifier::BOLD));
    }

    #[test]
    fn separator_sits_between_entries() {
        let bindings = vec![
            Binding::new("a", "one", Vec::new()),
            Binding::new("b", "two", Vec::new()),
        ];
        let hb = HelpBar::with_options(
            bindings,
            HelpBarOptions {
                separator: " | ".to_string(),
                ..Default::default()
            },
        );
        let area = Rect::new(0, 0, 13, 1);
        let mut buf = Buffer::empty(area);
        hb.render_ref(area, &mut buf);
        assert_eq!(row(&buf, 13), "a one | b two");
    }
}
