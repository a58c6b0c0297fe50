use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const TAB_WIDTH: usize = 4;

/// Vertical scrollbar for a list showing `area.height` of `total` rows from `offset`.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, offset: usize, total: usize, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    let viewport = area.height as usize;
    if total <= viewport {
        for dy in 0..area.height {
            buf.set_stringn(area.x, area.y + dy, " ", 1, style);
        }
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((viewport as f64 / total as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;
    let max_offset = (total - viewport) as f64;
    let thumb_top = ((offset as f64 / max_offset) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            " "
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

/// Display columns `ch` takes when drawn by this module. Tabs count as their expansion.
pub fn char_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Writes `input` starting at display column `start_col`, clipped to `max_cols` cells.
///
/// Tabs expand to four spaces. A wide char that would straddle either edge is skipped.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    start_col: u32,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let mut w = ClippedWriter::new(x, y, start_col, max_cols);
    for ch in input.chars() {
        if !w.put(buf, ch, style) {
            break;
        }
    }
    w.written()
}

/// Like [`render_str_clipped`] for styled spans. Spans without a style use `fallback_style`.
pub fn render_spans_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    spans: &[Span<'_>],
    fallback_style: Style,
) -> u16 {
    let mut w = ClippedWriter::new(x, y, 0, max_cols);
    for span in spans {
        let style = if span.style == Style::default() {
            fallback_style
        } else {
            span.style
        };
        for ch in span.content.chars() {
            if !w.put(buf, ch, style) {
                return w.written();
            }
        }
    }
    w.written()
}

pub fn str_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

struct ClippedWriter {
    x: u16,
    y: u16,
    start_col: usize,
    max_cols: usize,
    col: usize,
    out_cols: usize,
}

impl ClippedWriter {
    fn new(x: u16, y: u16, start_col: u32, max_cols: u16) -> Self {
        Self {
            x,
            y,
            start_col: start_col as usize,
            max_cols: max_cols as usize,
            col: 0,
            out_cols: 0,
        }
    }

    fn written(&self) -> u16 {
        self.out_cols as u16
    }

    /// Returns false once the clip width is exhausted.
    fn put(&mut self, buf: &mut Buffer, ch: char, style: Style) -> bool {
        if ch == '\t' {
            for _ in 0..TAB_WIDTH {
                if !self.put(buf, ' ', style) {
                    return false;
                }
            }
            return true;
        }

        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            return true;
        }
        if self.col < self.start_col {
            self.col += w;
            return true;
        }
        if self.out_cols + w > self.max_cols {
            return false;
        }

        let cx = self.x + self.out_cols as u16;
        let mut tmp = [0u8; 4];
        if let Some(cell) = buf.cell_mut((cx, self.y)) {
            cell.set_style(style);
            cell.set_symbol(ch.encode_utf8(&mut tmp));
        }
        if w == 2 {
            if let Some(cell) = buf.cell_mut((cx + 1, self.y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
        }
        self.col += w;
        self.out_cols += w;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, w: u16) -> String {
        (0..w)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn clips_and_scrolls() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let n = render_str_clipped(0, 0, 2, 3, &mut buf, "abcdef", Style::default());
        assert_eq!(n, 3);
        assert_eq!(row(&buf, 3), "cde");
    }

    #[test]
    fn expands_tabs() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        render_str_clipped(0, 0, 0, 6, &mut buf, "\t1", Style::default());
        assert!(row(&buf, 6).starts_with("    1"));
    }

    #[test]
    fn tab_width_matches_expansion() {
        assert_eq!(char_width('\t'), TAB_WIDTH);
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('你'), 2);
    }

    #[test]
    fn scrollbar_thumb_tracks_offset() {
        let area = Rect::new(0, 0, 1, 4);
        let col = |buf: &Buffer| -> String {
            (0..4)
                .map(|y| buf.cell((0, y)).unwrap().symbol().to_string())
                .collect()
        };

        let mut buf = Buffer::empty(area);
        render_scrollbar(area, &mut buf, 0, 8, Style::default());
        assert_eq!(col(&buf), "██  ");

        let mut buf = Buffer::empty(area);
        render_scrollbar(area, &mut buf, 4, 8, Style::default());
        assert_eq!(col(&buf), "  ██");

        let mut buf = Buffer::empty(area);
        render_scrollbar(area, &mut buf, 0, 3, Style::default());
        assert_eq!(col(&buf), "    ");
    }

    #[test]
    fn wide_chars_do_not_overflow() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let n = render_str_clipped(0, 0, 0, 3, &mut buf, "你好", Style::default());
        assert_eq!(n, 2);
    }

    #[test]
    fn spans_fall_back_to_base_style() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let bold = Style::default().add_modifier(ratatui::style::Modifier::BOLD);
        let spans = vec![Span::raw("ab"), Span::styled("cd", bold)];
        render_spans_clipped(0, 0, 4, &mut buf, &spans, Style::default());
        assert_eq!(row(&buf, 4), "abcd");
        assert_eq!(buf.cell((2, 0)).unwrap().style().add_modifier, bold.add_modifier);
    }
}
