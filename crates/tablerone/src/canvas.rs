#![forbid(unsafe_code)]

//! Character canvas the Unicode renderer paints onto.
//!
//! Positions are display cells. A line of cell content is stored whole in
//! its first slot and the slots it spans are marked covered, so wide
//! graphemes never have to be split across slots.

/// One display cell of the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Slot {
    #[default]
    Blank,
    Glyph(char),
    /// Text starting here; the following cells it occupies are `Covered`.
    Text(String),
    Covered,
}

#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    width: usize,
    height: usize,
    slots: Vec<Slot>,
}

impl Canvas {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            slots: vec![Slot::Blank; width * height],
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Put a glyph at `(x, y)`. Out-of-bounds writes are ignored.
    pub(crate) fn put_glyph(&mut self, x: usize, y: usize, ch: char) {
        if let Some(i) = self.index(x, y) {
            self.slots[i] = Slot::Glyph(ch);
        }
    }

    /// Write `text`, already padded to `width` cells, starting at `(x, y)`.
    pub(crate) fn put_text(&mut self, x: usize, y: usize, width: usize, text: String) {
        if width == 0 {
            return;
        }
        let Some(first) = self.index(x, y) else {
            return;
        };
        let last = x.saturating_add(width).min(self.width);
        self.slots[first] = Slot::Text(text);
        for slot in &mut self.slots[first + 1..first + (last - x)] {
            *slot = Slot::Covered;
        }
    }

    /// Render each row to a string.
    pub(crate) fn into_lines(self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.slots
            .chunks(self.width)
            .map(|row| {
                let mut line = String::with_capacity(row.len());
                for slot in row {
                    match slot {
                        Slot::Blank => line.push(' '),
                        Slot::Glyph(ch) => line.push(*ch),
                        Slot::Text(text) => line.push_str(text),
                        Slot::Covered => {}
                    }
                }
                line
            })
            .collect()
    }
}
