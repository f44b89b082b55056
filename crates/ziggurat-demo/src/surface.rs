use std::fmt;

/// A character-cell drawing surface.
///
/// The demo's concrete stand-in for the engine's opaque surface type —
/// layers write cells, the host prints the result. Out-of-bounds writes
/// are silently dropped so layers never need to clip.
pub struct TextSurface {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl TextSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Fills every cell with `fill`.
    pub fn clear(&mut self, fill: char) {
        self.cells.fill(fill);
    }

    /// Writes one cell. No-op outside the surface.
    pub fn put(&mut self, x: i32, y: i32, ch: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = ch;
        }
    }

    /// Writes a string left to right starting at `(x, y)`, clipped to the
    /// surface.
    pub fn text(&mut self, x: i32, y: i32, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch);
        }
    }

    /// Draws a rectangular border on the surface's outer edge.
    pub fn border(&mut self) {
        let (w, h) = (self.width as i32, self.height as i32);
        for x in 0..w {
            self.put(x, 0, '-');
            self.put(x, h - 1, '-');
        }
        for y in 0..h {
            self.put(0, y, '|');
            self.put(w - 1, y, '|');
        }
        self.put(0, 0, '+');
        self.put(w - 1, 0, '+');
        self.put(0, h - 1, '+');
        self.put(w - 1, h - 1, '+');
    }

    pub fn row(&self, y: usize) -> String {
        self.cells[y * self.width..(y + 1) * self.width]
            .iter()
            .collect()
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            writeln!(f, "{}", self.row(y))?;
        }
        Ok(())
    }
}
