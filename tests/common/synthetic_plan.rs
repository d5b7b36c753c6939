/// Generates a synthetic floor plan: light background, dark 3px axis
/// strokes and dark filled square columns.
pub struct PlanSketch {
    pub width: usize,
    pub height: usize,
    data: Vec<u8>,
}

const BACKGROUND: u8 = 230;
const INK: u8 = 25;
const STROKE: usize = 3;

impl PlanSketch {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be positive");
        Self {
            width,
            height,
            data: vec![BACKGROUND; width * height],
        }
    }

    /// Vertical axis stroke: columns `x..x+3`, rows `y0..y1`.
    pub fn vertical_line(mut self, x: usize, y0: usize, y1: usize) -> Self {
        for y in y0..y1.min(self.height) {
            for dx in 0..STROKE {
                self.data[y * self.width + x + dx] = INK;
            }
        }
        self
    }

    /// Horizontal axis stroke: rows `y..y+3`, columns `x0..x1`.
    pub fn horizontal_line(mut self, y: usize, x0: usize, x1: usize) -> Self {
        for dy in 0..STROKE {
            for x in x0..x1.min(self.width) {
                self.data[(y + dy) * self.width + x] = INK;
            }
        }
        self
    }

    /// Filled square column with top-left corner (x, y).
    pub fn column(mut self, x: usize, y: usize, side: usize) -> Self {
        for dy in 0..side {
            for dx in 0..side {
                self.data[(y + dy) * self.width + x + dx] = INK;
            }
        }
        self
    }

    pub fn into_buffer(self) -> Vec<u8> {
        self.data
    }
}
