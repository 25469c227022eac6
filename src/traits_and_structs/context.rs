/// Layout shared by every cell of one grid.
///
/// Cells borrow the context, they never own or copy it, so the context has to
/// outlive every cell built against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridContext {
    cell_size: u32,
    grid_width: u32,
}

impl GridContext {
    /// Panics when `cell_size` or `grid_width` is zero. Being `const`, a bad
    /// `static` context is rejected at compile time.
    pub const fn new(cell_size: u32, grid_width: u32) -> Self {
        assert!(cell_size != 0 && grid_width != 0);
        Self {
            cell_size,
            grid_width,
        }
    }

    /// Pixel length of one cell edge.
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of columns, used to split a linear index into (col, row).
    pub const fn grid_width(&self) -> u32 {
        self.grid_width
    }
}
