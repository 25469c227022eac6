use log::debug;

use crate::auxiliary::randomizer::StateSource;
use crate::traits_and_structs::cell::{CellStyle, GridCell, DEAD_COLOR};
use crate::traits_and_structs::context::GridContext;
use crate::traits_and_structs::position::Position;
use crate::traits_and_structs::render_trait::Renderable;
use crate::traits_and_structs::surface::DrawingSurface;

/// Colors given to live index-addressed cells, picked by column.
const PALETTE: [&str; 6] = ["#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4"];

/// Which kind of position the board's cells carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Addressing {
    Linear,
    Explicit,
}

/// Row-major collection of cells sharing one context.
///
/// The board knows the grid height, so it is the layer that keeps indices in
/// bounds.
#[derive(Clone, Debug)]
pub struct Board<'ctx> {
    cells: Vec<GridCell<'ctx>>,
    ctx: &'ctx GridContext,
    addressing: Addressing,
    height: usize,
}

impl<'ctx> Board<'ctx> {
    pub fn new_empty(addressing: Addressing, ctx: &'ctx GridContext, height: usize) -> Self {
        assert!(height != 0);
        let width = ctx.grid_width() as usize;
        let size = width.checked_mul(height).expect("too big");
        assert!(u32::try_from(size).is_ok(), "too big");
        let cells = (0..size as u32)
            .map(|i| {
                let (position, style) = match addressing {
                    Addressing::Linear => (Position::Linear(i), CellStyle::Fixed(DEAD_COLOR.to_string())),
                    Addressing::Explicit => (
                        Position::Explicit {
                            x: i % ctx.grid_width(),
                            y: i / ctx.grid_width(),
                        },
                        CellStyle::default(),
                    ),
                };
                GridCell::new(position, false, style, ctx)
            })
            .collect();
        Self {
            cells,
            ctx,
            addressing,
            height,
        }
    }

    pub fn new_random<S: StateSource + ?Sized>(
        addressing: Addressing,
        ctx: &'ctx GridContext,
        height: usize,
        source: &mut S,
    ) -> Self {
        let mut result = Self::new_empty(addressing, ctx, height);
        result.randomize(source);
        result
    }

    pub fn width(&self) -> usize {
        self.ctx.grid_width() as usize
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    pub fn cells(&self) -> &[GridCell<'ctx>] {
        &self.cells
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn randomize<S: StateSource + ?Sized>(&mut self, source: &mut S) {
        for i in 0..self.cells.len() {
            let alive = source.next_alive();
            self.set_state(i, alive);
        }
        debug!("randomized board, {} of {} alive", self.alive_count(), self.cells.len());
    }

    pub fn clear(&mut self) {
        for i in 0..self.cells.len() {
            self.set_state(i, false);
        }
    }

    pub fn invert(&mut self) {
        for i in 0..self.cells.len() {
            let alive = !self.cells[i].is_alive();
            self.set_state(i, alive);
        }
    }

    /// Flips the cell under `(x, y)` and returns its new state. Off-board
    /// positions return `false`.
    pub fn toggle(&mut self, x: isize, y: isize) -> bool {
        if let Some(i) = self.cell_at(x, y) {
            let alive = !self.cells[i].is_alive();
            self.set_state(i, alive);
            alive
        } else {
            false
        }
    }

    pub fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool) {
        // Points before the line enters the board are skipped; it stops once it leaves.
        let mut entered = false;
        for (x, y) in line_drawing::Bresenham::new((x0, y0), (x1, y1)) {
            match self.cell_at(x, y) {
                Some(i) => {
                    entered = true;
                    self.set_state(i, alive);
                }
                None if entered => break,
                None => {}
            }
        }
    }

    pub fn cell_at<I: TryInto<usize>>(&self, x: I, y: I) -> Option<usize> {
        if let (Ok(x), Ok(y)) = (x.try_into(), y.try_into()) {
            if x < self.width() && y < self.height {
                Some(x + y * self.width())
            } else {
                None
            }
        } else {
            None
        }
    }

    fn set_state(&mut self, i: usize, alive: bool) {
        let cell = &mut self.cells[i];
        cell.set_alive(alive);
        if self.addressing == Addressing::Linear {
            let color = if alive {
                PALETTE[cell.pos_x() as usize % PALETTE.len()]
            } else {
                DEAD_COLOR
            };
            cell.set_color(color);
        }
    }
}

impl Renderable for Board<'_> {
    fn render(&self, surface: &mut dyn DrawingSurface) {
        for cell in &self.cells {
            cell.render(surface);
        }
    }
}
