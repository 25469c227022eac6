use super::context::GridContext;
use super::position::Position;
use super::render_trait::Renderable;
use super::surface::{DrawingSurface, PixelRect};
use crate::auxiliary::randomizer::StateSource;

pub const ALIVE_COLOR: &str = "#000000";
pub const DEAD_COLOR: &str = "#FFFFFF";

/// How a cell picks its fill style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellStyle {
    /// Painted with this string whatever the state.
    Fixed(String),
    /// One color while alive, another while dead.
    ByState { alive: String, dead: String },
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle::ByState {
            alive: ALIVE_COLOR.to_string(),
            dead: DEAD_COLOR.to_string(),
        }
    }
}

/// One square of the grid.
///
/// The cell only borrows its [`GridContext`]. Screen coordinates are derived
/// from the position and the context each time they are asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell<'ctx> {
    position: Position,
    alive: bool,
    style: CellStyle,
    ctx: &'ctx GridContext,
}

impl<'ctx> GridCell<'ctx> {
    pub fn new(position: Position, alive: bool, style: CellStyle, ctx: &'ctx GridContext) -> Self {
        Self {
            position,
            alive,
            style,
            ctx,
        }
    }

    /// Index-addressed cell painted with a fixed color.
    pub fn linear(index: u32, alive: bool, color: impl Into<String>, ctx: &'ctx GridContext) -> Self {
        Self::new(Position::Linear(index), alive, CellStyle::Fixed(color.into()), ctx)
    }

    /// Cell at an explicit column and row, black while alive and white while dead.
    pub fn explicit(x: u32, y: u32, alive: bool, ctx: &'ctx GridContext) -> Self {
        Self::new(Position::Explicit { x, y }, alive, CellStyle::default(), ctx)
    }

    /// Initial state drawn from `source`.
    pub fn seeded<S: StateSource + ?Sized>(
        position: Position,
        style: CellStyle,
        ctx: &'ctx GridContext,
        source: &mut S,
    ) -> Self {
        Self::new(position, source.next_alive(), style, ctx)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn context(&self) -> &'ctx GridContext {
        self.ctx
    }

    pub fn pos_x(&self) -> u32 {
        self.coords().0
    }

    pub fn pos_y(&self) -> u32 {
        self.coords().1
    }

    pub fn coords(&self) -> (u32, u32) {
        self.position.resolve(self.ctx)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive
    }

    pub fn style(&self) -> &CellStyle {
        &self.style
    }

    /// Replaces the style with a fixed color. Any string is accepted.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.style = CellStyle::Fixed(color.into());
    }

    /// Fill style for the current state.
    pub fn color(&self) -> &str {
        match &self.style {
            CellStyle::Fixed(color) => color,
            CellStyle::ByState { alive, dead } => {
                if self.alive {
                    alive
                } else {
                    dead
                }
            }
        }
    }

    /// Square painted by [`render`](Self::render). Saturates instead of
    /// overflowing, which only happens far outside any real surface.
    pub fn bounds(&self) -> PixelRect {
        let (x, y) = self.coords();
        let size = self.ctx.cell_size();
        PixelRect::square(x.saturating_mul(size), y.saturating_mul(size), size)
    }
}

impl Renderable for GridCell<'_> {
    fn render(&self, surface: &mut dyn DrawingSurface) {
        surface.set_fill_style(self.color());
        surface.fill_rect(self.bounds());
    }
}
