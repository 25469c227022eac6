#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Grid-addressable cells that know whether they are alive and paint
//! themselves onto a drawing surface.

pub mod auxiliary;
pub mod projects;
pub mod traits_and_structs;

pub use traits_and_structs::cell::{CellStyle, GridCell, ALIVE_COLOR, DEAD_COLOR};
pub use traits_and_structs::context::GridContext;
pub use traits_and_structs::position::Position;
pub use traits_and_structs::render_trait::Renderable;
pub use traits_and_structs::surface::{DrawingSurface, PixelRect};
