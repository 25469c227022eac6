pub mod cell;
pub mod context;
pub mod position;
pub mod render_trait;
pub mod surface;
