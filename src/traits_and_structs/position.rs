use super::context::GridContext;

/// Where a cell sits in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// Row-major index, split into (col, row) with the context's width.
    Linear(u32),
    /// Column and row stored as-is.
    Explicit { x: u32, y: u32 },
}

impl Position {
    /// Grid coordinates as `(col, row)`. Recomputed on every call.
    pub fn resolve(&self, ctx: &GridContext) -> (u32, u32) {
        match *self {
            Position::Linear(index) => (index % ctx.grid_width(), index / ctx.grid_width()),
            Position::Explicit { x, y } => (x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_linear_boundaries() {
        let ctx = GridContext::new(10, 5);
        assert_eq!(Position::Linear(0).resolve(&ctx), (0, 0));
        assert_eq!(Position::Linear(4).resolve(&ctx), (4, 0));
        assert_eq!(Position::Linear(5).resolve(&ctx), (0, 1));
        assert_eq!(Position::Linear(17).resolve(&ctx), (2, 3));

        let wide = GridContext::new(1, u32::MAX);
        assert_eq!(Position::Linear(u32::MAX - 1).resolve(&wide), (u32::MAX - 1, 0));
        assert_eq!(Position::Linear(u32::MAX).resolve(&wide), (0, 1));
    }

    proptest! {
        #[test]
        fn prop_linear_decomposition(width in 1..=u32::MAX, index: u32) {
            let ctx = GridContext::new(1, width);
            let (x, y) = Position::Linear(index).resolve(&ctx);
            prop_assert!(x < width);
            prop_assert_eq!(y as u64 * width as u64 + x as u64, index as u64);
        }

        #[test]
        fn prop_explicit_is_identity(width in 1..=u32::MAX, x: u32, y: u32) {
            let ctx = GridContext::new(1, width);
            prop_assert_eq!(Position::Explicit { x, y }.resolve(&ctx), (x, y));
        }
    }

    #[test]
    fn test_explicit_ignores_width() {
        let narrow = GridContext::new(12, 1);
        let wide = GridContext::new(12, 100);
        let pos = Position::Explicit { x: 3, y: 5 };
        assert_eq!(pos.resolve(&narrow), (3, 5));
        assert_eq!(pos.resolve(&wide), (3, 5));
    }
}
