use super::surface::DrawingSurface;

pub trait Renderable {
    fn render(&self, surface: &mut dyn DrawingSurface);
}
