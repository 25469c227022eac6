pub mod framebuffer;
pub mod randomizer;
pub mod window;
