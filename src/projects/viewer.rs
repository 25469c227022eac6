use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::framebuffer::FrameSurface;
use crate::auxiliary::randomizer::{BernoulliSource, INITIAL_FILL};
use crate::auxiliary::window::{create_window, CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::projects::board::{Addressing, Board};
use crate::projects::error::ViewerError;
use crate::traits_and_structs::context::GridContext;
use crate::traits_and_structs::render_trait::Renderable;

static CONTEXT: GridContext = GridContext::new(CELL_SIZE, SCREEN_WIDTH / CELL_SIZE);
const GRID_HEIGHT: usize = (SCREEN_HEIGHT / CELL_SIZE) as usize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    pub addressing: Addressing,
    pub fill: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            addressing: Addressing::Linear,
            fill: INITIAL_FILL,
        }
    }
}

impl ViewerConfig {
    /// `None` when the user asked to quit.
    pub fn parse_addressing(input: &str) -> Result<Option<Addressing>, ViewerError> {
        match input.trim() {
            "1" => Ok(Some(Addressing::Linear)),
            "2" => Ok(Some(Addressing::Explicit)),
            "q" | "quit" => Ok(None),
            other => Err(ViewerError::Input(other.to_string())),
        }
    }

    /// Empty input keeps the default fill.
    pub fn parse_fill(input: &str) -> Result<f32, ViewerError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(INITIAL_FILL);
        }
        match input.parse::<f32>() {
            Ok(p) if (0.0..=1.0).contains(&p) => Ok(p),
            _ => Err(ViewerError::Input(input.to_string())),
        }
    }
}

pub fn run_viewer(config: ViewerConfig) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window("Grid Cells", &event_loop)?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);

    let mut source = BernoulliSource::from_entropy(config.fill)?;
    let mut board = Board::new_random(config.addressing, &CONTEXT, GRID_HEIGHT, &mut source);
    let mut pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture)?;
    info!(
        "{}x{} {:?} board, fill {}",
        board.width(),
        board.height(),
        config.addressing,
        config.fill
    );

    let mut draw_state: Option<bool> = None;

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            let mut surface = FrameSurface::new(pixels.get_frame(), SCREEN_WIDTH, SCREEN_HEIGHT);
            board.render(&mut surface);
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::R) {
                info!("reseeded");
                board.randomize(&mut source);
            }
            if input.key_pressed(VirtualKeyCode::C) {
                info!("cleared");
                board.clear();
            }
            if input.key_pressed(VirtualKeyCode::I) {
                info!("inverted");
                board.invert();
            }
            // Mouse positions come back in frame pixels; divide down to cells.
            let (mouse_cell, mouse_prev_cell) = input
                .mouse()
                .map(|(mx, my)| {
                    let (dx, dy) = input.mouse_diff();
                    let prev_x = mx - dx;
                    let prev_y = my - dy;

                    let (mx_i, my_i) = pixels
                        .window_pos_to_pixel((mx, my))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    let (px_i, py_i) = pixels
                        .window_pos_to_pixel((prev_x, prev_y))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    let cell = CELL_SIZE as usize;
                    (
                        ((mx_i / cell) as isize, (my_i / cell) as isize),
                        ((px_i / cell) as isize, (py_i / cell) as isize),
                    )
                })
                .unwrap_or_default();

            if input.mouse_pressed(0) {
                debug!("Mouse click at {:?}", mouse_cell);
                draw_state = Some(board.toggle(mouse_cell.0, mouse_cell.1));
            } else if let Some(draw_alive) = draw_state {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                if release || held {
                    debug!("Draw {:?} => {:?} as {:?}", mouse_prev_cell, mouse_cell, draw_alive);
                    board.set_line(
                        mouse_prev_cell.0,
                        mouse_prev_cell.1,
                        mouse_cell.0,
                        mouse_cell.1,
                        draw_alive,
                    );
                }
                if release || !held {
                    debug!("Draw end");
                    draw_state = None;
                }
            }
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            window.request_redraw();
        }
    });
}
