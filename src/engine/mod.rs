// Engine modules: frame timing, input, renderer

pub mod frame_clock;
pub mod input;
pub mod renderer;
