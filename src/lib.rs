#![forbid(unsafe_code)]

pub mod camera;
pub mod framebuffer;
pub mod glyph;
pub mod prelude;
pub mod renderer;
pub mod shader;
pub mod torus;
pub mod transform;

#[cfg(feature = "terminal")]
pub mod animator;
#[cfg(feature = "terminal")]
pub mod terminal;

pub use crate::{
    camera::{Projector, ScreenPoint},
    framebuffer::FrameBuffer,
    glyph::AsciiRamp,
    renderer::{Renderer, RendererConfig},
    shader::LambertShader,
    torus::{SurfaceSample, Torus},
};

#[cfg(feature = "terminal")]
pub use crate::{
    animator::{Animator, Spin},
    terminal::{TerminalGuard, TerminalPresenter},
};
