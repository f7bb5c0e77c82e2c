pub use crate::{
    AsciiRamp, FrameBuffer, LambertShader, Projector, Renderer, RendererConfig, ScreenPoint,
    SurfaceSample, Torus,
};

#[cfg(feature = "terminal")]
pub use crate::{Animator, Spin, TerminalGuard, TerminalPresenter};

pub use glam::DVec3;
