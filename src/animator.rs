use crate::{
    framebuffer::FrameBuffer,
    renderer::{Renderer, RendererConfig},
    terminal::TerminalPresenter,
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Rotation angles, advanced by fixed per-frame deltas. They grow without
/// bound; the trigonometry downstream is periodic so no wraparound is
/// needed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    pub ax: f64,
    pub ay: f64,
}

impl Spin {
    pub fn step(&mut self, x_delta: f64, y_delta: f64) {
        self.ax += x_delta;
        self.ay += y_delta;
    }
}

// Angular speeds in radians per second over the original's frame divisor.
const X_SPEED: f64 = 0.3;
const Y_SPEED: f64 = -0.2;
const FRAME_DIVISOR: f64 = 3.0;
const FRAME_DELAY: Duration = Duration::from_millis(33);

/// Owns the render loop state: renderer, frame buffer, presenter and spin.
/// One call to `frame` draws a single animation frame; `run` loops, sleeping
/// a fixed delay between frames (~30 FPS).
pub struct Animator {
    renderer: Renderer,
    presenter: TerminalPresenter,
    frame: FrameBuffer,
    spin: Spin,
    x_delta: f64,
    y_delta: f64,
    frame_delay: Duration,
}

impl Animator {
    pub fn new(config: RendererConfig) -> Self {
        let frame = FrameBuffer::new(config.width(), config.height());
        Self {
            renderer: Renderer::new(config),
            presenter: TerminalPresenter::new(),
            frame,
            spin: Spin::default(),
            x_delta: X_SPEED / FRAME_DIVISOR,
            y_delta: Y_SPEED / FRAME_DIVISOR,
            frame_delay: FRAME_DELAY,
        }
    }

    pub fn with_deltas(mut self, x_delta: f64, y_delta: f64) -> Self {
        self.x_delta = x_delta;
        self.y_delta = y_delta;
        self
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn with_presenter(mut self, presenter: TerminalPresenter) -> Self {
        self.presenter = presenter;
        self
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    /// Renders and presents exactly one frame, then advances the rotation.
    pub fn frame<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.renderer.render(self.spin.ax, self.spin.ay, &mut self.frame);
        self.presenter.present(out, &self.frame)?;
        self.spin.step(self.x_delta, self.y_delta);
        Ok(())
    }

    /// Runs the animation. `frames: None` loops until the process is
    /// interrupted; `Some(n)` stops after n frames, which is what tests use
    /// instead of the production endless loop.
    pub fn run<W: Write>(&mut self, out: &mut W, frames: Option<u64>) -> io::Result<()> {
        let mut drawn = 0u64;
        loop {
            self.frame(out)?;
            drawn += 1;
            if let Some(limit) = frames {
                if drawn >= limit {
                    return Ok(());
                }
            }
            thread::sleep(self.frame_delay);
        }
    }
}
