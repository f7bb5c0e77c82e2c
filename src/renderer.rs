use glam::DVec3;

use crate::{
    camera::Projector, framebuffer::FrameBuffer, glyph::AsciiRamp, shader::LambertShader,
    torus::Torus, transform,
};

#[derive(Clone, Debug)]
pub struct RendererConfig {
    width: usize,
    height: usize,
    torus: Torus,
    distance: f64,
    aspect: f64,
    light_dir: DVec3,
    ramp: AsciiRamp,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 22,
            torus: Torus::default(),
            distance: 6.0,
            aspect: 0.5,
            light_dir: DVec3::new(-1.0, -1.0, 2.0),
            ramp: AsciiRamp::donut(),
        }
    }
}

impl RendererConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self::default().with_size(width, height)
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_torus(mut self, torus: Torus) -> Self {
        self.torus = torus;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn with_light_dir(mut self, light_dir: DVec3) -> Self {
        self.light_dir = light_dir;
        self
    }

    pub fn with_ramp(mut self, ramp: AsciiRamp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn torus(&self) -> Torus {
        self.torus
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn light_dir(&self) -> DVec3 {
        self.light_dir
    }

    pub fn ramp(&self) -> &AsciiRamp {
        &self.ramp
    }
}

/// The full per-frame pipeline: sample the torus, rotate the point and its
/// ring point by the same angles, project, depth-resolve, shade.
#[derive(Clone, Debug)]
pub struct Renderer {
    config: RendererConfig,
    projector: Projector,
    shader: LambertShader,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        let projector = Projector::new(config.width(), config.height())
            .with_distance(config.distance())
            .with_aspect(config.aspect());
        let shader = LambertShader::new(config.light_dir());
        Self {
            config,
            projector,
            shader,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Renders one frame at rotation angles (ax, ay). The u loop is outer
    /// and the v loop inner; together with the strict depth comparison this
    /// fixes which sample wins every cell, so output is fully deterministic.
    pub fn render(&self, ax: f64, ay: f64, frame: &mut FrameBuffer) {
        if frame.width() != self.config.width() || frame.height() != self.config.height() {
            *frame = FrameBuffer::new(self.config.width(), self.config.height());
        }
        frame.clear();
        let torus = self.config.torus();
        for u in 0..torus.u_steps {
            for v in 0..torus.v_steps {
                let sample = torus.sample(u, v);
                let q = transform::rotate(sample.point, ax, ay);
                let Some(sp) = self.projector.project(q) else {
                    continue;
                };
                let ring = transform::rotate(sample.ring, ax, ay);
                let normal = LambertShader::surface_normal(q, ring, torus.minor_radius);
                let glyph = self.config.ramp().map_scalar_to_char(self.shader.brightness(normal));
                frame.try_write(sp.col, sp.row, sp.inv_depth, glyph);
            }
        }
    }
}
