// Pointer-driven floating element animation.
//
// Platform independent: the web frontend feeds pointer positions and the
// viewport size in, and writes the returned transforms onto the tracked
// elements. Nothing here touches the DOM.

use crate::constants::*;
use glam::{DVec2, DVec3};

/// Tunable animation parameters. `Default` yields the site's values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub clock_step: f64,
    pub smoothing: f64,
    pub default_speed: f64,
    pub idle_amplitude: DVec2,
    pub idle_phase_step: DVec2,
    pub idle_frequency_y: f64,
    pub parallax_gain: f64,
    pub rotation_gain: f64,
    pub depth_base: f64,
    pub depth_amplitude: f64,
    pub scale_gain: f64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            clock_step: CLOCK_STEP_PER_FRAME,
            smoothing: POINTER_SMOOTHING,
            default_speed: DEFAULT_ELEMENT_SPEED,
            idle_amplitude: DVec2::new(IDLE_AMPLITUDE_X_PX, IDLE_AMPLITUDE_Y_PX),
            idle_phase_step: DVec2::new(IDLE_PHASE_STEP_X, IDLE_PHASE_STEP_Y),
            idle_frequency_y: IDLE_FREQUENCY_Y,
            parallax_gain: PARALLAX_GAIN_PX,
            rotation_gain: ROTATION_GAIN_DEG,
            depth_base: DEPTH_BASE_PX,
            depth_amplitude: DEPTH_AMPLITUDE_PX,
            scale_gain: SCALE_GAIN,
        }
    }
}

/// Raw pointer target and the low-pass filtered position that drives motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub smoothed: DVec2,
    pub target: DVec2,
}

impl PointerState {
    pub fn centered(viewport: DVec2) -> Self {
        let center = viewport * 0.5;
        Self {
            smoothed: center,
            target: center,
        }
    }

    /// Move `smoothed` a fraction `alpha` of the way towards `target`.
    #[inline]
    pub fn smooth(&mut self, alpha: f64) {
        self.smoothed += (self.target - self.smoothed) * alpha;
    }
}

/// Composed transform for one element: translate, then rotate, then scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementTransform {
    /// x/y offset and z depth in CSS pixels.
    pub translate: DVec3,
    /// Rotation about the x axis in degrees.
    pub rotate_x: f64,
    /// Rotation about the y axis in degrees.
    pub rotate_y: f64,
    pub scale: f64,
}

impl ElementTransform {
    /// CSS `transform` value in composition order.
    pub fn to_css(&self) -> String {
        format!(
            "translateX({}px) translateY({}px) translateZ({}px) rotateX({}deg) rotateY({}deg) scale({})",
            self.translate.x,
            self.translate.y,
            self.translate.z,
            self.rotate_x,
            self.rotate_y,
            self.scale
        )
    }
}

/// Resolve a `data-speed` attribute value.
///
/// Leading-number parsing like the browser's `parseFloat`, so `"0.05px"`
/// reads as 0.05. Missing, unparseable, zero, negative or non-finite values
/// fall back to `default`.
pub fn resolve_speed(raw: Option<&str>, default: f64) -> f64 {
    match raw.and_then(parse_leading_float) {
        Some(s) if s.is_finite() && s > 0.0 => s,
        _ => default,
    }
}

fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let candidate_len = s
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    // all candidate chars are ASCII, so every byte offset is a char boundary
    (1..=candidate_len)
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok())
}

/// Animation state for the set of tracked elements.
#[derive(Clone, Debug)]
pub struct Animator {
    pub config: AnimatorConfig,
    pub pointer: PointerState,
    clock: f64,
    speeds: Vec<f64>,
}

impl Animator {
    pub fn new(config: AnimatorConfig, viewport: DVec2, speeds: Vec<f64>) -> Self {
        Self {
            config,
            pointer: PointerState::centered(viewport),
            clock: 0.0,
            speeds,
        }
    }

    /// Build from raw `data-speed` attribute values, one per element.
    pub fn from_speed_attributes<'a, I>(config: AnimatorConfig, viewport: DVec2, raw: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let speeds = raw
            .into_iter()
            .map(|r| resolve_speed(r, config.default_speed))
            .collect();
        Self::new(config, viewport, speeds)
    }

    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    #[inline]
    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// Record the latest pointer position. Consumed by the next `tick`.
    #[inline]
    pub fn on_pointer_move(&mut self, position: DVec2) {
        self.pointer.target = position;
    }

    /// Advance one frame and write a transform per element into `out`.
    pub fn tick_into(&mut self, viewport: DVec2, out: &mut Vec<ElementTransform>) {
        self.clock += self.config.clock_step;
        self.pointer.smooth(self.config.smoothing);

        let center = viewport * 0.5;
        out.clear();
        out.extend(
            self.speeds
                .iter()
                .enumerate()
                .map(|(i, &speed)| self.transform_for(i, speed, center)),
        );
    }

    pub fn tick(&mut self, viewport: DVec2) -> Vec<ElementTransform> {
        let mut out = Vec::with_capacity(self.speeds.len());
        self.tick_into(viewport, &mut out);
        out
    }

    /// Transform for element `index` at the current clock and pointer.
    pub fn transform_for(&self, index: usize, speed: f64, center: DVec2) -> ElementTransform {
        let c = &self.config;
        let i = index as f64;
        let t = self.clock;

        let idle = DVec2::new(
            (t + i * c.idle_phase_step.x).sin() * c.idle_amplitude.x,
            (t * c.idle_frequency_y + i * c.idle_phase_step.y).cos() * c.idle_amplitude.y,
        );
        let displacement = self.pointer.smoothed - center;
        let offset = idle + displacement * speed * c.parallax_gain;
        let depth = c.depth_base + (t + i).sin() * c.depth_amplitude;

        ElementTransform {
            translate: DVec3::new(offset.x, offset.y, depth),
            rotate_x: -displacement.y * speed * c.rotation_gain,
            rotate_y: displacement.x * speed * c.rotation_gain,
            scale: 1.0 + speed * c.scale_gain,
        }
    }
}
