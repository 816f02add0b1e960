use serde::Serialize;

/// Live affordance intensities for a card being dragged, each in `0.0..=1.0`.
///
/// Purely advisory for rendering; classification never reads these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Feedback {
    pub offset_x: f32,
    pub offset_y: f32,
    pub advance: f32,
    pub retreat: f32,
    pub delete: f32,
    pub flip: f32,
}

impl Feedback {
    /// Intensities for an offset. Nothing shows until `activation`; full strength at `full`.
    pub fn from_offset(offset_x: f32, offset_y: f32, activation: f32, full: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            advance: ramp(-offset_x, activation, full),
            retreat: ramp(offset_x, activation, full),
            delete: ramp(-offset_y, activation, full),
            flip: ramp(offset_y, activation, full),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.advance == 0.0 && self.retreat == 0.0 && self.delete == 0.0 && self.flip == 0.0
    }
}

fn ramp(distance: f32, activation: f32, full: f32) -> f32 {
    if distance <= activation {
        return 0.0;
    }
    if full <= activation {
        return 1.0;
    }
    ((distance - activation) / (full - activation)).clamp(0.0, 1.0)
}
