//=========================================================================
// Color
//=========================================================================
//
// Linear RGBA color with f32 channels in [0, 1].
//
// Transitions fade a single color in and out; the overlay opacity is
// applied by scaling every channel (premultiplied alpha), so a color at
// opacity 0.0 is fully transparent regardless of its RGB values.
//
//=========================================================================

//=== Color ===============================================================

/// RGBA color with premultiplied-alpha scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from its four channels.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Returns this color with every channel multiplied by `opacity`.
    ///
    /// `opacity` is clamped to [0, 1] first, so the result never exceeds
    /// the source color.
    pub fn scaled(self, opacity: f32) -> Self {
        let factor = opacity.clamp(0.0, 1.0);
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
