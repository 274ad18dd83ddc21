/// Straight (non-premultiplied) linear RGB color.
///
/// Channels are expected in `[0, 1]`. Color handles carry one of these; the
/// opacity of a stop lives on the paired alpha handle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

/// Straight (non-premultiplied) linear RGBA color.
///
/// Every channel, alpha included, interpolates independently; no
/// premultiplication happens anywhere in the picker.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Channel-wise linear blend: `self + t * (other - self)`.
    ///
    /// `t` is not clamped; callers pass values in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        Rgba::new(
            lerp(self.r, other.r, t),
            lerp(self.g, other.g, t),
            lerp(self.b, other.b, t),
            lerp(self.a, other.a, t),
        )
    }

    /// 8-bit RGB channels, truncated toward zero after clamping to `[0, 1]`.
    #[inline]
    pub fn to_u8_rgb(self) -> [u8; 3] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn to_u8(c: f32) -> u8 {
    // `as` truncates, and saturates NaN to 0.
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let b = Rgba::new(1.0, 0.0, 0.5, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_averages_every_channel() {
        let mid = Rgb::white().with_alpha(1.0).lerp(Rgb::black().with_alpha(0.0), 0.5);
        assert_eq!(mid, Rgba::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn to_u8_truncates() {
        assert_eq!(Rgba::new(0.5, 1.0, 0.0, 1.0).to_u8_rgb(), [127, 255, 0]);
    }

    #[test]
    fn to_u8_clamps_out_of_range() {
        assert_eq!(Rgba::new(-1.0, 2.0, f32::NAN, 1.0).to_u8_rgb(), [0, 255, 0]);
    }
}
