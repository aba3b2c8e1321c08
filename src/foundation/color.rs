/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Per-channel linear blend toward `other`, alpha included.
    ///
    /// `t` is clamped to `[0, 1]` and every channel is truncated back to 8 bits.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + (b - a) * t) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Six-sector HSV to RGB conversion.
    ///
    /// `h` is in degrees and wraps modulo 360; `s` and `v` are in `[0, 1]`.
    /// The result is always opaque.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let sector = (h / 60.0).floor();
        let hi = (sector as i32).rem_euclid(6);
        let f = h / 60.0 - sector;

        let v = v * 255.0;
        let vv = v as u8;
        let p = (v * (1.0 - s)) as u8;
        let q = (v * (1.0 - f * s)) as u8;
        let t = (v * (1.0 - (1.0 - f) * s)) as u8;

        match hi {
            0 => Self::opaque(vv, t, p),
            1 => Self::opaque(q, vv, p),
            2 => Self::opaque(p, vv, t),
            3 => Self::opaque(p, q, vv),
            4 => Self::opaque(t, p, vv),
            _ => Self::opaque(vv, p, q),
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}
