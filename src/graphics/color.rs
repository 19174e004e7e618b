use super::{blend::Argb, Pixel};

/// Colour in the CSS `hsla()` model: hue in degrees, the rest in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_argb(self) -> Argb {
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;

        Argb::compose([alpha, to_u8(r), to_u8(g), to_u8(b)])
    }
}

/// Parses `RRGGBB`, with or without a leading `#`, into an opaque colour.
pub fn parse_hex_rgb(s: &str) -> Option<Argb> {
    let hex = s.strip_prefix('#').unwrap_or(s);

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(hex, 16).ok().map(|rgb| rgb | 0xFF_00_00_00)
}
