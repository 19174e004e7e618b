pub type Argb = u32;

pub type Mixer = fn(Argb, Argb) -> Argb;

use super::{Pixel, COLOR_BLANK};

pub fn u8_mul(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

pub fn argb_fade(this: Argb, other: u8) -> Argb {
    let [aa, r, g, b] = this.decompose();
    Argb::compose([u8_mul(aa, other), r, g, b])
}

/// Source-over compositing of `c2` on top of `c1`, straight alpha.
pub fn composite_u32(c1: Argb, c2: Argb) -> Argb {
    let [a1, r1, g1, b1] = c1.decompose();
    let [a2, r2, g2, b2] = c2.decompose();

    let (a, a3) = {
        let a1 = a1 as u16;
        let a2 = a2 as u16;

        let a3 = (a1 * (255 - a2)) / 255;

        (a2 + a3, a3)
    };

    if a == 0 {
        return COLOR_BLANK;
    }

    let composite_channel = |c1: u8, c2: u8| -> u8 {
        let c1 = c1 as u32;
        let c2 = c2 as u32;
        let a2 = a2 as u32;

        ((c2 * a2 + c1 * a3 as u32) / a as u32) as u8
    };

    Argb::compose([
        a as u8,
        composite_channel(r1, r2),
        composite_channel(g1, g2),
        composite_channel(b1, b2),
    ])
}

impl Pixel for Argb {
    fn mix(self, other: Argb) -> Argb {
        composite_u32(self, other)
    }

    fn set_alpha(self, alpha: u8) -> Argb {
        (self & 0x00_FF_FF_FF) | (alpha as Argb) << 24
    }

    fn alpha(self) -> u8 {
        (self >> 24) as u8
    }

    fn fade(self, alpha: u8) -> Argb {
        argb_fade(self, alpha)
    }

    fn decompose(self) -> [u8; 4] {
        self.to_be_bytes()
    }

    fn compose(array: [u8; 4]) -> Argb {
        Argb::from_be_bytes(array)
    }
}
