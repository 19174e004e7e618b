use super::{blend::Mixer, Argb, Pixel, P2};

/// Index of `p` in a `cwidth x cheight` buffer, `None` when clipped.
pub fn get_idx(cwidth: usize, cheight: usize, p: P2) -> Option<usize> {
    if p.x < 0 || p.y < 0 {
        return None;
    }

    let (x, y) = (p.x as usize, p.y as usize);

    if x >= cwidth || y >= cheight {
        return None;
    }

    Some(y * cwidth + x)
}

pub fn set_pixel_xy_by(canvas: &mut [Argb], cwidth: usize, cheight: usize, p: P2, c: Argb, b: Mixer) {
    if let Some(px) = get_idx(cwidth, cheight, p).and_then(|i| canvas.get_mut(i)) {
        *px = b(*px, c);
    }
}

// Using Bresenham's line algorithm.
pub fn draw_line_by(canvas: &mut [Argb], cwidth: usize, cheight: usize, ps: P2, pe: P2, c: Argb, b: Mixer) {
    let dx = (pe.x - ps.x).abs();
    let sx = if ps.x < pe.x { 1 } else { -1 };
    let dy = -(pe.y - ps.y).abs();
    let sy = if ps.y < pe.y { 1 } else { -1 };
    let mut error = dx + dy;

    let mut p = ps;

    loop {
        set_pixel_xy_by(canvas, cwidth, cheight, p, c, b);

        if p.x == pe.x && p.y == pe.y {
            return;
        }
        let e2 = error * 2;

        if e2 >= dy {
            if p.x == pe.x {
                return;
            }
            error += dy;
            p.x += sx;
        }

        if e2 <= dx {
            if p.y == pe.y {
                return;
            }
            error += dx;
            p.y += sy;
        }
    }
}

/// Filled disc with a one pixel soft edge, so radii below a pixel still
/// leave a faint dot instead of vanishing.
pub fn draw_disc_by(
    canvas: &mut [Argb],
    cwidth: usize,
    cheight: usize,
    center: (f32, f32),
    radius: f32,
    color: Argb,
    b: Mixer,
) {
    if radius <= 0.0 {
        return;
    }

    let (cx, cy) = center;
    let reach = radius + 1.0;

    let xs = ((cx - reach).floor() as i32).max(0);
    let ys = ((cy - reach).floor() as i32).max(0);
    let xe = ((cx + reach).ceil() as i32).min(cwidth as i32 - 1);
    let ye = ((cy + reach).ceil() as i32).min(cheight as i32 - 1);

    let alpha = color.alpha();

    for y in ys..=ye {
        for x in xs..=xe {
            let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);

            if coverage <= 0.0 {
                continue;
            }

            let a = (alpha as f32 * coverage).round() as u8;
            set_pixel_xy_by(canvas, cwidth, cheight, P2 { x, y }, color.set_alpha(a), b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(_: Argb, c: Argb) -> Argb {
        c
    }

    #[test]
    fn clipped_pixels_are_ignored() {
        let mut buf = vec![0u32; 4 * 4];
        set_pixel_xy_by(&mut buf, 4, 4, P2 { x: -1, y: 0 }, 1, replace);
        set_pixel_xy_by(&mut buf, 4, 4, P2 { x: 4, y: 0 }, 1, replace);
        set_pixel_xy_by(&mut buf, 4, 4, P2 { x: 0, y: 4 }, 1, replace);
        assert!(buf.iter().all(|&p| p == 0));
    }

    #[test]
    fn diagonal_line() {
        let mut buf = vec![0u32; 4 * 4];
        draw_line_by(&mut buf, 4, 4, P2 { x: 0, y: 0 }, P2 { x: 3, y: 3 }, 1, replace);
        for i in 0..4 {
            assert_eq!(buf[i * 4 + i], 1);
        }
        assert_eq!(buf.iter().filter(|&&p| p == 1).count(), 4);
    }

    #[test]
    fn line_leaving_canvas() {
        let mut buf = vec![0u32; 4 * 4];
        draw_line_by(&mut buf, 4, 4, P2 { x: -100, y: 2 }, P2 { x: 100, y: 2 }, 1, replace);
        assert!(buf[8..12].iter().all(|&p| p == 1));
        assert_eq!(buf.iter().filter(|&&p| p == 1).count(), 4);
    }

    #[test]
    fn disc_covers_center_only_within_radius() {
        let mut buf = vec![0u32; 9 * 9];
        draw_disc_by(&mut buf, 9, 9, (4.0, 4.0), 2.0, 0xFF_FF_FF_FF, replace);
        assert_eq!(buf[4 * 9 + 4], 0xFF_FF_FF_FF);
        assert_eq!(buf[4 * 9 + 5], 0xFF_FF_FF_FF);
        assert_eq!(buf[4 * 9 + 6] >> 24, 0x80);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[4 * 9 + 8], 0);
    }

    #[test]
    fn disc_off_canvas() {
        let mut buf = vec![0u32; 4 * 4];
        draw_disc_by(&mut buf, 4, 4, (-50.0, 80.0), 3.0, 0xFF_FF_FF_FF, replace);
        assert!(buf.iter().all(|&p| p == 0));
    }
}
