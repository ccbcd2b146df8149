use image::{Rgba, RgbaImage};

// Document-with-checkmark app icon: diagonal blue gradient in a rounded
// square, a white sheet with a folded corner and form lines, plus a green
// badge carrying a checkmark.

const BG1: [f32; 3] = [30.0, 58.0, 138.0]; // #1E3A8A
const BG2: [f32; 3] = [37.0, 99.0, 235.0]; // #2563EB
const SHADOW: [u8; 4] = [0, 0, 0, 60];
const DOC_FILL: [u8; 4] = [255, 255, 255, 245];
const FOLD_FILL: [u8; 4] = [229, 231, 235, 255]; // #E5E7EB
const FOLD_EDGE: [u8; 4] = [209, 213, 219, 255]; // #D1D5DB
const FORM_LINE: [u8; 4] = [156, 163, 175, 255]; // #9CA3AF
const BADGE_FILL: [u8; 4] = [34, 197, 94, 255]; // #22C55E
const BADGE_RING: [u8; 4] = [255, 255, 255, 220];
const CHECK: [u8; 4] = [255, 255, 255, 255];

/// Generate the base icon sprite at the given square size.
/// All geometry is a fixed fraction of `size`, so any base scales the same.
pub fn generate_icon(size: u32) -> RgbaImage {
    let s = size as f32;

    let corner_r = s * 0.16;

    // Document sheet and its offset shadow.
    let doc = (s * 0.26, s * 0.20, s * 0.74, s * 0.79);
    let off = s * 0.02;
    let shadow = (doc.0 + off, doc.1 + off, doc.2 + off, doc.3 + off);
    let doc_r = s * 0.06;

    // Folded top-right corner.
    let fold = s * 0.11;
    let fold_tri = (
        (doc.2 - fold, doc.1),
        (doc.2, doc.1),
        (doc.2, doc.1 + fold),
    );
    let fold_edge = ((doc.2 - fold, doc.1), (doc.2, doc.1 + fold));
    let fold_edge_hw = s * 0.008 * 0.5;

    // Four form lines of decreasing width.
    let left = doc.0 + s * 0.06;
    let right = doc.2 - s * 0.06;
    let line_y0 = doc.1 + s * 0.20;
    let line_step = s * 0.045;
    let line_hw = s * 0.014 * 0.5;
    let line_fracs = [0.88f32, 0.78, 0.72, 0.58];

    // Badge circle with ring outline and checkmark.
    let (cx, cy) = (s * 0.71, s * 0.73);
    let br = s * 0.12;
    let ring_w = s * 0.012;
    let check_hw = s * 0.02 * 0.5;
    let p1 = (cx - br * 0.42, cy - br * 0.02);
    let p2 = (cx - br * 0.12, cy + br * 0.30);
    let p3 = (cx + br * 0.50, cy - br * 0.34);

    let mut img = RgbaImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            // Background: diagonal gradient, clipped to the rounded square.
            let t = (x + y) as f32 / (2.0 * (s - 1.0));
            let mut c = [
                lerp(BG1[0], BG2[0], t) as u8,
                lerp(BG1[1], BG2[1], t) as u8,
                lerp(BG1[2], BG2[2], t) as u8,
                if in_rounded_rect(px, py, 0.0, 0.0, s, s, corner_r) { 255 } else { 0 },
            ];

            // Layers in paint order, each overwriting what lies below it.
            if in_rounded_rect(px, py, shadow.0, shadow.1, shadow.2, shadow.3, doc_r) {
                c = SHADOW;
            }
            if in_rounded_rect(px, py, doc.0, doc.1, doc.2, doc.3, doc_r) {
                c = DOC_FILL;
            }
            if point_in_triangle(px, py, fold_tri.0, fold_tri.1, fold_tri.2) {
                c = FOLD_FILL;
            }
            if seg_dist(px, py, fold_edge.0, fold_edge.1) <= fold_edge_hw {
                c = FOLD_EDGE;
            }
            for (i, frac) in line_fracs.iter().enumerate() {
                let ly = line_y0 + line_step * i as f32;
                let lx1 = left + (right - left) * frac;
                if seg_dist(px, py, (left, ly), (lx1, ly)) <= line_hw {
                    c = FORM_LINE;
                }
            }
            let bd = ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt();
            if bd <= br {
                c = if bd >= br - ring_w { BADGE_RING } else { BADGE_FILL };
            }
            if seg_dist(px, py, p1, p2) <= check_hw || seg_dist(px, py, p2, p3) <= check_hw {
                c = CHECK;
            }

            img.put_pixel(x, y, Rgba(c));
        }
    }
    img
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 { a + (b - a) * t }

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 { ax * by - ay * bx }

/// Point inside an axis-aligned rounded rectangle [x0,y0]..[x1,y1].
pub(crate) fn in_rounded_rect(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32, r: f32) -> bool {
    if px < x0 || px > x1 || py < y0 || py > y1 {
        return false;
    }
    let r = r.min((x1 - x0) * 0.5).min((y1 - y0) * 0.5);
    let nx = px.clamp(x0 + r, x1 - r);
    let ny = py.clamp(y0 + r, y1 - r);
    let dx = px - nx;
    let dy = py - ny;
    dx * dx + dy * dy <= r * r
}

fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}

/// Distance from a point to a line segment; thick strokes with round caps
/// are "distance <= half width".
fn seg_dist(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let abx = b.0 - a.0;
    let aby = b.1 - a.1;
    let apx = px - a.0;
    let apy = py - a.1;
    let len2 = abx * abx + aby * aby;
    let t = if len2 <= f32::EPSILON {
        0.0
    } else {
        ((apx * abx + apy * aby) / len2).clamp(0.0, 1.0)
    };
    let dx = apx - t * abx;
    let dy = apy - t * aby;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dimensions() {
        let img = generate_icon(64);
        assert_eq!(img.dimensions(), (64, 64));
    }

    #[test]
    fn test_corners_are_transparent() {
        let img = generate_icon(64);
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(img.get_pixel(x, y).0[3], 0, "corner ({x},{y}) should be masked");
        }
    }

    #[test]
    fn test_edge_midpoints_are_opaque() {
        let img = generate_icon(64);
        for (x, y) in [(32, 0), (0, 32), (63, 32), (32, 63)] {
            assert_eq!(img.get_pixel(x, y).0[3], 255, "edge ({x},{y}) inside rounded square");
        }
    }

    #[test]
    fn test_document_is_white() {
        let img = generate_icon(512);
        // Between the third and fourth form line, well inside the sheet.
        let p = img.get_pixel(256, 280).0;
        assert_eq!(p, [255, 255, 255, 245]);
    }

    #[test]
    fn test_badge_is_green() {
        let img = generate_icon(512);
        // Just inside the badge circle, left of the checkmark stroke.
        let p = img.get_pixel(330, 390).0;
        assert_eq!(p, [34, 197, 94, 255]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_icon(48).into_raw(), generate_icon(48).into_raw());
    }

    #[test]
    fn test_rounded_rect_predicate() {
        // Corner pixel outside the radius, center and edge midpoint inside.
        assert!(!in_rounded_rect(0.5, 0.5, 0.0, 0.0, 64.0, 64.0, 10.0));
        assert!(in_rounded_rect(32.0, 32.0, 0.0, 0.0, 64.0, 64.0, 10.0));
        assert!(in_rounded_rect(32.0, 0.5, 0.0, 0.0, 64.0, 64.0, 10.0));
    }
}
