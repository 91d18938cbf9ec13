//! Raw color space conversions
//!
//! All functions take and return unclamped `f64` triplets. RGB is on the
//! `[0, 255]` scale; the other spaces use the scales below. Nothing is
//! rounded or clamped here, so chained conversions do not compound
//! rounding error. Out-of-gamut inputs produce out-of-range outputs.
//!
//! | space | ch0 | ch1 | ch2 |
//! |---|---|---|---|
//! | HSL | H 0..360 | S 0..100 | L 0..100 |
//! | HSV | H 0..360 | S 0..100 | V 0..100 |
//! | XYZ | X 0..95.047 | Y 0..100 | Z 0..108.883 |
//! | LAB | L 0..100 | a | b |
//! | LCH | L 0..100 | C | H 0..360 |
//!
//! XYZ uses the sRGB primaries with a D65 white point.

/// D65 reference white, scaled so that Y = 100
pub const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

const LAB_EPSILON: f64 = 0.008856;
const LAB_KAPPA: f64 = 7.787;

// =============================================================================
// HSL / HSV
// =============================================================================

/// Hue in degrees plus chroma extremes of a normalized RGB triplet
#[inline]
fn hue_min_max(rgb: [f64; 3]) -> (f64, f64, f64) {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let mut h = (h * 60.0).min(360.0);
    if h < 0.0 {
        h += 360.0;
    }
    (h, min, max)
}

/// RGB to HSL
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let (h, min, max) = hue_min_max(rgb);
    let l = (min + max) / 2.0;
    let s = if max == min {
        0.0
    } else if l <= 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    };
    [h, s * 100.0, l * 100.0]
}

/// HSL to RGB
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let h = hsl[0] / 360.0;
    let s = hsl[1] / 100.0;
    let l = hsl[2] / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return [v, v, v];
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let channel = |offset: f64| {
        let mut t3 = h + offset;
        if t3 < 0.0 {
            t3 += 1.0;
        }
        if t3 > 1.0 {
            t3 -= 1.0;
        }
        let v = if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        };
        v * 255.0
    };

    [channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0)]
}

/// RGB to HSV
pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let (h, min, max) = hue_min_max(rgb);
    let s = if max == 0.0 { 0.0 } else { (max - min) / max };
    [h, s * 100.0, max * 100.0]
}

/// HSV to RGB
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let h = hsv[0] / 60.0;
    let s = hsv[1] / 100.0;
    let v = hsv[2] / 100.0;

    let sector = h.floor();
    let f = h - sector;
    let p = 255.0 * v * (1.0 - s);
    let q = 255.0 * v * (1.0 - s * f);
    let t = 255.0 * v * (1.0 - s * (1.0 - f));
    let v = 255.0 * v;

    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

// =============================================================================
// XYZ / LAB / LCH
// =============================================================================

#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    if c > 0.003_130_8 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        c * 12.92
    }
}

/// RGB to CIE XYZ (D65)
pub fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|c| srgb_to_linear(c / 255.0));
    let x = r * 0.412_456_4 + g * 0.357_576_1 + b * 0.180_437_5;
    let y = r * 0.212_672_9 + g * 0.715_152_2 + b * 0.072_175_0;
    let z = r * 0.019_333_9 + g * 0.119_192_0 + b * 0.950_304_1;
    [x * 100.0, y * 100.0, z * 100.0]
}

/// CIE XYZ (D65) to RGB
pub fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz.map(|c| c / 100.0);
    let r = x * 3.240_454_2 + y * -1.537_138_5 + z * -0.498_531_4;
    let g = x * -0.969_266_0 + y * 1.876_010_8 + z * 0.041_556_0;
    let b = x * 0.055_643_4 + y * -0.204_025_9 + z * 1.057_225_2;
    [r, g, b].map(|c| linear_to_srgb(c) * 255.0)
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA * t + 16.0 / 116.0
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > LAB_EPSILON {
        t3
    } else {
        (t - 16.0 / 116.0) / LAB_KAPPA
    }
}

/// CIE XYZ to CIE L*a*b*
pub fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / D65_WHITE[0]);
    let fy = lab_f(xyz[1] / D65_WHITE[1]);
    let fz = lab_f(xyz[2] / D65_WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// CIE L*a*b* to CIE XYZ
pub fn lab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = lab[1] / 500.0 + fy;
    let fz = fy - lab[2] / 200.0;
    [
        lab_f_inv(fx) * D65_WHITE[0],
        lab_f_inv(fy) * D65_WHITE[1],
        lab_f_inv(fz) * D65_WHITE[2],
    ]
}

/// CIE L*a*b* to cylindrical LCh
pub fn lab_to_lch(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let c = (a * a + b * b).sqrt();
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    [l, c, h]
}

/// Cylindrical LCh to CIE L*a*b*
pub fn lch_to_lab(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let hr = h.to_radians();
    [l, c * hr.cos(), c * hr.sin()]
}

/// RGB to CIE L*a*b*
pub fn rgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// CIE L*a*b* to RGB
pub fn lab_to_rgb(lab: [f64; 3]) -> [f64; 3] {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// RGB to LCh
pub fn rgb_to_lch(rgb: [f64; 3]) -> [f64; 3] {
    lab_to_lch(rgb_to_lab(rgb))
}

/// LCh to RGB
pub fn lch_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    lab_to_rgb(lch_to_lab(lch))
}
