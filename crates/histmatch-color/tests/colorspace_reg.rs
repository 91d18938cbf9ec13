//! Color space conversion regression test
//!
//! Round trips RGB through every supported space, checks the scale table
//! and the identifier parsing used by option handling.

use histmatch_color::convert::{rgb_to_lab, rgb_to_lch, rgb_to_xyz};
use histmatch_color::{
    ColorError, ColorSpace, colorspace_to_rgb, colorspace_to_rgb8, convert_buffer,
    rgb_to_colorspace,
};
use histmatch_test::{RegParams, fixtures};

#[test]
fn colorspace_gray_roundtrip_reg() {
    let mut rp = RegParams::new("colorspace_gray_roundtrip");

    for cs in ColorSpace::ALL {
        for v in 0..=255u8 {
            let rgb = [f64::from(v); 3];
            let back = colorspace_to_rgb8(rgb_to_colorspace(rgb, cs), cs);
            for c in back {
                rp.compare_values(f64::from(v), f64::from(c), 1.0);
            }
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn colorspace_color_roundtrip_reg() {
    let mut rp = RegParams::new("colorspace_color_roundtrip");
    let data = fixtures::noise(32, 32, 3, 0, 255, 99).unwrap();

    for cs in ColorSpace::ALL {
        let converted = convert_buffer(&data, 3, cs).unwrap();
        for (triplet, pixel) in converted.iter().zip(data.chunks_exact(3)) {
            let raw = colorspace_to_rgb(*triplet, cs);
            let rgb8 = colorspace_to_rgb8(*triplet, cs);
            for c in 0..3 {
                rp.compare_values(f64::from(pixel[c]), raw[c], 1e-3);
                rp.compare_values(f64::from(pixel[c]), f64::from(rgb8[c]), 0.0);
            }
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn colorspace_scale_reg() {
    let mut rp = RegParams::new("colorspace_scale");

    // Reference whites and primaries sit at the documented scale ends
    let white = rgb_to_xyz([255.0, 255.0, 255.0]);
    rp.compare_values(95.047, white[0], 0.01);
    rp.compare_values(100.0, white[1], 0.01);
    rp.compare_values(108.883, white[2], 0.01);

    let lab_white = rgb_to_lab([255.0, 255.0, 255.0]);
    rp.compare_values(100.0, lab_white[0], 0.01);

    // Saturated primaries can exceed the LAB/LCH conventional ranges
    let lab_blue = rgb_to_lab([0.0, 0.0, 255.0]);
    let lab_scale = ColorSpace::Lab.scale(2).unwrap();
    rp.check(lab_blue[2] < 0.0, "blue has negative b*");
    rp.check(lab_blue[2] > lab_scale.min - 10.0, "blue b* near the scale");
    let lch_red = rgb_to_lch([255.0, 0.0, 0.0]);
    rp.check(lch_red[1] <= ColorSpace::Lch.scale(1).unwrap().max, "red chroma in range");

    let hsl = rgb_to_colorspace([0.0, 255.0, 255.0], ColorSpace::Hsl);
    rp.compare_values(180.0, hsl[0], 1e-9);
    rp.compare_values(100.0, hsl[1], 1e-9);
    rp.compare_values(50.0, hsl[2], 1e-9);

    assert!(rp.cleanup());
}

#[test]
fn colorspace_parse_reg() {
    let mut rp = RegParams::new("colorspace_parse");

    for (name, cs) in [
        ("rgb", ColorSpace::Rgb),
        ("HSL", ColorSpace::Hsl),
        ("Hsv", ColorSpace::Hsv),
        ("xyz", ColorSpace::Xyz),
        ("lab", ColorSpace::Lab),
        ("LCH", ColorSpace::Lch),
    ] {
        rp.check(name.parse::<ColorSpace>() == Ok(cs), name);
    }
    for bad in ["", "cmyk", "oklab", "rgba"] {
        rp.check(
            matches!(
                bad.parse::<ColorSpace>(),
                Err(ColorError::UnsupportedColorSpace(_))
            ),
            bad,
        );
    }

    assert!(rp.cleanup());
}
