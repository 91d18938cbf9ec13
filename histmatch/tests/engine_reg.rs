//! End-to-end regression test through the facade crate

use histmatch::color::ColorSpace;
use histmatch::{
    CancelToken, ExecutionStrategy, MatchOptions, PixelBuffer, ReturnType, RgbMatchOptions,
    match_histograms_colorspaces, match_histograms_rgb,
};
use histmatch_test::{RegParams, fixtures};

#[test]
fn engine_lightness_reg() {
    let mut rp = RegParams::new("engine_lightness");

    // Dark noisy source, bright target; match LAB lightness only
    let source = fixtures::noise(64, 64, 4, 10, 90, 2024).unwrap();
    let target = fixtures::noise(48, 48, 4, 150, 240, 7).unwrap();
    let src = PixelBuffer::new(&source, 4).unwrap();
    let tgt = PixelBuffer::new(&target, 4).unwrap();

    let options = MatchOptions::default()
        .with_color_space_name("lab")
        .unwrap()
        .with_bands(&[1])
        .with_strategy(ExecutionStrategy::parallel());
    let out = match_histograms_colorspaces(&src, &tgt, &options).unwrap();

    let mapping = out.mappings[0].as_ref().unwrap();
    rp.check(out.mappings[1].is_none() && out.mappings[2].is_none(), "L only");
    rp.check(mapping.lut.is_non_decreasing(), "monotone lut");
    rp.compare_values(256.0, mapping.bin_count() as f64, 0.0);
    rp.compare_values(1.0, mapping.source_cdf[255], 1e-9);
    rp.compare_values(1.0, mapping.target_cdf[255], 1e-9);

    let matched = out.matched.unwrap_or_default();
    rp.compare_values(source.len() as f64, matched.len() as f64, 0.0);

    let mean = |data: &[u8]| {
        let color: Vec<f64> = data
            .chunks_exact(4)
            .flat_map(|px| px[..3].iter().map(|&v| f64::from(v)))
            .collect();
        color.iter().sum::<f64>() / color.len() as f64
    };
    rp.check(mean(&matched) > mean(&source) + 50.0, "matched is brighter");

    let alpha_kept = source
        .chunks_exact(4)
        .zip(matched.chunks_exact(4))
        .all(|(s, m)| s[3] == m[3]);
    rp.check(alpha_kept, "alpha preserved");

    assert!(rp.cleanup());
}

#[test]
fn engine_modes_agree_reg() {
    let mut rp = RegParams::new("engine_modes_agree");

    // In the RGB space with 256 bins both entry points learn the same LUTs
    let source = fixtures::noise(40, 40, 3, 0, 200, 3).unwrap();
    let target = fixtures::gradient(100, 10, 3, 60).unwrap();
    let src = PixelBuffer::new(&source, 3).unwrap();
    let tgt = PixelBuffer::new(&target, 3).unwrap();

    let rgb = match_histograms_rgb(&src, &tgt, &RgbMatchOptions::default()).unwrap();
    let cs = match_histograms_colorspaces(&src, &tgt, &MatchOptions::default()).unwrap();
    for (a, b) in rgb.band_mappings().zip(cs.band_mappings()) {
        rp.compare_numa(&a.lut, &b.lut, 0.0);
        rp.compare_numa(&a.source_histogram, &b.source_histogram, 0.0);
    }
    rp.compare_bytes(
        rgb.matched.as_deref().unwrap_or_default(),
        cs.matched.as_deref().unwrap_or_default(),
    );

    assert!(rp.cleanup());
}

#[test]
fn engine_cancel_reg() {
    let mut rp = RegParams::new("engine_cancel");

    let source = fixtures::gradient(128, 128, 3, 10).unwrap();
    let src = PixelBuffer::new(&source, 3).unwrap();
    let token = CancelToken::new();
    let options = MatchOptions::default()
        .with_color_space(ColorSpace::Hsl)
        .with_cancel(token.clone());

    rp.check(match_histograms_colorspaces(&src, &src, &options).is_ok(), "not cancelled");
    token.cancel();
    rp.check(match_histograms_colorspaces(&src, &src, &options).is_err(), "cancelled");
    rp.check(
        match_histograms_colorspaces(
            &src,
            &src,
            &options.clone().with_return_type(ReturnType::Mapping),
        )
        .is_ok(),
        "mapping only",
    );

    assert!(rp.cleanup());
}
