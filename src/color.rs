use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// `n` visually distinct colours, one per series, in series order.
///
/// Hues are evenly spaced starting from blue so a single trajectory gets the
/// familiar default line colour.
pub fn series_palette(n: usize) -> Vec<Color32> {
    const START_HUE: f32 = 210.0;

    (0..n)
        .map(|i| {
            let hue = (START_HUE + (i as f32 / n as f32) * 360.0) % 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.70, 0.50).into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}
