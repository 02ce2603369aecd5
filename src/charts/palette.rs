//! Colour palettes shared by the interactive and static renderers.

/// Qualitative palette for category bars.
pub const SET2: [(u8, u8, u8); 8] = [
    (102, 194, 165),
    (252, 141, 98),
    (141, 160, 203),
    (231, 138, 195),
    (166, 216, 84),
    (255, 217, 47),
    (229, 196, 148),
    (179, 179, 179),
];

/// Sequential palette for ranked bars and word cloud text, dark to light.
pub const VIRIDIS: [(u8, u8, u8); 10] = [
    (68, 1, 84),
    (72, 40, 120),
    (62, 74, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (110, 206, 88),
    (181, 222, 43),
    (253, 231, 37),
];

/// Yellow-green-blue ramp used by the heat map.
const YL_GN_BU: [(u8, u8, u8); 9] = [
    (255, 255, 217),
    (237, 248, 177),
    (199, 233, 180),
    (127, 205, 187),
    (65, 182, 196),
    (29, 145, 192),
    (34, 94, 168),
    (37, 52, 148),
    (8, 29, 88),
];

pub fn set2(index: usize) -> (u8, u8, u8) {
    SET2[index % SET2.len()]
}

/// Spread `count` colours evenly over the viridis ramp.
pub fn viridis(index: usize, count: usize) -> (u8, u8, u8) {
    if count <= 1 {
        return VIRIDIS[0];
    }
    let pos = index * (VIRIDIS.len() - 1) / (count - 1);
    VIRIDIS[pos.min(VIRIDIS.len() - 1)]
}

/// Heat map colour for `t` in `[0, 1]`, linearly interpolated.
pub fn yl_gn_bu(t: f64) -> (u8, u8, u8) {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (YL_GN_BU.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(YL_GN_BU.len() - 1);
    let frac = scaled - lower as f64;

    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (YL_GN_BU[lower], YL_GN_BU[upper]);
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Black or white, whichever reads better on `bg`.
pub fn text_on(bg: (u8, u8, u8)) -> (u8, u8, u8) {
    let luma = 0.299 * bg.0 as f64 + 0.587 * bg.1 as f64 + 0.114 * bg.2 as f64;
    if luma > 140.0 {
        (0, 0, 0)
    } else {
        (255, 255, 255)
    }
}
