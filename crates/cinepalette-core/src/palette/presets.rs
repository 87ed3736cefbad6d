//! Built-in palettes
//!
//! The stock film and calibration looks shipped with the application.
//! Each function allocates a fresh [`Palette`]; callers are free to edit
//! the copy without affecting later calls.

use super::Palette;

/// X-Rite ColorChecker Classic target, 18 chromatic patches
pub fn color_checker_classic() -> Palette {
    Palette::from_triples(
        "ColorChecker Classic",
        &[
            [115, 82, 68],
            [194, 150, 130],
            [98, 122, 157],
            [87, 108, 67],
            [133, 128, 177],
            [103, 189, 170],
            [214, 126, 44],
            [80, 91, 166],
            [193, 90, 99],
            [94, 60, 108],
            [157, 188, 64],
            [224, 163, 46],
            [56, 61, 150],
            [70, 148, 73],
            [175, 54, 60],
            [231, 199, 31],
            [187, 86, 149],
            [8, 133, 161],
        ],
    )
}

/// Warm portrait film stock look
pub fn portra_400() -> Palette {
    Palette::from_triples(
        "Portra 400",
        &[
            [75, 60, 50],
            [160, 130, 110],
            [220, 200, 180],
            [60, 100, 80],
            [180, 150, 100],
        ],
    )
}

/// Soft pastel film stock look
pub fn pro_400h() -> Palette {
    Palette::from_triples(
        "Pro 400H",
        &[
            [100, 120, 90],
            [180, 200, 170],
            [240, 210, 190],
            [140, 100, 80],
            [90, 160, 140],
        ],
    )
}

/// Blockbuster teal-and-orange grade
pub fn teal_and_orange() -> Palette {
    Palette::from_triples(
        "Teal & Orange",
        &[
            [38, 70, 83],
            [42, 157, 143],
            [233, 196, 106],
            [244, 162, 97],
            [231, 111, 81],
        ],
    )
}

/// Sepia tone
pub fn sepia() -> Palette {
    Palette::from_triples(
        "Sepia",
        &[
            [112, 66, 20],
            [133, 94, 66],
            [192, 154, 107],
            [224, 192, 147],
        ],
    )
}

/// Black, white, and mid gray
pub fn black_and_white() -> Palette {
    Palette::from_triples(
        "Black & White",
        &[[0, 0, 0], [255, 255, 255], [127, 127, 127]],
    )
}

/// All built-in palettes, in menu order
pub fn all() -> Vec<Palette> {
    vec![
        color_checker_classic(),
        portra_400(),
        pro_400h(),
        teal_and_orange(),
        sepia(),
        black_and_white(),
    ]
}
