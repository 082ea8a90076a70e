//! Compiled-in reference data.
//!
//! Cable figures follow BS 7671 Appendix 4 for copper conductors. Tax
//! figures follow HMRC rates for each listed tax year. These are re-keyed by hand
//! whenever a new edition or tax year is published.

use std::sync::LazyLock;

use super::table::{CategoryData, LookupTable, SeriesData};
use super::types::TaxYear;

pub const COPPER_TWIN_AND_EARTH: &str = "Copper T&E (6242Y)";
pub const COPPER_SWA: &str = "Copper SWA";
pub const PVC_SINGLE_CORE: &str = "PVC single core (6491X)";
pub const LSOH_SINGLE_CORE: &str = "LSOH single core (6491B)";
pub const FIRE_RESISTANT: &str = "Fire resistant (FP200)";
pub const MICC: &str = "MICC";
pub const RUBBER_FLEX: &str = "H07RN-F flexible";
pub const NYY_J: &str = "NYY-J";

pub const IN_INSULATED_WALL: &str = "In insulated wall (A1)";
pub const ON_WALL_IN_CONDUIT: &str = "Conduit on wall (A2)";
pub const IN_CONDUIT: &str = "Enclosed in conduit (B1)";
pub const IN_TRUNKING: &str = "In trunking (B2)";
pub const CLIPPED_DIRECT: &str = "Clipped direct (C)";
pub const IN_DUCT_IN_GROUND: &str = "In duct in ground (D1)";
pub const DIRECT_IN_GROUND: &str = "Direct in ground (D2)";
pub const IN_FREE_AIR: &str = "In free air (E)";
pub const ON_VENTILATED_TRAY: &str = "Ventilated tray (F)";
pub const ON_PERFORATED_TRAY: &str = "Perforated tray (G)";

// mV/A/m for copper conductors. Voltage drop per metre depends on neither the
// cable family nor the installation method.
const COPPER_MV: &[(f64, f64)] = &[
    (1.0, 44.0),
    (1.5, 29.0),
    (2.5, 18.0),
    (4.0, 11.0),
    (6.0, 7.3),
    (10.0, 4.4),
    (16.0, 2.8),
    (25.0, 1.75),
    (35.0, 1.25),
    (50.0, 0.93),
    (70.0, 0.64),
    (95.0, 0.46),
    (120.0, 0.37),
    (150.0, 0.30),
    (185.0, 0.24),
    (240.0, 0.18),
    (300.0, 0.145),
    (400.0, 0.113),
];

// Tabulated current-carrying capacity, amperes. A method is listed for a family
// only where ratings are published for it.
#[rustfmt::skip]
const CURRENT_CAPACITY_DATA: &[CategoryData<'static>] = &[
    (COPPER_TWIN_AND_EARTH, &[
        (IN_INSULATED_WALL, &[(1.0, 11.0), (1.5, 14.0), (2.5, 18.0), (4.0, 24.0), (6.0, 31.0), (10.0, 42.0)]),
        (ON_WALL_IN_CONDUIT, &[(1.0, 13.0), (1.5, 16.0), (2.5, 21.0), (4.0, 28.0), (6.0, 36.0), (10.0, 50.0)]),
        (IN_CONDUIT, &[(1.0, 13.0), (1.5, 17.0), (2.5, 23.0), (4.0, 30.0), (6.0, 38.0), (10.0, 52.0)]),
        (IN_TRUNKING, &[(1.0, 16.0), (1.5, 20.0), (2.5, 27.0), (4.0, 36.0), (6.0, 46.0), (10.0, 63.0)]),
        (CLIPPED_DIRECT, &[(1.0, 20.0), (1.5, 26.0), (2.5, 36.0), (4.0, 49.0), (6.0, 62.0), (10.0, 85.0)]),
        (IN_FREE_AIR, &[(1.0, 22.0), (1.5, 29.0), (2.5, 39.0), (4.0, 53.0), (6.0, 69.0), (10.0, 94.0)]),
    ]),
    (COPPER_SWA, &[
        (CLIPPED_DIRECT, &[
            (1.5, 32.0), (2.5, 43.0), (4.0, 57.0), (6.0, 73.0), (10.0, 98.0), (16.0, 131.0),
            (25.0, 168.0), (35.0, 201.0), (50.0, 242.0), (70.0, 310.0), (95.0, 375.0), (120.0, 431.0),
            (150.0, 491.0), (185.0, 557.0), (240.0, 641.0), (300.0, 738.0), (400.0, 855.0),
        ]),
        (IN_DUCT_IN_GROUND, &[
            (1.5, 25.0), (2.5, 33.0), (4.0, 44.0), (6.0, 56.0), (10.0, 75.0), (16.0, 100.0),
            (25.0, 128.0), (35.0, 153.0), (50.0, 184.0), (70.0, 236.0), (95.0, 285.0), (120.0, 328.0),
            (150.0, 374.0), (185.0, 424.0), (240.0, 488.0), (300.0, 562.0), (400.0, 651.0),
        ]),
        (DIRECT_IN_GROUND, &[
            (1.5, 27.0), (2.5, 36.0), (4.0, 48.0), (6.0, 61.0), (10.0, 81.0), (16.0, 108.0),
            (25.0, 138.0), (35.0, 165.0), (50.0, 198.0), (70.0, 254.0), (95.0, 307.0), (120.0, 353.0),
            (150.0, 402.0), (185.0, 456.0), (240.0, 525.0), (300.0, 605.0), (400.0, 701.0),
        ]),
        (IN_FREE_AIR, &[
            (1.5, 36.0), (2.5, 48.0), (4.0, 64.0), (6.0, 82.0), (10.0, 110.0), (16.0, 147.0),
            (25.0, 189.0), (35.0, 226.0), (50.0, 272.0), (70.0, 348.0), (95.0, 421.0), (120.0, 484.0),
            (150.0, 551.0), (185.0, 625.0), (240.0, 720.0), (300.0, 829.0), (400.0, 960.0),
        ]),
        (ON_VENTILATED_TRAY, &[
            (1.5, 34.0), (2.5, 46.0), (4.0, 61.0), (6.0, 78.0), (10.0, 105.0), (16.0, 140.0),
            (25.0, 180.0), (35.0, 215.0), (50.0, 259.0), (70.0, 331.0), (95.0, 400.0), (120.0, 460.0),
            (150.0, 524.0), (185.0, 594.0), (240.0, 684.0), (300.0, 788.0), (400.0, 912.0),
        ]),
        (ON_PERFORATED_TRAY, &[
            (1.5, 38.0), (2.5, 51.0), (4.0, 68.0), (6.0, 87.0), (10.0, 117.0), (16.0, 156.0),
            (25.0, 200.0), (35.0, 239.0), (50.0, 288.0), (70.0, 368.0), (95.0, 445.0), (120.0, 512.0),
            (150.0, 583.0), (185.0, 661.0), (240.0, 762.0), (300.0, 877.0), (400.0, 1015.0),
        ]),
    ]),
    (PVC_SINGLE_CORE, &[
        (IN_INSULATED_WALL, &[
            (1.0, 13.0), (1.5, 16.0), (2.5, 22.0), (4.0, 29.0), (6.0, 37.0), (10.0, 51.0),
            (16.0, 68.0), (25.0, 89.0), (35.0, 110.0), (50.0, 134.0), (70.0, 171.0), (95.0, 209.0),
            (120.0, 241.0), (150.0, 275.0), (185.0, 314.0), (240.0, 364.0), (300.0, 419.0), (400.0, 486.0),
        ]),
        (ON_WALL_IN_CONDUIT, &[
            (1.0, 15.0), (1.5, 19.0), (2.5, 26.0), (4.0, 34.0), (6.0, 44.0), (10.0, 60.0),
            (16.0, 80.0), (25.0, 105.0), (35.0, 130.0), (50.0, 158.0), (70.0, 203.0), (95.0, 247.0),
            (120.0, 285.0), (150.0, 325.0), (185.0, 371.0), (240.0, 430.0), (300.0, 495.0), (400.0, 574.0),
        ]),
        (IN_CONDUIT, &[
            (1.0, 16.0), (1.5, 20.0), (2.5, 28.0), (4.0, 37.0), (6.0, 47.0), (10.0, 64.0),
            (16.0, 85.0), (25.0, 112.0), (35.0, 138.0), (50.0, 168.0), (70.0, 216.0), (95.0, 263.0),
            (120.0, 304.0), (150.0, 347.0), (185.0, 396.0), (240.0, 459.0), (300.0, 528.0), (400.0, 613.0),
        ]),
        (IN_TRUNKING, &[
            (1.0, 19.0), (1.5, 24.0), (2.5, 33.0), (4.0, 44.0), (6.0, 56.0), (10.0, 76.0),
            (16.0, 101.0), (25.0, 133.0), (35.0, 164.0), (50.0, 200.0), (70.0, 257.0), (95.0, 312.0),
            (120.0, 361.0), (150.0, 412.0), (185.0, 470.0), (240.0, 545.0), (300.0, 627.0), (400.0, 727.0),
        ]),
        (CLIPPED_DIRECT, &[
            (1.0, 24.0), (1.5, 31.0), (2.5, 42.0), (4.0, 56.0), (6.0, 71.0), (10.0, 96.0),
            (16.0, 128.0), (25.0, 168.0), (35.0, 207.0), (50.0, 252.0), (70.0, 324.0), (95.0, 393.0),
            (120.0, 454.0), (150.0, 519.0), (185.0, 593.0), (240.0, 687.0), (300.0, 792.0), (400.0, 918.0),
        ]),
        (IN_FREE_AIR, &[
            (1.0, 26.0), (1.5, 34.0), (2.5, 46.0), (4.0, 61.0), (6.0, 78.0), (10.0, 105.0),
            (16.0, 140.0), (25.0, 184.0), (35.0, 227.0), (50.0, 276.0), (70.0, 355.0), (95.0, 431.0),
            (120.0, 498.0), (150.0, 569.0), (185.0, 650.0), (240.0, 754.0), (300.0, 868.0), (400.0, 1007.0),
        ]),
        (ON_VENTILATED_TRAY, &[
            (1.0, 25.0), (1.5, 32.0), (2.5, 44.0), (4.0, 58.0), (6.0, 74.0), (10.0, 100.0),
            (16.0, 133.0), (25.0, 175.0), (35.0, 216.0), (50.0, 263.0), (70.0, 338.0), (95.0, 410.0),
            (120.0, 474.0), (150.0, 542.0), (185.0, 619.0), (240.0, 717.0), (300.0, 826.0), (400.0, 958.0),
        ]),
        (ON_PERFORATED_TRAY, &[
            (1.0, 28.0), (1.5, 36.0), (2.5, 49.0), (4.0, 65.0), (6.0, 83.0), (10.0, 112.0),
            (16.0, 149.0), (25.0, 196.0), (35.0, 242.0), (50.0, 294.0), (70.0, 378.0), (95.0, 458.0),
            (120.0, 530.0), (150.0, 606.0), (185.0, 692.0), (240.0, 802.0), (300.0, 924.0), (400.0, 1072.0),
        ]),
    ]),
    (LSOH_SINGLE_CORE, &[
        (IN_INSULATED_WALL, &[
            (1.5, 16.0), (2.5, 22.0), (4.0, 29.0), (6.0, 37.0), (10.0, 51.0), (16.0, 68.0),
            (25.0, 89.0), (35.0, 110.0), (50.0, 134.0), (70.0, 171.0), (95.0, 209.0), (120.0, 241.0),
            (150.0, 275.0), (185.0, 314.0), (240.0, 364.0), (300.0, 419.0),
        ]),
        (ON_WALL_IN_CONDUIT, &[
            (1.5, 19.0), (2.5, 26.0), (4.0, 34.0), (6.0, 44.0), (10.0, 60.0), (16.0, 80.0),
            (25.0, 105.0), (35.0, 130.0), (50.0, 158.0), (70.0, 203.0), (95.0, 247.0), (120.0, 285.0),
            (150.0, 325.0), (185.0, 371.0), (240.0, 430.0), (300.0, 495.0),
        ]),
        (IN_CONDUIT, &[
            (1.5, 20.0), (2.5, 28.0), (4.0, 37.0), (6.0, 47.0), (10.0, 64.0), (16.0, 85.0),
            (25.0, 112.0), (35.0, 138.0), (50.0, 168.0), (70.0, 216.0), (95.0, 263.0), (120.0, 304.0),
            (150.0, 347.0), (185.0, 396.0), (240.0, 459.0), (300.0, 528.0),
        ]),
        (IN_TRUNKING, &[
            (1.5, 24.0), (2.5, 33.0), (4.0, 44.0), (6.0, 56.0), (10.0, 76.0), (16.0, 101.0),
            (25.0, 133.0), (35.0, 164.0), (50.0, 200.0), (70.0, 257.0), (95.0, 312.0), (120.0, 361.0),
            (150.0, 412.0), (185.0, 470.0), (240.0, 545.0), (300.0, 627.0),
        ]),
        (CLIPPED_DIRECT, &[
            (1.5, 31.0), (2.5, 42.0), (4.0, 56.0), (6.0, 71.0), (10.0, 96.0), (16.0, 128.0),
            (25.0, 168.0), (35.0, 207.0), (50.0, 252.0), (70.0, 324.0), (95.0, 393.0), (120.0, 454.0),
            (150.0, 519.0), (185.0, 593.0), (240.0, 687.0), (300.0, 792.0),
        ]),
        (IN_FREE_AIR, &[
            (1.5, 34.0), (2.5, 46.0), (4.0, 61.0), (6.0, 78.0), (10.0, 105.0), (16.0, 140.0),
            (25.0, 184.0), (35.0, 227.0), (50.0, 276.0), (70.0, 355.0), (95.0, 431.0), (120.0, 498.0),
            (150.0, 569.0), (185.0, 650.0), (240.0, 754.0), (300.0, 868.0),
        ]),
        (ON_VENTILATED_TRAY, &[
            (1.5, 32.0), (2.5, 44.0), (4.0, 58.0), (6.0, 74.0), (10.0, 100.0), (16.0, 133.0),
            (25.0, 175.0), (35.0, 216.0), (50.0, 263.0), (70.0, 338.0), (95.0, 410.0), (120.0, 474.0),
            (150.0, 542.0), (185.0, 619.0), (240.0, 717.0), (300.0, 826.0),
        ]),
        (ON_PERFORATED_TRAY, &[
            (1.5, 36.0), (2.5, 49.0), (4.0, 65.0), (6.0, 83.0), (10.0, 112.0), (16.0, 149.0),
            (25.0, 196.0), (35.0, 242.0), (50.0, 294.0), (70.0, 378.0), (95.0, 458.0), (120.0, 530.0),
            (150.0, 606.0), (185.0, 692.0), (240.0, 802.0), (300.0, 924.0),
        ]),
    ]),
    (FIRE_RESISTANT, &[
        (IN_INSULATED_WALL, &[
            (1.5, 19.0), (2.5, 25.0), (4.0, 33.0), (6.0, 43.0), (10.0, 58.0), (16.0, 78.0),
            (25.0, 102.0), (35.0, 126.0), (50.0, 154.0), (70.0, 196.0), (95.0, 240.0), (120.0, 277.0),
            (150.0, 316.0), (185.0, 361.0), (240.0, 419.0),
        ]),
        (ON_WALL_IN_CONDUIT, &[
            (1.5, 22.0), (2.5, 30.0), (4.0, 39.0), (6.0, 51.0), (10.0, 69.0), (16.0, 92.0),
            (25.0, 121.0), (35.0, 149.0), (50.0, 182.0), (70.0, 233.0), (95.0, 284.0), (120.0, 328.0),
            (150.0, 374.0), (185.0, 427.0), (240.0, 495.0),
        ]),
        (IN_CONDUIT, &[
            (1.5, 23.0), (2.5, 32.0), (4.0, 42.0), (6.0, 54.0), (10.0, 73.0), (16.0, 98.0),
            (25.0, 128.0), (35.0, 158.0), (50.0, 193.0), (70.0, 248.0), (95.0, 302.0), (120.0, 349.0),
            (150.0, 398.0), (185.0, 455.0), (240.0, 527.0),
        ]),
        (IN_TRUNKING, &[
            (1.5, 28.0), (2.5, 38.0), (4.0, 50.0), (6.0, 64.0), (10.0, 87.0), (16.0, 116.0),
            (25.0, 152.0), (35.0, 188.0), (50.0, 230.0), (70.0, 295.0), (95.0, 359.0), (120.0, 415.0),
            (150.0, 473.0), (185.0, 540.0), (240.0, 627.0),
        ]),
        (CLIPPED_DIRECT, &[
            (1.5, 35.0), (2.5, 48.0), (4.0, 64.0), (6.0, 81.0), (10.0, 110.0), (16.0, 147.0),
            (25.0, 193.0), (35.0, 238.0), (50.0, 290.0), (70.0, 372.0), (95.0, 452.0), (120.0, 522.0),
            (150.0, 596.0), (185.0, 681.0), (240.0, 790.0),
        ]),
        (IN_FREE_AIR, &[
            (1.5, 39.0), (2.5, 53.0), (4.0, 70.0), (6.0, 89.0), (10.0, 121.0), (16.0, 161.0),
            (25.0, 212.0), (35.0, 261.0), (50.0, 318.0), (70.0, 408.0), (95.0, 496.0), (120.0, 573.0),
            (150.0, 654.0), (185.0, 747.0), (240.0, 867.0),
        ]),
        (ON_VENTILATED_TRAY, &[
            (1.5, 37.0), (2.5, 50.0), (4.0, 67.0), (6.0, 85.0), (10.0, 115.0), (16.0, 153.0),
            (25.0, 201.0), (35.0, 248.0), (50.0, 302.0), (70.0, 388.0), (95.0, 471.0), (120.0, 544.0),
            (150.0, 622.0), (185.0, 711.0), (240.0, 825.0),
        ]),
    ]),
    (MICC, &[
        (CLIPPED_DIRECT, &[
            (1.0, 28.0), (1.5, 37.0), (2.5, 50.0), (4.0, 68.0), (6.0, 87.0), (10.0, 118.0),
            (16.0, 157.0), (25.0, 202.0),
        ]),
        (IN_FREE_AIR, &[
            (1.0, 32.0), (1.5, 42.0), (2.5, 57.0), (4.0, 77.0), (6.0, 98.0), (10.0, 134.0),
            (16.0, 178.0), (25.0, 229.0),
        ]),
        (ON_VENTILATED_TRAY, &[
            (1.0, 30.0), (1.5, 40.0), (2.5, 54.0), (4.0, 73.0), (6.0, 93.0), (10.0, 127.0),
            (16.0, 169.0), (25.0, 217.0),
        ]),
    ]),
    (RUBBER_FLEX, &[
        (CLIPPED_DIRECT, &[
            (1.0, 18.0), (1.5, 23.0), (2.5, 32.0), (4.0, 43.0), (6.0, 55.0), (10.0, 75.0),
            (16.0, 100.0), (25.0, 128.0), (35.0, 153.0), (50.0, 184.0),
        ]),
        (IN_FREE_AIR, &[
            (1.0, 20.0), (1.5, 26.0), (2.5, 36.0), (4.0, 48.0), (6.0, 62.0), (10.0, 84.0),
            (16.0, 112.0), (25.0, 144.0), (35.0, 172.0), (50.0, 207.0),
        ]),
    ]),
    (NYY_J, &[
        (CLIPPED_DIRECT, &[
            (1.5, 30.0), (2.5, 40.0), (4.0, 54.0), (6.0, 69.0), (10.0, 93.0), (16.0, 124.0),
            (25.0, 159.0), (35.0, 190.0), (50.0, 229.0), (70.0, 293.0), (95.0, 354.0), (120.0, 407.0),
            (150.0, 463.0), (185.0, 526.0), (240.0, 605.0), (300.0, 697.0), (400.0, 807.0),
        ]),
        (IN_DUCT_IN_GROUND, &[
            (1.5, 23.0), (2.5, 31.0), (4.0, 42.0), (6.0, 53.0), (10.0, 71.0), (16.0, 95.0),
            (25.0, 121.0), (35.0, 145.0), (50.0, 174.0), (70.0, 223.0), (95.0, 269.0), (120.0, 310.0),
            (150.0, 353.0), (185.0, 401.0), (240.0, 461.0), (300.0, 531.0), (400.0, 615.0),
        ]),
        (DIRECT_IN_GROUND, &[
            (1.5, 25.0), (2.5, 34.0), (4.0, 45.0), (6.0, 58.0), (10.0, 77.0), (16.0, 102.0),
            (25.0, 131.0), (35.0, 156.0), (50.0, 187.0), (70.0, 240.0), (95.0, 290.0), (120.0, 334.0),
            (150.0, 380.0), (185.0, 431.0), (240.0, 496.0), (300.0, 571.0), (400.0, 662.0),
        ]),
        (IN_FREE_AIR, &[
            (1.5, 34.0), (2.5, 45.0), (4.0, 60.0), (6.0, 77.0), (10.0, 104.0), (16.0, 139.0),
            (25.0, 178.0), (35.0, 213.0), (50.0, 257.0), (70.0, 329.0), (95.0, 397.0), (120.0, 457.0),
            (150.0, 520.0), (185.0, 590.0), (240.0, 679.0), (300.0, 782.0), (400.0, 906.0),
        ]),
        (ON_VENTILATED_TRAY, &[
            (1.5, 32.0), (2.5, 43.0), (4.0, 57.0), (6.0, 73.0), (10.0, 99.0), (16.0, 132.0),
            (25.0, 170.0), (35.0, 203.0), (50.0, 245.0), (70.0, 313.0), (95.0, 378.0), (120.0, 435.0),
            (150.0, 495.0), (185.0, 562.0), (240.0, 646.0), (300.0, 744.0), (400.0, 862.0),
        ]),
        (ON_PERFORATED_TRAY, &[
            (1.5, 36.0), (2.5, 48.0), (4.0, 64.0), (6.0, 82.0), (10.0, 111.0), (16.0, 148.0),
            (25.0, 190.0), (35.0, 226.0), (50.0, 273.0), (70.0, 348.0), (95.0, 421.0), (120.0, 484.0),
            (150.0, 551.0), (185.0, 625.0), (240.0, 719.0), (300.0, 828.0), (400.0, 959.0),
        ]),
    ]),
];

/// mV/A/m for every size a rating exists for under one installation method.
fn voltage_drop_series(ratings: &[(f64, f64)]) -> Vec<(f64, f64)> {
    ratings
        .iter()
        .filter_map(|&(size, _)| COPPER_MV.iter().find(|&&(key, _)| key == size).copied())
        .collect()
}

static VOLTAGE_DROP_TABLE: LazyLock<LookupTable> = LazyLock::new(|| {
    let series: Vec<Vec<(&str, Vec<(f64, f64)>)>> = CURRENT_CAPACITY_DATA
        .iter()
        .map(|&(_, methods)| {
            methods
                .iter()
                .map(|&(method, ratings)| (method, voltage_drop_series(ratings)))
                .collect()
        })
        .collect();
    let series_data: Vec<Vec<SeriesData<'_>>> = series
        .iter()
        .map(|methods| {
            methods
                .iter()
                .map(|(method, points)| (*method, points.as_slice()))
                .collect()
        })
        .collect();
    let data: Vec<CategoryData<'_>> = CURRENT_CAPACITY_DATA
        .iter()
        .zip(&series_data)
        .map(|(&(family, _), methods)| (family, methods.as_slice()))
        .collect();
    LookupTable::new(&data).expect("bundled mV/A/m table is valid")
});

static CURRENT_CAPACITY_TABLE: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::new(CURRENT_CAPACITY_DATA).expect("bundled current rating table is valid")
});

pub fn voltage_drop_table() -> &'static LookupTable {
    &VOLTAGE_DROP_TABLE
}

pub fn current_capacity_table() -> &'static LookupTable {
    &CURRENT_CAPACITY_TABLE
}

/// Self-employed income tax and National Insurance figures for one tax year.
#[derive(Debug, Clone, Copy)]
pub struct TaxYearRates {
    pub personal_allowance: f64,
    pub allowance_taper_threshold: f64,
    /// `(lower threshold, rate)` pairs applied to income after the allowance.
    pub income_tax_bands: &'static [(f64, f64)],
    /// `(lower threshold, rate)` pairs applied to profit.
    pub class4_bands: &'static [(f64, f64)],
    pub class2_weekly_rate: f64,
    pub class2_threshold: f64,
}

const INCOME_TAX_BANDS: &[(f64, f64)] = &[(0.0, 0.20), (37_700.0, 0.40), (125_140.0, 0.45)];
const CLASS4_BANDS: &[(f64, f64)] = &[(0.0, 0.0), (12_570.0, 0.06), (50_270.0, 0.02)];

// Class 2 is charged once profit passes the lower profits limit, the same
// £12,570 where Class 4 starts.
const RATES_2024_25: TaxYearRates = TaxYearRates {
    personal_allowance: 12_570.0,
    allowance_taper_threshold: 100_000.0,
    income_tax_bands: INCOME_TAX_BANDS,
    class4_bands: CLASS4_BANDS,
    class2_weekly_rate: 3.45,
    class2_threshold: 12_570.0,
};

// Class 2 is no longer charged from 2025/26; the line stays in results at zero.
const RATES_2025_26: TaxYearRates = TaxYearRates {
    personal_allowance: 12_570.0,
    allowance_taper_threshold: 100_000.0,
    income_tax_bands: INCOME_TAX_BANDS,
    class4_bands: CLASS4_BANDS,
    class2_weekly_rate: 0.0,
    class2_threshold: 6_845.0,
};

impl TaxYear {
    pub const ALL: [TaxYear; 2] = [TaxYear::Y2024_25, TaxYear::Y2025_26];

    pub fn rates(self) -> TaxYearRates {
        match self {
            TaxYear::Y2024_25 => RATES_2024_25,
            TaxYear::Y2025_26 => RATES_2025_26,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaxYear::Y2024_25 => "2024-25",
            TaxYear::Y2025_26 => "2025-26",
        }
    }
}
