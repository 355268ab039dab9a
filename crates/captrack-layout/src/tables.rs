//! Built-in electrode position tables.
//!
//! Coordinates are in the cap's native frame: x anterior, y left,
//! z superior, on a unit-radius head sphere. Positions follow the
//! extended 10-10 ring arrangement the cap is manufactured with.

/// The standard cap table: `(label, [x, y, z])` in cap-native coordinates.
pub static STANDARD_CAP: [(&str, [f64; 3]); 41] = [
    ("Cz", [0.0, 0.0, 1.0]),
    ("FCz", [0.309, 0.0, 0.9511]),
    ("FC1", [0.2185, 0.2185, 0.9511]),
    ("C1", [0.0, 0.309, 0.9511]),
    ("CP1", [-0.2185, 0.2185, 0.9511]),
    ("CPz", [-0.309, 0.0, 0.9511]),
    ("CP2", [-0.2185, -0.2185, 0.9511]),
    ("C2", [0.0, -0.309, 0.9511]),
    ("FC2", [0.2185, -0.2185, 0.9511]),
    ("Fz", [0.5878, 0.0, 0.809]),
    ("FC3", [0.4156, 0.4156, 0.809]),
    ("C3", [0.0, 0.5878, 0.809]),
    ("CP3", [-0.4156, 0.4156, 0.809]),
    ("Pz", [-0.5878, 0.0, 0.809]),
    ("CP4", [-0.4156, -0.4156, 0.809]),
    ("C4", [0.0, -0.5878, 0.809]),
    ("FC4", [0.4156, -0.4156, 0.809]),
    ("AFz", [0.809, 0.0, 0.5878]),
    ("FC5", [0.5721, 0.5721, 0.5878]),
    ("C5", [0.0, 0.809, 0.5878]),
    ("CP5", [-0.5721, 0.5721, 0.5878]),
    ("POz", [-0.809, 0.0, 0.5878]),
    ("CP6", [-0.5721, -0.5721, 0.5878]),
    ("C6", [0.0, -0.809, 0.5878]),
    ("FC6", [0.5721, -0.5721, 0.5878]),
    ("Fpz", [0.9511, 0.0, 0.309]),
    ("AF7", [0.8236, 0.4755, 0.309]),
    ("F7", [0.4755, 0.8236, 0.309]),
    ("T7", [0.0, 0.9511, 0.309]),
    ("TP7", [-0.4755, 0.8236, 0.309]),
    ("P7", [-0.8236, 0.4755, 0.309]),
    ("Oz", [-0.9511, 0.0, 0.309]),
    ("P8", [-0.8236, -0.4755, 0.309]),
    ("TP8", [-0.4755, -0.8236, 0.309]),
    ("T8", [0.0, -0.9511, 0.309]),
    ("F8", [0.4755, -0.8236, 0.309]),
    ("AF8", [0.8236, -0.4755, 0.309]),
    ("OI1h", [-0.9755, 0.1545, 0.1564]),
    ("OI2h", [-0.9755, -0.1545, 0.1564]),
    ("FT9", [0.1545, 0.9755, 0.1564]),
    ("FT10", [0.1545, -0.9755, 0.1564]),
];
