//! Fixed color and style palettes referenced by index from the config.
//!
//! Table order is a persisted-identity contract: `lipType`/`nailType`
//! indices are stored in profile records and resolved modulo the table
//! length, so reordering or resizing a table changes what existing
//! profiles look like.

/// The 80 preset skin tones offered by the editor.
pub const SKIN_PALETTE: [&str; 80] = [
    // Fair
    "#fde8d8", "#fddcca", "#fccfba", "#fbc3ab", "#fab79c", "#f9ab8d",
    "#f89f7e", "#f7936f", "#f68760", "#f57b51",
    // Medium
    "#e8b89a", "#d9a687", "#ca9474", "#bb8261", "#ac704e", "#9d5e3b",
    "#8e4c28", "#7f3a15", "#a0724f", "#b0855e",
    // Deep
    "#8b5e3c", "#7a4f2f", "#694022", "#583115", "#472208", "#6b3f2a",
    "#5c3020", "#4d2110", "#3e1200", "#2f0300",
    // Golden / olive
    "#e8c99a", "#d4b480", "#c09f66", "#ac8a4c", "#987532", "#846018",
    "#704b00", "#c8a87a", "#b49060", "#a07846",
    // Reddish
    "#c87860", "#b46848", "#a05830", "#8c4818", "#783800", "#d48070",
    "#c07060", "#ac6050", "#985040", "#844030",
    // Fantasy — ethereal blues/purples
    "#a0b8d8", "#8898b8", "#707898", "#585878", "#404058", "#8080c0",
    "#6060a0", "#404080", "#202060", "#000040",
    // Fantasy — greens
    "#90c890", "#70a870", "#508850", "#306830", "#104810", "#a0d8a0",
    "#80b880", "#609860", "#407840", "#205820",
    // Fantasy — golds/metallics
    "#ffd700", "#e8c000", "#d0a900", "#b89200", "#a07b00", "#c8b060",
    "#b09040", "#987020", "#805000", "#683000",
];

/// The 32 preset iris colors.
pub const EYE_COLORS: [&str; 32] = [
    "#4a7c59", "#2d5a27", "#6b8e23", "#3d6b21",
    "#3b5998", "#1e3a8a", "#60a5fa", "#93c5fd",
    "#8b4513", "#6b3a2a", "#a0522d", "#d2691e",
    "#808080", "#a9a9a9", "#d3d3d3", "#f5f5f5",
    "#8b0000", "#dc143c", "#ff4500", "#ff6347",
    "#9400d3", "#8b008b", "#da70d6", "#ee82ee",
    "#ffd700", "#ffa500", "#ff8c00", "#daa520",
    "#00ced1", "#00bfff", "#1e90ff", "#000000",
];

/// The 18 lip colors selected by `lipType % 18`.
pub const LIP_COLORS: [&str; 18] = [
    "#c87060", "#b06050", "#d08070", "#a05040", "#e09080", "#884030",
    "#d4a0a0", "#c88888", "#c07070", "#b85858", "#805060", "#a07090",
    "#8060a0", "#604080", "#ff8080", "#ff60a0", "#c06080", "#a04060",
];

/// The 18 lip style names the editor shows for each `lipType` index.
pub const LIP_TYPES: [&str; 18] = [
    "natural", "full", "thin", "cupids_bow", "pouty", "wide",
    "downturned", "upturned", "heart", "defined",
    "angular", "soft", "dramatic", "subtle", "asymmetric",
    "glossy", "matte", "sculpted",
];

/// The 18 nail style names the editor shows for each `nailType` index.
pub const NAIL_TYPES: [&str; 18] = [
    "natural", "square", "oval", "almond", "stiletto", "coffin",
    "ballerina", "flare", "lipstick", "arrowhead",
    "edge", "mountain_peak", "squoval", "round", "pointed",
    "short", "long", "extra_long",
];
