pub const DEFAULT_STYLES: [&str; 10] = [
    "Photorealistic",
    "Surrealist",
    "Pop Art",
    "Minimalist",
    "Cyberpunk",
    "Vintage Photo",
    "Fantasy Art",
    "Abstract",
    "Oil Painting",
    "Watercolor",
];

pub const MAX_STYLE_LENGTH: usize = 100;
