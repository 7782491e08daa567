use egui::Color32;

/// Hex color parsing for the status and badge palettes.
pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        let (r, g, b) = match hex.len() {
            6 => (
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            ),
            // #rgb shorthand, each digit doubled
            3 => {
                let expand = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v * 17);
                (
                    expand(&hex[0..1])?,
                    expand(&hex[1..2])?,
                    expand(&hex[2..3])?,
                )
            }
            _ => return None,
        };

        Some(Color32::from_rgb(r, g, b))
    }
}
