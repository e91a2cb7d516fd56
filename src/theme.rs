//! Color and weight design tokens.
//!
//! The palette has no behavior, only data. Components consume these values
//! directly in static CSS and as CSS custom-property values on rendered
//! markup.

/// Storefront color palette, as CSS HSL strings.
pub mod colors {
    pub const WHITE: &str = "hsl(0deg, 0%, 100%)";

    pub const GRAY_100: &str = "hsl(185deg, 5%, 95%)";
    pub const GRAY_300: &str = "hsl(190deg, 5%, 80%)";
    pub const GRAY_500: &str = "hsl(196deg, 4%, 60%)";
    pub const GRAY_700: &str = "hsl(220deg, 5%, 40%)";
    pub const GRAY_900: &str = "hsl(220deg, 3%, 20%)";

    pub const PRIMARY: &str = "hsl(340deg, 65%, 47%)";
    pub const SECONDARY: &str = "hsl(240deg, 60%, 63%)";
}

/// Font weight scale.
pub mod weights {
    pub const NORMAL: u16 = 500;
    pub const MEDIUM: u16 = 600;
    pub const BOLD: u16 = 800;
}
