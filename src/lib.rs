//! Presentational components for a shoe storefront.
//!
//! This crate renders product cards as server-side HTML fragments:
//!
//! - **Theme**: the color/weight design-token palette
//! - **Card**: variant classification (default / on-sale / new-release) and
//!   the style record derived from it
//! - **Sections**: HTML renderers for the card, the card grid, and the
//!   spacer/link primitives
//!
//! Rendering is a single synchronous pass: a [`data::Shoe`] record goes in,
//! an HTML string comes out. The only time-dependence is the release-date
//! freshness check, and the evaluation date is always an explicit argument.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use storefront_ui::prelude::*;
//!
//! let shoe = Shoe::new(
//!     "air-flight-89",
//!     "Air Flight 89",
//!     "/assets/air-flight-89.jpg",
//!     Price::from_cents(16500),
//!     NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
//!     4,
//! )
//! .with_sale_price(Price::from_cents(13900));
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let html = render_shoe_card(&shoe, today);
//! assert!(html.contains("Sale"));
//! ```

pub mod card;
pub mod data;
pub mod error;
pub mod format;
pub mod money;
pub mod sections;
pub mod theme;

pub use card::{CardStyle, CardVariant, Flag, PriceStyle};
pub use data::Shoe;
pub use error::UiError;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{CardStyle, CardVariant, Flag, PriceStyle};
    pub use crate::data::Shoe;
    pub use crate::error::UiError;
    pub use crate::format::{is_new_release, pluralize, today_utc, NEW_RELEASE_WINDOW_DAYS};
    pub use crate::money::Price;
    pub use crate::sections::{
        card_styles, grid_styles, render_link, render_shoe_card, render_shoe_grid, render_spacer,
    };
    pub use crate::theme;
}
