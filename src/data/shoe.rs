//! Shoe data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Price;

/// A shoe as supplied to the card renderers.
///
/// Records are read-only inputs; nothing here is mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    /// URL-friendly identifier, keys the detail route.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image URI.
    pub image_src: String,
    /// Regular price.
    pub price: Price,
    /// Discounted price, present only while the shoe is on sale.
    #[serde(default)]
    pub sale_price: Option<Price>,
    /// Calendar date the shoe was released.
    pub release_date: NaiveDate,
    /// Number of colorways available. Zero is valid.
    pub num_of_colors: u32,
}

impl Shoe {
    /// Create a shoe that is not on sale.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Price,
        release_date: NaiveDate,
        num_of_colors: u32,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors,
        }
    }

    /// Set a sale price.
    pub fn with_sale_price(mut self, sale_price: Price) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Check if the shoe is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Path of the shoe's detail page.
    pub fn detail_href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}
