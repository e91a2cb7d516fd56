//! Card variant classification and style resolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::UiError;
use crate::format::is_new_release;
use crate::money::Price;
use crate::theme::colors;

/// Presentation state of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    /// No flag, regular price.
    #[default]
    Default,
    /// Discounted: sale flag, struck-through original price.
    OnSale,
    /// Released within the freshness window: "Just Released!" flag.
    NewRelease,
}

impl CardVariant {
    /// Classify a card from its pricing and release date.
    ///
    /// A sale price always wins: a shoe can be both discounted and recently
    /// released, and the sale presentation is the one used.
    pub fn classify(
        sale_price: Option<Price>,
        release_date: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        if sale_price.is_some() {
            CardVariant::OnSale
        } else if is_new_release(release_date, today) {
            CardVariant::NewRelease
        } else {
            CardVariant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::OnSale => "on-sale",
            CardVariant::NewRelease => "new-release",
        }
    }

    /// Parse a variant tag, rejecting anything without a style entry.
    pub fn parse(s: &str) -> Result<Self, UiError> {
        match s {
            "default" => Ok(CardVariant::Default),
            "on-sale" => Ok(CardVariant::OnSale),
            "new-release" => Ok(CardVariant::NewRelease),
            other => Err(UiError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for CardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flag overlaid on the card image for non-default variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    /// Flag label.
    pub text: &'static str,
    /// Background color token.
    pub background: &'static str,
}

/// How the regular price is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceStyle {
    /// Text color token.
    pub color: &'static str,
    /// Whether the price is struck through.
    pub strikethrough: bool,
}

/// Resolved visual parameters for a card variant.
///
/// The flag is present exactly when the variant is not [`CardVariant::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub flag: Option<Flag>,
    pub price: PriceStyle,
}

impl CardStyle {
    /// Look up the style record for a variant.
    ///
    /// The match is exhaustive, so a variant added without a style arm is a
    /// compile error rather than a runtime lookup failure.
    pub fn for_variant(variant: CardVariant) -> Self {
        match variant {
            CardVariant::Default => CardStyle {
                flag: None,
                price: PriceStyle {
                    color: colors::GRAY_900,
                    strikethrough: false,
                },
            },
            CardVariant::OnSale => CardStyle {
                flag: Some(Flag {
                    text: "Sale",
                    background: colors::PRIMARY,
                }),
                price: PriceStyle {
                    color: colors::GRAY_700,
                    strikethrough: true,
                },
            },
            CardVariant::NewRelease => CardStyle {
                flag: Some(Flag {
                    text: "Just Released!",
                    background: colors::SECONDARY,
                }),
                price: PriceStyle {
                    color: colors::GRAY_900,
                    strikethrough: false,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sale_price_wins_over_recent_release() {
        let today = date(2024, 6, 1);
        let released_yesterday = date(2024, 5, 31);
        let variant =
            CardVariant::classify(Some(Price::from_cents(8000)), released_yesterday, today);
        assert_eq!(variant, CardVariant::OnSale);
    }

    #[test]
    fn test_recent_release_without_sale_is_new() {
        let today = date(2024, 6, 1);
        let variant = CardVariant::classify(None, date(2024, 5, 20), today);
        assert_eq!(variant, CardVariant::NewRelease);
    }

    #[test]
    fn test_old_release_without_sale_is_default() {
        let today = date(2024, 6, 1);
        let variant = CardVariant::classify(None, date(2022, 6, 1), today);
        assert_eq!(variant, CardVariant::Default);
    }

    #[test]
    fn test_flag_present_iff_not_default() {
        for variant in [
            CardVariant::Default,
            CardVariant::OnSale,
            CardVariant::NewRelease,
        ] {
            let style = CardStyle::for_variant(variant);
            assert_eq!(style.flag.is_some(), variant != CardVariant::Default);
        }
    }

    #[test]
    fn test_strikethrough_iff_on_sale() {
        for variant in [
            CardVariant::Default,
            CardVariant::OnSale,
            CardVariant::NewRelease,
        ] {
            let style = CardStyle::for_variant(variant);
            assert_eq!(style.price.strikethrough, variant == CardVariant::OnSale);
        }
    }

    #[test]
    fn test_flag_text_and_background() {
        let sale = CardStyle::for_variant(CardVariant::OnSale).flag.unwrap();
        assert_eq!(sale.text, "Sale");
        assert_eq!(sale.background, colors::PRIMARY);

        let fresh = CardStyle::for_variant(CardVariant::NewRelease)
            .flag
            .unwrap();
        assert_eq!(fresh.text, "Just Released!");
        assert_eq!(fresh.background, colors::SECONDARY);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let today = date(2024, 6, 1);
        let release = date(2024, 5, 20);
        let a = CardVariant::classify(None, release, today);
        let b = CardVariant::classify(None, release, today);
        assert_eq!(a, b);
        assert_eq!(CardStyle::for_variant(a), CardStyle::for_variant(b));
    }

    #[test]
    fn test_variant_tag_round_trip() {
        for variant in [
            CardVariant::Default,
            CardVariant::OnSale,
            CardVariant::NewRelease,
        ] {
            assert_eq!(CardVariant::parse(variant.as_str()).unwrap(), variant);
        }
    }

    #[test]
    fn test_unknown_variant_tag_is_rejected() {
        let err = CardVariant::parse("clearance").unwrap_err();
        assert!(matches!(err, UiError::UnknownVariant(tag) if tag == "clearance"));
    }

    #[test]
    fn test_variant_serde_tags() {
        let v: CardVariant = serde_json::from_str(r#""on-sale""#).unwrap();
        assert_eq!(v, CardVariant::OnSale);
        assert_eq!(
            serde_json::to_string(&CardVariant::NewRelease).unwrap(),
            r#""new-release""#
        );
    }
}
