//! Shoe grid section - wrapping flex layout of cards.

use chrono::NaiveDate;

use crate::data::Shoe;
use crate::sections::shoe_card::render_shoe_card;

/// Render a collection of shoes as a card grid.
pub fn render_shoe_grid(shoes: &[Shoe], today: NaiveDate) -> String {
    tracing::debug!(count = shoes.len(), "rendering shoe grid");

    let cards: String = shoes
        .iter()
        .map(|shoe| render_shoe_card(shoe, today))
        .collect();

    format!(
        r#"<section class="shoe-grid" data-section="shoe-grid">
    {}
</section>"#,
        cards
    )
}

/// Static CSS for the grid layout.
pub fn grid_styles() -> &'static str {
    ".shoe-grid { display: flex; flex-wrap: wrap; gap: 32px; }\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shoe(slug: &str) -> Shoe {
        Shoe::new(
            slug,
            "Shoe",
            format!("/assets/{}.jpg", slug),
            Price::from_cents(10000),
            date(2023, 1, 1),
            2,
        )
    }

    #[test]
    fn test_grid_wraps_every_card() {
        let shoes = vec![shoe("alpha"), shoe("beta"), shoe("gamma")];
        let html = render_shoe_grid(&shoes, date(2024, 6, 1));
        assert_eq!(html.matches("<article class=\"shoe-card\"").count(), 3);
        assert!(html.contains(r#"href="/shoe/alpha""#));
        assert!(html.contains(r#"href="/shoe/gamma""#));
    }

    #[test]
    fn test_empty_grid_renders_section() {
        let html = render_shoe_grid(&[], date(2024, 6, 1));
        assert!(html.contains(r#"data-section="shoe-grid""#));
        assert!(!html.contains("shoe-card-link"));
    }
}
