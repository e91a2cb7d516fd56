//! Shoe card section - image with flag overlay, name, price, color count.

use chrono::NaiveDate;

use crate::card::{CardStyle, CardVariant};
use crate::data::Shoe;
use crate::format::pluralize;
use crate::money::Price;
use crate::sections::html_escape;
use crate::sections::primitives::{render_link, render_spacer};
use crate::theme::{colors, weights};

/// Render a single shoe card, linked to the shoe's detail page.
///
/// `today` is the evaluation date for the release freshness check; callers
/// rendering against wall clock pass [`crate::format::today_utc`].
pub fn render_shoe_card(shoe: &Shoe, today: NaiveDate) -> String {
    let variant = CardVariant::classify(shoe.sale_price, shoe.release_date, today);
    let style = CardStyle::for_variant(variant);

    tracing::trace!(slug = %shoe.slug, variant = variant.as_str(), "rendering shoe card");

    let flag = match style.flag {
        Some(flag) => format!(
            r#"<div class="card-flag" style="--flag-background: {}">{}</div>"#,
            flag.background, flag.text
        ),
        None => String::new(),
    };

    let sale_price = match (variant, shoe.sale_price) {
        (CardVariant::OnSale, Some(sale)) => render_sale_price(sale),
        _ => String::new(),
    };

    let decoration = if style.price.strikethrough {
        "line-through"
    } else {
        "none"
    };

    let inner = format!(
        r#"<article class="shoe-card" data-variant="{variant}">
    <div class="card-image-wrapper">
        <img class="card-image" alt="" src="{image}">
        {flag}
    </div>
    {spacer}
    <div class="card-row">
        <h3 class="card-name">{name}</h3>
        <span class="card-price" style="--color: {price_color}; --text-decoration: {decoration}">{price}</span>
    </div>
    <div class="card-row">
        <p class="card-color-info">{colors}</p>
        {sale_price}
    </div>
</article>"#,
        variant = variant,
        image = html_escape(&shoe.image_src),
        flag = flag,
        spacer = render_spacer(12),
        name = html_escape(&shoe.name),
        price_color = style.price.color,
        decoration = decoration,
        price = shoe.price.display(),
        colors = pluralize("Color", shoe.num_of_colors),
        sale_price = sale_price,
    );

    render_link(&shoe.detail_href(), "shoe-card-link", &inner)
}

fn render_sale_price(sale: Price) -> String {
    format!(
        r#"<span class="card-sale-price">{}</span>"#,
        sale.display()
    )
}

/// Static CSS for the card markup. Hosts inject it once per page.
pub fn card_styles() -> String {
    format!(
        r#".shoe-card-link {{ text-decoration: none; color: inherit; flex: 1 1 340px; }}
.shoe-card {{ display: flex; flex-direction: column; padding: 0 4px; }}
.card-image-wrapper {{ position: relative; }}
.card-image {{ width: 100%; border-radius: 16px 16px 4px 4px; }}
.card-row {{ font-size: 1rem; display: flex; justify-content: space-between; }}
.card-name {{ font-weight: {medium}; color: {gray_900}; }}
.card-price {{ padding-right: 4px; color: var(--color); text-decoration-line: var(--text-decoration); }}
.card-color-info {{ color: {gray_700}; }}
.card-sale-price {{ font-weight: {medium}; color: {primary}; padding-right: 4px; }}
.card-flag {{ position: absolute; top: 12px; right: -4px; background-color: var(--flag-background); color: {white}; font-weight: 700; font-size: 1rem; padding: 8px; border-radius: 2px; }}
"#,
        medium = weights::MEDIUM,
        gray_900 = colors::GRAY_900,
        gray_700 = colors::GRAY_700,
        primary = colors::PRIMARY,
        white = colors::WHITE,
    )
}
