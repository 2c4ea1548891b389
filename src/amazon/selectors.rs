//! CSS selectors for Amazon search listing pages.
//!
//! All selectors used by the listing parser live here.
//! Update this file when Amazon changes their HTML structure.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for search results pages.
pub mod search {
    use super::*;

    /// Result item under the main results slot.
    pub static RESULT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-main-slot .s-result-item").unwrap());

    /// Product title text.
    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("h2 .a-text-normal").unwrap());

    /// Whole price (dollars part).
    pub static PRICE_WHOLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-price-whole").unwrap());

    /// Fractional price (cents part).
    pub static PRICE_FRACTION: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-price-fraction").unwrap());

    /// Star rating text, e.g. "4.5 out of 5 stars".
    pub static RATING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-icon-alt").unwrap());

    /// Title link for URL extraction.
    pub static TITLE_LINK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("h2 a.a-link-normal").unwrap());

    /// Brand byline.
    pub static BYLINE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#bylineInfo_feature_div").unwrap());
}

/// Selectors for block and error pages.
pub mod errors {
    use super::*;

    /// CAPTCHA form.
    pub static CAPTCHA: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form[action*='validateCaptcha'], \
             img[src*='captcha'], \
             input#captchacharacters",
        )
        .unwrap()
    });

    /// "Dogs of Amazon" 503 page.
    pub static DOG_PAGE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "img[alt*='dog'], \
             a[href='/ref=cs_503_link']",
        )
        .unwrap()
    });
}
