use scraper::{ElementRef, Selector};

pub mod career_stats;
pub mod general_info;
pub mod hero_summary;
pub mod keys;
pub mod prestige;
pub mod profile;
pub mod value;

/// Compiles one of the fixed page selectors.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css}: {e:?}"))
}

pub(crate) fn select_first<'a>(
    element: ElementRef<'a>,
    selector: &Selector,
) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first match, empty when nothing matches.
pub(crate) fn select_text(element: ElementRef, selector: &Selector) -> String {
    select_first(element, selector)
        .map(element_text)
        .unwrap_or_default()
}

pub(crate) fn select_attr(element: ElementRef, selector: &Selector, attr: &str) -> String {
    select_first(element, selector)
        .and_then(|e| e.value().attr(attr))
        .map(|e| e.trim().to_string())
        .unwrap_or_default()
}

/// `background-image:url(https://...)` -> `https://...`
pub(crate) fn background_url(style: &str) -> String {
    style
        .replace("background-image:url(", "")
        .replace(')', "")
        .trim()
        .to_string()
}

pub(crate) fn parse_int(text: &str) -> i64 {
    text.trim().parse().unwrap_or_default()
}

pub(crate) fn parse_float(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|e| e.is_finite())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::{background_url, parse_float, parse_int, select_attr, select_text, selector};

    #[test]
    fn reads_text_and_attributes() {
        let html = Html::parse_fragment(
            r#"<div><span class="a"> first </span><span class="a">second</span><img src="x.png"></div>"#,
        );
        let root = html.root_element();
        assert_eq!(select_text(root, &selector("span.a")), "first");
        assert_eq!(select_text(root, &selector("span.b")), "");
        assert_eq!(select_attr(root, &selector("img"), "src"), "x.png");
        assert_eq!(select_attr(root, &selector("img"), "alt"), "");
    }

    #[test]
    fn unwraps_background_urls() {
        assert_eq!(
            background_url("background-image:url(https://cdn.test/level.png)"),
            "https://cdn.test/level.png"
        );
        assert_eq!(background_url(""), "");
    }

    #[test]
    fn numbers_default_to_zero() {
        assert_eq!(parse_int(" 42 "), 42);
        assert_eq!(parse_int("4 2"), 0);
        assert_eq!(parse_float("3.25"), 3.25);
        assert_eq!(parse_float("--"), 0.0);
        assert_eq!(parse_float("inf"), 0.0);
    }
}
