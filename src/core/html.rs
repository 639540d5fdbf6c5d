// src/core/html.rs
// Document tree helpers on top of `scraper`.
// "Absent" and "required but missing" are kept apart: `select_*` return
// Option/empty, `find_tag` and `attr` fail with a typed error.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn parse(text: &str) -> Html {
    Html::parse_document(text)
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

/// All elements under `root` matching `css`, in document order.
pub fn select_all<'a>(root: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    let found = root.select(&sel).collect();
    Ok(found)
}

/// First element under `root` matching `css`.
pub fn select_one<'a>(root: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    let first = root.select(&sel).next();
    Ok(first)
}

fn attrs_match(el: &ElementRef<'_>, attrs: &[(&str, &str)]) -> bool {
    let v = el.value();
    attrs.iter().all(|(name, want)| {
        if *name == "class" {
            // every requested class token must be present, in any order
            want.split_whitespace().all(|c| v.classes().any(|have| have == c))
        } else {
            v.attr(name) == Some(*want)
        }
    })
}

/// First descendant of `root` (not `root` itself) named `name` whose
/// attributes match `attrs`.
pub fn find_tag<'a>(
    root: ElementRef<'a>,
    name: &str,
    attrs: &[(&str, &str)],
) -> Result<ElementRef<'a>> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name().eq_ignore_ascii_case(name) && attrs_match(el, attrs))
        .ok_or_else(|| ScrapeError::tag_not_found(name, attrs))
}

/// Every descendant named `name`, in document order.
pub fn find_all<'a>(root: ElementRef<'a>, name: &str) -> Vec<ElementRef<'a>> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case(name))
        .collect()
}

/// Concatenated text of `el` and its descendants, untouched.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Required attribute value.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Result<&'a str> {
    el.value().attr(name).ok_or_else(|| ScrapeError::MissingAttribute {
        tag: s!(el.value().name()),
        attr: s!(name),
    })
}

/// First element sibling after `el`, skipping text and comments.
pub fn next_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}
