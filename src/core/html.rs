// src/core/html.rs
//
// Checked accessors over the parsed DOM. Each one names the precondition it
// enforces, and on failure reports it together with the ancestor path of the
// element being inspected, e.g.
//
//   second cell must have a tag container (at html > body > div#SkillGemsGem > table > tbody > tr > td)

use scraper::{ElementRef, Html, Selector};

use crate::error::MarkupError;

/// Short description of one element: `div#SkillGemsGem.tab-pane`
pub fn describe(el: ElementRef<'_>) -> String {
    let v = el.value();
    let mut out = s!(v.name());
    if let Some(id) = v.id() {
        out.push('#');
        out.push_str(id);
    }
    for class in v.classes() {
        out.push('.');
        out.push_str(class);
    }
    out
}

/// Ancestor chain from the root down to `el`, joined with ` > `.
pub fn path_of(el: ElementRef<'_>) -> String {
    let mut stack = vec![describe(el)];
    let mut cur = el.parent().and_then(ElementRef::wrap);
    while let Some(e) = cur {
        stack.push(describe(e));
        cur = e.parent().and_then(ElementRef::wrap);
    }
    stack.reverse();
    stack.join(" > ")
}

pub fn structure(el: ElementRef<'_>, expected: &'static str) -> MarkupError {
    MarkupError::Structure { expected, path: path_of(el) }
}

pub fn selector(css: &'static str) -> Result<Selector, MarkupError> {
    Selector::parse(css).map_err(|e| MarkupError::Selector { css, reason: e.to_string() })
}

/// Element with the given `id` attribute, anywhere in the document.
pub fn element_by_id<'a>(doc: &'a Html, id: &'static str) -> Result<ElementRef<'a>, MarkupError> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().id() == Some(id))
        .ok_or(MarkupError::MissingSection(id))
}

/// Element children only; text and comments are skipped.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Element children with the given tag name.
pub fn children_named<'a>(el: ElementRef<'a>, name: &'static str) -> impl Iterator<Item = ElementRef<'a>> {
    child_elements(el).filter(move |c| c.value().name() == name)
}

/// The `index`-th element child.
pub fn child_at<'a>(el: ElementRef<'a>, index: usize, expected: &'static str) -> Result<ElementRef<'a>, MarkupError> {
    child_elements(el).nth(index).ok_or_else(|| structure(el, expected))
}

/// First descendant matching `sel`.
pub fn find_first<'a>(el: ElementRef<'a>, sel: &Selector, expected: &'static str) -> Result<ElementRef<'a>, MarkupError> {
    el.select(sel).next().ok_or_else(|| structure(el, expected))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str, expected: &'static str) -> Result<&'a str, MarkupError> {
    el.value().attr(name).ok_or_else(|| structure(el, expected))
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Text that opens the element, before any child element.
pub fn leading_text<'a>(el: ElementRef<'a>, expected: &'static str) -> Result<&'a str, MarkupError> {
    el.first_child()
        .and_then(|n| n.value().as_text())
        .map(|t| &**t)
        .ok_or_else(|| structure(el, expected))
}

/// Text right after the element's closing tag, before the next sibling element.
pub fn trailing_text<'a>(el: ElementRef<'a>, expected: &'static str) -> Result<&'a str, MarkupError> {
    el.next_sibling()
        .and_then(|n| n.value().as_text())
        .map(|t| &**t)
        .ok_or_else(|| structure(el, expected))
}
