//! Scraping *spec* for the poe2db gem page.
//!
//! Purpose:
//! - Read a saved copy of `/us/Gem` and turn every table row in the skill,
//!   support and spirit sections into a [`Gem`].
//! - Assign ids through the caller's [`GemIds`] so they stay stable between
//!   runs.
//!
//! Row layout (one `tr` per gem, direct child of a `tbody`):
//! ```text
//! <tr>
//!   <td><a class="gem_red"><img src="…/Fireball.webp"></a></td>
//!   <td><a href="Fireball">Fireball</a> (1)
//!       <div class="gem_tags"><span>Fire</span><span>Projectile</span></div></td>
//! </tr>
//! ```
//!
//! A gem already collected from an earlier section only gains the current
//! category; the rest of that row is not read.
//!
//! The HTML5 parser inserts a `tbody` into any table written without one, so
//! rows of such tables are scraped like any other.
//!
//! Non-Responsibilities:
//! - **No fetching.** The page is saved by the user.
//! - **No persistence.** The runner loads and saves the registry.

use std::collections::BTreeSet;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{SKILL_SECTION_ID, SPIRIT_SECTION_ID, SUPPORT_SECTION_ID, TAGS_CLASS};
use crate::core::html::{
    attr, child_at, child_elements, children_named, element_by_id, find_first, has_class,
    leading_text, path_of, selector, structure, trailing_text,
};
use crate::core::sanitize::{normalize_ws, parse_level};
use crate::data::{Gem, GemCategory, GemSet, GemType};
use crate::error::MarkupError;
use crate::progress::Progress;
use crate::registry::GemIds;

/// A page section holding one category of gems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub category: GemCategory,
    pub element_id: &'static str,
}

/// Scraped in this order; the first section a gem shows up in supplies its
/// fields. Meta gems have no section yet.
pub const SECTIONS: [Section; 3] = [
    Section { category: GemCategory::Skill, element_id: SKILL_SECTION_ID },
    Section { category: GemCategory::Support, element_id: SUPPORT_SECTION_ID },
    Section { category: GemCategory::Spirit, element_id: SPIRIT_SECTION_ID },
];

/// Fields of one row, borrowing text from the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GemRow<'a> {
    pub name: &'a str,
    pub icon_url: &'a str,
    pub level: u32,
    pub tags: BTreeSet<String>,
    pub type_basic: GemType,
}

impl GemRow<'_> {
    pub fn into_gem(self, id: u32, category: GemCategory) -> Gem {
        Gem {
            id,
            name: s!(self.name),
            icon_url: s!(self.icon_url),
            level: self.level,
            tags: self.tags,
            categories: BTreeSet::from([category]),
            type_basic: self.type_basic,
        }
    }
}

pub struct Extractor {
    tbody: Selector,
    img: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self, MarkupError> {
        Ok(Self { tbody: selector("tbody")?, img: selector("img")? })
    }

    /// Walk every section in [`SECTIONS`] order.
    pub fn extract(
        &self,
        doc: &Html,
        ids: &mut GemIds,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<GemSet, MarkupError> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(SECTIONS.len());
        }

        let mut gems = GemSet::new();
        for section in &SECTIONS {
            let root = element_by_id(doc, section.element_id)?;
            let rows = self.extract_section(section.category, root, &mut gems, ids)?;
            logd!("section #{}: {} rows, {} gems so far", section.element_id, rows, gems.len());
            if let Some(p) = progress.as_deref_mut() {
                p.section_done(section.category, rows);
            }
        }
        Ok(gems)
    }

    /// Every `tbody > tr` under `root`. Returns the number of rows read.
    pub fn extract_section(
        &self,
        category: GemCategory,
        root: ElementRef<'_>,
        gems: &mut GemSet,
        ids: &mut GemIds,
    ) -> Result<usize, MarkupError> {
        let mut rows = 0usize;
        for table in root.select(&self.tbody) {
            for tr in children_named(table, "tr") {
                self.add_row(category, tr, gems, ids)?;
                rows += 1;
            }
        }
        Ok(rows)
    }

    fn add_row(
        &self,
        category: GemCategory,
        tr: ElementRef<'_>,
        gems: &mut GemSet,
        ids: &mut GemIds,
    ) -> Result<(), MarkupError> {
        let name = row_name(tr)?;
        let id = ids.get_or_create_id(name, category)?;
        if gems.add_category(id, category) {
            return Ok(());
        }
        let row = self.parse_row(tr)?;
        gems.insert(row.into_gem(id, category));
        Ok(())
    }

    pub fn parse_row<'a>(&self, tr: ElementRef<'a>) -> Result<GemRow<'a>, MarkupError> {
        let icon_cell = child_at(tr, 0, "row must have an icon cell")?;
        let info_cell = child_at(tr, 1, "row must have a name cell")?;

        let img = find_first(icon_cell, &self.img, "icon cell must contain an img")?;
        let icon_url = attr(img, "src", "icon img must have a src")?;

        let classifier = child_at(icon_cell, 0, "icon cell must wrap its image in a typed element")?;
        let type_class = attr(classifier, "class", "icon wrapper must carry a gem type class")?;
        let type_basic = type_class
            .parse::<GemType>()
            .map_err(|source| MarkupError::UnknownGemType { source, path: path_of(classifier) })?;

        let name_el = child_at(info_cell, 0, "name cell must start with the name element")?;
        let name = leading_text(name_el, "name element must open with the gem name")?;
        let level = level_after(name_el)?;

        let tags = row_tags(child_at(info_cell, 1, "name cell must have a tag container")?)?;

        Ok(GemRow { name, icon_url, level, tags, type_basic })
    }
}

/// Run one extraction over the whole page.
pub fn extract(doc: &Html, ids: &mut GemIds) -> Result<GemSet, MarkupError> {
    Extractor::new()?.extract(doc, ids, None)
}

pub fn extract_with_progress(
    doc: &Html,
    ids: &mut GemIds,
    progress: Option<&mut dyn Progress>,
) -> Result<GemSet, MarkupError> {
    Extractor::new()?.extract(doc, ids, progress)
}

/// Gem name: leading text of the first element in the second cell.
fn row_name<'a>(tr: ElementRef<'a>) -> Result<&'a str, MarkupError> {
    let info_cell = child_at(tr, 1, "row must have a name cell")?;
    let name_el = child_at(info_cell, 0, "name cell must start with the name element")?;
    leading_text(name_el, "name element must open with the gem name")
}

/// Level is the `(<digits>)` text following the name element.
fn level_after(name_el: ElementRef<'_>) -> Result<u32, MarkupError> {
    let tail = trailing_text(name_el, "name element must be followed by the level text")?;
    parse_level(tail).ok_or_else(|| MarkupError::BadLevel {
        text: normalize_ws(tail),
        path: path_of(name_el),
    })
}

fn row_tags(container: ElementRef<'_>) -> Result<BTreeSet<String>, MarkupError> {
    if !has_class(container, TAGS_CLASS) {
        return Err(structure(container, "tag container must have the gem_tags class"));
    }
    child_elements(container)
        .map(|tag| leading_text(tag, "tag element must hold its text").map(String::from))
        .collect()
}
