//! Idempotent stylesheet injection
//!
//! Widget instances may be mounted several times on one page; the
//! stylesheet must be attached at most once. Host pages also declare the
//! same stylesheet in different spellings (relative, slash-rooted,
//! origin-qualified), and a false negative here re-applies styles with a
//! visible flash, hence the three-way match.

use crate::dom::{HostPage, StylesheetLink};
use log::debug;

/// Attaches `href` as a `rel=stylesheet` link unless some spelling of it is
/// already present in the document. No-op on an empty `href`.
///
/// The single-threaded host event loop guarantees the check and the append
/// cannot interleave with another `ensure_loaded` call.
pub fn ensure_loaded<P: HostPage>(page: &P, href: &str, integrity: Option<&str>) {
    if href.is_empty() {
        return;
    }

    let origin = page.origin();
    let qualified = format!("{origin}{href}");
    let slash_qualified = format!("{origin}/{href}");

    let present = page
        .stylesheet_hrefs()
        .iter()
        .any(|existing| *existing == href || *existing == qualified || *existing == slash_qualified);
    if present {
        debug!("stylesheet {href} already attached, skipping");
        return;
    }

    page.append_stylesheet(StylesheetLink::new(
        href,
        integrity.map(|hash| hash.to_string()),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryPage;

    #[test]
    fn test_loads_once() {
        let page = MemoryPage::default();
        ensure_loaded(&page, "widget.css", None);
        ensure_loaded(&page, "widget.css", None);
        assert_eq!(page.links().len(), 1);
        assert_eq!(page.links()[0].href, "widget.css");
    }

    #[test]
    fn test_origin_qualified_spellings_are_the_same_stylesheet() {
        let page = MemoryPage::new("https://host.example");
        page.insert_link("https://host.example/widget.css");

        // Slash-rooted and bare relative spellings both resolve to the link
        // already declared by the page.
        ensure_loaded(&page, "/widget.css", None);
        ensure_loaded(&page, "widget.css", None);
        assert_eq!(page.links().len(), 1);
    }

    #[test]
    fn test_exact_absolute_match() {
        let page = MemoryPage::default();
        ensure_loaded(&page, "https://cdn.example/widget.css", None);
        ensure_loaded(&page, "https://cdn.example/widget.css", None);
        assert_eq!(page.links().len(), 1);
    }

    #[test]
    fn test_empty_href_is_a_no_op() {
        let page = MemoryPage::default();
        ensure_loaded(&page, "", Some("sha384-abc"));
        assert!(page.links().is_empty());
    }

    #[test]
    fn test_integrity_hash_carried() {
        let page = MemoryPage::default();
        ensure_loaded(&page, "widget.css", Some("sha384-abc"));
        assert_eq!(page.links()[0].integrity.as_deref(), Some("sha384-abc"));
    }

    #[test]
    fn test_distinct_hrefs_both_load() {
        let page = MemoryPage::default();
        ensure_loaded(&page, "a.css", None);
        ensure_loaded(&page, "b.css", None);
        assert_eq!(page.links().len(), 2);
    }
}
