use roxmltree::{Document, ParsingOptions};

use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Return the `d` attribute of the first `<path>` element in an SVG document.
///
/// The document is parsed as XML, so `d="…"` text inside comments, text nodes
/// or other attributes never matches. Paths without a `d` attribute are passed
/// over.
pub fn extract_path_data(svg: &str) -> EpicycleResult<String> {
    let mut opts = ParsingOptions::default();
    opts.allow_dtd = true;
    let doc = Document::parse_with_options(svg, opts)
        .map_err(|e| EpicycleError::no_path(format!("invalid SVG document: {e}")))?;

    let Some((node, d)) = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .find_map(|n| n.attribute("d").map(|d| (n, d)))
    else {
        return Err(EpicycleError::no_path("document has no <path> with a 'd' attribute"));
    };

    if d.trim().is_empty() {
        return Err(EpicycleError::no_path(format!(
            "empty 'd' attribute at byte {}",
            node.range().start
        )));
    }
    Ok(d.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/path/extract.rs"]
mod tests;
