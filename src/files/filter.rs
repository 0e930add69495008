use crate::files::registry::{Files, SourcePath};
use crate::nav::ValidPages;

/// Suffix identifying Markdown sources; everything else is an asset.
pub const MARKDOWN_EXT: &str = ".md";

/// Drop Markdown files that navigation does not reference.
///
/// Stable filter: output order is input order, and the output is always a
/// subsequence of the input. Never errors; an empty navigation simply drops
/// every Markdown file.
pub fn prune<F: SourcePath>(files: Files<F>, pages: &ValidPages) -> Files<F> {
    files
        .into_iter()
        .filter(|file| should_keep(file.src_uri(), pages))
        .collect()
}

/// Keep rules, checked in order:
/// 1. non-Markdown paths always pass;
/// 2. exact navigation entry;
/// 3. directory prefix up to and including the last `/` covered by some
///    entry (supports literate-nav style `guide/` entries).
fn should_keep(src_uri: &str, pages: &ValidPages) -> bool {
    if !src_uri.ends_with(MARKDOWN_EXT) {
        return true;
    }
    if pages.contains(src_uri) {
        return true;
    }
    match src_uri.rfind('/') {
        Some(last_sep) => pages.covers_prefix(&src_uri[..=last_sep]),
        None => {
            tracing::debug!(page = src_uri, "excluding page absent from nav");
            false
        }
    }
}
