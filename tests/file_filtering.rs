use nav_prune::files::{prune, Files, SourceFile};
use nav_prune::nav::ValidPages;
use pretty_assertions::assert_eq;

fn files(paths: &[&str]) -> Files<SourceFile> {
    paths.iter().map(|p| SourceFile::new(*p)).collect()
}

fn pages(entries: &[&str]) -> ValidPages {
    ValidPages::new(entries.iter().map(|e| e.to_string()).collect())
}

fn kept_paths(output: &Files<SourceFile>) -> Vec<String> {
    output.iter().map(|f| f.src_uri.clone()).collect()
}

#[test]
fn keeps_listed_drops_orphans_passes_assets() {
    // Scenario: guide/extra.md survives via the guide/ prefix, orphan.md is
    // dropped, style.css always passes.
    let input = files(&[
        "index.md",
        "guide/intro.md",
        "guide/extra.md",
        "orphan.md",
        "style.css",
    ]);
    let valid = pages(&["index.md", "guide/intro.md"]);

    let output = prune(input, &valid);

    assert_eq!(
        kept_paths(&output),
        vec!["index.md", "guide/intro.md", "guide/extra.md", "style.css"]
    );
}

#[test]
fn invariant_output_is_a_subsequence_of_input() {
    let input = files(&[
        "a.md",
        "img/logo.png",
        "docs/a.md",
        "docs/b.md",
        "z.md",
        "extra/deep/c.md",
    ]);
    let valid = pages(&["docs/a.md"]);

    let output = prune(input.clone(), &valid);

    let mut input_iter = input.iter();
    for kept in output.iter() {
        assert!(
            input_iter.any(|f| f == kept),
            "output must preserve input order"
        );
    }
}

#[test]
fn invariant_non_markdown_files_are_never_dropped() {
    let input = files(&["style.css", "img/logo.png", "js/app.js", "data.json"]);

    let output = prune(input.clone(), &ValidPages::default());

    assert_eq!(output, input);
}

#[test]
fn exact_match_is_always_kept() {
    let input = files(&["docs/guide/intro.md"]);
    let valid = pages(&["docs/guide/intro.md"]);

    let output = prune(input, &valid);

    assert_eq!(kept_paths(&output), vec!["docs/guide/intro.md"]);
}

#[test]
fn directory_prefix_entry_covers_pages_beneath_it() {
    let input = files(&["docs/guide/intro.md"]);

    // A literate-nav style entry ending in `/`.
    let output = prune(input.clone(), &pages(&["docs/guide/"]));
    assert_eq!(kept_paths(&output), vec!["docs/guide/intro.md"]);

    // Any entry starting with the file's directory also covers it.
    let output = prune(input, &pages(&["docs/guide/other.md"]));
    assert_eq!(kept_paths(&output), vec!["docs/guide/intro.md"]);
}

#[test]
fn unrelated_entries_do_not_cover() {
    let input = files(&["docs/guide/intro.md"]);
    let valid = pages(&["docs/other.md"]);

    let output = prune(input, &valid);

    assert!(output.is_empty());
}

#[test]
fn markdown_without_separator_has_no_prefix_fallback() {
    let input = files(&["orphan.md"]);
    let valid = pages(&["docs/orphan.md"]);

    let output = prune(input, &valid);

    assert!(output.is_empty());
}

#[test]
fn empty_navigation_drops_all_markdown_keeps_assets() {
    // Scenario: nav = [] means no Markdown page is reachable.
    let input = files(&["index.md", "guide/intro.md", "style.css"]);

    let output = prune(input, &ValidPages::default());

    assert_eq!(kept_paths(&output), vec!["style.css"]);
}

#[test]
fn matching_is_case_sensitive() {
    let input = files(&["Docs/Intro.md", "docs/intro.md"]);
    let valid = pages(&["docs/intro.md"]);

    let output = prune(input, &valid);

    assert_eq!(kept_paths(&output), vec!["docs/intro.md"]);
}

#[test]
fn prefix_match_uses_full_directory_path() {
    // `guide` is not a prefix of `guides/` content; the slash is part of
    // the comparison.
    let input = files(&["guides/intro.md"]);
    let valid = pages(&["guide/intro.md"]);

    let output = prune(input, &valid);

    assert!(output.is_empty());
}

#[test]
fn output_may_equal_full_input() {
    let input = files(&["a.md", "b/c.md"]);
    let valid = pages(&["a.md", "b/c.md"]);

    let output = prune(input.clone(), &valid);

    assert_eq!(output, input);
}
