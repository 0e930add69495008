//! Navigation-driven pruning of unreferenced Markdown pages.
//!
//! `nav-prune` is a build plugin for static documentation sites: it flattens
//! the site's navigation tree into the set of referenced page paths, then
//! drops every discovered Markdown file that is neither listed in navigation
//! nor covered by a directory-style navigation entry. Non-Markdown assets
//! always pass through, and the filter is stable: output order is input
//! order.
//!
//! The host build pipeline drives the plugin through two hooks, in order:
//! configuration ready ([`plugin::PruneUnused::on_config`]) and files
//! discovered ([`plugin::PruneUnused::on_files`]).

pub mod files;
pub mod nav;
pub mod plugin;
