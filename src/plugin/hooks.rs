use crate::files::{prune, Files, SourcePath};
use crate::nav::{collect_pages, ValidPages};
use crate::plugin::config::BuildConfig;

/// Identifier under which the host pipeline discovers this plugin.
pub const PLUGIN_NAME: &str = "prune-unused";

/// Per-build state produced by the configuration hook and consumed by the
/// files hook.
///
/// Passed explicitly between the two hooks instead of living on the plugin,
/// so watch/serve rebuilds get a fresh context per configuration event and
/// nothing can leak from the previous build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildContext {
    pub valid_pages: ValidPages,
}

/// The plugin itself. Stateless; both hooks are pure given their inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PruneUnused;

impl PruneUnused {
    pub fn new() -> Self {
        Self
    }

    /// Configuration-ready hook.
    ///
    /// Reads the `nav` field and returns the build context; the
    /// configuration itself is never modified.
    pub fn on_config(&self, config: &BuildConfig) -> BuildContext {
        BuildContext {
            valid_pages: collect_pages(&config.nav),
        }
    }

    /// Files-discovered hook.
    ///
    /// Returns the retained files in their original order, wrapped in the
    /// same container type the host handed in.
    pub fn on_files<F: SourcePath>(&self, files: Files<F>, ctx: &BuildContext) -> Files<F> {
        prune(files, &ctx.valid_pages)
    }
}
