//! Path table: the `{core, command, ext}` partition mapping produced by
//! module selection.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Namespace-package distributions that are never lintable modules.
pub const NON_MODULES: [&str; 2] = ["nova-cli-nspkg", "nova-cli-command_modules-nspkg"];

/// Sentinel restricting a run to core and command modules.
const CLI_SENTINEL: &str = "CLI";

/// Sentinel restricting a run to extensions.
const EXT_SENTINEL: &str = "EXT";

/// Partitioned mapping of module/extension names to their source paths.
///
/// Ordered maps keep listing and command-line order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
    /// Core packages shipped with the base CLI.
    pub core: BTreeMap<String, PathBuf>,
    /// Installable command modules.
    pub command: BTreeMap<String, PathBuf>,
    /// Separately packaged extensions.
    pub ext: BTreeMap<String, PathBuf>,
}

impl PathTable {
    /// True if every partition is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.command.is_empty() && self.ext.is_empty()
    }

    /// Removes the well-known non-module core entries.
    pub fn remove_non_modules(&mut self) {
        for name in NON_MODULES {
            self.core.remove(name);
        }
    }

    /// Narrows the table according to the parsed selection.
    pub fn apply(&mut self, selection: &Selection) {
        match selection {
            Selection::All => {}
            Selection::Only(names) => {
                self.core.retain(|name, _| names.iter().any(|n| n == name));
                self.command.retain(|name, _| names.iter().any(|n| n == name));
                self.ext.retain(|name, _| names.iter().any(|n| n == name));
            }
            Selection::CliOnly => self.ext.clear(),
            Selection::ExtOnly => {
                self.core.clear();
                self.command.clear();
            }
        }
    }

    /// Names in the command and core partitions, in listing order.
    #[must_use]
    pub fn module_names(&self) -> Vec<String> {
        self.command.keys().chain(self.core.keys()).cloned().collect()
    }

    /// Names in the ext partition.
    #[must_use]
    pub fn extension_names(&self) -> Vec<String> {
        self.ext.keys().cloned().collect()
    }
}

/// Interpretation of the module-name arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No names given: everything discovered.
    All,
    /// Only the named modules/extensions.
    Only(Vec<String>),
    /// The `CLI` sentinel: core and command modules only.
    CliOnly,
    /// The `EXT` sentinel: extensions only.
    ExtOnly,
}

impl Selection {
    /// Parses the raw module-name list, honoring the `CLI`/`EXT` sentinels.
    #[must_use]
    pub fn from_args(modules: &[String]) -> Self {
        match modules {
            [] => Self::All,
            [one] if one == CLI_SENTINEL => Self::CliOnly,
            [one] if one == EXT_SENTINEL => Self::ExtOnly,
            names => Self::Only(names.to_vec()),
        }
    }
}
