//! BDD harness (cucumber-rs).
//!
//! This crate exists to keep scenario tests isolated from the production crates. The helpers here
//! build target files for the scenarios.

use camino::Utf8Path;

/// Layout component source with every fix applied.
pub const FIXED_LAYOUT_MANAGER: &str = r#"import { SettingsManager } from '../../settings/SettingsManager';

export type LayoutMode = 'normal' | 'focus' | 'wide';

export class LayoutManager {
  defaultRatio(mode: LayoutMode): number {
    switch (mode) {
      case 'normal':
        return SettingsManager.defaults.layouts.normal.ratio;
      case 'focus':
        return SettingsManager.defaults.layouts.focus.ratio;
      case 'wide':
        return SettingsManager.defaults.layouts.wide.ratio;
    }
  }
}
"#;

/// `source` with one extra line appended.
pub fn with_extra_line(source: &str, line: &str) -> String {
    format!("{source}{line}\n")
}

/// The fixed source with the lookup for `mode` replaced by a field read.
pub fn without_lookup(mode: &str) -> String {
    FIXED_LAYOUT_MANAGER.replace(
        &format!("SettingsManager.defaults.layouts.{mode}.ratio"),
        &format!("this.{mode}Ratio"),
    )
}

/// Relative path of the target inside a scenario workspace.
pub fn target_rel() -> &'static Utf8Path {
    Utf8Path::new("src/components/layout/LayoutManager.ts")
}
