//! Rendering helpers (plain text) for the verification report.

use camino::Utf8Path;
use fixcheck_domain::{CheckOutcome, Validation};

const PASS: &str = "✅";
const FAIL: &str = "❌";

/// Full report: header, one line per check, one summary block, closing line.
pub fn render_report(target: &Utf8Path, validation: &Validation) -> String {
    let mut out = String::new();
    out.push_str("Layout ratio fix verification\n");
    out.push_str("=============================\n");
    out.push_str(&format!("Target: {}\n\n", target));

    out.push_str("Expected patterns:\n");
    for o in validation.required() {
        out.push_str(&format!("  {} {}\n", glyph(o), o.check.title));
    }
    out.push('\n');

    out.push_str("Legacy values:\n");
    for o in validation.forbidden() {
        let state = if o.matched { "still present" } else { "removed" };
        out.push_str(&format!("  {} {} {}\n", glyph(o), o.check.title, state));
    }
    out.push('\n');

    if validation.success() {
        out.push_str(SUCCESS_BLOCK);
    } else {
        out.push_str(FAILURE_BLOCK);
        out.push_str(&format!(
            "  all fixes applied: {}\n  no old code:       {}\n",
            yes_no(validation.all_fixes_applied()),
            yes_no(validation.no_old_code())
        ));
        let failed: Vec<_> = validation.failed().map(|o| o.check.id).collect();
        out.push_str(&format!("  failed checks:     {}\n", failed.join(", ")));
    }
    out.push('\n');
    out.push_str("Verification complete.\n");
    out
}

/// The only output when the target file does not exist.
pub fn render_missing_target(path: &Utf8Path) -> String {
    format!("{} Target file not found: {}\n", FAIL, path)
}

const SUCCESS_BLOCK: &str = concat!(
    "🎉 All fixes applied!\n",
    "  Layout ratios for normal, focus and wide modes are read from\n",
    "  SettingsManager.defaults.layouts and no hardcoded legacy ratios remain.\n",
    "  User-configured layout defaults now take effect.\n",
);

const FAILURE_BLOCK: &str = concat!(
    "⚠️  Fix verification failed.\n",
    "  1. Import SettingsManager in the layout component.\n",
    "  2. Read each mode's ratio from SettingsManager.defaults.layouts.<mode>.ratio.\n",
    "  3. Remove the hardcoded 0.40 / 0.30 / 0.60 ratio literals.\n",
    "  4. Re-run this check.\n",
);

fn glyph(o: &CheckOutcome) -> &'static str {
    if o.passed() {
        PASS
    } else {
        FAIL
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
