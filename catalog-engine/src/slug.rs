//! Slug Codec
//!
//! Turns display names into URL-safe identifiers. Every component that derives
//! an identifier from a name (location index, search index, routes) must go
//! through [`slugify`]; a diverging second implementation would break product
//! lookup.

/// Slugify a display name: lowercase, drop everything outside `[a-z0-9\s-]`,
/// collapse whitespace/hyphen runs into a single `-`, trim boundary hyphens.
///
/// Total function: input consisting only of disallowed characters yields an
/// empty string.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        let c = c.to_ascii_lowercase();
        match c {
            'a'..='z' | '0'..='9' => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c);
            }
            ' ' | '\t' | '\n' | '\r' | '-' => pending_hyphen = true,
            _ => {}
        }
    }

    slug
}

/// Strip a trailing `.<ext>` from a raw catalog label (final-dot rule).
///
/// Labels without an extension are returned whole. Historically every seed
/// label was a filename (`Hytera HP788.png`); admin-created labels are bare
/// names.
pub fn strip_extension(label: &str) -> &str {
    match label.rfind('.') {
        Some(idx) if idx > 0 => &label[..idx],
        _ => label,
    }
}

/// The flat product identifier for a raw catalog label.
///
/// This is the join key between catalog entries, indices and routes.
pub fn product_id(label: &str) -> String {
    slugify(strip_extension(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_name() {
        assert_eq!(slugify("Hytera HP788"), "hytera-hp788");
    }

    #[test]
    fn slugify_strips_disallowed_characters() {
        assert_eq!(slugify("Hytera S1 mini & LF"), "hytera-s1-mini-lf");
        assert_eq!(slugify("DMM (Dynamic Mixed Mode)"), "dmm-dynamic-mixed-mode");
    }

    #[test]
    fn slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("  Kenwood  TK-2000 LF "), "kenwood-tk-2000-lf");
        assert_eq!(slugify("--a--b--"), "a-b");
    }

    #[test]
    fn slugify_total_on_garbage() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_is_deterministic() {
        let name = "Hytera XPT Multi-site (Extended Pseudo Digital Trunking)";
        assert_eq!(slugify(name), slugify(name));
    }

    #[test]
    fn strip_extension_final_dot_only() {
        assert_eq!(strip_extension("Hytera HP788.png"), "Hytera HP788");
        assert_eq!(strip_extension("Skyfone S-550.png"), "Skyfone S-550");
        assert_eq!(strip_extension("Bare Name"), "Bare Name");
        // Hidden-file style labels keep their leading dot
        assert_eq!(strip_extension(".profile"), ".profile");
    }

    #[test]
    fn product_id_joins_the_two() {
        assert_eq!(product_id("Hytera HP788.png"), "hytera-hp788");
        assert_eq!(product_id("Filter-Bandpass_Reject.png"), "filter-bandpassreject");
    }
}
