//! Brochure Lookup Table
//!
//! Static product id → PDF filename mapping. The detail resolver and the
//! assistant boundary turn these into URLs under the configured docs root.

use std::sync::LazyLock;

use indexmap::IndexMap;

static BROCHURES: LazyLock<IndexMap<&'static str, &'static str>> = LazyLock::new(|| {
    IndexMap::from([
        ("hytera-hp788", "HP 788 Brochure.pdf"),
        ("hytera-hp688", "HP688.pdf"),
        ("hytera-hr1068", "HR1068.pdf"),
        ("hytera-hm788", "HM 788 - Brochure.pdf"),
        ("hytera-pnc380", "Hytera_PNC380_VKTS.pdf"),
        (
            "en-pnc460u-intrinsically-safe-smart-device",
            "EN_PNC460U_Intinsically+Safe+Smart+Device_V1.0.pdf",
        ),
        ("pnc360s-poc-radio", "PNC360S_PoC_Radio.pdf"),
        ("hytera-mnc360-ds-a", "Hytera_MNC360_DS-A.pdf"),
    ])
});

/// Brochure filename for a product id, if one is on file.
pub fn brochure_file(product_id: &str) -> Option<&'static str> {
    BROCHURES.get(product_id).copied()
}

/// All `(product id, filename)` pairs in table order. Used by the assistant
/// boundary's fuzzy lookup, which takes the first match.
pub fn brochure_entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    BROCHURES.iter().map(|(id, file)| (*id, *file))
}
