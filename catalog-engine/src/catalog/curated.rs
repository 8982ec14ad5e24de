//! Curated Product Details
//!
//! Hand-maintained detail records for flagship products, keyed by product id.
//! The detail resolver consults these after custom overrides and before the
//! generic fallback.

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::db::models::{ProductAccessories, ProductDetails, ProductHighlight};

static CURATED: LazyLock<HashMap<String, ProductDetails>> = LazyLock::new(|| {
    build_curated()
        .into_iter()
        .map(|details| (details.id.clone(), details))
        .collect()
});

/// Look up the curated detail record for a product id.
pub fn curated_details(product_id: &str) -> Option<&'static ProductDetails> {
    CURATED.get(product_id)
}

fn highlight(icon: &str, title: &str, description: &str) -> ProductHighlight {
    ProductHighlight {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn specs(groups: &[(&str, &[(&str, &str)])]) -> IndexMap<String, IndexMap<String, String>> {
    groups
        .iter()
        .map(|(group, entries)| {
            (
                group.to_string(),
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_curated() -> Vec<ProductDetails> {
    vec![
        ProductDetails {
            id: "hytera-hp788".to_string(),
            name: "Hytera HP788".to_string(),
            tagline: "Professional DMR Two-Way Radio".to_string(),
            classification: "Handheld | Digital | DMR".to_string(),
            description: "The Hytera HP788 is a next-generation professional DMR radio that \
                delivers enhanced functionality, user experience, and robustness. It features \
                AI-based noise cancellation, extended battery life, and superior audio quality, \
                making it the ideal communication tool for critical situations."
                .to_string(),
            highlights: vec![
                highlight(
                    "speaker-wave",
                    "AI-Based Noise Cancellation",
                    "Reduces background noise by up to 30dB, ensuring crystal-clear audio in loud environments.",
                ),
                highlight(
                    "battery-100",
                    "Extended Battery Life",
                    "A 2400mAh smart battery provides up to 24 hours of operation on a single charge.",
                ),
                highlight(
                    "signal",
                    "Enhanced Coverage",
                    "Improved receiver sensitivity extends the communication range and enhances signal quality at the edge of coverage.",
                ),
                highlight(
                    "shield-check",
                    "IP68 Ruggedness",
                    "Fully submersible in water and completely dustproof, built to withstand the harshest conditions.",
                ),
                highlight(
                    "lifebuoy",
                    "Advanced Safety Features",
                    "Includes Man Down, Lone Worker, and an emergency button to ensure user safety at all times.",
                ),
                highlight(
                    "cube-transparent",
                    "Slim & Lightweight Design",
                    "Ergonomically designed for comfort and ease of use during long shifts.",
                ),
            ],
            specifications: specs(&[
                (
                    "General",
                    &[
                        ("Frequency Range", "UHF: 400-527MHz | VHF: 136-174MHz"),
                        ("Channel Capacity", "1024"),
                        ("Zone Capacity", "64"),
                        ("Operating Voltage", "7.7V (Rated)"),
                        ("Battery", "2400mAh Li-Polymer (Smart Battery)"),
                        ("Battery Life (5/5/90)", "Up to 24 hours"),
                        ("Dimensions (H×W×D)", "132 x 55 x 29.5mm"),
                        ("Weight", "290g (with antenna & battery)"),
                    ],
                ),
                (
                    "Environmental",
                    &[
                        ("Operating Temperature", "-30℃ to +60℃"),
                        ("Storage Temperature", "-40℃ to +85℃"),
                        ("Dust and Water Intrusion", "IP68 Standard"),
                        ("Humidity", "Per MIL-STD-810G"),
                    ],
                ),
            ]),
            accessories: ProductAccessories {
                standard: strings(&[
                    "Smart Li-Polymer Battery (2400mAh)",
                    "Desktop Charger",
                    "Standard UHF/VHF Antenna",
                    "Belt Clip",
                    "Nylon Strap",
                ]),
                optional: strings(&[
                    "Remote Speaker Microphone",
                    "6-Unit Multi-Charger",
                    "Covert Earpiece",
                    "High-Gain Antenna",
                    "Leather Carry Case",
                ]),
            },
            related_products: strings(&["Hytera HP708", "Motorola R7", "Kenwood NX-32 Series"]),
            brochure_url: None,
        },
        ProductDetails {
            id: "motorola-r7".to_string(),
            name: "Motorola R7".to_string(),
            tagline: "MOTOTRBO™ Next Generation Digital Radio".to_string(),
            classification: "Handheld | Digital | DMR".to_string(),
            description: "The Motorola R7 is a digital portable two-way radio that offers loud, \
                clear, and customizable audio in a rugged, dependable, and connected device. Its \
                advanced audio processing ensures that your voice is always understood, while its \
                rugged construction is ready for the toughest environments."
                .to_string(),
            highlights: vec![
                highlight(
                    "speaker-wave",
                    "Advanced Audio Processing",
                    "Delivers exceptional loudness and clarity with industrial-level noise cancellation and automatic feedback suppression.",
                ),
                highlight(
                    "battery-100",
                    "Sleek and Rugged",
                    "IP68 rated for water and dust protection, built to MIL-STD 810 standards for durability in harsh conditions.",
                ),
                highlight(
                    "wifi",
                    "Wi-Fi & Bluetooth",
                    "Enables fast, wireless programming, location tracking, and connectivity to wireless accessories and sensors.",
                ),
                highlight(
                    "cpu-chip",
                    "Next-Gen Features",
                    "A large color screen and modern user interface make for intuitive operation and access to advanced features.",
                ),
            ],
            specifications: specs(&[
                (
                    "General",
                    &[
                        ("Frequency Band", "VHF, UHF"),
                        ("Power Output", "VHF: 5W, UHF: 4W"),
                        ("Channel Capacity", "1000"),
                        ("Dimensions (H x W x D)", "132 x 56 x 31 mm"),
                        ("Weight", "316g (with standard battery)"),
                    ],
                ),
                (
                    "Environmental",
                    &[
                        ("Operating Temperature", "-30°C to +60°C"),
                        ("Dust and Water Intrusion", "IP68"),
                    ],
                ),
            ]),
            accessories: ProductAccessories {
                standard: strings(&[
                    "Standard Li-Ion Battery",
                    "Single-Unit Charger",
                    "Antenna",
                    "Belt Clip",
                ]),
                optional: strings(&[
                    "IMPRES Windporting Remote Speaker Microphone",
                    "IMPRES 6-unit Multi-Charger",
                    "Operations Critical Wireless Earpiece",
                ]),
            },
            related_products: strings(&[
                "Hytera HP788",
                "Motorola XiR P6620i",
                "Kenwood NX-32 Series",
            ]),
            brochure_url: None,
        },
        ProductDetails {
            id: "kenwood-nx-1200".to_string(),
            name: "Kenwood NX-1200".to_string(),
            tagline: "NEXEDGE Multi-Protocol Digital Radio".to_string(),
            classification: "Handheld | Digital | NXDN/DMR".to_string(),
            description: "The Kenwood NX-1200 is a versatile and affordable radio that supports \
                both NXDN and DMR digital protocols, as well as mixed digital & FM analog \
                operation. It's an ideal solution for businesses looking to migrate from analog \
                to digital at their own pace."
                .to_string(),
            highlights: vec![
                highlight(
                    "cpu-chip",
                    "Dual Protocol Support",
                    "Operates in both NXDN and DMR digital modes, providing flexibility and a future-proof investment.",
                ),
                highlight(
                    "speaker-wave",
                    "Superior Audio Quality",
                    "Features Kenwood's renowned audio for clear communication, even in noisy industrial environments.",
                ),
                highlight(
                    "shield-check",
                    "Compact Yet Robust",
                    "Meets MIL-STD-810 C/D/E/F/G standards for durability and is IP54/55 rated for dust and water resistance.",
                ),
            ],
            specifications: specs(&[(
                "General",
                &[
                    ("Frequency Range", "VHF: 136-174 MHz | UHF: 400-520 MHz"),
                    ("Max Channels", "260 (64 for basic model)"),
                    ("RF Power Output", "5W (VHF) / 4W (UHF)"),
                    ("Battery Life", "Approx. 11 hours (KNB-45L battery)"),
                ],
            )]),
            accessories: ProductAccessories {
                standard: strings(&[
                    "Li-ion Battery Pack (KNB-45L)",
                    "Desktop Charger (KSC-35S)",
                    "Antenna",
                    "Belt Clip",
                ]),
                optional: strings(&[
                    "Speaker Microphone (KMC-21)",
                    "Heavy-duty Earpiece",
                    "6-Unit Charger (KSC-356)",
                ]),
            },
            related_products: strings(&["Hytera HP508", "Motorola R2 VHF", "Hytera BP518"]),
            brochure_url: None,
        },
        ProductDetails {
            id: "hytera-hp708".to_string(),
            name: "Hytera HP708".to_string(),
            tagline: "Professional DMR Two-Way Radio".to_string(),
            classification: "Handheld | Digital | DMR".to_string(),
            description: "The Hytera HP708 is a professional DMR radio that offers a perfect \
                balance of functionality and design. With its loud and clear audio, long-lasting \
                battery, and rugged build, it's designed to perform in various demanding work \
                environments."
                .to_string(),
            highlights: vec![
                highlight(
                    "speaker-wave",
                    "Loud and Clear Audio",
                    "A forward-facing speaker and AI-based noise cancellation ensure voice is heard clearly, even in noisy places.",
                ),
                highlight(
                    "battery-100",
                    "24-Hour Battery Life",
                    "The standard 2400mAh smart battery provides a long operational life, lasting through extended shifts.",
                ),
                highlight(
                    "shield-check",
                    "Rugged and Durable",
                    "IP68 rated and built to MIL-STD-810G standards, ensuring reliability in tough conditions.",
                ),
            ],
            specifications: specs(&[(
                "General",
                &[
                    ("Frequency Range", "UHF: 400-527MHz | VHF: 136-174MHz"),
                    ("Channel Capacity", "1024"),
                    ("Battery", "2400mAh Li-Polymer"),
                    ("Dimensions (H×W×D)", "132 x 55 x 29.5mm"),
                ],
            )]),
            accessories: ProductAccessories {
                standard: strings(&["Smart Battery", "Charger", "Antenna", "Belt Clip"]),
                optional: strings(&["Remote Speaker Mic", "Covert Earpiece", "Multi-Unit Charger"]),
            },
            related_products: strings(&["Hytera HP788", "Motorola R7", "Hytera HP688"]),
            brochure_url: None,
        },
        ProductDetails {
            id: "hytera-pt580h-plus".to_string(),
            name: "Hytera PT580H Plus".to_string(),
            tagline: "TETRA Handheld Terminal".to_string(),
            classification: "Handheld | Digital | TETRA".to_string(),
            description: "The Hytera PT580H Plus is a feature-rich TETRA radio designed for \
                mission-critical communications. It provides robust voice and data services, \
                high-level security, and a rugged design, making it ideal for public safety, \
                transportation, and utilities."
                .to_string(),
            highlights: vec![
                highlight(
                    "speaker-wave",
                    "Crystal Clear Audio",
                    "Adopts advanced audio technology to ensure loud and clear voice quality in various noise environments.",
                ),
                highlight(
                    "lock-closed",
                    "High-Level Security",
                    "Supports TETRA Air Interface Encryption (AIE) and End-to-End Encryption (E2EE) for secure communications.",
                ),
                highlight(
                    "device-phone-mobile",
                    "User-Friendly Interface",
                    "Features a large, high-resolution color display and an intuitive UI for easy operation.",
                ),
            ],
            specifications: specs(&[(
                "General",
                &[
                    (
                        "Frequency Band",
                        "350-400MHz, 380-430MHz, 405-475MHz, 806-870MHz",
                    ),
                    ("RF Power", "3W (Class 3)"),
                    ("Ingress Protection", "IP67"),
                    ("Display", "1.8 inch TFT LCD (160x128 pixels)"),
                ],
            )]),
            accessories: ProductAccessories {
                standard: strings(&[
                    "Li-ion Battery",
                    "Single Unit Charger",
                    "Antenna",
                    "Belt Clip",
                ]),
                optional: strings(&[
                    "Remote Speaker Microphone",
                    "Tactical Headset",
                    "Vehicular Adapter",
                    "Multi-Unit Charger",
                ]),
            },
            related_products: strings(&["Hytera PT590", "Hytera MT680 Plus", "Motorola MTP3550"]),
            brochure_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_is_keyed_by_id() {
        assert_eq!(
            curated_details("hytera-hp788").map(|d| d.name.as_str()),
            Some("Hytera HP788")
        );
        assert!(curated_details("no-such-product").is_none());
    }
}
