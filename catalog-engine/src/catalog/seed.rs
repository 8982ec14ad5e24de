//! Seed Catalog
//!
//! The static base catalog, immutable for the life of the process. Product
//! entries are raw labels; most carry the historical image-filename extension.
//! `export_catalog_as_code` exists to promote client-local additions back into
//! this table.

use std::sync::LazyLock;

use crate::db::models::{Catalog, Category, Section, Subsection};

static SEED: LazyLock<Catalog> = LazyLock::new(build_seed);

/// The immutable seed catalog.
pub fn seed_catalog() -> &'static Catalog {
    &SEED
}

fn subsection(name: &str, products: &[&str]) -> Subsection {
    Subsection {
        name: name.to_string(),
        products: products.iter().map(|p| p.to_string()).collect(),
    }
}

fn section(title: &str, image: &str, subsections: Vec<Subsection>) -> Section {
    Section {
        title: title.to_string(),
        image: Some(image.to_string()),
        subsections,
    }
}

#[rustfmt::skip]
fn build_seed() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.insert("Two-Way Radios".to_string(), Category {
        icon: "Radios".to_string(),
        image: None,
        sections: vec![
            section("DMR System", "/Two-way-Radios/Two way Radios/DMR/Handset/Hytera HP788.png", vec![
                subsection("Handsets", &[
                    "Hytera HP788.png", "Hytera HP708.png", "Hytera HP688.png", "Hytera HP608.png",
                    "Hytera HP568.png", "Hytera HP508.png", "Hytera HP708 UL913.png",
                    "Hytera HP788 UL913.png", "Hytera HP508 UL913.png", "Hytera HP568 UL913.png",
                    "Hytera HP79XEx IIC.png", "Hytera HP71XEx IIA.png", "Hytera BP518.png",
                    "Hytera BP568.png", "Kenwood NX-1200.png", "Kenwood NX-32 Series.png",
                    "Motorola R2.png", "Motorola XiR P6600i.png", "Motorola XiR P6620i.png",
                    "Motorola R7.png", "Motorola R7 IS.png",
                ]),
                subsection("Base & Mobile Radios", &[
                    "Hytera HM788.png", "Hytera HM658.png", "Hytera MD658.png",
                    "Motorola XiR M3688.png", "Motorola XiR M8668i.png", "Kenwood NX-1800.png",
                    "Kenwood NX-3220.png",
                ]),
                subsection("Repeater", &[
                    "Hytera HR1068.png", "Hytera HR658.png", "Hytera DS-6310.png",
                    "Motorola SLR5300.png", "Kenwood TKR-D710.png",
                ]),
                subsection("Radio Solutions", &[
                    "Hytera Standalone Analog & Digital.png", "Hytera DMM (Dynamic Mixed Mode).png",
                    "Hytera Analog IP Site Connect.png", "Hytera Digital IP Site Connect.png",
                    "Hytera XPT Single Site (Extended Pseudo Digital Trunking).png",
                    "Hytera XPT Multi-site (Extended Pseudo Digital Trunking).png",
                    "Hytera Smart-Dispatch-Plus.png", "Motorola IPSC.png", "Motorola CAP Plus.png",
                    "Motorola Linked CAP Plus.png",
                ]),
                subsection("Tier-iii Solution", &[
                    "Hytera DS-6250S DMR Trunking Cube Base Station.png",
                    "Hytera DS-9300 Bi-Directional Amplifier.png",
                    "Hytera DS-6210 DMR Trunking Pro Base Station.png",
                    "Hytera DS-6211 DMR Trunking Lite Base Station.png", "Hytera Terminals.png",
                    "DS-6310 DMR Simulcast System.png",
                ]),
                subsection("Antenna & RF", &[
                    "High-Gain Collinear Antenna.png", "GP Antenna.png", "Yagi Antenna.png",
                    "Fiberglass Antenna.png", "Mobile Antenna (Whip Antenna).png",
                    "Mobile Antenna (Magnetic Antenna).png", "Transmitter Combiners.png",
                    "Duplexers.png", "Receiver Multicoupler.png", "Hybrid Couplers.png",
                    "Expandable Multicoupler.png", "Filter-Preselector.png",
                    "Filter-Bandpass Cavity.png", "Filter-Bandpass_Reject.png",
                    "Filter-Bandwidth-PIP.png",
                ]),
            ]),
            section("TETRA System", "/Two-way-Radios/Two way Radios/TETRA_System/Handset_Terminals/Hytera PT310.png", vec![
                subsection("Handset_Terminals", &[
                    "Hytera PT310.png", "Hytera PT350.png", "Hytera PT560H.png",
                    "Hytera PT580H Plus.png", "Hytera PT590.png", "Hytera PT580H Plus UL913.png",
                    "Hytera PT790Ex.png", "Hytera PT890Ex.png",
                ]),
                subsection("Mobile_Terminals", &["Hytera MT680 Plus.png"]),
                subsection("Base_Stations", &[
                    "Hytera DIB-R5 Advanced.png", "Hytera DIB-R5 Compact.png",
                    "Hytera DIB-R5 outdoor.png", "Hytera TETRA iBS.png",
                    "Hytera ACCESSNETr-T IP SMART.png", "Hytera TETRA Data Gateway (DGW).png",
                    "Hytera TETRA network management system (NMS).png",
                    "Hytera ACCESSNETr-T IP SMART.png",
                ]),
            ]),
            section("Ad-Hoc Solutions", "/Two-way-Radios/Two way Radios/Ad-Hoc Solutions/Voice/Hytera E-Pole 200.png", vec![
                subsection("Voice", &["Hytera E-Pole 200.png", "Hytera E-Pack 200.png"]),
                subsection("Data", &["Hytera E-mesh580P.png"]),
                subsection("Mobility Dispatch", &["Hytera E-centre.png"]),
            ]),
            section("License Free & Accessories", "/Two-way-Radios/Two way Radios/License Free & Accessories/Hytera/Hytera HP788 LF.png", vec![
                subsection("Hytera", &[
                    "Hytera HP788 LF.png", "Hytera HP708 LF.png", "Hytera HP688 LF.png",
                    "Hytera HP608 LF.png", "Hytera HP568 LF.png", "Hytera HP508 LF.png",
                    "Hytera HP708 LF UL913.png", "Hytera HP788 LF UL913.png",
                    "Hytera HP508 LF UL913.png", "Hytera BP518 LF.png", "Hytera BP568 LF.png",
                    "Hytera BP568 LF UL913.png", "Hytera S1 mini & LF.png", "Hytera S1 Pro & LF.png",
                ]),
                subsection("Kenwood", &["Kenwood TK-3501 LF.png", "Kenwood  TK-2000 LF.png"]),
                subsection("Access", &["Access P9.jpg", "Access P5.png", "Access P3.png"]),
                subsection("Aspera", &[
                    "Apera V7.png", "Apera V9.png", "Aspera VISTA.png", "Aspera VICTOR.png",
                    "Aspera AD-90.png", "Apera VM-81.png", "Aspera SFR-2500 (SFR).png",
                ]),
                subsection("Kenwee", &["Kenwee K50.png", "Kenwee K100.png"]),
                subsection("Airmob", &["Airmob A10.png", "Airmob A11.png"]),
                subsection("Skyfone", &[
                    "Skyfone S111.png", "Skyfone S-550.png", "Skyfone S-570.png",
                    "Skyfone S-580.png", "Skyfone-SDR5188.png",
                ]),
                subsection("I-Comm", &["IU-20SR.png"]),
                subsection("Accessories", &[
                    "Helical Antenna.png", "Battery.png", "Earphones.png", "Cables.png",
                    "Chargers.png", "Multi-unit chargers.png", "Carry case.png", "Radio Spares.png",
                    "Power Supply Units.png", "In-line Surge protection.png", "Connectors.png",
                ]),
            ]),
        ],
    });

    catalog.insert("MCS & PoC Solutions".to_string(), Category {
        icon: "MCS".to_string(),
        image: None,
        sections: vec![
            section("PoC Radios", "/Two-way-Radios/Two way Radios/MCS & PoC Solutions/Handheld PoC/Hytera PNC380.png", vec![
                subsection("Handheld PoC", &[
                    "Hytera PNC380.png", "Hytera PNC550.png", "Motorola TLK 100.png",
                ]),
            ]),
            section("Platforms", "/Two-way-Radios/Two way Radios/MCS & PoC Solutions/Hytera HyTalk/Hytera HyTalk Pro.png", vec![
                subsection("Hytera HyTalk", &["Hytera HyTalk Pro.png", "Hytera HyTalk Lite.png"]),
            ]),
        ],
    });

    catalog.insert("Body Worn Cameras".to_string(), Category {
        icon: "BWC".to_string(),
        image: None,
        sections: vec![
            section("Bodycams", "/Two-way-Radios/Two way Radios/Body Worn Cameras/4G Bodycams/Hytera VM780.png", vec![
                subsection("4G Bodycams", &["Hytera VM780.png", "Hytera VM580D.png"]),
            ]),
            section("Management", "/Two-way-Radios/Two way Radios/Body Worn Cameras/Evidence Management/Hytera SmartDEMS.png", vec![
                subsection("Evidence Management", &[
                    "Hytera SmartDEMS.png", "Digital Evidence Management.png",
                ]),
            ]),
        ],
    });

    catalog
}
