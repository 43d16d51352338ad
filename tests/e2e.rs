//! End-to-end integration tests for pdf2xml.
//!
//! Tests that need the real BACnet reference PDF are gated on the presence of
//! `res/cpt_bacnet.pdf` (not shipped with the crate) and skip themselves with
//! a message when it is missing. Everything else runs unconditionally.
//!
//! Run with:
//!   cargo test --test e2e -- --nocapture

use pdf2xml::{
    build_xml_struct, convert, convert_to_file, export_xml_struct, ConversionConfig,
    Pdf2XmlError, Table,
};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::PathBuf;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn sample_pdf() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("res/cpt_bacnet.pdf")
}

/// Skip this test if the sample PDF is not present.
macro_rules! skip_unless_sample_pdf {
    () => {{
        let p = sample_pdf();
        if !p.exists() {
            println!("SKIP — sample PDF not found: {}", p.display());
            return;
        }
        p
    }};
}

/// Parse serialised XML back into (root_tag, children as (tag, attrs)).
fn parse_flat(xml: &str) -> (String, Vec<(String, Vec<(String, String)>)>) {
    let mut reader = Reader::from_str(xml);
    let mut root_tag = String::new();
    let mut children = Vec::new();
    loop {
        match reader.read_event().expect("output must be well-formed XML") {
            Event::Start(e) => {
                root_tag = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
            }
            Event::Empty(e) => {
                let tag = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                let attrs = e
                    .attributes()
                    .map(|a| {
                        let a = a.unwrap();
                        (
                            String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                            a.unescape_value().unwrap().into_owned(),
                        )
                    })
                    .collect();
                children.push((tag, attrs));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    (root_tag, children)
}

// ── Full-pipeline tests without a PDF ────────────────────────────────────────

#[test]
fn build_export_parse_round_trip() {
    let table: Table = vec![
        vec![
            Some("Property".into()),
            Some("Type".into()),
            Some("Flags".into()),
            Some("Notes".into()),
        ],
        vec![
            Some("Object_Name".into()),
            Some("CharacterString".into()),
            Some("R".into()),
            Some("".into()),
        ],
        vec![Some("Reliability".into()), None, Some("O".into()), Some("opt".into())],
        vec![
            Some("Units".into()),
            Some("Enumerated".into()),
            Some("R".into()),
            Some("engineering units".into()),
        ],
    ];

    let root = build_xml_struct(Some(table), "ANALOG_INPUT").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("analog_input.xml");
    export_xml_struct(&root, &out).unwrap();

    let xml = std::fs::read_to_string(&out).unwrap();
    let (root_tag, children) = parse_flat(&xml);

    assert_eq!(root_tag, "ANALOG_INPUT");
    assert_eq!(children.len(), 2, "the Reliability row has an absent cell");

    let (tag, attrs) = &children[0];
    assert_eq!(tag, "Object_Name");
    assert_eq!(
        attrs,
        &vec![
            ("type".to_string(), "CharacterString".to_string()),
            ("flag".to_string(), "R".to_string()),
            ("information".to_string(), "unknown".to_string()),
        ]
    );

    let (tag, attrs) = &children[1];
    assert_eq!(tag, "Units");
    assert_eq!(attrs[2].1, "engineering units");
}

#[test]
fn no_table_and_empty_table_propagate_to_the_caller() {
    let err = build_xml_struct(None, "ANALOG_INPUT").unwrap_err();
    assert_eq!(err.to_string(), "There is no table");

    let err = build_xml_struct(Some(vec![]), "ANALOG_INPUT").unwrap_err();
    assert_eq!(err.to_string(), "Your table is empty");
}

#[test]
fn convert_reports_missing_input() {
    let config = ConversionConfig::default();
    let err = convert("/definitely/not/a/real/file.pdf", &config).unwrap_err();
    assert!(matches!(err, Pdf2XmlError::FileNotFound { .. }));
}

// ── Sample-PDF tests (gated) ─────────────────────────────────────────────────

#[test]
fn convert_bacnet_analog_input_table() {
    let pdf = skip_unless_sample_pdf!();
    let config = ConversionConfig::default();

    let output = convert(pdf.to_str().unwrap(), &config).expect("convert() should succeed");

    assert_eq!(output.root.tag(), "ANALOG_INPUT");
    assert!(
        !output.root.children().is_empty(),
        "page 55 holds the analog-input property table"
    );
    assert_eq!(
        output.stats.converted_rows + output.stats.skipped_rows,
        output.stats.data_rows
    );
    for child in output.root.children() {
        assert!(child.attribute("type").is_some());
        assert!(child.attribute("flag").is_some());
        assert!(child.attribute("information").is_some());
    }
}

#[test]
fn convert_to_file_writes_well_formed_xml() {
    let pdf = skip_unless_sample_pdf!();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("analog_input.xml");
    let config = ConversionConfig::default();

    let stats =
        convert_to_file(pdf.to_str().unwrap(), &out, &config).expect("conversion should succeed");

    let xml = std::fs::read_to_string(&out).unwrap();
    let (root_tag, children) = parse_flat(&xml);
    assert_eq!(root_tag, "ANALOG_INPUT");
    assert_eq!(children.len(), stats.converted_rows);
}

#[test]
fn out_of_range_page_is_reported() {
    let pdf = skip_unless_sample_pdf!();
    let config = ConversionConfig::builder().page(100_000).build().unwrap();

    let err = convert(pdf.to_str().unwrap(), &config).unwrap_err();
    assert!(matches!(err, Pdf2XmlError::PageOutOfRange { .. }));
}
