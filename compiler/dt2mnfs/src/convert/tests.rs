#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use std::fs;

const HEADER: &str = include_str!("../../tests/fixtures/minimal.h");

#[test]
fn test_build_manifest_counts() {
    let table = SymbolTable::parse(HEADER);
    let manifest = build_manifest(&table, ManifestHeader::default()).unwrap();

    assert_eq!(manifest.interfaces().count(), 1);
    assert_eq!(manifest.strings().count(), 2);
    assert_eq!(manifest.bundles().count(), 1);
    assert_eq!(manifest.cports().count(), 1);
}

#[test]
fn test_render_formats() {
    let table = SymbolTable::parse(HEADER);
    let manifest = build_manifest(&table, ManifestHeader::default()).unwrap();

    let text = render(&manifest, OutputFormat::Mnfs).unwrap();
    assert!(text.starts_with(b"[manifest-header]\n"));

    let blob = render(&manifest, OutputFormat::Mnfb).unwrap();
    assert_eq!(usize::from(blob[0]) | usize::from(blob[1]) << 8, blob.len());
}

#[test]
fn test_run_wrong_argument_count() {
    assert_eq!(run(&["dt2mnfs".to_owned()]), EXIT_USAGE);
    assert_eq!(run(&[]), EXIT_USAGE);
    let too_many: Vec<String> = ["dt2mnfs", "a", "b", "c"].map(String::from).to_vec();
    assert_eq!(run(&too_many), EXIT_USAGE);
}

#[test]
fn test_convert_leaves_only_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("devicetree_unfixed.h");
    fs::write(&input, HEADER).unwrap();
    let output = dir.path().join("greybus.mnfb");

    convert(&input, &output, &ConvertOptions::for_output(&output)).unwrap();

    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    names.sort();
    assert_eq!(names, ["devicetree_unfixed.h", "greybus.mnfb"]);
    assert_eq!(fs::read(&output).unwrap().len(), 52);
}

#[test]
fn test_failed_conversion_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.h");
    let bad_id = "#define DT_N_S_greybus0_S_interface_S_bundle0_P_id x\n";
    fs::write(&input, format!("{HEADER}{bad_id}")).unwrap();
    let output = dir.path().join("greybus.mnfs");
    fs::write(&output, "previous").unwrap();

    let err = convert(&input, &output, &ConvertOptions::default()).unwrap_err();

    assert!(matches!(err, Error::Resolve(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_unwritable_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("devicetree_unfixed.h");
    fs::write(&input, HEADER).unwrap();
    let output = dir.path().join("missing").join("greybus.mnfs");

    let err = convert(&input, &output, &ConvertOptions::default()).unwrap_err();

    assert!(matches!(err, Error::Write { ref path, .. } if *path == output));
    assert!(!output.exists());
}
