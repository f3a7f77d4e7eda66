//! End-to-end parser tests over the sample corpus.

mod common;

use gfamem::{LoadError, Orientation, ParseError, SegmentIx};

#[test]
fn sample_graph_counts() {
    let store = common::lil_store();
    assert_eq!(store.segment_count(), 15);
    assert_eq!(store.link_count(), 20);
    assert_eq!(store.path_count(), 3);
    assert_eq!(store.version(), Some("1.0"));
}

#[test]
fn sample_graph_first_segment() {
    let store = common::lil_store();
    assert_eq!(store.segment_name(0).unwrap(), "1");
    assert_eq!(store.segment_sequence(0).unwrap(), "CAAATAAG");
}

#[test]
fn sample_graph_name_lookup_is_zero_based_declaration_order() {
    let store = common::lil_store();
    assert_eq!(store.find_segment("9"), Some(SegmentIx(8)));
    assert_eq!(store.find_segment("1"), Some(SegmentIx(0)));
    assert_eq!(store.find_segment("15"), Some(SegmentIx(14)));
    assert_eq!(store.find_segment("16"), None);
}

#[test]
fn sample_graph_path_x() {
    let store = common::lil_store();
    let x = &store.paths()[0];
    assert_eq!(x.name, "x");
    assert_eq!(x.steps.len(), 10);
    assert_eq!(x.overlaps.len(), 9);
    assert!(x.steps.iter().all(|s| s.orient == Orientation::Forward));
    // x walks 1,3,5,6,8,9,11,12,14,15 (as zero-based indices).
    let visited: Vec<usize> = x.steps.iter().map(|s| s.segment.as_usize()).collect();
    assert_eq!(visited, vec![0, 2, 4, 5, 7, 8, 10, 11, 13, 14]);
}

#[test]
fn sample_graph_links_resolve() {
    let store = common::lil_store();
    let count = store.segment_count();
    for link in store.links() {
        assert!(link.from.as_usize() < count);
        assert!(link.to.as_usize() < count);
        assert_eq!(link.overlap, "0M");
    }
}

#[test]
fn link_to_never_declared_segment_fails_without_a_store() {
    let mut doc = String::from(common::LIL_GFA);
    doc.push_str("L\t99\t+\t1\t+\t0M\n");
    let err = gfamem::parse(&doc).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownSegment {
            line: 40,
            name: "99".to_owned()
        }
    );
}

#[test]
fn path_step_to_never_declared_segment_fails() {
    let mut doc = String::from(common::LIL_GFA);
    doc.push_str("P\tw\t1+,99-\t8M\n");
    assert!(matches!(
        gfamem::parse(&doc),
        Err(ParseError::UnknownSegment { name, .. }) if name == "99"
    ));
}

#[test]
fn load_reads_a_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lil.gfa");
    std::fs::write(&path, common::LIL_GFA).unwrap();

    let store = gfamem::load(&path).unwrap();
    assert_eq!(store, common::lil_store());
}

#[test]
fn load_surfaces_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.gfa");
    assert!(matches!(gfamem::load(&missing), Err(LoadError::Io(_))));
}

#[test]
fn load_surfaces_parse_errors_with_line_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.gfa");
    std::fs::write(&path, "S\ta\tACGT\nL\ta\t+\tb\t+\t0M\n").unwrap();

    match gfamem::load(&path) {
        Err(LoadError::Parse(ParseError::UnknownSegment { line, name })) => {
            assert_eq!(line, 2);
            assert_eq!(name, "b");
        }
        other => panic!("expected parse error, got {:?}", other.map(|_| ())),
    }
}
