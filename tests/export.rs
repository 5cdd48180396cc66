use rowplot::data::export::*;
use rowplot::data::points::DomainPoint;
use rowplot::data::session::AnalysisSession;

fn pts() -> Vec<DomainPoint> {
    vec![DomainPoint::new(0.25, 1.5), DomainPoint::new(0.75, -2.0)]
}

#[test]
fn json_save_then_load_preserves_points() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("targets.json");
    save_points_json(&path, &pts()).unwrap();
    assert_eq!(load_points_json(&path).unwrap(), pts());
}

#[test]
fn writes_expected_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("targets.csv");
    save_points_csv(&path, &pts()).unwrap();
    let s = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines, vec!["t,a", "0.25,1.5", "0.75,-2"]);
}

#[test]
fn malformed_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "[{\"t\": 1}]").unwrap();
    assert!(matches!(load_points_json(&path), Err(ExportError::Json(_))));
}

#[test]
fn file_stem_has_timestamp() {
    let stem = default_file_stem();
    assert!(stem.starts_with("targets_"));
    assert_eq!(stem.len(), "targets_".len() + 15);
}

#[test]
fn session_round_trips_points_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("targets.json");
    let mut s = AnalysisSession::new();
    for p in pts() {
        s.annotation_mut().add_point(p);
    }
    assert!(s.save_points(&path, PointsFormat::Json));

    let mut other = AnalysisSession::new();
    assert!(other.load_points(&path));
    assert_eq!(other.annotation().points().all(), pts().as_slice());
    assert!(other.error().is_none());
}

#[test]
fn failed_load_keeps_points_and_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json").unwrap();
    let mut s = AnalysisSession::new();
    s.annotation_mut().add_point(DomainPoint::new(0.1, 0.2));

    assert!(!s.load_points(&path));
    assert_eq!(s.annotation().points().len(), 1);
    assert!(s.error().unwrap().starts_with("Failed to load points"));
}

#[test]
fn failed_save_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("targets.csv");
    let mut s = AnalysisSession::new();
    s.annotation_mut().add_point(DomainPoint::new(0.1, 0.2));

    assert!(!s.save_points(&path, PointsFormat::Csv));
    assert!(s.error().unwrap().starts_with("Failed to save points"));
}
