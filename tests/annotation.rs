mod common;

use rowplot::data::annotation::AnnotationController;
use rowplot::data::bounds::PixelRect;
use rowplot::data::points::DomainPoint;
use rowplot::data::series::{chart_series, Channel};

fn with_series() -> AnnotationController {
    let r = common::sample_result();
    let mut ctrl = AnnotationController::default();
    ctrl.set_series(chart_series(Some(&r), Channel::RowerAcceleration), 1.0);
    ctrl
}

#[test]
fn clicks_before_geometry_are_ignored() {
    let mut ctrl = with_series();
    assert!(!ctrl.bounds_ready());
    assert_eq!(ctrl.handle_click(100.0, 100.0), None);
    assert!(ctrl.points().is_empty());
}

#[test]
fn zero_sized_geometry_is_not_ready() {
    let mut ctrl = with_series();
    ctrl.set_geometry(PixelRect::new(0.0, 0.0, 0.0, 0.0));
    assert!(!ctrl.bounds_ready());
    assert_eq!(ctrl.handle_click(0.0, 0.0), None);
}

#[test]
fn click_adds_mapped_point() {
    let mut ctrl = with_series();
    ctrl.set_geometry(PixelRect::new(0.0, 100.0, 0.0, 100.0));
    // series spans [-2, 4]; padded to [-2.6, 4.6]
    let p = ctrl.handle_click(50.0, 50.0).unwrap();
    assert!((p.t - 0.5).abs() < 1e-12);
    assert!((p.a - 1.0).abs() < 1e-12);
    assert_eq!(ctrl.points().len(), 1);
}

#[test]
fn click_outside_area_adds_nothing() {
    let mut ctrl = with_series();
    ctrl.set_geometry(PixelRect::new(10.0, 100.0, 10.0, 100.0));
    assert_eq!(ctrl.handle_click(5.0, 50.0), None);
    assert!(ctrl.points().is_empty());
}

#[test]
fn range_expands_to_include_points_and_shrinks_on_removal() {
    let mut ctrl = with_series();
    let before = ctrl.data_rect().unwrap();

    ctrl.add_point(DomainPoint::new(0.5, 20.0));
    let grown = ctrl.data_rect().unwrap();
    // joint range [-2, 20] padded by 2.2
    assert!((grown.y_max - 22.2).abs() < 1e-9);
    assert!((grown.y_min - -4.2).abs() < 1e-9);

    ctrl.remove_point(0);
    assert_eq!(ctrl.data_rect().unwrap(), before);
}

#[test]
fn remove_out_of_range_keeps_points() {
    let mut ctrl = with_series();
    ctrl.add_point(DomainPoint::new(0.1, 0.0));
    assert_eq!(ctrl.remove_point(5), None);
    assert_eq!(ctrl.points().len(), 1);
}

#[test]
fn duration_change_updates_time_axis() {
    let mut ctrl = with_series();
    ctrl.set_series(ctrl.series().to_vec(), 1.5);
    assert_eq!(ctrl.data_rect().unwrap().x_max, 1.5);
    ctrl.set_geometry(PixelRect::new(0.0, 100.0, 0.0, 100.0));
    let p = ctrl.handle_click(100.0, 50.0).unwrap();
    assert!((p.t - 1.5).abs() < 1e-12);
}

#[test]
fn without_series_points_alone_set_the_range() {
    let mut ctrl = AnnotationController::default();
    ctrl.add_point(DomainPoint::new(0.2, 3.0));
    let r = ctrl.data_rect().unwrap();
    assert_eq!((r.y_min, r.y_max), (2.0, 4.0));
}
