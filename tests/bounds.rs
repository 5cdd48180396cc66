use rowplot::data::bounds::*;
use rowplot::data::points::DomainPoint;

fn scenario_bounds() -> ChartBounds {
    ChartBounds::new(
        PixelRect::new(60.0, 460.0, 10.0, 190.0),
        DataRect {
            x_min: 0.0,
            x_max: 1.0,
            y_min: -10.0,
            y_max: 10.0,
        },
    )
    .unwrap()
}

#[test]
fn click_in_centre_maps_to_mid_time_and_zero() {
    let b = scenario_bounds();
    let p = pixel_to_data(&b, 260.0, 100.0).unwrap();
    assert!((p.t - 0.5).abs() < 1e-12);
    assert!(p.a.abs() < 1e-12);
}

#[test]
fn corners_map_to_data_extremes() {
    let b = scenario_bounds();
    let bottom_left = b.pixel_to_data(60.0, 190.0).unwrap();
    assert_eq!(bottom_left, DomainPoint::new(0.0, -10.0));
    let top_right = b.pixel_to_data(460.0, 10.0).unwrap();
    assert_eq!(top_right, DomainPoint::new(1.0, 10.0));
}

#[test]
fn clicks_outside_plot_area_are_ignored() {
    let b = scenario_bounds();
    assert_eq!(b.pixel_to_data(59.0, 100.0), None);
    assert_eq!(b.pixel_to_data(461.0, 100.0), None);
    assert_eq!(b.pixel_to_data(200.0, 5.0), None);
    assert_eq!(b.pixel_to_data(200.0, 191.0), None);
}

#[test]
fn pixel_round_trip_is_identity_inside_area() {
    let b = scenario_bounds();
    for &(px, py) in &[(60.0, 10.0), (123.4, 56.7), (300.0, 150.0), (460.0, 190.0)] {
        let p = b.pixel_to_data(px, py).unwrap();
        let [qx, qy] = b.data_to_pixel(p);
        assert!((qx - px).abs() < 1e-9, "x {px} -> {qx}");
        assert!((qy - py).abs() < 1e-9, "y {py} -> {qy}");
    }
}

#[test]
fn padding_is_ten_percent_of_joint_range() {
    let b = compute_bounds(
        PixelRect::new(0.0, 100.0, 0.0, 100.0),
        &[-5.0, 0.0, 5.0],
        &[15.0],
        2.0,
    )
    .unwrap();
    let d = b.data_rect;
    assert_eq!((d.x_min, d.x_max), (0.0, 2.0));
    assert!((d.y_min - -7.0).abs() < 1e-12);
    assert!((d.y_max - 17.0).abs() < 1e-12);
}

#[test]
fn degenerate_range_pads_by_one() {
    let d = DataRect::fit([5.0, 5.0, 5.0], std::iter::empty(), 1.0).unwrap();
    assert_eq!((d.y_min, d.y_max), (4.0, 6.0));
}

#[test]
fn unknown_geometry_yields_no_bounds() {
    assert!(compute_bounds(PixelRect::new(0.0, 0.0, 0.0, 0.0), &[1.0, 2.0], &[], 1.0).is_none());
    assert!(compute_bounds(PixelRect::new(10.0, 5.0, 0.0, 100.0), &[1.0], &[], 1.0).is_none());
}

#[test]
fn non_positive_duration_yields_no_bounds() {
    let rect = PixelRect::new(0.0, 100.0, 0.0, 100.0);
    assert!(compute_bounds(rect, &[1.0, 2.0], &[], 0.0).is_none());
    assert!(compute_bounds(rect, &[1.0, 2.0], &[], f64::NAN).is_none());
}
