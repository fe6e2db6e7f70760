use svgfit::path::{PathCommand, parse_path_data};
use svgfit::reverse_path;

fn end_points(d: &str) -> Vec<(f64, f64)> {
    parse_path_data(d)
        .commands
        .iter()
        .filter_map(PathCommand::end_point)
        .map(|p| (p.x, p.y))
        .collect()
}

#[test]
fn triangle_is_traced_in_opposite_order() {
    let reversed = reverse_path("M 0,0 L 10,0 L 10,10 Z").expect("valid path");
    assert_eq!(reversed, "M 10.00 10.00\n  L 10.00 0.00\n  L 0.00 0.00\n  Z");
}

#[test]
fn cubic_control_points_swap_order() {
    let reversed = reverse_path("M 0 0 C 1 2, 3 4, 10 0 Z").expect("valid path");
    assert_eq!(reversed, "M 10.00 0.00\n  C 3.00 4.00, 1.00 2.00, 0.00 0.00\n  Z");
}

#[test]
fn quadratic_control_point_is_reused() {
    let reversed = reverse_path("M 0 0 Q 5 5, 10 0 Z").expect("valid path");
    assert_eq!(reversed, "M 10.00 0.00\n  Q 5.00 5.00, 0.00 0.00\n  Z");
}

#[test]
fn reversing_twice_restores_the_point_sequence() {
    let original = "M 0 0 C 1 2, 3 4, 10 0 Q 5 5, 0 10 L 0 0 Z";
    let once = reverse_path(original).expect("valid path");
    let twice = reverse_path(&once).expect("valid path");

    assert_eq!(end_points(&twice), end_points(original));
    // A third trip reproduces the first reversal exactly.
    assert_eq!(reverse_path(&twice).expect("valid path"), once);
}
