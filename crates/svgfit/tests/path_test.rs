use svgfit::path::{PathCommand, parse_path_data};

fn pt(x: f64, y: f64) -> svgfit::Point {
    svgfit::geom::point(x, y)
}

#[test]
fn parses_mixed_command_sequence() {
    let parse = parse_path_data("M 10 20 L 30 40 Q 1 2, 3 4 C 5 6, 7 8, 9 10 Z");
    assert_eq!(
        parse.commands,
        vec![
            PathCommand::MoveTo(pt(10.0, 20.0)),
            PathCommand::LineTo(pt(30.0, 40.0)),
            PathCommand::QuadCurveTo {
                ctrl: pt(1.0, 2.0),
                to: pt(3.0, 4.0),
            },
            PathCommand::CubicCurveTo {
                ctrl1: pt(5.0, 6.0),
                ctrl2: pt(7.0, 8.0),
                to: pt(9.0, 10.0),
            },
            PathCommand::ClosePath,
        ]
    );
    assert!(parse.skipped.is_empty());
    assert_eq!(parse.truncated_groups, 0);
}

#[test]
fn incomplete_trailing_group_is_dropped_and_counted() {
    let parse = parse_path_data("M 0 0 L 10");
    assert_eq!(parse.commands, vec![PathCommand::MoveTo(pt(0.0, 0.0))]);
    assert_eq!(parse.truncated_groups, 1);
}

#[test]
fn group_cut_short_by_next_letter_is_dropped() {
    let parse = parse_path_data("M 0 0 C 1 2 3 L 5 6");
    assert_eq!(
        parse.commands,
        vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(5.0, 6.0)),
        ]
    );
    assert_eq!(parse.truncated_groups, 1);
}

#[test]
fn unsupported_letters_are_skipped_and_recorded() {
    let parse = parse_path_data("M 0 0 A 1 1 0 0 1 10 10 Z");
    assert_eq!(
        parse.commands,
        vec![PathCommand::MoveTo(pt(0.0, 0.0)), PathCommand::ClosePath]
    );
    assert_eq!(parse.skipped, vec!['A']);
}

#[test]
fn lowercase_letters_are_consumed_with_absolute_coordinates() {
    // Relative semantics are not applied; `l 5 5` parses as an absolute LineTo.
    let parse = parse_path_data("m 10 10 l 5 5 z");
    assert_eq!(
        parse.commands,
        vec![
            PathCommand::MoveTo(pt(10.0, 10.0)),
            PathCommand::LineTo(pt(5.0, 5.0)),
            PathCommand::ClosePath,
        ]
    );
}
