use approx::assert_relative_eq;
use glam::Vec2;
use turnout_editor::core::{flip_horizontal, flip_vertical, Shape};
use turnout_editor::{Axis, ConnectionPoint, Flippable, Orientation, TopologyRectangle};

#[test]
fn test_reflection_examples() {
    let center = Vec2::new(150.0, 250.0);

    assert_eq!(flip_horizontal(Vec2::new(50.0, 250.0), center), Vec2::new(250.0, 250.0));
    assert_eq!(flip_vertical(Vec2::new(150.0, 100.0), center), Vec2::new(150.0, 400.0));
    assert_eq!(flip_horizontal(center, center), center);
}

#[test]
fn test_left_connection_point_becomes_right_under_horizontal_flip() {
    let center = Vec2::new(150.0, 250.0);
    let mut cp = ConnectionPoint::new(center, Orientation::Left, "0");
    let left_pos = cp.position();

    cp.flip(Axis::Horizontal, center);

    assert_eq!(cp.orientation(), Orientation::Right);
    assert_relative_eq!(cp.position().x, flip_horizontal(left_pos, center).x);
    assert_relative_eq!(cp.position().y, left_pos.y);
}

#[test]
fn test_left_connection_point_keeps_orientation_under_vertical_flip() {
    let center = Vec2::new(150.0, 250.0);
    let mut cp = ConnectionPoint::new(center, Orientation::Left, "0");
    let left_pos = cp.position();

    cp.flip(Axis::Vertical, center);

    assert_eq!(cp.orientation(), Orientation::Left);
    assert_eq!(cp.position(), left_pos);
}

#[test]
fn test_composite_double_flip_restores_all_leaf_paths() {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let mut item = TopologyRectangle::new(1, "Point", "1", Vec2::new(40.0, 60.0));
        let before: Vec<_> = {
            let mut paths = Vec::new();
            item.rail_point().collect_paths(&mut paths);
            paths.into_iter().cloned().collect()
        };

        item.flip(axis);
        item.flip(axis);

        let mut after = Vec::new();
        item.rail_point().collect_paths(&mut after);
        let after: Vec<_> = after.into_iter().cloned().collect();

        assert_eq!(before, after, "Doppeltes Spiegeln um {:?}", axis);
    }
}

#[test]
fn test_single_flip_changes_geometry_but_not_contour() {
    let mut item = TopologyRectangle::new(1, "Point", "1", Vec2::ZERO);
    let contour_before = item.contour().clone();
    let oblique_before = item.rail_point().oblique_line().end();

    item.flip_horizontal();

    assert_eq!(item.contour(), &contour_before);
    assert_ne!(item.rail_point().oblique_line().end(), oblique_before);
}

#[test]
fn test_off_center_reference_on_each_axis() {
    let center = Vec2::new(150.0, 250.0);
    let reference = Vec2::new(100.0, 200.0);

    // Left/Right: nur die horizontale Achse wirkt
    let mut left = ConnectionPoint::new(reference, Orientation::Left, "0");
    let left_pos = left.position();
    left.flip(Axis::Vertical, center);
    assert_eq!(left.orientation(), Orientation::Left);
    assert_eq!(left.reference_center(), reference);
    assert_eq!(left.position(), left_pos);

    left.flip(Axis::Horizontal, center);
    assert_eq!(left.orientation(), Orientation::Right);
    assert_eq!(left.reference_center(), Vec2::new(200.0, 200.0));
    assert_eq!(left.position(), flip_horizontal(left_pos, center));

    // Top/Bottom: nur die vertikale Achse wirkt
    let mut top = ConnectionPoint::new(reference, Orientation::Top, "2");
    let top_pos = top.position();
    top.flip(Axis::Horizontal, center);
    assert_eq!(top.orientation(), Orientation::Top);
    assert_eq!(top.reference_center(), reference);
    assert_eq!(top.position(), top_pos);

    top.flip(Axis::Vertical, center);
    assert_eq!(top.orientation(), Orientation::Bottom);
    assert_eq!(top.reference_center(), Vec2::new(100.0, 300.0));
    assert_eq!(top.position(), flip_vertical(top_pos, center));
}

#[test]
fn test_connection_points_of_moved_item() {
    let offset = Vec2::new(400.0, 100.0);
    let mut moved = TopologyRectangle::new(1, "Point", "1", Vec2::ZERO);
    moved.move_by(offset);
    let before: Vec<_> = moved
        .rail_point()
        .connection_points()
        .iter()
        .map(|cp| (cp.orientation(), cp.position()))
        .collect();

    moved.flip_vertical();

    // Left und Right liegen nicht auf der vertikalen Achse und bleiben stehen
    let cps = moved.rail_point().connection_points();
    assert_eq!((cps[0].orientation(), cps[0].position()), before[0]);
    assert_eq!((cps[1].orientation(), cps[1].position()), before[1]);
    assert_eq!(cps[2].orientation(), Orientation::Bottom);

    moved.flip_vertical();
    moved.flip_horizontal();

    let cps = moved.rail_point().connection_points();
    assert_eq!(cps[0].orientation(), Orientation::Right);
    assert_eq!(cps[1].orientation(), Orientation::Left);
    assert_eq!((cps[2].orientation(), cps[2].position()), before[2]);

    // Szenenpfade entsprechen dem unverschobenen, gleich gespiegelten Symbol
    let mut origin = TopologyRectangle::new(1, "Point", "1", Vec2::ZERO);
    origin.flip_horizontal();
    let expected: Vec<_> = origin
        .scene_paths()
        .iter()
        .map(|path| path.translated(offset))
        .collect();
    assert_eq!(moved.scene_paths(), expected);
}
