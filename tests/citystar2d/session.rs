use citystar::citystar2d::*;
use glam::DVec2;

#[test]
fn adding_a_point_logs_it() {
    let mut session = Session::default();

    let city = session.add_point("A", "0", "1.5").unwrap();
    assert_eq!(city.pos, DVec2::new(0.0, 1.5));

    session.add_point("B", " 3 ", "4").unwrap();
    assert_eq!(session.log(), &["Added city: A (0, 1.5)", "Added city: B (3, 4)"]);
    assert_eq!(session.store().len(), 2);
}

#[test]
fn bad_fields_are_rejected() {
    let mut session = Session::default();
    session.add_point("A", "0", "0").unwrap();

    for (name, x, y) in [("", "1", "1"), ("B", "", "1"), ("B", "1", "abc"), ("B", "NaN", "1"), ("B", "1", "inf")] {
        let err = session.add_point(name, x, y).unwrap_err();
        assert_eq!(err, SessionError::InvalidInput);
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.log().len(), 1);
}

#[test]
fn single_point_cannot_make_a_path() {
    let mut session = Session::default();
    session.add_point("A", "1", "1").unwrap();
    let mut canvas = RecordingCanvas::new();

    let err = session.calculate_path(&mut canvas).unwrap_err();

    assert_eq!(err, SessionError::InsufficientCities);
    assert_eq!(err.to_string(), "Add at least two cities.");
    assert!(canvas.commands.is_empty());
    assert_eq!(session.log(), &["Added city: A (1, 1)"]);
}

#[test]
fn path_follows_insertion_order() {
    let mut session = Session::default();
    session.add_point("A", "0", "0").unwrap();
    session.add_point("B", "1", "0").unwrap();
    session.add_point("C", "1", "1").unwrap();
    let mut canvas = RecordingCanvas::new();

    let tour = session.calculate_path(&mut canvas).unwrap();

    assert_eq!(tour.order(), vec![0, 1, 2]);
    assert_eq!(session.log(), &["Path: A -> B -> C"]);

    let (points, closed) = canvas.polylines().next().unwrap();
    assert!(closed);
    assert_eq!(points, &[DVec2::new(0.0, 0.0), DVec2::new(5.0, 0.0), DVec2::new(5.0, 5.0)]);
}

#[test]
fn path_fills_the_distance_table() {
    let mut session = Session::default();
    session.add_point("A", "0", "0").unwrap();
    session.add_point("B", "3", "4").unwrap();

    session.calculate_path(&mut RecordingCanvas::new()).unwrap();

    assert_eq!(session.store().distances().get("A", "B"), Some(5.0));
}

#[test]
fn optimal_path_uncrosses_the_loop() {
    let mut session = Session::default();
    for (name, x, y) in [("A", "0", "0"), ("C", "1", "1"), ("B", "1", "0"), ("D", "0", "1")] {
        session.add_point(name, x, y).unwrap();
    }
    let mut canvas = RecordingCanvas::new();

    let tour = session.calculate_optimal_path("A", &mut canvas).unwrap();

    assert_eq!(tour.cost(), 4.0);
    assert_eq!(tour.order()[0], 0);
    assert_eq!(session.log().len(), 2);
    assert!(session.log()[0] == "Path: A -> B -> C -> D" || session.log()[0] == "Path: A -> D -> C -> B");
    assert_eq!(session.log()[1], "Total cost: 4");
    assert_eq!(canvas.polylines().count(), 1);
}

#[test]
fn optimal_path_needs_a_known_start() {
    let mut session = Session::default();
    session.add_point("A", "0", "0").unwrap();
    session.add_point("B", "1", "0").unwrap();

    let err = session.calculate_optimal_path("Z", &mut RecordingCanvas::new()).unwrap_err();

    assert_eq!(err, SessionError::UnknownCity("Z".to_string()));
    assert_eq!(err.to_string(), "The city Z is not in the list.");
}

#[test]
fn unknown_start_leaves_distances_alone() {
    let mut session = Session::default();
    session.add_point("A", "0", "0").unwrap();
    session.add_point("B", "3", "4").unwrap();
    let mut canvas = RecordingCanvas::new();

    session.calculate_optimal_path("Z", &mut canvas).unwrap_err();

    assert!(session.store().distances().is_empty());
    assert!(canvas.commands.is_empty());
    assert_eq!(session.log(), &["Added city: A (0, 0)", "Added city: B (3, 4)"]);
}

#[test]
fn optimal_path_needs_two_cities() {
    let mut session = Session::default();
    session.add_point("A", "0", "0").unwrap();

    let err = session.calculate_optimal_path("A", &mut RecordingCanvas::new()).unwrap_err();
    assert_eq!(err, SessionError::InsufficientCities);
}

#[test]
fn whitespace_name_is_a_filled_field() {
    let mut session = Session::default();

    session.add_point("  ", "1", "1").unwrap();
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.log(), &["Added city:    (1, 1)"]);
}

#[test]
fn svg_canvas_receives_the_path() {
    let mut session = Session::new(RenderConfig::default());
    session.add_point("A", "0", "0").unwrap();
    session.add_point("B", "10", "10").unwrap();
    let mut canvas = SvgCanvas::new(session.config().width, session.config().height);

    session.calculate_path(&mut canvas).unwrap();

    let svg = canvas.to_svg();
    assert!(svg.contains(r#"<polygon points="0,0 50,50" fill="none" stroke="red" stroke-width="1"/>"#));
    assert!(svg.contains(">A</text>"));
}
