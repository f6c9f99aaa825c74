use static_map_url::{MapBuilder, MapError, MapOptions, Marker};

fn required_options() -> MapOptions {
    MapOptions::new()
        .with("key", "K")
        .with("size", "200x200")
        .with("sensor", false)
}

#[test]
fn test_center_and_zoom_url_has_no_markers() {
    let options = required_options().with("center", "Paris").with("zoom", 10);
    let map: MapBuilder = MapBuilder::new(options).unwrap();

    let url = map.build_url().unwrap();

    assert!(url.starts_with("http://maps.google.com/staticmap?"));
    assert!(url.contains("sensor=false"));
    assert!(!url.contains("markers="));
}

#[test]
fn test_empty_map_cannot_be_built() {
    let map: MapBuilder = MapBuilder::new(required_options()).unwrap();
    let err = map.build_url().unwrap_err();

    assert!(matches!(err, MapError::BuildDataMissing));
    assert_eq!(
        err.to_string(),
        "need markers, or both center and zoom, to build a url"
    );
}

#[test]
fn test_single_marker_url() {
    let mut map = MapBuilder::new(required_options()).unwrap();
    map.add(Marker::at(48.85, 2.35).unwrap().with_color("red").unwrap());

    assert_eq!(
        map.build_url().unwrap(),
        "http://maps.google.com/staticmap?key=K&size=200x200&sensor=false&markers=color:red|48.85,2.35"
    );
}

#[test]
fn test_duplicate_marker_is_added_once() {
    let mut map = MapBuilder::new(required_options()).unwrap();
    let marker = Marker::at(1.0, 2.0).unwrap().with_label("A").unwrap();

    assert!(map.add(marker.clone()));
    assert!(!map.add(marker));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_markers_grouped_by_style() {
    let mut map = MapBuilder::new(required_options()).unwrap();
    map.add(Marker::at(1.0, 1.0).unwrap().with_color("red").unwrap());
    map.add(Marker::address("Oslo").unwrap().with_size("tiny").unwrap());
    map.add(Marker::at(2.0, 2.0).unwrap().with_color("red").unwrap());

    let groups = map.grouped_markers();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].signature, "color:red");
    assert_eq!(groups[0].markers.len(), 2);
    assert_eq!(groups[1].signature, "size:tiny");

    assert!(map
        .build_url()
        .unwrap()
        .ends_with("&markers=color:red|1,1|2,2&markers=size:tiny|Oslo"));
}

#[test]
fn test_build_twice_is_identical() {
    let mut map = MapBuilder::new(required_options().with("maptype", "roadmap")).unwrap();
    map.add(Marker::at(10.0, 20.0).unwrap());
    map.add(Marker::at(-10.5, 20.25).unwrap().with_color("0x00ff00").unwrap());

    assert_eq!(map.build_url().unwrap(), map.build_url().unwrap());
}

#[test]
fn test_missing_and_unknown_options() {
    let err = MapBuilder::<Marker>::new(MapOptions::new().with("zoom", 1)).unwrap_err();
    match err {
        MapError::OptionMissing { missing } => assert_eq!(missing, vec!["key", "size", "sensor"]),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = MapBuilder::<Marker>::new(required_options().with("scale", 2).with("style", "x"))
        .unwrap_err();
    match err {
        MapError::OptionNotExist { invalid } => assert_eq!(invalid, vec!["scale", "style"]),
        other => panic!("unexpected error: {other:?}"),
    }
}
