use anim_utils::{
    KeepRatio, UnitConverter, UnitSize, Viewport, calculate_bound_size, camelize, decamelize,
    split_bracket, split_comma, split_space, string_to_rgba, throttle,
};

#[test]
fn test_transform_chain_to_pixels() {
    let converter = UnitConverter::new(Viewport::new(1000.0, 800.0));
    let size = UnitSize::from(400.0);

    let values: Vec<f64> = split_space("translate(50%, 10vh) rotate(10deg)")
        .iter()
        .filter_map(|part| split_bracket(part))
        .filter(|bracket| bracket.prefix == "translate")
        .flat_map(|bracket| split_comma(&bracket.value))
        .map(|value| converter.convert(&value, &size))
        .collect();

    assert_eq!(values, vec![200.0, 80.0]);
}

#[test]
fn test_gradient_stop_colors() {
    let bracket = split_bracket("linear-gradient(#000, rgba(255, 0, 0, 0.5))").unwrap();
    let stops: Vec<[f64; 4]> = split_comma(&bracket.value)
        .iter()
        .map(|stop| string_to_rgba(stop).unwrap().to_array())
        .collect();

    assert_eq!(stops, vec![[0.0, 0.0, 0.0, 1.0], [255.0, 0.0, 0.0, 0.5]]);
}

#[test]
fn test_property_names_round_trip() {
    for name in ["transform-origin", "border-top-left-radius"] {
        assert_eq!(decamelize(&camelize(name), "-"), name);
    }
}

#[test]
fn test_bound_size_from_bool() {
    let size = calculate_bound_size(
        [100.0, 100.0],
        [0.0, 0.0],
        [100.0, 50.0],
        KeepRatio::from(true),
    );
    assert_eq!(size.map(|value| throttle(value, 1.0)), [50.0, 50.0]);
}

#[test]
fn test_hsla_stop_snapshot() {
    let bracket = split_bracket("radial-gradient(hsla(150, 50%, 40%, 0.5), #fff)").unwrap();
    let first = split_comma(&bracket.value)
        .first()
        .map(|stop| string_to_rgba(stop).unwrap());

    insta::assert_debug_snapshot!(first, @r"
    Some(
        Rgba {
            r: 51.0,
            g: 153.0,
            b: 102.0,
            a: 0.5,
        },
    )
    ");
}
