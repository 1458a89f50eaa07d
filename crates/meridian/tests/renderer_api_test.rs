//! Integration tests for the DiagramRenderer API
//!
//! These tests render through the deterministic metrics table so the
//! emitted markup is reproducible regardless of the host's font stack.

use meridian::{
    DiagramRenderer,
    config::AppConfig,
    diagram::{Caption, Diagram, Direction, LabeledPoint, Orientation, Plane, PlanePoint, Scale, Spectrum, TicMark},
    measure::FixedMetrics,
};

fn deterministic_renderer() -> DiagramRenderer {
    DiagramRenderer::with_measurer(AppConfig::default(), Box::new(FixedMetrics::default()))
}

fn bare_spectrum() -> Spectrum {
    Spectrum {
        id: String::from("space"),
        width: 900.0,
        height: 150.0,
        margin_x: 40.0,
        margin_y: 10.0,
        font_size: 16.0,
        orientation: Orientation::Horizontal,
        persons: Vec::new(),
        policies: Vec::new(),
        scale: None,
        caption: None,
    }
}

fn person(position: f32, label: &str) -> LabeledPoint {
    LabeledPoint {
        position,
        label: String::from(label),
        markup: false,
    }
}

#[test]
fn renders_complete_svg_document() {
    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&bare_spectrum()).unwrap();
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("viewBox=\"0 0 900 150\""));
}

#[test]
fn empty_spectrum_is_a_single_axis_line() {
    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&bare_spectrum()).unwrap();

    assert_eq!(svg.matches("<line").count(), 1, "exactly one axis line");
    assert!(!svg.contains("<path"), "no arrows without points");
    assert!(!svg.contains("<text"), "no labels without points");
    assert!(!svg.contains("foreignObject"));
    assert!(!svg.contains("<marker"));
}

#[test]
fn person_arrow_tip_lands_on_the_axis() {
    // width=900, margin_x=40: position 0.5 maps to 40 + 0.5*(900-80) = 450.
    // The axis sits on the canvas mid-line, y = 75.
    let mut spectrum = bare_spectrum();
    spectrum.persons.push(person(0.5, "Median voter"));

    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&spectrum).unwrap();
    assert!(
        svg.contains("L 450 75"),
        "arrow should end at (450, 75), got:\n{svg}"
    );
    assert!(svg.contains("Median voter"));
}

#[test]
fn extreme_positions_map_to_axis_ends() {
    let mut spectrum = bare_spectrum();
    spectrum.persons.push(person(0.0, "A"));
    spectrum.persons.push(person(1.0, "B"));

    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&spectrum).unwrap();
    assert!(svg.contains("L 40 75"), "position 0 maps to the axis start");
    assert!(svg.contains("L 860 75"), "position 1 maps to the axis end");
}

#[test]
fn output_is_deterministic() {
    let mut spectrum = bare_spectrum();
    spectrum.persons.push(person(0.25, "Alice"));
    spectrum.policies.push(person(0.75, "Reform"));
    spectrum.caption = Some(Caption {
        label: String::from("Ideology"),
        markup: false,
        direction: Some(Direction::Right),
    });

    let renderer = deterministic_renderer();
    let first = renderer.render_spectrum(&spectrum).unwrap();
    let second = renderer.render_spectrum(&spectrum).unwrap();
    assert_eq!(first, second);
}

#[test]
fn coincident_person_and_policy_render_independently() {
    let mut spectrum = bare_spectrum();
    spectrum.persons.push(person(0.4, "Alice"));
    spectrum.policies.push(person(0.4, "Status quo"));

    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&spectrum).unwrap();
    assert!(svg.contains("Alice"));
    assert!(svg.contains("Status quo"));
    // One arrow per label (shaft + head each), even at the same position
    assert_eq!(svg.matches("<path").count(), 4);
}

#[test]
fn vertical_spectrum_is_rotated_analogue() {
    let mut spectrum = bare_spectrum();
    spectrum.width = 150.0;
    spectrum.height = 900.0;
    spectrum.margin_x = 10.0;
    spectrum.margin_y = 40.0;
    spectrum.orientation = Orientation::Vertical;
    spectrum.persons.push(person(0.5, "MV"));

    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&spectrum).unwrap();
    // Swapped coordinates of the horizontal case: arrow ends at (75, 450)
    assert!(
        svg.contains("L 75 450"),
        "arrow should end at (75, 450), got:\n{svg}"
    );
}

#[test]
fn caption_with_direction_emits_matching_marker_definition() {
    let mut spectrum = bare_spectrum();
    spectrum.caption = Some(Caption {
        label: String::from("Ideology"),
        markup: false,
        direction: Some(Direction::Right),
    });

    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&spectrum).unwrap();
    assert!(svg.contains("<marker"));
    assert!(svg.contains("id=\"arrow-space\""));
    assert!(svg.contains("marker-end=\"url(#arrow-space)\""));
}

#[test]
fn caption_without_direction_emits_no_marker_definition() {
    let mut spectrum = bare_spectrum();
    spectrum.caption = Some(Caption {
        label: String::from("Ideology"),
        markup: false,
        direction: None,
    });

    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&spectrum).unwrap();
    assert!(svg.contains("Ideology"));
    assert!(!svg.contains("<marker"));
    assert!(!svg.contains("marker-end"));
}

#[test]
fn markup_label_is_embedded_in_foreign_object() {
    let mut spectrum = bare_spectrum();
    spectrum.persons.push(LabeledPoint {
        position: 0.5,
        label: String::from("<span class=\"katex\">u(x)</span>"),
        markup: true,
    });

    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&spectrum).unwrap();
    assert!(svg.contains("<foreignObject"));
    assert!(svg.contains("<span class=\"katex\">u(x)</span>"));
    assert!(!svg.contains("<text"), "markup labels bypass plain text");
}

#[test]
fn scale_tics_are_drawn_with_labels() {
    let mut spectrum = bare_spectrum();
    spectrum.scale = Some(Scale {
        tics: vec![
            TicMark {
                position: 0.0,
                label: Some(String::from("Left")),
            },
            TicMark {
                position: 0.5,
                label: None,
            },
            TicMark {
                position: 1.0,
                label: Some(String::from("Right")),
            },
        ],
        markup: false,
    });

    let renderer = deterministic_renderer();
    let svg = renderer.render_spectrum(&spectrum).unwrap();
    // Axis plus three tic lines
    assert_eq!(svg.matches("<line").count(), 4);
    assert!(svg.contains("Left"));
    assert!(svg.contains("Right"));
}

#[test]
fn plane_point_with_guides() {
    let plane = Plane {
        id: String::from("plane"),
        width: 600.0,
        height: 600.0,
        margin_x: 40.0,
        margin_y: 40.0,
        font_size: 16.0,
        points: vec![PlanePoint {
            x: 0.75,
            y: 0.5,
            label: String::from("Ideal point"),
            markup: false,
            guides: true,
        }],
        horizontal_scale: None,
        vertical_scale: None,
        horizontal_label: None,
        vertical_label: None,
    };

    let renderer = deterministic_renderer();
    let svg = renderer.render_plane(&plane).unwrap();

    // Two crossing axes
    assert_eq!(svg.matches("<line").count(), 2);
    // x = 40 + 0.75*520 = 430; y grows upward from 560, so 0.5 -> 300
    assert!(svg.contains("cx=\"430\""), "dot x, got:\n{svg}");
    assert!(svg.contains("cy=\"300\""), "dot y, got:\n{svg}");
    assert_eq!(svg.matches("stroke-dasharray").count(), 2);
    assert!(svg.contains("Ideal point"));
}

#[test]
fn plane_axis_captions_share_one_marker_definition() {
    let plane = Plane {
        id: String::from("plane"),
        width: 600.0,
        height: 600.0,
        margin_x: 60.0,
        margin_y: 60.0,
        font_size: 16.0,
        points: Vec::new(),
        horizontal_scale: None,
        vertical_scale: None,
        horizontal_label: Some(Caption {
            label: String::from("Economic"),
            markup: false,
            direction: Some(Direction::Right),
        }),
        vertical_label: Some(Caption {
            label: String::from("Social"),
            markup: false,
            direction: Some(Direction::Up),
        }),
    };

    let renderer = deterministic_renderer();
    let svg = renderer.render_plane(&plane).unwrap();
    assert_eq!(svg.matches("<marker").count(), 1);
    assert_eq!(svg.matches("marker-end=\"url(#arrow-plane)\"").count(), 2);
}

#[test]
fn render_dispatches_on_diagram_kind() {
    let renderer = deterministic_renderer();
    let svg = renderer
        .render(&Diagram::Spectrum(bare_spectrum()))
        .unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn renderer_is_reusable_across_diagrams() {
    let renderer = deterministic_renderer();

    let mut first = bare_spectrum();
    first.persons.push(person(0.2, "Alice"));
    let mut second = bare_spectrum();
    second.id = String::from("other");
    second.policies.push(person(0.8, "Reform"));

    let svg1 = renderer.render_spectrum(&first).unwrap();
    let svg2 = renderer.render_spectrum(&second).unwrap();
    assert!(svg1.contains("Alice"));
    assert!(svg2.contains("Reform"));
}
