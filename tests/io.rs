mod common;

use common::synthetic_image::{checkerboard, step_edge};
use edge_map::image::io::{
    decode_packed_rgb, encode, load_grayscale, pack_rgb, EncodeError, PixelFormat,
};
use edge_map::{detect_edges, run_edge_map, EdgeParams, Error, Grid, Operator, OutputPolicy};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("edge_map_tests")
        .join(format!("{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn grayscale_png_survives_encode_and_decode() {
    let dir = scratch_dir("gray_roundtrip");
    let path = dir.join("nested").join("board.png");
    let src = checkerboard(20, 12, 3);

    encode(&src, PixelFormat::Grayscale, &path).unwrap();
    let back = load_grayscale(&path).unwrap();
    assert_eq!(back, src);
}

#[test]
fn grayscale_encode_clamps_out_of_range_cells() {
    let dir = scratch_dir("gray_clamp");
    let path = dir.join("clamped.png");
    let src = Grid::from_rows(&[[-20, 0, 300, 255]]).unwrap();

    encode(&src, PixelFormat::Grayscale, &path).unwrap();
    assert_eq!(load_grayscale(&path).unwrap().data, vec![0, 0, 255, 255]);
}

#[test]
fn packed_rgb_keeps_channels() {
    let dir = scratch_dir("packed");
    let path = dir.join("colors.png");
    let src = Grid::from_rows(&[
        [pack_rgb(255, 0, 0), pack_rgb(0, 255, 0)],
        [pack_rgb(0, 0, 255), pack_rgb(12, 34, 56)],
    ])
    .unwrap();

    encode(&src, PixelFormat::PackedRgb, &path).unwrap();
    assert_eq!(decode_packed_rgb(&path).unwrap(), src);
}

#[test]
fn file_to_file_run_matches_in_memory_detection() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch_dir("run");
    let input = dir.join("step.png");
    let output = dir.join("out").join("edges.png");
    let src = step_edge(16, 10, 7, 30, 200);
    encode(&src, PixelFormat::Grayscale, &input).unwrap();

    for op in Operator::ALL {
        for policy in [OutputPolicy::clamp(), OutputPolicy::normalize_to_max()] {
            let report = run_edge_map(&input, &output, EdgeParams::new(op, policy)).unwrap();
            let expected = detect_edges(&src, op, policy).unwrap();
            assert_eq!(report.edges, expected);
            assert_eq!(load_grayscale(&output).unwrap(), expected);

            let labels: Vec<_> = report.timings.stages.iter().map(|s| s.label.as_str()).collect();
            assert_eq!(labels, ["decode", "pad", "convolve", "normalize", "encode"]);
        }
    }
}

#[test]
fn undecodable_input_is_reported() {
    let dir = scratch_dir("garbage");
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("not_an_image.png");
    std::fs::write(&input, b"plain text, not a png").unwrap();

    let err = run_edge_map(&input, &dir.join("out.png"), EdgeParams::default()).unwrap_err();
    match err {
        Error::Decode(e) => assert_eq!(e.path, input),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn unwritable_output_is_an_encode_error() {
    let dir = scratch_dir("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let err = encode(&Grid::new(2, 2), PixelFormat::Grayscale, &blocker.join("out.png"))
        .unwrap_err();
    assert!(matches!(err, EncodeError::CreateDir { .. }), "{err}");
}
