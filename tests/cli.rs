mod common;

use common::synthetic_image::step_edge;
use edge_map::image::io::{encode, load_grayscale, PixelFormat};
use edge_map::{detect_edges, Operator, OutputPolicy};
use std::path::PathBuf;
use std::process::{Command, Output};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("edge_map_cli_tests")
        .join(format!("{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn edge_map(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_edge_map"))
        .args(args)
        .output()
        .expect("failed to spawn edge_map")
}

#[test]
fn writes_edge_map_and_exits_zero() {
    let dir = scratch_dir("ok");
    let input = dir.join("step.png");
    let output = dir.join("edges.png");
    let src = step_edge(12, 8, 6, 0, 90);
    encode(&src, PixelFormat::Grayscale, &input).unwrap();

    let out = edge_map(&[
        input.to_str().unwrap(),
        "prewitt",
        "normalize",
        output.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let expected =
        detect_edges(&src, Operator::Prewitt, OutputPolicy::normalize_to_max()).unwrap();
    assert_eq!(load_grayscale(&output).unwrap(), expected);
}

#[test]
fn unknown_operator_fails_with_reason() {
    let dir = scratch_dir("bad_op");
    let input = dir.join("in.png");
    encode(&step_edge(4, 4, 2, 0, 50), PixelFormat::Grayscale, &input).unwrap();

    let out = edge_map(&[input.to_str().unwrap(), "canny", "clamp", "out.png"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown operator 'canny'"));
}

#[test]
fn missing_input_fails_without_writing_output() {
    let dir = scratch_dir("missing");
    let output = dir.join("edges.png");

    let out = edge_map(&[
        dir.join("absent.png").to_str().unwrap(),
        "sobel",
        "clamp",
        output.to_str().unwrap(),
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("absent.png"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn wrong_argument_count_prints_usage() {
    let out = edge_map(&["only-one-arg"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: edge_map"));
}
