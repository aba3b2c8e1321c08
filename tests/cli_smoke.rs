mod support;

use std::path::PathBuf;
use std::process::Command;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_textgif")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "textgif.exe"
            } else {
                "textgif"
            });
            p
        })
}

#[test]
fn cli_writes_gif() {
    if support::font_or_skip().is_none() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("nested").join("out.gif");
    let out_arg = out_path.to_string_lossy().to_string();

    let output = Command::new(exe())
        .args(["Hi", "--frames", "3", "--depth", "not-a-number", "-o"])
        .arg(out_arg.as_str())
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Generating GIF..."));
    assert!(stderr.contains(" Depth:    16"));
    assert!(stderr.contains("Done!"));

    let gif = support::decode_gif(&std::fs::read(&out_path).unwrap());
    assert_eq!(gif.frames.len(), 3);
    assert_eq!(gif.loop_count, Some(0));
}

#[test]
fn cli_dump_params_prints_one_json_line_per_frame() {
    if support::font_or_skip().is_none() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("params.gif");

    let output = Command::new(exe())
        .args(["ab", "-f", "5", "-d", "0", "--dump-params", "-o"])
        .arg(&out_path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0]["index"], 0);
    assert_eq!(lines[4]["t"], 1.0);
    assert_eq!(lines[2]["cycle"], 1.0);
}

#[test]
fn cli_rejects_single_frame() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("one.gif");

    let output = Command::new(exe())
        .args(["Hi", "-f", "1", "-o"])
        .arg(&out_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("frame count must be >= 2"));
    assert!(!out_path.exists());
}

#[test]
fn cli_tolerates_unknown_and_dangling_flags() {
    if support::font_or_skip().is_none() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("lenient.gif");

    let output = Command::new(exe())
        .args(["Hi", "--bogus", "--FRAMES", "2", "-D", "1", "-O"])
        .arg(&out_path)
        .arg("--depth")
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(" Frames:   2"));
    assert!(stderr.contains(" Depth:    1"));
    assert!(stderr.contains("--bogus"));

    let gif = support::decode_gif(&std::fs::read(&out_path).unwrap());
    assert_eq!(gif.frames.len(), 2);
}
