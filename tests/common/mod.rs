#![allow(dead_code)]

mod system_fonts;

pub use system_fonts::find_system_font;

use std::process::{Command, Output};

/// Runs the punnett-icon binary with explicit font and output paths.
pub fn run_punnett_icon(font: &std::path::Path, output: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_punnett-icon"))
        .arg("--cell-font")
        .arg(font)
        .arg("--header-font")
        .arg(font)
        .arg("-o")
        .arg(output)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to run punnett-icon command")
}

pub fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("punnett-icon command failed");
    }
}
