use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

/// Regenerate assets/tailwind.css from the Tailwind input when the CLI is
/// available. The checked-in stylesheet stays in place otherwise, so a plain
/// `cargo build` works without a Node toolchain.
fn generate_tailwind() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!(
        "cargo:rerun-if-changed={}",
        Path::new(manifest_dir)
            .join("../standard-ui/src")
            .canonicalize()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "../standard-ui/src".to_string())
    );

    // Use node_modules/.bin/tailwindcss directly - more reliable than npx in CI
    let local_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    let tailwind_bin = if local_bin.exists() {
        local_bin
    } else {
        Path::new("tailwindcss").to_path_buf()
    };

    let output = Command::new(&tailwind_bin)
        .args([
            "-i",
            tailwind_input.to_str().unwrap(),
            "-o",
            tailwind_output.to_str().unwrap(),
        ])
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {
            println!("cargo:warning=Tailwind CSS generated successfully");
        }
        Ok(output) => {
            println!("cargo:warning=Tailwind CSS generation failed, keeping the checked-in stylesheet");
            println!("cargo:warning=STDERR: {}", String::from_utf8_lossy(&output.stderr));
        }
        Err(_) => {
            println!("cargo:warning=tailwindcss not found, keeping the checked-in assets/tailwind.css");
        }
    }
}
