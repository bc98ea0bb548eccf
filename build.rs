use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward KEY=VALUE pairs from .env (if present) as compile-time env vars
    // so config.rs can pick them up with option_env!.
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using default configuration values.");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
