//! Generate FORMULAS.md from the formula registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-formulas
//! ```
//!
//! The generated file is written to `calc_core/src/formulas/FORMULAS.md`,
//! relative to the workspace root.

use std::fs;
use std::path::Path;

use calc_core::formulas::generate_formulas_markdown;

fn main() {
    println!("Generating FORMULAS.md...");

    let markdown = generate_formulas_markdown();
    let output_path = Path::new("calc_core/src/formulas/FORMULAS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
