//! Simple CLI that reads raw HTML from stdin and writes normalized Markdown
//! to stdout. Demonstration harness; the library is the product surface.

use lettermark::transform_bytes;
use std::io::{self, Read};

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    println!("{}", transform_bytes(&html));
}
