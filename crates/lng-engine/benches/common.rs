// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_flat_resource(blocks: usize) -> String {
    let mut content = String::from("!!! === $ $ ;\n");
    for i in 0..blocks {
        content.push_str(&format!(
            "=== string_{i} ; translator note {i}\nPlain text for entry {i}.\nSecond line.\n"
        ));
    }
    content
}

/// Every block references the one before it once, so resolved text grows
/// linearly along the chain.
#[allow(dead_code)]
pub fn generate_chained_resource(blocks: usize) -> String {
    let mut content = String::from("!!! === $ $ ;\n=== link_0\nstart\n");
    for i in 1..blocks {
        content.push_str(&format!("=== link_{i}\n$link_{}$ +\n", i - 1));
    }
    content
}

/// Switches delimiters every `every` blocks.
#[allow(dead_code)]
pub fn generate_switching_resource(blocks: usize, every: usize) -> String {
    let tokens = ["=== $ $ ;", "*** { } %", "=== « » #"];
    let mut content = String::new();
    for i in 0..blocks {
        let set = (i / every.max(1)) % tokens.len();
        if i % every.max(1) == 0 {
            content.push_str(&format!("!!! {}\n", tokens[set]));
        }
        let prefix = &tokens[set][..3];
        content.push_str(&format!("{prefix} entry_{i}\nvalue {i}\n"));
    }
    content
}
