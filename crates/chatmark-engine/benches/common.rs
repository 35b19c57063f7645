// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_log(size: usize) -> String {
    let base = "> **hey** <@123456789012345678>, did you see <#876543210987654321>?\n> ||spoiler|| :wave: 😀\nsure, *check* __this__ out: https://example.com/page?id=1\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n<t:1618953630:R> `inline` ~~gone~~ <:blob:123456789012345678>\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unclosed_delimiters(size: usize) -> String {
    "a * b _ c ~ d ` e || f ".repeat(size)
}
