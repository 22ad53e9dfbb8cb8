#![no_main]

use libfuzzer_sys::fuzz_target;
use termweb_html::render;

fuzz_target!(|data: &[u8]| {
    let output = render(data);

    // Post-conditions that must always hold:
    let text = std::str::from_utf8(&output).expect("output is not valid UTF-8");
    assert!(!text.contains("<script"), "unescaped script tag in output");
    assert_eq!(render(data), output, "render is not deterministic");
});
