#![no_main]

use libfuzzer_sys::fuzz_target;
use termweb_core::{Parser, Screen};

fuzz_target!(|data: &[u8]| {
    let mut screen = Screen::new();
    Parser::new().parse(data, &mut screen);

    // Post-conditions that must always hold:
    let mut again = Screen::new();
    Parser::new().parse(data, &mut again);
    assert_eq!(screen.lines(), again.lines(), "parsing is not deterministic");
    assert_eq!((screen.x(), screen.y()), (again.x(), again.y()));
});
