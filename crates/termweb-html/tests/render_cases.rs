//! End-to-end rendering scenarios.
//!
//! Each case feeds one complete byte stream through [`termweb_html::render`]
//! and checks the exact HTML fragment that comes out.

use termweb_html::render;

fn rendered(input: &[u8]) -> String {
    String::from_utf8(render(input)).expect("renderer must emit valid UTF-8")
}

#[track_caller]
fn check(input: &[u8], expected: &str) {
    assert_eq!(
        rendered(input),
        expected,
        "input: {:?}",
        String::from_utf8_lossy(input)
    );
}

#[test]
fn plain_text_round_trips() {
    check(b"", "");
    check(b"hello", "hello");
    // A trailing newline does not produce a trailing blank line.
    check(b"hello\n", "hello");
}

#[test]
fn colors_open_and_close_spans() {
    check(b"he\x1b[32mllo", "he<span class=\"term-fg32\">llo</span>");
    check(
        b"\x1b[32mhello\n\nfriend\x1b[0m",
        "<span class=\"term-fg32\">hello</span>\n&nbsp;\n<span class=\"term-fg32\">friend</span>",
    );
    // A reset with nothing open emits nothing.
    check(b"hello \x1b[0mfriend", "hello friend");
}

#[test]
fn bare_and_39_resets_close_colors() {
    check(
        b"\x1b[36mthis has a color\x1b[mthis is normal now\r\n",
        "<span class=\"term-fg36\">this has a color</span>this is normal now",
    );
    check(
        b"\x1b[36mthis has a color\x1b[39mthis is normal now\r\n",
        "<span class=\"term-fg36\">this has a color</span>this is normal now",
    );
}

#[test]
fn equivalent_sgr_runs_render_identically() {
    let expected = "<span class=\"term-fg32\">hi</span>";
    check(b"\x1b[32mhi", expected);
    check(b"\x1b[0;32mhi", expected);
    check(b"\x1b[m\x1b[32mhi", expected);
}

#[test]
fn backspace_and_carriage_return_overwrite() {
    check(b"hello\rb", "bello");
    check(b"hi\x08\x08\x08\x08\x08\x08\x08\x08bye", "bye");
    check("€€€€€€\u{8}\u{8}\u{8}aaa".as_bytes(), "€€€aaa");
    // Backspace moves over styled cells like any others.
    check(
        b"he\x1b[32m\x1b[33m\x08llo",
        "h<span class=\"term-fg33\">llo</span>",
    );
}

#[test]
fn cursor_motion_pads_with_unstyled_blanks() {
    check(b"this is\x1b[4Cpoop and stuff", "this is    poop and stuff");
    check(
        b"this is great \x1b[1Bhello",
        "this is great\n              hello",
    );
    check(b"this is good\x1b[4Dpoop and stuff", "this is poop and stuff");
    check(b"this is good\x1b[100Dpoop and stuff", "poop and stuff");
}

#[test]
fn cursor_weaves_between_lines() {
    check(b"1234\n56\x1b[1A78\x1b[B", "1278\n56");
    check(
        b"aaaa\nbbbb\ncccc\x1b[2A\x1b[1B\r1234\x1b[1B",
        "aaaa\n1234\ncccc",
    );
    check(b"meow\npurr\nnyan\x1bMrawr", "meow\npurrrawr\nnyan");
}

#[test]
fn goto_column_overwrites_in_place() {
    check(b"hello friend\x1b[Ggoodbye buddy!", "goodbye buddy!");
    check(
        b"\x1b[33mhello\x1b[0m\x1b[33m\x1b[44m\x1b[0Ggoodbye",
        "<span class=\"term-fg33 term-bg44\">goodbye</span>",
    );
    check(
        "  \x1b[90m\u{2024}\x1b[0m\x1b[90m\u{2024}\x1b[0m\x1b[0G\x1b[90m\u{2024}\x1b[0m\x1b[90m\u{2024}\x1b[0m"
            .as_bytes(),
        "<span class=\"term-fgi90\">\u{2024}\u{2024}\u{2024}\u{2024}</span>",
    );
}

#[test]
fn line_clearing() {
    check(b"hello\x1b[1Kfriend!", "     friend!");
    check(b"hello friend\x1b[1K!", "            !");
    check(b"hello friend\x1b[2K!", "            !");
    check(
        b"remote: Compressing objects:   0% (1/3342)\x1b[K\rremote: Compressing objects:   1% (34/3342)",
        "remote: Compressing objects:   1% (34&#47;3342)",
    );
}

#[test]
fn display_clearing() {
    check(b"foo\nbar\x1b[A\x1b[Jbaz", "foobaz");
    check(b"foobar\x1b[0J", "foobar");
    check(b"\x1b[1Jfoobar", "foobar");
    check(
        b"one\ntwo\nthree\n\n\x1b[2Jhey presto",
        "hey presto",
    );
    check(
        b"one\ntwo\nthree\n\n\x1b[3Jhey presto",
        "hey presto",
    );
}

#[test]
fn span_collapsing_across_repeated_sgr() {
    check(
        "\x1b[90m\u{2024}\x1b[90m\u{2024}\x1b[90m\u{2024}\x1b[90m\u{2024}\n\x1b[90m\u{2024}\x1b[90m\u{2024}\x1b[90m\u{2024}\x1b[90m\u{2024}"
            .as_bytes(),
        "<span class=\"term-fgi90\">\u{2024}\u{2024}\u{2024}\u{2024}</span>\n<span class=\"term-fgi90\">\u{2024}\u{2024}\u{2024}\u{2024}</span>",
    );
}

#[test]
fn html_gets_escaped() {
    check(
        b"hello <strong>friend</strong>",
        "hello &lt;strong&gt;friend&lt;&#47;strong&gt;",
    );
    check(b"hello \x1b[\"hellomfriend", "hello [&quot;hellomfriend");
}

#[test]
fn background_colors_and_multiple_attributes() {
    check(
        b"\x1b[30;42m\x1b[2KOK (244 tests, 558 assertions)",
        "<span class=\"term-fg30 term-bg42\">OK (244 tests, 558 assertions)</span>",
    );
    check(
        b"Some plain text\x1b[0;30;42m yay a green background \x1b[0m\x1b[0;33;49mnow this has no background but is yellow \x1b[0m",
        "Some plain text<span class=\"term-fg30 term-bg42\"> yay a green background </span><span class=\"term-fg33\">now this has no background but is yellow </span>",
    );
    check(
        b"\x1b[0;10;4m\x1b[1m\x1b[34mgood news\x1b[0;10m\n\neveryone",
        "<span class=\"term-fg34 term-fg1 term-fg4\">good news</span>\n&nbsp;\neveryone",
    );
}

#[test]
fn xterm_256_colors() {
    check(
        b"\x1b[38;5;169;48;5;50mhello\x1b[0m \x1b[38;5;179mgoodbye",
        "<span class=\"term-fgx169 term-bgx50\">hello</span> <span class=\"term-fgx179\">goodbye</span>",
    );
    check(
        b"\x1b[38;5;228;5;1mblinking and bold\x1b",
        "<span class=\"term-fgx228 term-fg1 term-fg5\">blinking and bold</span>",
    );
}

#[test]
fn attribute_clears_split_spans() {
    check(b"\x1b[4mbegin\x1b[24m\r\nend", "<span class=\"term-fg4\">begin</span>\nend");
    check(b"\x1b[1mbegin\x1b[21m\r\nend", "<span class=\"term-fg1\">begin</span>\nend");
    check(b"\x1b[1mbegin\x1b[22m\r\nend", "<span class=\"term-fg1\">begin</span>\nend");
    check(b"\x1b[2mbegin\x1b[22m\r\nend", "<span class=\"term-fg2\">begin</span>\nend");
    check(b"\x1b[3mbegin\x1b[23m\r\nend", "<span class=\"term-fg3\">begin</span>\nend");
    check(b"\x1b[9mbegin\x1b[29m\r\nend", "<span class=\"term-fg9\">begin</span>\nend");
}

#[test]
fn broken_escapes_strip_the_introducer() {
    check(
        b"hi amazing \x1b[12 nom nom nom friends",
        "hi amazing [12 nom nom nom friends",
    );
}

#[test]
fn private_modes_and_unknown_sequences_are_ignored() {
    check(
        b"\x1b[?25ldoing a thing without a cursor\x1b[?25h",
        "doing a thing without a cursor",
    );
    check(b"abc\x1b]9999\x07ghi", "abcghi");
}

#[test]
fn empty_lines_become_non_breaking_spaces() {
    check(b"hello\n\nfriend", "hello\n&nbsp;\nfriend");
}

#[test]
fn inline_images_sit_on_their_own_line() {
    check(
        b"hi\x1b]1337;File=name=MS5naWY=;inline=1:AA==\x07hello",
        "hi\n<img alt=\"1.gif\" src=\"data:image/gif;base64,AA==\">\nhello",
    );
    // Already at the start of a line: no extra break.
    check(
        b"\x1b]1337;File=name=MS5naWY=;inline=1:AA==\x07",
        "<img alt=\"1.gif\" src=\"data:image/gif;base64,AA==\">",
    );
    // Not marked inline: nothing at all.
    check(
        b"hi\x1b]1337;File=name=MS5naWY=;inline=0:AA==\x07hello",
        "hihello",
    );
}

#[test]
fn inline_image_alt_text_is_escaped() {
    // name = base64("<script>.pdf")
    check(
        b"hi\x1b]1337;File=name=PHNjcmlwdD4ucGRm;inline=1:AA==\x07hello",
        "hi\n<img alt=\"&lt;script&gt;.pdf\" src=\"data:application/pdf;base64,AA==\">\nhello",
    );
}

#[test]
fn external_images() {
    check(
        b"\x1b]1338;url=http://foo.com/foobar.gif;alt=foo bar\x07",
        "<img alt=\"foo bar\" src=\"http://foo.com/foobar.gif\">",
    );
    // Disallowed scheme: the line breaks happen, the element does not.
    check(
        b"before\x1b]1338;url=javascript:alert(1);alt=hello\x07after",
        "before\n&nbsp;\nafter",
    );
    check(
        b"\x1b]1338;url=\"https://example.com/a.gif&a=<b>&c='d'\";alt=foo&bar;width=\"<wat>\";height=2px\x07",
        "<img alt=\"foo&amp;bar\" src=\"https://example.com/a.gif&amp;a=%3Cb%3E&amp;c=%27d%27\" width=\"&lt;wat&gt;em\" height=\"2px\">",
    );
}

#[test]
fn links_render_inline_with_sanitized_targets() {
    check(
        b"a link to \x1b]1339;url=http://google.com;content=google\x07.",
        "a link to <a href=\"http://google.com\">google</a>.",
    );
    check(
        b"\x1b]1339;url=http://google.com\x07",
        "<a href=\"http://google.com\">http://google.com</a>",
    );
    check(
        b"\x1b]1339;url=javascript:alert(1);content=hello\x07",
        "<a href=\"#\">hello</a>",
    );
    check(
        b"\x1b]1339;url=artifact://hello.txt\x07\n",
        "<a href=\"artifact://hello.txt\">artifact://hello.txt</a>",
    );
    check(
        b"\x1b]1339;url=\"https://example.com/a.gif&a=<b>&c='d'\";content=<h1>hello</h1>\x07",
        "<a href=\"https://example.com/a.gif&amp;a=%3Cb%3E&amp;c=%27d%27\">&lt;h1&gt;hello&lt;/h1&gt;</a>",
    );
}

#[test]
fn apc_processing_instructions() {
    check(
        b"\x1b_bk;x=llamas\\;;y=alpacas\x07",
        "<?bk x=\"llamas;\" y=\"alpacas\"?>",
    );
    check(
        b"\x1b_bk;a='1 (\"one\")';b=\"2 ('two')\"\x07",
        "<?bk a=\"1 (&quot;one&quot;)\" b=\"2 (&#39;two&#39;)\"?>",
    );
}

#[test]
fn timestamps_annotate_lines() {
    check(b"\x1b_bk;t=123\x07hello world", "<?bk t=\"123\"?>hello world");
    check(b"hello \x1b_bk;t=123\x07world", "<?bk t=\"123\"?>hello world");
    check(
        b"hello\x1b_bk;t=123\x07 world\x1b_bk;t=456\x07!",
        "<?bk t=\"456\"?>hello world!",
    );
    check(
        b"hello\x1b_bk;t=123\x07 world\x1b_bk;t=234\x07!\nanother\x1b_bk;t=345\x07 line\x1b_bk;t=456\x07!",
        "<?bk t=\"234\"?>hello world!\n<?bk t=\"456\"?>another line!",
    );
}

#[test]
fn rendering_is_idempotent_on_plain_output() {
    let once = rendered(b"just some regular words\nand a second line");
    let twice = rendered(once.as_bytes());
    assert_eq!(once, twice);
}

#[test]
fn unterminated_sequences_are_dropped_at_end_of_input() {
    check(b"done\x1b[", "done");
    check(b"done\x1b]1337;File=name=MS5naWY=;inline=1:AA==", "done");
    check(b"done\x1b_bk;t=1", "done");
}
