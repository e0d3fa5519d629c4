use super::*;

#[test]
fn parses_well_formed_lines_and_drops_the_rest() {
    let doc = "[01:02.50]Hello\n[bad]World\n[00:00.000]\n";
    let lines = parse(doc);
    assert_eq!(
        lines,
        vec![LyricLine {
            time: 62.5,
            text: "Hello".to_string()
        }]
    );
}

#[test]
fn two_digit_fraction_is_centiseconds_three_is_milliseconds() {
    let lines = parse("[00:01.50]a\n[00:01.500]b\n[00:01.05]c\n[00:01.005]d\n");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].time, 1.5);
    assert_eq!(lines[1].time, 1.5);
    assert_eq!(lines[2].time, 1.05);
    assert_eq!(lines[3].time, 1.005);
}

#[test]
fn time_is_minutes_seconds_and_fraction() {
    let lines = parse("[03:21.04]x");
    assert_eq!(lines[0].time, 3.0 * 60.0 + 21.0 + 0.04);
}

#[test]
fn metadata_and_malformed_stamps_are_dropped() {
    let doc = "\
[ar:Some Artist]
[ti:Some Title]
[0:01.00]minutes need two digits
[00:1.00]seconds too
[00:01.1]one fraction digit
[00:01.1234]four fraction digits
[00:01]no fraction at all
 [00:01.00]not at line start
plain text
";
    assert!(parse(doc).is_empty());
}

#[test]
fn text_is_trimmed_and_blank_cues_are_dropped() {
    let lines = parse("[00:01.00]   spaced out  \n[00:02.00]\n[00:03.00]   \n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "spaced out");
}

#[test]
fn multi_tag_lines_emit_a_single_entry_for_the_first_tag() {
    // A common LRC convention for repeated lines; only the first tag is
    // honored and the rest stays in the text.
    let lines = parse("[00:01.00][00:05.00]La la\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].time, 1.0);
    assert_eq!(lines[0].text, "[00:05.00]La la");
}

#[test]
fn output_preserves_input_order_without_sorting() {
    let lines = parse("[00:30.00]late\n[00:10.00]early\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "late");
    assert_eq!(lines[1].text, "early");
}

#[test]
fn output_is_never_longer_than_the_input() {
    let doc = "[00:01.00]a\n[00:02.00]b\nnoise\n";
    assert!(parse(doc).len() <= doc.lines().count());
}

#[test]
fn empty_and_garbage_documents_yield_empty_output() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n\n").is_empty());
    assert!(parse("complete [garbage] here").is_empty());
}

#[test]
fn handles_documents_without_trailing_newline() {
    let lines = parse("[00:01.00]only line");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "only line");
}

#[test]
fn active_index_tracks_the_playback_position() {
    let lines = parse("[00:10.00]one\n[00:20.00]two\n[00:30.00]three\n");

    assert_eq!(active_index(&lines, 0.0), None);
    assert_eq!(active_index(&lines, 9.99), None);
    assert_eq!(active_index(&lines, 10.0), Some(0));
    assert_eq!(active_index(&lines, 19.0), Some(0));
    assert_eq!(active_index(&lines, 20.0), Some(1));
    assert_eq!(active_index(&lines, 25.0), Some(1));
    assert_eq!(active_index(&lines, 31.0), Some(2));
    assert_eq!(active_index(&lines, 1000.0), Some(2));
}

#[test]
fn active_index_on_empty_lines_is_none() {
    assert_eq!(active_index(&[], 12.0), None);
}
