/// A single display line of a lyrics document.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricLine {
    /// Offset from the start of the track, in seconds.
    pub time: f64,
    /// The lyric text, with the leading timestamp stripped and whitespace
    /// trimmed.
    pub text: String,
}

/// Parse an LRC document into display lines.
///
/// A physical line contributes exactly one `LyricLine` when it starts with a
/// `[MM:SS.ff]` or `[MM:SS.fff]` tag and carries non-empty text after the
/// tag; everything else (metadata tags like `[ar:...]`, malformed stamps,
/// blank cue points) is dropped silently. Output order equals input order;
/// no sort pass is performed, and malformed input can never make this fail.
pub fn parse(raw: &str) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = Vec::new();

    for line in raw.lines() {
        let Some((time, rest)) = split_timestamp(line) else {
            continue;
        };

        let text = rest.trim();
        if text.is_empty() {
            // Instrumental/blank cue points carry no displayable text.
            continue;
        }

        lines.push(LyricLine {
            time,
            text: text.to_string(),
        });
    }

    lines
}

/// Index of the line to display at `position` seconds: the last line whose
/// cue time is `<= position`, or `None` before the first cue.
///
/// Assumes `lines` is sorted by time (the usual case; `parse` preserves the
/// document order, so a well-formed LRC file is already sorted).
pub fn active_index(lines: &[LyricLine], position: f64) -> Option<usize> {
    lines.partition_point(|l| l.time <= position).checked_sub(1)
}

/// Match a `[MM:SS.ff]` / `[MM:SS.fff]` tag at the start of `line`.
///
/// Returns the decoded time and the remainder after the closing bracket.
/// A 2-digit fraction is centiseconds, a 3-digit one is milliseconds; both
/// denote the same precision tier, hence the different divisors. Only the
/// first tag is honored; any further tags on the line stay in the remainder.
fn split_timestamp(line: &str) -> Option<(f64, &str)> {
    let bytes = line.as_bytes();

    if bytes.first() != Some(&b'[') {
        return None;
    }
    let minutes = two_digits(bytes, 1)?;
    if bytes.get(3) != Some(&b':') {
        return None;
    }
    let seconds = two_digits(bytes, 4)?;
    if bytes.get(6) != Some(&b'.') {
        return None;
    }

    let mut i = 7;
    let mut frac = 0u32;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        frac = frac * 10 + u32::from(bytes[i] - b'0');
        i += 1;
    }
    let digits = i - 7;
    if !(2..=3).contains(&digits) || bytes.get(i) != Some(&b']') {
        return None;
    }

    let divisor = if digits == 2 { 100.0 } else { 1000.0 };
    let time = f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(frac) / divisor;

    // The tag is pure ASCII, so `i + 1` is a valid char boundary.
    Some((time, &line[i + 1..]))
}

/// Decode exactly two ASCII digits starting at `at`.
fn two_digits(bytes: &[u8], at: usize) -> Option<u32> {
    let pair = bytes.get(at..at + 2)?;
    if pair.iter().all(u8::is_ascii_digit) {
        Some(u32::from(pair[0] - b'0') * 10 + u32::from(pair[1] - b'0'))
    } else {
        None
    }
}
