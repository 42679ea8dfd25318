//! # TLV Scanner - Cursor-Based Tag Reader
//!
//! ## Purpose
//!
//! Stateless cursor over one nesting level of the EMVCo text TLV grammar:
//! `TAG(2 chars) LEN(2 decimal digits) VALUE(LEN chars)`. The scanner turns
//! a payload slice into an ordered sequence of [`TlvField`]s and is reused
//! unchanged for nested template values.
//!
//! ## Resynchronization Policy
//!
//! A position is unparseable when the two length characters are not both
//! decimal digits, or when fewer than `4 + length` characters remain. The
//! scanner then advances exactly one character and retries instead of
//! aborting: at the application layer the payload carries free text
//! (merchant names, order references) that can coincidentally contain digit
//! runs, and a stray byte must not hide later well-formed tags. Each step
//! advances the cursor by at least one character, so total work stays O(n)
//! over the input even under adversarial garbage.
//!
//! The scan terminates when fewer than 4 characters remain. All slicing is
//! char-boundary safe; a multibyte character inside a value can never panic
//! the scanner.

/// One `(tag, value)` pair yielded at a single nesting level.
///
/// Both fields borrow from the scanned input; the scanner allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvField<'a> {
    /// 2-character tag identifier.
    pub tag: &'a str,
    /// Exactly `length` characters of value, possibly itself a TLV stream.
    pub value: &'a str,
}

/// Lazy, restartable scanner over one TLV nesting level.
///
/// Pure function of the input slice: holds no state between calls, and two
/// scanners over the same input yield identical sequences.
#[derive(Debug, Clone)]
pub struct TlvScanner<'a> {
    rest: &'a str,
}

impl<'a> TlvScanner<'a> {
    /// Scan `input` from its first character.
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for TlvScanner<'a> {
    type Item = TlvField<'a>;

    fn next(&mut self) -> Option<TlvField<'a>> {
        loop {
            // Fewer than 4 characters left: no room for tag + length.
            let (tag, after_tag) = split_after_chars(self.rest, 2)?;
            let (length_digits, after_length) = split_after_chars(after_tag, 2)?;

            if let Some(length) = parse_length(length_digits) {
                if let Some((value, rest)) = split_after_chars(after_length, length) {
                    self.rest = rest;
                    return Some(TlvField { tag, value });
                }
            }

            // Unparseable position: resynchronize by advancing one char.
            let (_, rest) = split_after_chars(self.rest, 1)?;
            self.rest = rest;
        }
    }
}

/// Interpret two characters as a 2-digit decimal length (0-99).
fn parse_length(digits: &str) -> Option<usize> {
    let mut chars = digits.chars();
    let (hi, lo) = (chars.next()?, chars.next()?);
    if hi.is_ascii_digit() && lo.is_ascii_digit() {
        Some((hi as usize - '0' as usize) * 10 + (lo as usize - '0' as usize))
    } else {
        None
    }
}

/// Split `s` after `n` characters, or `None` if it has fewer than `n`.
fn split_after_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    let mut seen = 0;
    for (idx, _) in s.char_indices() {
        if seen == n {
            return Some(s.split_at(idx));
        }
        seen += 1;
    }
    if seen == n {
        Some((s, ""))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(String, String)> {
        TlvScanner::new(input)
            .map(|f| (f.tag.to_string(), f.value.to_string()))
            .collect()
    }

    #[test]
    fn scans_a_well_formed_stream() {
        assert_eq!(
            collect("000201010212"),
            vec![
                ("00".to_string(), "01".to_string()),
                ("01".to_string(), "12".to_string()),
            ]
        );
    }

    #[test]
    fn empty_and_short_inputs_yield_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("000").is_empty());
    }

    #[test]
    fn zero_length_value_is_allowed() {
        assert_eq!(collect("0100"), vec![("01".to_string(), String::new())]);
    }

    #[test]
    fn resynchronizes_past_a_stray_prefix_character() {
        // "x5" parses as a tag with length "40", which overruns the input;
        // one resync step later the real amount tag lines up.
        assert_eq!(
            collect("x5406100.00"),
            vec![("54".to_string(), "100.00".to_string())]
        );
    }

    #[test]
    fn non_digit_length_forces_resync() {
        assert_eq!(
            collect("59XX5802PH"),
            vec![("58".to_string(), "PH".to_string())]
        );
    }

    #[test]
    fn truncated_value_yields_nothing_and_terminates() {
        assert!(collect("5499ABC").is_empty());
    }

    #[test]
    fn multibyte_values_never_split_scalars() {
        assert_eq!(
            collect("5904café5802PH"),
            vec![
                ("59".to_string(), "café".to_string()),
                ("58".to_string(), "PH".to_string()),
            ]
        );
    }

    #[test]
    fn scanner_is_restartable() {
        let input = "000201010212";
        assert_eq!(collect(input), collect(input));
    }
}
