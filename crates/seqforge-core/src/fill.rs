use rand::Rng;

/// Which side of the target width the source string sits on.
///
/// Padding always goes on the opposite side: a left-aligned source is
/// padded on the right, a right-aligned source on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Pads `source` out to `target_len` characters.
///
/// Returns `source` unchanged when it already meets or exceeds the target
/// length; this routine never truncates. An empty pad alphabet falls back
/// to `"0"`. A single-character alphabet repeats deterministically; a
/// longer alphabet draws each fill position independently and uniformly
/// from `rng`, which is what lets one node type serve both zero-padded
/// sequence numbers and randomly salted suffixes.
pub fn fill<R: Rng + ?Sized>(
    source: &str,
    target_len: usize,
    align: Align,
    pad: &str,
    rng: &mut R,
) -> String {
    if target_len <= source.len() {
        return source.to_owned();
    }

    let pad = if pad.is_empty() { "0" } else { pad };
    let alphabet: Vec<char> = pad.chars().collect();
    let missing = target_len - source.len();

    let mut padding = String::with_capacity(missing);
    if alphabet.len() == 1 {
        for _ in 0..missing {
            padding.push(alphabet[0]);
        }
    } else {
        for _ in 0..missing {
            padding.push(alphabet[rng.random_range(0..alphabet.len())]);
        }
    }

    let mut out = String::with_capacity(target_len);
    match align {
        Align::Left => {
            out.push_str(source);
            out.push_str(&padding);
        }
        Align::Right => {
            out.push_str(&padding);
            out.push_str(source);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn source_at_or_over_target_is_returned_unchanged() {
        assert_eq!(fill("12345", 5, Align::Right, "0", &mut rng()), "12345");
        assert_eq!(fill("123456", 4, Align::Right, "0", &mut rng()), "123456");
    }

    #[test]
    fn right_aligned_source_pads_on_the_left() {
        assert_eq!(fill("42", 5, Align::Right, "0", &mut rng()), "00042");
    }

    #[test]
    fn left_aligned_source_pads_on_the_right() {
        assert_eq!(fill("42", 5, Align::Left, "#", &mut rng()), "42###");
    }

    #[test]
    fn empty_pad_alphabet_falls_back_to_zero() {
        assert_eq!(fill("7", 3, Align::Right, "", &mut rng()), "007");
    }

    #[test]
    fn multi_char_alphabet_draws_from_that_alphabet() {
        let out = fill("X", 9, Align::Left, crate::charset::DIGITS, &mut rng());
        assert_eq!(out.len(), 9);
        assert!(out.starts_with('X'));
        assert!(out[1..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn single_char_alphabet_never_consumes_randomness() {
        let mut a = rng();
        let mut b = rng();
        fill("1", 8, Align::Right, "0", &mut a);
        // Identical seeds must still agree after the deterministic fill.
        assert_eq!(
            fill("x", 4, Align::Left, crate::charset::HEX_UPPER, &mut a),
            fill("x", 4, Align::Left, crate::charset::HEX_UPPER, &mut b),
        );
    }

    #[test]
    fn zero_target_is_a_no_op() {
        assert_eq!(fill("", 0, Align::Left, "0", &mut rng()), "");
    }
}
