//! Word wrapping for mono fonts.
//!
//! All fonts used on the pages are monospaced, so line width is measured in
//! characters. Words longer than a line are split at character boundaries.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::Vec;

use crate::styles::CENTERED;

/// Greedily wrap `text` into at most `N` lines of at most `max_chars` characters.
///
/// Lines break at whitespace, which is trimmed at line ends. Text that does not
/// fit in `N` lines is dropped.
pub fn wrap_lines<const N: usize>(
    text: &str,
    max_chars: usize,
) -> Vec<&str, N> {
    let mut lines = Vec::new();
    if max_chars == 0 {
        return lines;
    }

    // Byte range of the line being built.
    let mut current: Option<(usize, usize)> = None;

    for (start, word) in words(text) {
        let mut start = start;
        let mut word = word;
        loop {
            let word_chars = word.chars().count();

            if let Some((line_start, line_end)) = current {
                let extended = &text[line_start..start + word.len()];
                if extended.chars().count() <= max_chars {
                    current = Some((line_start, start + word.len()));
                    break;
                }
                if lines.push(&text[line_start..line_end]).is_err() {
                    return lines;
                }
                current = None;
            }

            if word_chars <= max_chars {
                current = Some((start, start + word.len()));
                break;
            }

            // Split an over-long word.
            let split = word.char_indices().nth(max_chars).map_or(word.len(), |(i, _)| i);
            if lines.push(&word[..split]).is_err() {
                return lines;
            }
            start += split;
            word = &word[split..];
        }
    }

    if let Some((line_start, line_end)) = current {
        lines.push(&text[line_start..line_end]).ok();
    }
    lines
}

/// Words of `text` with their byte offsets.
fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_whitespace().map(move |word| (word.as_ptr() as usize - text.as_ptr() as usize, word))
}

/// Draw wrapped text, each line centered on `center_x`. Returns the number of lines drawn.
///
/// `top_baseline` is the baseline of the first line.
pub fn draw_wrapped<D, const N: usize>(
    target: &mut D,
    text: &str,
    center_x: i32,
    top_baseline: i32,
    line_height: i32,
    max_chars: usize,
    style: MonoTextStyle<'static, Rgb565>,
) -> usize
where
    D: DrawTarget<Color = Rgb565>,
{
    let lines: Vec<&str, N> = wrap_lines(text, max_chars);
    for (i, line) in lines.iter().enumerate() {
        let y = top_baseline + i as i32 * line_height;
        Text::with_text_style(line, Point::new(center_x, y), style, CENTERED)
            .draw(target)
            .ok();
    }
    lines.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(
        text: &str,
        max: usize,
    ) -> std::vec::Vec<&str> {
        wrap_lines::<8>(text, max).iter().copied().collect()
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap("Nope.", 20), vec!["Nope."]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap("If there's any doubt, there's no doubt.", 20),
            vec!["If there's any", "doubt, there's no", "doubt."]
        );
    }

    #[test]
    fn test_wrap_trims_line_ends() {
        assert_eq!(wrap("  Why   not? ", 20), vec!["Why   not?"]);
        assert_eq!(wrap("   ", 20), std::vec::Vec::<&str>::new());
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij kl", 4), vec!["abcd", "efgh", "ij", "kl"]);
    }

    #[test]
    fn test_wrap_drops_overflow_lines() {
        let lines = wrap_lines::<2>("one two three four", 5);
        assert_eq!(lines.as_slice(), &["one", "two"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert!(wrap("anything", 0).is_empty());
    }

    #[test]
    fn test_wrap_multibyte_chars() {
        assert_eq!(wrap("éé éé", 3), vec!["éé", "éé"]);
    }
}
