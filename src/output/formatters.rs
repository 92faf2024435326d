//! Formatting utilities for terminal output

use crate::core::Score;

/// Join scores as `"{exact}-{misplaced}"` separated by single spaces
///
/// # Examples
/// ```
/// use mastermind_scorer::core::Score;
/// use mastermind_scorer::output::render_line;
///
/// let line = render_line(&[Score::new(2, 1), Score::new(0, 1)]);
/// assert_eq!(line, "2-1 0-1");
/// ```
#[must_use]
pub fn render_line(scores: &[Score]) -> String {
    scores
        .iter()
        .map(Score::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a score as key pegs for a code of `len` symbols
///
/// Black peg (●) per exact match, white peg (○) per misplaced match, dot for the rest.
#[must_use]
pub fn score_to_pegs(score: Score, len: usize) -> String {
    let empty = len.saturating_sub(score.total());

    let mut result = String::with_capacity(len * 3);
    result.push_str(&"●".repeat(score.exact()));
    result.push_str(&"○".repeat(score.misplaced()));
    result.push_str(&"·".repeat(empty));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_line_joins_with_spaces() {
        assert_eq!(render_line(&[Score::new(2, 1), Score::ZERO]), "2-1 0-0");
    }

    #[test]
    fn render_line_single() {
        assert_eq!(render_line(&[Score::new(4, 0)]), "4-0");
    }

    #[test]
    fn render_line_empty() {
        assert_eq!(render_line(&[]), "");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(score_to_pegs(Score::new(2, 1), 4), "●●○·");
    }

    #[test]
    fn pegs_none() {
        assert_eq!(score_to_pegs(Score::ZERO, 4), "····");
    }

    #[test]
    fn pegs_solved() {
        assert_eq!(score_to_pegs(Score::new(4, 0), 4), "●●●●");
    }
}
