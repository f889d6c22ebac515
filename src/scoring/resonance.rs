//! π-metric resonance scoring.
//!
//! Each answer is normalized to [0,1] and compared with the π digit at the
//! same position (rescaled from 0..=9 to [0,1]). The per-position matches are
//! averaged with weights `1 / i²`, so the first questions dominate the score.

use crate::checkin::catalog::{find_question, CheckInQuestion};
use crate::db::models::CheckInResponse;
use crate::scoring::config::ScoringConfig;
use crate::scoring::pi::generate_pi_digits;

/// Neutral percentage returned when no responses were given.
pub const NEUTRAL_PERCENTAGE: f64 = 50.0;

/// Neutral value for degenerate ranges, unknown questions, and empty overlap.
pub const NEUTRAL_VALUE: f64 = 0.5;

/// Resonance together with the percentage derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonanceScore {
    pub resonance: f64,
    pub percentage: f64,
}

/// Linear scaling of `value` into `[min, max]`. Not clamped.
pub fn normalize_response(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return NEUTRAL_VALUE;
    }
    (value - min) / (max - min)
}

/// Encode responses into the state vector, one clamped entry per response.
pub fn encode_responses_to_state(
    responses: &[CheckInResponse],
    questions: &[CheckInQuestion],
) -> Vec<f64> {
    responses
        .iter()
        .map(|response| normalized_for(response, questions))
        .collect()
}

/// Clamped normalized value for a single response. Unknown question ids and
/// non-finite results map to the neutral value.
pub fn normalized_for(response: &CheckInResponse, questions: &[CheckInQuestion]) -> f64 {
    let Some(question) = find_question(questions, &response.question_id) else {
        return NEUTRAL_VALUE;
    };

    let normalized = normalize_response(response.value, question.min, question.max);
    if normalized.is_finite() {
        normalized.clamp(0.0, 1.0)
    } else {
        NEUTRAL_VALUE
    }
}

/// φ(s, d) = 1 - |s - d/9|, floored at zero.
pub fn phase_match(state_value: f64, pi_digit: u8) -> f64 {
    let normalized_pi = f64::from(pi_digit) / 9.0;
    (1.0 - (state_value - normalized_pi).abs()).max(0.0)
}

/// Inverse-square weighted mean of phase matches over the shared prefix of
/// `state` and `pi_digits`.
pub fn calculate_resonance(state: &[f64], pi_digits: &[u8]) -> f64 {
    let n = state.len().min(pi_digits.len());
    if n == 0 {
        return NEUTRAL_VALUE;
    }

    let mut weighted_sum = 0.0;
    let mut normalization_sum = 0.0;

    for (i, (&value, &digit)) in state.iter().zip(pi_digits).take(n).enumerate() {
        let position = (i + 1) as f64;
        let weight = 1.0 / (position * position);
        weighted_sum += phase_match(value, digit) * weight;
        normalization_sum += weight;
    }

    let resonance = weighted_sum / normalization_sum;
    if resonance.is_finite() {
        resonance.clamp(0.0, 1.0)
    } else {
        NEUTRAL_VALUE
    }
}

pub fn percentage_from_resonance(resonance: f64) -> f64 {
    (resonance * 100.0).clamp(0.0, 100.0)
}

/// Full pipeline returning both the resonance and its percentage.
pub fn score_responses(
    responses: &[CheckInResponse],
    questions: &[CheckInQuestion],
    config: &ScoringConfig,
) -> ResonanceScore {
    if responses.is_empty() {
        return ResonanceScore {
            resonance: NEUTRAL_VALUE,
            percentage: NEUTRAL_PERCENTAGE,
        };
    }

    let state = encode_responses_to_state(responses, questions);

    let n = state.len();
    let mut pi_digits = generate_pi_digits(n * config.precision_multiplier.max(1));
    pi_digits.truncate(n);

    let resonance = calculate_resonance(&state, &pi_digits);
    ResonanceScore {
        resonance,
        percentage: percentage_from_resonance(resonance),
    }
}

/// Check-in percentage in [0, 100]; 50 when there are no responses.
pub fn calculate_percentage(
    responses: &[CheckInResponse],
    questions: &[CheckInQuestion],
    config: &ScoringConfig,
) -> f64 {
    if responses.is_empty() {
        return NEUTRAL_PERCENTAGE;
    }
    score_responses(responses, questions, config).percentage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkin::catalog::{default_questions, QuestionCategory, QuestionKind};

    const EPS: f64 = 1e-9;

    fn question(id: &str, min: f64, max: f64) -> CheckInQuestion {
        CheckInQuestion {
            id: id.into(),
            category: QuestionCategory::Energy,
            label: id.into(),
            description: None,
            min,
            max,
            kind: QuestionKind::Slider,
        }
    }

    fn response(id: &str, value: f64) -> CheckInResponse {
        CheckInResponse::new(id, value)
    }

    #[test]
    fn normalize_scales_linearly() {
        assert!((normalize_response(5.0, 0.0, 10.0) - 0.5).abs() < EPS);
        assert!((normalize_response(1.0, 1.0, 10.0)).abs() < EPS);
        // Out-of-range input is passed through unclamped.
        assert!((normalize_response(20.0, 0.0, 10.0) - 2.0).abs() < EPS);
    }

    #[test]
    fn normalize_zero_width_range_is_neutral() {
        assert_eq!(normalize_response(3.0, 7.0, 7.0), 0.5);
        assert_eq!(normalize_response(-100.0, 0.0, 0.0), 0.5);
    }

    #[test]
    fn phase_match_peaks_at_rescaled_digit() {
        assert!((phase_match(3.0 / 9.0, 3) - 1.0).abs() < EPS);
        assert!((phase_match(1.0, 9) - 1.0).abs() < EPS);
        assert!((phase_match(0.0, 0) - 1.0).abs() < EPS);
    }

    #[test]
    fn phase_match_decreases_linearly_and_never_goes_negative() {
        let near = phase_match(0.5, 3);
        let far = phase_match(0.9, 3);
        assert!(near > far);
        assert!((phase_match(0.2, 0) - 0.8).abs() < EPS);
        assert_eq!(phase_match(5.0, 0), 0.0);
    }

    #[test]
    fn resonance_of_empty_overlap_is_neutral() {
        assert_eq!(calculate_resonance(&[], &[3, 1, 4]), 0.5);
        assert_eq!(calculate_resonance(&[0.2, 0.4], &[]), 0.5);
    }

    #[test]
    fn resonance_uses_shared_prefix_only() {
        let short = calculate_resonance(&[0.5], &[3]);
        let padded = calculate_resonance(&[0.5], &[3, 1, 4, 1, 5]);
        assert_eq!(short, padded);
    }

    #[test]
    fn early_positions_dominate_resonance() {
        let digits = [3, 1, 4];
        let base = [0.5, 0.5, 0.5];
        let delta = 0.2;

        let first_changed = [0.5 + delta, 0.5, 0.5];
        let last_changed = [0.5, 0.5, 0.5 + delta];

        let r_base = calculate_resonance(&base, &digits);
        let first_shift = (calculate_resonance(&first_changed, &digits) - r_base).abs();
        let last_shift = (calculate_resonance(&last_changed, &digits) - r_base).abs();

        assert!(first_shift > last_shift);
    }

    #[test]
    fn percentage_is_clamped() {
        assert_eq!(percentage_from_resonance(1.5), 100.0);
        assert_eq!(percentage_from_resonance(-0.2), 0.0);
        assert!((percentage_from_resonance(0.42) - 42.0).abs() < EPS);
    }

    #[test]
    fn single_midpoint_answer_scores_against_leading_three() {
        let questions = vec![question("q1", 0.0, 10.0)];
        let responses = vec![response("q1", 5.0)];

        let score = score_responses(&responses, &questions, &ScoringConfig::default());
        let expected = 1.0 - (0.5_f64 - 3.0 / 9.0).abs();

        assert!((score.resonance - expected).abs() < EPS);
        assert!((score.percentage - expected * 100.0).abs() < EPS);
        assert!((score.percentage - 83.333_333_333).abs() < 1e-6);
    }

    #[test]
    fn empty_responses_give_exactly_fifty() {
        let config = ScoringConfig::default();
        assert_eq!(calculate_percentage(&[], &default_questions(), &config), 50.0);
        assert_eq!(calculate_percentage(&[], &[], &config), 50.0);

        let score = score_responses(&[], &default_questions(), &config);
        assert_eq!(score.resonance, 0.5);
        assert_eq!(score.percentage, 50.0);
    }

    #[test]
    fn unknown_question_is_treated_as_neutral() {
        let questions = vec![question("q1", 0.0, 10.0)];
        let state = encode_responses_to_state(&[response("missing", 9.0)], &questions);
        assert_eq!(state, vec![0.5]);
    }

    #[test]
    fn state_vector_is_clamped_and_follows_response_order() {
        let questions = vec![question("a", 0.0, 10.0), question("b", 0.0, 4.0)];
        let responses = vec![response("b", 8.0), response("a", -3.0), response("a", 2.5)];

        let state = encode_responses_to_state(&responses, &questions);
        assert_eq!(state.len(), responses.len());
        assert_eq!(state[0], 1.0);
        assert_eq!(state[1], 0.0);
        assert!((state[2] - 0.25).abs() < EPS);
    }

    #[test]
    fn non_finite_answers_do_not_poison_the_score() {
        let questions = vec![question("q1", 0.0, 10.0)];
        let responses = vec![response("q1", f64::NAN), response("q1", f64::INFINITY)];

        let pct = calculate_percentage(&responses, &questions, &ScoringConfig::default());
        assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn precision_multiplier_does_not_change_the_result() {
        let questions = default_questions();
        let responses: Vec<CheckInResponse> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| response(&q.id, q.min + (i as f64 % (q.max - q.min + 1.0))))
            .collect();

        let one = ScoringConfig {
            precision_multiplier: 1,
            ..ScoringConfig::default()
        };
        let ten = ScoringConfig::default();

        assert_eq!(
            calculate_percentage(&responses, &questions, &one),
            calculate_percentage(&responses, &questions, &ten)
        );
    }

    #[test]
    fn scoring_is_bounded_and_repeatable() {
        let questions = default_questions();
        let config = ScoringConfig::default();

        for step in 0..=12 {
            let responses: Vec<CheckInResponse> = questions
                .iter()
                .map(|q| response(&q.id, step as f64))
                .collect();

            let first = calculate_percentage(&responses, &questions, &config);
            let second = calculate_percentage(&responses, &questions, &config);

            assert!((0.0..=100.0).contains(&first));
            assert_eq!(first, second);
        }
    }
}
