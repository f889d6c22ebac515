pub mod config;
pub mod pi;
pub mod resonance;
pub mod status;

pub use config::{ScoringConfig, StatusThresholds};
pub use resonance::{
    calculate_percentage, calculate_resonance, encode_responses_to_state, normalize_response,
    percentage_from_resonance, phase_match, score_responses, ResonanceScore,
};
pub use status::{resonance_description, resonance_level, status_from_percentage, CheckInStatus};
