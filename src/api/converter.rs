//! Data conversion utilities for API responses.

use super::MatchSegment;
use crate::state::Match;

/// Converts API responses to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a raw live-score segment into a [`Match`].
    ///
    /// Every field arrives as a string; blanks become `None` and numbers are
    /// parsed leniently, scores defaulting to 0.
    pub fn convert_segment(segment: MatchSegment) -> Match {
        Match {
            score1: parse_leading_int(&segment.score1)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            score2: parse_leading_int(&segment.score2)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            team1_round_ct: Self::count(&segment.team1_round_ct),
            team1_round_t: Self::count(&segment.team1_round_t),
            team2_round_ct: Self::count(&segment.team2_round_ct),
            team2_round_t: Self::count(&segment.team2_round_t),
            current_map: Self::text(segment.current_map),
            map_number: Self::count(&segment.map_number),
            match_series: Self::text(segment.match_series),
            match_event: Self::text(segment.match_event),
            team1_logo: Self::text(segment.team1_logo),
            team2_logo: Self::text(segment.team2_logo),
            time_until_match: segment.time_until_match.trim().to_string(),
            match_page: Self::text(segment.match_page),
            unix_timestamp: parse_leading_int(&segment.unix_timestamp),
            team1: segment.team1,
            team2: segment.team2,
        }
    }

    fn text(value: String) -> Option<String> {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn count(value: &str) -> Option<u32> {
        parse_leading_int(value).and_then(|n| u32::try_from(n).ok())
    }
}

/// Parse the leading integer of a string, ignoring trailing garbage.
///
/// `"13"` and `" 7 (OT)"` parse, `"abc"` and `""` do not.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1, &value[1..]),
        Some(b'+') => (1, &value[1..]),
        _ => (1, value),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
