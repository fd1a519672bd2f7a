//! Location detection in free-text messages
//!
//! Matching is raw substring containment against the stored location names:
//! no tokenization and no word-boundary checks, so "oxfordshire" matches
//! "Oxford". Results keep the order of the stored location list, not the
//! order the names appear in the message.

use crate::models::Location;

/// Return the locations whose lowercased name occurs anywhere in `message`.
///
/// `message` must already be lowercased by the caller.
#[must_use]
pub fn mentioned_locations<'a>(message: &str, all_locations: &'a [Location]) -> Vec<&'a Location> {
    all_locations
        .iter()
        .filter(|location| message.contains(&location.name.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: i64, name: &str) -> Location {
        Location {
            id,
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn test_single_location_match() {
        let stored = vec![location(1, "Oxford"), location(2, "Bristol")];
        let matched = mentioned_locations("what's the weather in oxford", &stored);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Oxford");
    }

    #[test]
    fn test_no_match_falls_through() {
        let stored = vec![location(1, "Oxford")];
        let matched = mentioned_locations("hello there", &stored);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_substring_inside_longer_word_matches() {
        // Known-weak heuristic of raw substring containment
        let stored = vec![location(1, "Oxford")];
        let matched = mentioned_locations("driving through oxfordshire", &stored);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_multiple_matches_keep_stored_order() {
        let stored = vec![
            location(1, "Cambridge"),
            location(2, "Oxford"),
            location(3, "Norwich"),
        ];
        let matched = mentioned_locations("oxford or cambridge?", &stored);
        let names: Vec<_> = matched.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Cambridge", "Oxford"]);
    }

    #[test]
    fn test_multiword_name_matches() {
        let stored = vec![location(1, "Watergate Bay"), location(2, "The Cotswolds")];
        let matched = mentioned_locations("surfing at watergate bay", &stored);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Watergate Bay");
    }
}
