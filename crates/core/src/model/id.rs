//! Record id generation

use chrono::Utc;
use uuid::Uuid;

/// Generate a new record id.
///
/// Ids look like `1760000000000-9f2c1a7b`: the creation time in unix
/// milliseconds followed by eight random hex digits, so two records created
/// in the same millisecond still get distinct ids.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", millis, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_within_process() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_starts_with_timestamp() {
        let before = Utc::now().timestamp_millis();
        let id = generate_id();
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.parse::<i64>().unwrap() >= before);
        assert_eq!(suffix.len(), 8);
    }
}
