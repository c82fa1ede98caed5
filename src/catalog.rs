//! Static reference data: nations and their theater selectors
//!
//! Consumed by store validation and by UI pickers. Britain carries a
//! curated historical selector list; every other nation falls back to a
//! generic numbered sequence. The fallback is a known completeness gap
//! in the catalog data and is kept as-is for parity with stored lists.

/// Fixed nation set, in display order
pub const NATIONS: [&str; 7] = [
    "Britain",
    "France",
    "Germany",
    "Italy",
    "Japan",
    "Soviet Union",
    "United States",
];

/// Curated theater selectors for Britain
const BRITAIN_SELECTORS: [&str; 14] = [
    "1940 - Fall of France",
    "1940 - Dad's Army",
    "1940-44 - Raiders!",
    "1940-41 - East Africa",
    "1940-41 - Operation Compass",
    "1940-43 - Behind Enemy Lines",
    "1942 - Operation Lightfoot",
    "1942-43 - Tunisia",
    "1942 - Fall of Singapore",
    "1942-45 - Burma",
    "1944 - Monte Cassino",
    "1944 - Normandy",
    "1944 - Market Garden",
    "1945 - Into the Rich",
];

/// Number of generic placeholder selectors for nations without a curated list
const GENERIC_SELECTOR_COUNT: usize = 20;

/// Nation names, in display order
pub fn nations() -> &'static [&'static str] {
    &NATIONS
}

/// Whether `name` is a member of the fixed nation set (case-sensitive)
pub fn is_nation(name: &str) -> bool {
    NATIONS.contains(&name)
}

/// Theater selectors for `nation`, in display order
///
/// Nations without a curated list get the generic placeholder sequence
/// `"<nation> - 0"` .. `"<nation> - 19"`.
pub fn theater_selectors(nation: &str) -> Vec<String> {
    match nation {
        "Britain" => BRITAIN_SELECTORS.iter().map(|s| s.to_string()).collect(),
        _ => (0..GENERIC_SELECTOR_COUNT)
            .map(|i| format!("{} - {}", nation, i))
            .collect(),
    }
}

/// Whether `theater_selector` is valid for `nation`
pub fn is_theater_selector(nation: &str, theater_selector: &str) -> bool {
    theater_selectors(nation).iter().any(|s| s == theater_selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nation_set_membership() {
        assert!(is_nation("Britain"));
        assert!(is_nation("Soviet Union"));
        assert!(!is_nation("Prussia"));
        // Case-sensitive
        assert!(!is_nation("britain"));
        assert_eq!(nations().len(), 7);
    }

    #[test]
    fn test_britain_uses_curated_selectors() {
        let selectors = theater_selectors("Britain");
        assert_eq!(selectors.len(), 14);
        assert_eq!(selectors[0], "1940 - Fall of France");
        assert!(selectors.iter().any(|s| s == "1944 - Normandy"));
        // The curated list fully replaces the generic sequence
        assert!(!selectors.iter().any(|s| s == "Britain - 0"));
    }

    #[test]
    fn test_other_nations_use_generic_fallback() {
        let selectors = theater_selectors("Germany");
        assert_eq!(selectors.len(), 20);
        assert_eq!(selectors[0], "Germany - 0");
        assert_eq!(selectors[19], "Germany - 19");
    }

    #[test]
    fn test_theater_selector_validation() {
        assert!(is_theater_selector("Britain", "1944 - Normandy"));
        assert!(is_theater_selector("Germany", "Germany - 3"));
        // Selectors never cross nations
        assert!(!is_theater_selector("Germany", "1944 - Normandy"));
        assert!(!is_theater_selector("Britain", "Britain - 0"));
    }
}
