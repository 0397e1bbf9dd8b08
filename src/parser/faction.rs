/// English faction labels as printed on the listing page, mapped to the short
/// party codes used everywhere downstream. Unlisted labels stay unmapped.
pub fn code(english_label: &str) -> Option<&'static str> {
    match english_label {
        "Great Indonesia Movement Party Faction" => Some("Gerindra"),
        "Democrat Party Faction" => Some("Demokrat"),
        "Indonesian Democratic Party of Struggle Faction" => Some("PDIP"),
        "Golkar Party Faction" => Some("Golkar"),
        "Prosperous Justice Party Faction" => Some("PKS"),
        "National Mandate Party Faction" => Some("PAN"),
        "National Democrat Party Faction" => Some("NasDem"),
        "National Awakening Party Faction" => Some("PKB"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::code;

    #[test]
    fn known_labels_map_to_codes() {
        assert_eq!(code("Golkar Party Faction"), Some("Golkar"));
        assert_eq!(code("National Awakening Party Faction"), Some("PKB"));
    }

    #[test]
    fn unknown_labels_stay_unmapped() {
        assert_eq!(code("Some Future Party Faction"), None);
        assert_eq!(code(""), None);
        // Raw label is never passed through.
        assert_eq!(code("golkar party faction"), None);
    }
}
