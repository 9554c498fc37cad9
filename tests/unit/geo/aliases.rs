use marketmap::geo::aliases::{resolve_city, CITY_ALIASES};

#[test]
fn test_known_aliases_rewrite() {
    assert_eq!(resolve_city("Dulles"), "Sterling");
    assert_eq!(resolve_city("Tysons Corner"), "Tysons");
    assert_eq!(resolve_city("New York City"), "New York");
    assert_eq!(resolve_city("Saint Paul"), "Minneapolis");
    assert_eq!(resolve_city("Boise"), "Boise City");
}

#[test]
fn test_balance_designations_rewrite() {
    assert_eq!(resolve_city("Indianapolis"), "Indianapolis city (balance)");
    assert_eq!(
        resolve_city("Nashville"),
        "Nashville-Davidson metropolitan government (balance)"
    );
}

#[test]
fn test_unmatched_names_pass_through() {
    assert_eq!(resolve_city("Cupertino"), "Cupertino");
    assert_eq!(resolve_city(""), "");
    assert_eq!(resolve_city("dulles"), "dulles");
}

#[test]
fn test_table_rewrites_are_single_step() {
    // No alias target should itself be an alias source, otherwise resolution
    // would depend on how many times the table is applied.
    for (_, to) in CITY_ALIASES {
        assert_eq!(resolve_city(to), *to, "alias target {to} is also a source");
    }
}
