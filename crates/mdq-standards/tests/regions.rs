use mdq_model::RegionResolver;
use mdq_standards::load_default_region_table;

#[test]
fn bundled_table_resolves_names_and_codes() {
    let table = load_default_region_table().expect("load region table");
    assert!(!table.is_empty());
    // Names plus both ISO code forms for every country.
    assert!(table.len() > 400);
    assert_eq!(table.region_of("Kenya").as_deref(), Some("Eastern Africa"));
    assert_eq!(table.region_of("kenya").as_deref(), Some("Eastern Africa"));
    assert_eq!(table.region_of("KE").as_deref(), Some("Eastern Africa"));
    assert_eq!(table.region_of("KEN").as_deref(), Some("Eastern Africa"));
    assert_eq!(table.region_of("Nigeria").as_deref(), Some("Western Africa"));
    assert_eq!(
        table.region_of("New Zealand").as_deref(),
        Some("Australia and New Zealand")
    );
}

#[test]
fn alias_names_resolve_to_the_same_region() {
    let table = load_default_region_table().expect("load region table");
    assert_eq!(table.region_of("Tanzania"), table.region_of("United Republic of Tanzania"));
    assert_eq!(table.region_of("Viet Nam"), table.region_of("Vietnam"));
}

#[test]
fn unknown_countries_resolve_to_none() {
    let table = load_default_region_table().expect("load region table");
    assert_eq!(table.region_of("Atlantis"), None);
    assert_eq!(table.region_of(""), None);
}
