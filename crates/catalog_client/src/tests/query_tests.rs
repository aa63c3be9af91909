use super::*;

#[test]
fn price_range_is_inclusive_on_both_bounds() {
    let range = PriceRange::new(10.0, 30.0).expect("range");
    assert!(range.contains(10.0));
    assert!(range.contains(20.0));
    assert!(range.contains(30.0));
    assert!(!range.contains(9.99));
    assert!(!range.contains(30.01));
}

#[test]
fn price_range_accepts_equal_bounds() {
    let range = PriceRange::new(15.5, 15.5).expect("range");
    assert!(range.contains(15.5));
}

#[test]
fn price_range_rejects_non_positive_bounds() {
    assert!(matches!(
        PriceRange::new(0.0, 10.0),
        Err(PriceRangeError::NotPositive { .. })
    ));
    assert!(matches!(
        PriceRange::new(5.0, -1.0),
        Err(PriceRangeError::NotPositive { .. })
    ));
    assert!(matches!(
        PriceRange::new(f64::NAN, 10.0),
        Err(PriceRangeError::NotPositive { .. })
    ));
    assert!(matches!(
        PriceRange::new(1.0, f64::INFINITY),
        Err(PriceRangeError::NotPositive { .. })
    ));
}

#[test]
fn price_range_rejects_inverted_bounds() {
    let err = PriceRange::new(50.0, 10.0).expect_err("inverted");
    assert_eq!(
        err.to_string(),
        "Minimum price cannot be greater than maximum price."
    );
}

#[test]
fn price_range_parses_min_max_text() {
    let range: PriceRange = "10..50".parse().expect("parse");
    assert_eq!(range.min(), 10.0);
    assert_eq!(range.max(), 50.0);
    assert_eq!(range.to_string(), "10..50");

    let range: PriceRange = " 7.5 .. 9.25 ".parse().expect("parse with spaces");
    assert_eq!((range.min(), range.max()), (7.5, 9.25));
}

#[test]
fn price_range_parse_reports_missing_and_garbage_bounds() {
    assert_eq!("10".parse::<PriceRange>(), Err(PriceRangeError::Missing));
    assert_eq!("..10".parse::<PriceRange>(), Err(PriceRangeError::Missing));
    assert_eq!(
        "ten..20".parse::<PriceRange>(),
        Err(PriceRangeError::NotANumber("ten".to_string()))
    );
}

#[test]
fn titles_compare_case_insensitively_first() {
    assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
    assert_eq!(compare_titles("Banana", "apple"), Ordering::Greater);
    assert_eq!(compare_titles("Zebra", "zebra stripes"), Ordering::Less);
}

#[test]
fn lowercase_sorts_before_uppercase_on_tie() {
    assert_eq!(compare_titles("a", "A"), Ordering::Less);
    assert_eq!(compare_titles("Mens Shirt", "mens shirt"), Ordering::Greater);
    assert_eq!(compare_titles("same", "same"), Ordering::Equal);
}

#[test]
fn punctuation_and_digits_sort_before_letters() {
    assert_eq!(compare_titles("~tilde", "alpha"), Ordering::Less);
    assert_eq!(compare_titles("3 pack", "alpha"), Ordering::Less);
    assert_eq!(compare_titles("- dash", "3 pack"), Ordering::Less);
}

#[test]
fn containment_ignores_case() {
    assert!(contains_ignore_case("Mens Casual Premium Slim Fit", "SLIM"));
    assert!(contains_ignore_case("men's clothing", "Men"));
    assert!(!contains_ignore_case("jewelery", "electronics"));
}

#[test]
fn empty_needle_matches_everything() {
    assert!(contains_ignore_case("anything", ""));
    assert!(contains_ignore_case("", ""));
}

#[test]
fn accents_are_ignored_at_the_primary_level() {
    assert_eq!(compare_titles("éclair", "zebra"), Ordering::Less);
    assert_eq!(compare_titles("Ökotest", "Pullover"), Ordering::Less);
    assert_eq!(compare_titles("Über Jacket", "Vest"), Ordering::Less);
    assert_eq!(compare_titles("café", "cafeteria"), Ordering::Less);
}

#[test]
fn unaccented_sorts_before_accented_on_tie() {
    assert_eq!(compare_titles("cote", "côte"), Ordering::Less);
    assert_eq!(compare_titles("côte", "cote"), Ordering::Greater);
    // Accent difference outranks case difference.
    assert_eq!(compare_titles("Cote", "côte"), Ordering::Less);
}

#[test]
fn decomposed_accents_fold_like_precomposed_ones() {
    assert_eq!(compare_titles("e\u{301}clair", "zebra"), Ordering::Less);
    assert_eq!(compare_titles("e\u{301}clair", "eclair"), Ordering::Greater);
    assert_eq!(compare_titles("\u{e9}clair", "\u{c9}clair"), Ordering::Less);
}
