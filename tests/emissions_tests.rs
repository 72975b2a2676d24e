use ecopay_backend::services::emissions::{assess, factor_for};

#[test]
fn factor_table_matches_categories() {
    assert_eq!(factor_for("travel"), 0.57);
    assert_eq!(factor_for("transport"), 0.42);
    assert_eq!(factor_for("food"), 0.35);
    assert_eq!(factor_for("retail"), 0.18);
    assert_eq!(factor_for("digital"), 0.02);
    // Unknown categories fall back to the generic factor.
    assert_eq!(factor_for("groceries"), 0.2);
    assert_eq!(factor_for(""), 0.2);
}

#[test]
fn co2_is_rounded_to_two_decimals() {
    let assessment = assess("retail", 33.33, "Shop");
    assert_eq!(assessment.co2, 6.0);

    let assessment = assess("transport", 10.01, "Cab");
    assert_eq!(assessment.co2, 4.2);
}

#[test]
fn high_travel_impact_suggests_rail() {
    let assessment = assess("travel", 350.0, "AirIndia");
    assert!(assessment.co2 > 100.0);
    assert!(assessment.insight.contains("rail"));
}

#[test]
fn low_travel_impact_stays_generic() {
    let assessment = assess("travel", 10.0, "Metro");
    assert!(assessment.co2 <= 100.0);
    assert!(assessment.insight.contains("Metro"));
}

#[test]
fn high_food_impact_suggests_local_produce() {
    let assessment = assess("food", 100.0, "Bazaar");
    assert!(assessment.co2 > 20.0);
    assert!(assessment.insight.contains("locally grown"));
}

#[test]
fn digital_spend_is_praised_regardless_of_amount() {
    let assessment = assess("digital", 5000.0, "CloudCo");
    assert!(assessment.insight.contains("minimal carbon footprint"));
}

#[test]
fn other_categories_name_the_merchant() {
    let assessment = assess("retail", 50.0, "BigBasket");
    assert_eq!(assessment.insight, "Purchase at BigBasket processed.");
    assert_eq!(assessment.factor, 0.18);
    assert_eq!(assessment.co2, 9.0);
}
