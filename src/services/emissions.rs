// Rule-based carbon estimation. Factors are kg CO2 per currency unit spent;
// a merchant-categorization service would supply these in a full deployment.
pub struct Assessment {
    pub co2: f64,
    pub factor: f64,
    pub insight: String,
}

const DEFAULT_FACTOR: f64 = 0.2;

pub fn factor_for(category: &str) -> f64 {
    match category {
        "travel" => 0.57,
        "transport" => 0.42,
        "food" => 0.35,
        "retail" => 0.18,
        "digital" => 0.02,
        _ => DEFAULT_FACTOR,
    }
}

pub fn assess(category: &str, amount: f64, merchant: &str) -> Assessment {
    let factor = factor_for(category);
    let co2 = (amount * factor * 100.0).round() / 100.0;

    let insight = if category == "travel" && co2 > 100.0 {
        "High carbon event detected. Consider rail alternatives for trips under 400km."
            .to_string()
    } else if category == "food" && co2 > 20.0 {
        "Sourcing locally grown produce can reduce this footprint by up to 30%.".to_string()
    } else if category == "digital" {
        "Excellent. Digital services have a minimal carbon footprint.".to_string()
    } else {
        format!("Purchase at {merchant} processed.")
    };

    Assessment {
        co2,
        factor,
        insight,
    }
}
