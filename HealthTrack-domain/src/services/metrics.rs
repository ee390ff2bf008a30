use health_track_data::models::{ActivityLevel, BmiCategory, Gender};

/// Compute BMI from weight (kg) and height (cm), rounded to one decimal
pub fn body_mass_index(weight: f64, height: f64) -> f64 {
    let height_m = height / 100.0;
    round_to_one_decimal(weight / (height_m * height_m))
}

/// Categorize a BMI value using the fixed thresholds
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.0 {
        BmiCategory::Normal
    } else if bmi < 28.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Estimate the basal metabolic rate with the Mifflin-St Jeor formula
pub fn basal_metabolic_rate(weight: f64, height: f64, age: u32, gender: Gender) -> i32 {
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };
    let bmr = 10.0 * weight + 6.25 * height - 5.0 * age as f64 + offset;
    bmr.round() as i32
}

/// Scale a rounded BMR by the activity factor to obtain the TDEE
pub fn total_daily_energy_expenditure(bmr: i32, activity_level: ActivityLevel) -> i32 {
    (bmr as f64 * activity_level.factor()).round() as i32
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value_rounded_to_one_decimal() {
        // 70 / 1.75^2 = 22.857... -> 22.9
        assert_eq!(body_mass_index(70.0, 175.0), 22.9);
        // 50 / 1.60^2 = 19.531... -> 19.5
        assert_eq!(body_mass_index(50.0, 160.0), 19.5);
    }

    #[test]
    fn test_bmi_category_underweight() {
        let category = classify_bmi(18.49);
        assert_eq!(category, BmiCategory::Underweight);
    }

    #[test]
    fn test_bmi_category_normal_at_lower_boundary() {
        let category = classify_bmi(18.5);
        assert_eq!(category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_category_overweight_at_boundary() {
        let category = classify_bmi(24.0);
        assert_eq!(category, BmiCategory::Overweight);
    }

    #[test]
    fn test_bmi_category_obese_at_boundary() {
        let category = classify_bmi(28.0);
        assert_eq!(category, BmiCategory::Obese);
    }

    #[test]
    fn test_bmr_formula_male() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75 -> 1649
        assert_eq!(basal_metabolic_rate(70.0, 175.0, 30, Gender::Male), 1649);
    }

    #[test]
    fn test_bmr_formula_female() {
        // 700 + 1093.75 - 150 - 161 = 1482.75 -> 1483
        assert_eq!(basal_metabolic_rate(70.0, 175.0, 30, Gender::Female), 1483);
    }

    #[test]
    fn test_tdee_scales_rounded_bmr() {
        // round(1649 * 1.55) = 2556
        assert_eq!(
            total_daily_energy_expenditure(1649, ActivityLevel::Moderate),
            2556
        );
        // Sedentary factor 1.2
        assert_eq!(
            total_daily_energy_expenditure(1500, ActivityLevel::Sedentary),
            1800
        );
    }
}
