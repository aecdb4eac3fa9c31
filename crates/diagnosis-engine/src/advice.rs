//! General health advice by age, gender and symptoms.

use diagnosis_types::{Gender, HealthAdvice};

const LIFESTYLE: &[&str] = &[
    "Maintain a balanced diet rich in fruits and vegetables",
    "Exercise regularly (150 minutes of moderate activity per week)",
    "Get 7-9 hours of quality sleep per night",
    "Manage stress through relaxation techniques",
    "Avoid smoking and limit alcohol consumption",
];

/// Age bands as (exclusive upper bound, general advice, prevention tip).
const AGE_BANDS: &[(u32, &str, &str)] = &[
    (
        18,
        "Ensure adequate sleep and nutrition for growth",
        "Stay up to date with vaccinations",
    ),
    (
        50,
        "Maintain regular exercise routine",
        "Schedule regular health checkups",
    ),
    (
        u32::MAX,
        "Focus on preventive care and screenings",
        "Monitor chronic conditions regularly",
    ),
];

/// Symptom keyword with optional advice and warning sign.
const SYMPTOM_ADVICE: &[(&str, Option<&str>, &str)] = &[
    (
        "fever",
        Some("Rest and stay hydrated"),
        "Seek medical attention if fever exceeds 103F",
    ),
    (
        "cough",
        Some("Stay hydrated and use honey for soothing"),
        "Seek help if cough persists for more than 2 weeks",
    ),
    (
        "headache",
        Some("Rest in a quiet, dark room"),
        "Seek immediate help for severe, sudden headache",
    ),
    (
        "chest pain",
        None,
        "Seek immediate medical attention for chest pain",
    ),
    (
        "shortness of breath",
        None,
        "Seek immediate medical attention for breathing difficulties",
    ),
];

/// Builds health advice.
///
/// Every argument is optional; with none given only the fixed lifestyle
/// recommendations are returned.
///
/// # Example
///
/// ```
/// use diagnosis_engine::health_advice;
/// use diagnosis_types::Gender;
///
/// let advice = health_advice(Some("fever"), Some(30), Some(Gender::Female));
/// assert_eq!(advice.general_advice[0], "Maintain regular exercise routine");
/// assert!(advice
///     .prevention_tips
///     .contains(&"Schedule regular gynecological exams".to_string()));
/// assert_eq!(advice.lifestyle_recommendations.len(), 5);
/// ```
pub fn health_advice(symptoms: Option<&str>, age: Option<u32>, gender: Option<Gender>) -> HealthAdvice {
    let mut advice = HealthAdvice {
        lifestyle_recommendations: LIFESTYLE.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };

    if let Some(age) = age {
        if let Some((_, general, tip)) = AGE_BANDS.iter().find(|(bound, _, _)| age < *bound) {
            advice.general_advice.push(general.to_string());
            advice.prevention_tips.push(tip.to_string());
        }
    }

    match gender {
        Some(Gender::Female) => advice
            .prevention_tips
            .push("Schedule regular gynecological exams".to_string()),
        Some(Gender::Male) => advice
            .prevention_tips
            .push("Consider prostate health screenings".to_string()),
        Some(Gender::Other) | None => {}
    }

    if let Some(symptoms) = symptoms {
        let text = symptoms.to_lowercase();
        for (keyword, general, warning) in SYMPTOM_ADVICE {
            if !text.contains(keyword) {
                continue;
            }
            if let Some(general) = general {
                advice.general_advice.push(general.to_string());
            }
            advice.when_to_seek_help.push(warning.to_string());
        }
    }

    advice
}
