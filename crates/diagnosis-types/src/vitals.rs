//! Vital sign readings.
//!
//! This module provides the `VitalSigns` struct and the parsing and
//! validation helpers around it. Every reading is optional; an absent
//! reading means "not evaluated", never "normal".

/// Error returned when blood pressure text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BloodPressureParseError {
    /// Invalid format - expected "systolic/diastolic"
    InvalidFormat(String),
    /// Invalid systolic value
    InvalidSystolic(String),
    /// Invalid diastolic value
    InvalidDiastolic(String),
}

impl std::fmt::Display for BloodPressureParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(
                f,
                "invalid blood pressure format: '{}' (expected systolic/diastolic)",
                s
            ),
            Self::InvalidSystolic(s) => write!(f, "invalid systolic value: '{}'", s),
            Self::InvalidDiastolic(s) => write!(f, "invalid diastolic value: '{}'", s),
        }
    }
}

impl std::error::Error for BloodPressureParseError {}

/// Parses blood pressure text of the form `"120/80"`.
///
/// Whitespace around each number is ignored.
///
/// # Examples
///
/// ```
/// use diagnosis_types::parse_blood_pressure;
///
/// assert_eq!(parse_blood_pressure("120/80"), Ok((120, 80)));
/// assert_eq!(parse_blood_pressure(" 135 / 85 "), Ok((135, 85)));
/// assert!(parse_blood_pressure("high").is_err());
/// ```
pub fn parse_blood_pressure(s: &str) -> Result<(u32, u32), BloodPressureParseError> {
    let (systolic, diastolic) = s
        .split_once('/')
        .ok_or_else(|| BloodPressureParseError::InvalidFormat(s.to_string()))?;

    let systolic = systolic
        .trim()
        .parse::<u32>()
        .map_err(|_| BloodPressureParseError::InvalidSystolic(systolic.trim().to_string()))?;
    let diastolic = diastolic
        .trim()
        .parse::<u32>()
        .map_err(|_| BloodPressureParseError::InvalidDiastolic(diastolic.trim().to_string()))?;

    Ok((systolic, diastolic))
}

/// Converts a Fahrenheit temperature to Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Error returned when vital sign readings are physically impossible.
#[derive(Debug, Clone, PartialEq)]
pub enum VitalsError {
    /// Temperature is not a finite, positive number of degrees Celsius.
    InvalidTemperature(f64),
    /// Oxygen saturation is above 100%.
    OxygenSaturationOutOfRange(u32),
}

impl std::fmt::Display for VitalsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTemperature(t) => write!(f, "invalid temperature: {} °C", t),
            Self::OxygenSaturationOutOfRange(s) => {
                write!(f, "oxygen saturation out of range: {}% (expected 0-100)", s)
            }
        }
    }
}

impl std::error::Error for VitalsError {}

/// Vital sign readings for one patient encounter.
///
/// Blood pressure may be given either as separate `systolic_bp` /
/// `diastolic_bp` numbers or as `blood_pressure` text such as `"120/80"`.
/// The numeric pair takes precedence when both halves are present.
///
/// # Examples
///
/// ```
/// use diagnosis_types::VitalSigns;
///
/// let vitals = VitalSigns {
///     temperature: Some(38.2),
///     pulse_rate: Some(92),
///     ..Default::default()
/// };
///
/// assert!(!vitals.is_empty());
/// assert!(vitals.validate().is_ok());
/// assert_eq!(vitals.blood_pressure_display(), "Not recorded");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VitalSigns {
    /// Body temperature in °C.
    pub temperature: Option<f64>,
    /// Systolic blood pressure (mmHg).
    pub systolic_bp: Option<u32>,
    /// Diastolic blood pressure (mmHg).
    pub diastolic_bp: Option<u32>,
    /// Blood pressure as free text, e.g. "120/80".
    pub blood_pressure: Option<String>,
    /// Pulse rate (beats per minute).
    pub pulse_rate: Option<u32>,
    /// Respiratory rate (breaths per minute).
    pub respiratory_rate: Option<u32>,
    /// Oxygen saturation (%).
    pub oxygen_saturation: Option<u32>,
}

impl VitalSigns {
    /// Returns true if no reading is present.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.systolic_bp.is_none()
            && self.diastolic_bp.is_none()
            && self.blood_pressure.is_none()
            && self.pulse_rate.is_none()
            && self.respiratory_rate.is_none()
            && self.oxygen_saturation.is_none()
    }

    /// Returns the blood pressure reading, if one was supplied.
    ///
    /// Returns `None` when neither a complete numeric pair nor text is present.
    /// A lone systolic or diastolic number is not a reading.
    pub fn blood_pressure_reading(&self) -> Option<Result<(u32, u32), BloodPressureParseError>> {
        match (self.systolic_bp, self.diastolic_bp) {
            (Some(systolic), Some(diastolic)) => Some(Ok((systolic, diastolic))),
            _ => self.blood_pressure.as_deref().map(parse_blood_pressure),
        }
    }

    /// Formats blood pressure for display, e.g. `"120/80 mmHg"`.
    pub fn blood_pressure_display(&self) -> String {
        match (self.systolic_bp, self.diastolic_bp) {
            (Some(s), Some(d)) => format!("{}/{} mmHg", s, d),
            (Some(s), None) => format!("{}/-- mmHg", s),
            (None, Some(d)) => format!("--/{} mmHg", d),
            (None, None) => match &self.blood_pressure {
                Some(text) => format!("{} mmHg", text.trim()),
                None => "Not recorded".to_string(),
            },
        }
    }

    /// Checks that the readings are physically possible.
    ///
    /// Out-of-range but possible readings (a fever, a low pulse) are valid;
    /// they are classified by the engine rather than rejected here.
    ///
    /// # Errors
    /// Returns a [`VitalsError`] for a non-finite or non-positive temperature
    /// or an oxygen saturation above 100%.
    pub fn validate(&self) -> Result<(), VitalsError> {
        if let Some(t) = self.temperature {
            if !t.is_finite() || t <= 0.0 {
                return Err(VitalsError::InvalidTemperature(t));
            }
        }
        if let Some(s) = self.oxygen_saturation {
            if s > 100 {
                return Err(VitalsError::OxygenSaturationOutOfRange(s));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blood_pressure() {
        assert_eq!(parse_blood_pressure("120/80"), Ok((120, 80)));
        assert_eq!(
            parse_blood_pressure("120"),
            Err(BloodPressureParseError::InvalidFormat("120".to_string()))
        );
        assert_eq!(
            parse_blood_pressure("abc/80"),
            Err(BloodPressureParseError::InvalidSystolic("abc".to_string()))
        );
        assert_eq!(
            parse_blood_pressure("120/80/70"),
            Err(BloodPressureParseError::InvalidDiastolic("80/70".to_string()))
        );
    }

    #[test]
    fn test_numeric_pair_takes_precedence() {
        let vitals = VitalSigns {
            systolic_bp: Some(150),
            diastolic_bp: Some(95),
            blood_pressure: Some("garbage".to_string()),
            ..Default::default()
        };
        assert_eq!(vitals.blood_pressure_reading(), Some(Ok((150, 95))));
    }

    #[test]
    fn test_lone_systolic_is_not_a_reading() {
        let vitals = VitalSigns {
            systolic_bp: Some(150),
            ..Default::default()
        };
        assert_eq!(vitals.blood_pressure_reading(), None);
        assert_eq!(vitals.blood_pressure_display(), "150/-- mmHg");
    }

    #[test]
    fn test_text_reading_parsed() {
        let vitals = VitalSigns {
            blood_pressure: Some("not a number".to_string()),
            ..Default::default()
        };
        assert!(matches!(vitals.blood_pressure_reading(), Some(Err(_))));
    }

    #[test]
    fn test_validate() {
        assert!(VitalSigns::default().validate().is_ok());

        let nan = VitalSigns {
            temperature: Some(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(nan.validate(), Err(VitalsError::InvalidTemperature(_))));

        let saturation = VitalSigns {
            oxygen_saturation: Some(101),
            ..Default::default()
        };
        assert_eq!(
            saturation.validate(),
            Err(VitalsError::OxygenSaturationOutOfRange(101))
        );
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert!((fahrenheit_to_celsius(212.0) - 100.0).abs() < 1e-9);
        assert!((fahrenheit_to_celsius(100.4) - 38.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_empty() {
        assert!(VitalSigns::default().is_empty());
        let vitals = VitalSigns {
            oxygen_saturation: Some(97),
            ..Default::default()
        };
        assert!(!vitals.is_empty());
    }
}
