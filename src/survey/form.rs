use anyhow::{Context, Result, bail};

use super::fields::{DietaryHabits, Gender, SleepDuration, YesNo};
use crate::api::SurveyPayload;

/// All ten survey answers. Every field starts unset; numeric answers are
/// kept as the strings typed into their input controls and only coerced
/// when the payload is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub gender: Option<Gender>,
    pub age: String,
    pub work_pressure: String,
    pub job_satisfaction: String,
    pub sleep_duration: Option<SleepDuration>,
    pub dietary_habits: Option<DietaryHabits>,
    pub suicidal_thoughts: Option<YesNo>,
    pub work_hours: String,
    pub financial_stress: String,
    pub family_mental_health: Option<YesNo>,
}

impl FormState {
    /// The joint "all set" predicate gating submission. Numeric ranges are
    /// input hints, not part of validity.
    pub fn is_valid(&self) -> bool {
        self.gender.is_some()
            && !self.age.is_empty()
            && !self.work_pressure.is_empty()
            && !self.job_satisfaction.is_empty()
            && self.sleep_duration.is_some()
            && self.dietary_habits.is_some()
            && self.suicidal_thoughts.is_some()
            && !self.work_hours.is_empty()
            && !self.financial_stress.is_empty()
            && self.family_mental_health.is_some()
    }

    /// Build the wire payload: numeric strings coerced to numbers, enum
    /// answers passed through as their wire strings.
    pub fn payload(&self) -> Result<SurveyPayload> {
        let (
            Some(gender),
            Some(sleep_duration),
            Some(dietary_habits),
            Some(suicidal_thoughts),
            Some(family_mental_health),
        ) = (
            self.gender,
            self.sleep_duration,
            self.dietary_habits,
            self.suicidal_thoughts,
            self.family_mental_health,
        )
        else {
            bail!("Form is not fully filled in");
        };

        Ok(SurveyPayload {
            gender: gender.as_str().to_string(),
            age: parse_number(&self.age, "age")?,
            work_pressure: parse_number(&self.work_pressure, "work pressure")?,
            job_satisfaction: parse_number(&self.job_satisfaction, "job satisfaction")?,
            sleep_duration: sleep_duration.as_str().to_string(),
            dietary_habits: dietary_habits.as_str().to_string(),
            suicidal_thoughts: suicidal_thoughts.as_str().to_string(),
            work_hours: parse_number(&self.work_hours, "work hours")?,
            financial_stress: parse_number(&self.financial_stress, "financial stress")?,
            family_mental_health: family_mental_health.as_str().to_string(),
        })
    }
}

fn parse_number(value: &str, field: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .with_context(|| format!("Invalid {} value: {:?}", field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            gender: Some(Gender::Male),
            age: "34".to_string(),
            work_pressure: "4".to_string(),
            job_satisfaction: "2".to_string(),
            sleep_duration: Some(SleepDuration::FiveToSix),
            dietary_habits: Some(DietaryHabits::Moderate),
            suicidal_thoughts: Some(YesNo::No),
            work_hours: "9".to_string(),
            financial_stress: "3".to_string(),
            family_mental_health: Some(YesNo::Yes),
        }
    }

    #[test]
    fn test_empty_form_is_invalid() {
        assert!(!FormState::default().is_valid());
    }

    #[test]
    fn test_any_missing_field_is_invalid() {
        let mut form = filled_form();
        form.gender = None;
        assert!(!form.is_valid());

        let mut form = filled_form();
        form.age.clear();
        assert!(!form.is_valid());

        let mut form = filled_form();
        form.family_mental_health = None;
        assert!(!form.is_valid());
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled_form().is_valid());
    }

    #[test]
    fn test_payload_coerces_numbers() {
        let payload = filled_form().payload().unwrap();
        assert_eq!(payload.age, 34);
        assert_eq!(payload.work_pressure, 4);
        assert_eq!(payload.job_satisfaction, 2);
        assert_eq!(payload.work_hours, 9);
        assert_eq!(payload.financial_stress, 3);
        assert_eq!(payload.gender, "Male");
        assert_eq!(payload.sleep_duration, "5-6 hours");
    }

    #[test]
    fn test_payload_rejects_invalid_form() {
        assert!(FormState::default().payload().is_err());
    }
}
