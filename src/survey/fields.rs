//! Categorical answer types for the survey.
//!
//! Each enum carries the exact wire string the prediction service was
//! trained on, so `as_str()` doubles as both display text and payload value.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepDuration {
    LessThanFive,
    FiveToSix,
    SevenToEight,
    MoreThanEight,
}

impl SleepDuration {
    pub const ALL: [SleepDuration; 4] = [
        SleepDuration::LessThanFive,
        SleepDuration::FiveToSix,
        SleepDuration::SevenToEight,
        SleepDuration::MoreThanEight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepDuration::LessThanFive => "Less than 5 hours",
            SleepDuration::FiveToSix => "5-6 hours",
            SleepDuration::SevenToEight => "7-8 hours",
            SleepDuration::MoreThanEight => "More than 8 hours",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryHabits {
    Healthy,
    Moderate,
    Unhealthy,
}

impl DietaryHabits {
    pub const ALL: [DietaryHabits; 3] = [
        DietaryHabits::Healthy,
        DietaryHabits::Moderate,
        DietaryHabits::Unhealthy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryHabits::Healthy => "Healthy",
            DietaryHabits::Moderate => "Moderate",
            DietaryHabits::Unhealthy => "Unhealthy",
        }
    }
}

/// Yes/No answer, used for the suicidal-thoughts and family-history fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(Gender, SleepDuration, DietaryHabits, YesNo);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(Gender::Male.as_str(), "Male");
        assert_eq!(SleepDuration::LessThanFive.as_str(), "Less than 5 hours");
        assert_eq!(SleepDuration::MoreThanEight.as_str(), "More than 8 hours");
        assert_eq!(DietaryHabits::Unhealthy.as_str(), "Unhealthy");
        assert_eq!(YesNo::No.as_str(), "No");
    }

    #[test]
    fn test_option_lists() {
        assert_eq!(Gender::ALL.len(), 2);
        assert_eq!(SleepDuration::ALL.len(), 4);
        assert_eq!(DietaryHabits::ALL.len(), 3);
        assert_eq!(YesNo::ALL.len(), 2);
    }
}
