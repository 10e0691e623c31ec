pub mod survey_app;

pub use survey_app::SurveyApp;
