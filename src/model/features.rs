//! Request schema for the encoded bank-marketing feature vector

use ndarray::Array1;
use serde::Deserialize;

/// Number of encoded features the classifier was trained on.
pub const FEATURE_COUNT: usize = 33;

/// One customer row, already passed through the upstream encoding pipeline
/// (ordinal and one-hot columns). Field order mirrors the training matrix;
/// unknown fields are rejected so a drifted client fails at parse time.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerFeatures {
    pub age: i64,
    pub balance: f64,
    pub day: i64,
    pub month: i64,
    pub campaign: i64,
    pub pdays: i64,
    pub previous: i64,
    pub default_0: i64,
    pub default_1: i64,
    pub housing_0: i64,
    pub housing_1: i64,
    pub loan_0: i64,
    pub loan_1: i64,
    pub education_ordinal: i64,
    pub month_ordinal: i64,
    /// The upstream encoder emits a trailing underscore for "admin." jobs.
    #[serde(rename = "job_admin_")]
    pub job_admin: i64,
    pub job_blue_collar: i64,
    pub job_entrepreneur: i64,
    pub job_housemaid: i64,
    pub job_management: i64,
    pub job_retired: i64,
    pub job_services: i64,
    pub job_technician: i64,
    pub job_unemployed: i64,
    pub job_unknown: i64,
    pub marital_divorced: i64,
    pub marital_married: i64,
    pub marital_single: i64,
    pub contact_telephone: i64,
    pub contact_unknown: i64,
    pub poutcome_failure: i64,
    pub poutcome_other: i64,
    pub poutcome_success: i64,
}

impl CustomerFeatures {
    /// Flatten into the exact column order the model was fitted on.
    pub fn to_vector(&self) -> Array1<f64> {
        Array1::from(vec![
            self.age as f64,
            self.balance,
            self.day as f64,
            self.month as f64,
            self.campaign as f64,
            self.pdays as f64,
            self.previous as f64,
            self.default_0 as f64,
            self.default_1 as f64,
            self.housing_0 as f64,
            self.housing_1 as f64,
            self.loan_0 as f64,
            self.loan_1 as f64,
            self.education_ordinal as f64,
            self.month_ordinal as f64,
            self.job_admin as f64,
            self.job_blue_collar as f64,
            self.job_entrepreneur as f64,
            self.job_housemaid as f64,
            self.job_management as f64,
            self.job_retired as f64,
            self.job_services as f64,
            self.job_technician as f64,
            self.job_unemployed as f64,
            self.job_unknown as f64,
            self.marital_divorced as f64,
            self.marital_married as f64,
            self.marital_single as f64,
            self.contact_telephone as f64,
            self.contact_unknown as f64,
            self.poutcome_failure as f64,
            self.poutcome_other as f64,
            self.poutcome_success as f64,
        ])
    }
}
