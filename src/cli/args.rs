use clap::Args;

use facpref_core::submit::Submission;

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Faculty e-mail address (e.g. john.doe@dsu.edu)
    #[arg(long)]
    pub faculty_id: String,

    /// Opaque term identifier (e.g. 202510)
    #[arg(long)]
    pub term_code: String,

    /// Term label (e.g. "Fall 2025")
    #[arg(long, default_value = "")]
    pub term_label: String,

    /// Class identifier (e.g. CS101)
    #[arg(long)]
    pub class_id: String,

    /// Class title
    #[arg(long, default_value = "")]
    pub class_label: String,

    /// Comfort teaching the class, 0-4
    #[arg(long, allow_negative_numbers = true)]
    pub rating: i64,

    /// Desire to teach the class
    #[arg(long, allow_negative_numbers = true)]
    pub desire_rating: i64,
}

impl SubmitArgs {
    pub fn to_submission(&self) -> Submission {
        Submission {
            faculty_id: self.faculty_id.clone(),
            term_code: self.term_code.clone(),
            term_label: self.term_label.clone(),
            class_id: self.class_id.clone(),
            class_label: self.class_label.clone(),
            rating: self.rating,
            desire_rating: self.desire_rating,
        }
    }
}
