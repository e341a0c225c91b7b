//! The "Request Loan" form: raw field text in, a [`LoanDraft`] or per-field
//! messages out.

use chrono::NaiveDate;

use crate::records::LoanDraft;

/// What the user has typed so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoanForm {
    pub firstname: String,
    pub lastname: String,
    pub amount: String,
    pub purpose: String,
    /// `YYYY-MM-DD`, as produced by an `<input type="date">`.
    pub tenure: String,
}

/// One optional message per field. Empty means the form is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoanFormErrors {
    pub firstname: Option<&'static str>,
    pub lastname: Option<&'static str>,
    pub amount: Option<&'static str>,
    pub purpose: Option<&'static str>,
    pub tenure: Option<&'static str>,
}

impl LoanFormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

const MIN_NAME_CHARS: usize = 2;

impl LoanForm {
    /// Checks every field and builds the request body.
    ///
    /// The amount is sent as both the active and the total loan; nothing has
    /// been settled yet.
    pub fn validate(&self) -> Result<LoanDraft, LoanFormErrors> {
        let mut errors = LoanFormErrors::default();

        if self.firstname.chars().count() < MIN_NAME_CHARS {
            errors.firstname = Some("First name must be at least 2 characters.");
        }
        if self.lastname.chars().count() < MIN_NAME_CHARS {
            errors.lastname = Some("Last name must be at least 2 characters.");
        }
        if self.amount.is_empty() {
            errors.amount = Some("Amount is required.");
        }
        if self.purpose.is_empty() {
            errors.purpose = Some("Purpose is required.");
        }

        let tenure = if self.tenure.trim().is_empty() {
            errors.tenure = Some("Tenure is required.");
            None
        } else {
            let parsed = NaiveDate::parse_from_str(self.tenure.trim(), "%Y-%m-%d").ok();
            if parsed.is_none() {
                errors.tenure = Some("Invalid date format.");
            }
            parsed
        };

        match tenure {
            Some(date) if errors.is_empty() => Ok(LoanDraft {
                name: format!("{} {}", self.firstname, self.lastname),
                active_loan: self.amount.clone(),
                settled_loan: "0".to_string(),
                total_amount: self.amount.clone(),
                purpose: self.purpose.clone(),
                tenure: format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoanForm {
        LoanForm {
            firstname: "John".into(),
            lastname: "Doe".into(),
            amount: "20000".into(),
            purpose: "Business".into(),
            tenure: "2025-06-01".into(),
        }
    }

    #[test]
    fn valid_form_builds_the_request_body() {
        let draft = filled().validate().unwrap();
        assert_eq!(
            draft,
            LoanDraft {
                name: "John Doe".into(),
                active_loan: "20000".into(),
                settled_loan: "0".into(),
                total_amount: "20000".into(),
                purpose: "Business".into(),
                tenure: "2025-06-01T00:00:00.000Z".into(),
            }
        );
    }

    #[test]
    fn empty_amount_is_rejected() {
        let form = LoanForm {
            amount: String::new(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.amount, Some("Amount is required."));
        assert_eq!(errors.firstname, None);
        assert_eq!(errors.tenure, None);
    }

    #[test]
    fn every_field_reports_its_own_message() {
        let errors = LoanForm::default().validate().unwrap_err();
        assert_eq!(errors.firstname, Some("First name must be at least 2 characters."));
        assert_eq!(errors.lastname, Some("Last name must be at least 2 characters."));
        assert_eq!(errors.amount, Some("Amount is required."));
        assert_eq!(errors.purpose, Some("Purpose is required."));
        assert_eq!(errors.tenure, Some("Tenure is required."));
    }

    #[test]
    fn names_are_counted_in_characters() {
        let form = LoanForm {
            firstname: "Ọ".into(),
            lastname: "Ìyá".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.firstname.is_some());
        assert!(errors.lastname.is_none());
    }

    #[test]
    fn malformed_tenure_is_rejected() {
        let form = LoanForm {
            tenure: "01/06/2025".into(),
            ..filled()
        };
        assert_eq!(form.validate().unwrap_err().tenure, Some("Invalid date format."));
    }
}
