use crate::api::{ApiError, ContractorSubmission};
use chrono::NaiveDate;

/// Raw contractor form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractorForm {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub host_name: String,
    pub visit_date: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractorField {
    FirstName,
    LastName,
    Company,
    Email,
    Phone,
    HostName,
    VisitDate,
    Purpose,
}

impl ContractorField {
    pub const ALL: [ContractorField; 8] = [
        ContractorField::FirstName,
        ContractorField::LastName,
        ContractorField::Company,
        ContractorField::Email,
        ContractorField::Phone,
        ContractorField::HostName,
        ContractorField::VisitDate,
        ContractorField::Purpose,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ContractorField::FirstName => "first-name",
            ContractorField::LastName => "last-name",
            ContractorField::Company => "company",
            ContractorField::Email => "email",
            ContractorField::Phone => "phone",
            ContractorField::HostName => "host-name",
            ContractorField::VisitDate => "visit-date",
            ContractorField::Purpose => "purpose",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContractorField::FirstName => "First name",
            ContractorField::LastName => "Last name",
            ContractorField::Company => "Company",
            ContractorField::Email => "Email",
            ContractorField::Phone => "Phone",
            ContractorField::HostName => "Host name",
            ContractorField::VisitDate => "Visit date",
            ContractorField::Purpose => "Purpose of visit",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContractorField::Email => "email",
            ContractorField::Phone => "tel",
            ContractorField::VisitDate => "date",
            _ => "text",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(
            self,
            ContractorField::Email | ContractorField::Phone | ContractorField::Purpose
        )
    }

    pub fn value(self, form: &ContractorForm) -> &str {
        match self {
            ContractorField::FirstName => &form.first_name,
            ContractorField::LastName => &form.last_name,
            ContractorField::Company => &form.company,
            ContractorField::Email => &form.email,
            ContractorField::Phone => &form.phone,
            ContractorField::HostName => &form.host_name,
            ContractorField::VisitDate => &form.visit_date,
            ContractorField::Purpose => &form.purpose,
        }
    }

    pub fn slot(self, form: &mut ContractorForm) -> &mut String {
        match self {
            ContractorField::FirstName => &mut form.first_name,
            ContractorField::LastName => &mut form.last_name,
            ContractorField::Company => &mut form.company,
            ContractorField::Email => &mut form.email,
            ContractorField::Phone => &mut form.phone,
            ContractorField::HostName => &mut form.host_name,
            ContractorField::VisitDate => &mut form.visit_date,
            ContractorField::Purpose => &mut form.purpose,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCheckin {
    pub submission: ContractorSubmission,
    pub visit_date: NaiveDate,
}

fn required(value: &str, label: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation(format!("{} is required.", label)))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn parse_visit_date(raw: &str) -> Result<NaiveDate, ApiError> {
    let raw = required(raw, "Visit date")?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| ApiError::validation("Visit date must be a valid date (YYYY-MM-DD)."))
}

impl ContractorForm {
    pub fn validate(&self) -> Result<ValidatedCheckin, ApiError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let company = required(&self.company, "Company")?;
        let host_name = required(&self.host_name, "Host name")?;
        let visit_date = parse_visit_date(&self.visit_date)?;
        let email = self.email.trim().to_string();
        if !email.is_empty() && !email.contains('@') {
            return Err(ApiError::validation("Email address looks invalid."));
        }
        Ok(ValidatedCheckin {
            submission: ContractorSubmission {
                first_name,
                last_name,
                company,
                email,
                phone: self.phone.trim().to_string(),
                host_name,
                visit_date: visit_date.format("%Y-%m-%d").to_string(),
                purpose: self.purpose.trim().to_string(),
            },
            visit_date,
        })
    }
}

pub fn format_visit_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn success_message(submission: &ContractorSubmission, visit_date: NaiveDate) -> String {
    format!(
        "Thanks, {}! {} has been notified of your visit on {}.",
        submission.first_name,
        submission.host_name,
        format_visit_date(visit_date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContractorForm {
        ContractorForm {
            first_name: " Sam ".into(),
            last_name: "Reyes".into(),
            company: "Acme Electric".into(),
            email: "sam@acme.test".into(),
            phone: "555-0100".into(),
            host_name: "Dana Park".into(),
            visit_date: "2026-03-05".into(),
            purpose: "Panel inspection".into(),
        }
    }

    #[test]
    fn valid_form_is_trimmed_into_submission() {
        let validated = filled_form().validate().unwrap();
        assert_eq!(validated.submission.first_name, "Sam");
        assert_eq!(
            validated.visit_date,
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
        );
    }

    #[test]
    fn missing_required_fields_are_reported_in_order() {
        let form = ContractorForm {
            first_name: String::new(),
            host_name: String::new(),
            ..filled_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "First name is required.");

        let form = ContractorForm {
            host_name: "   ".into(),
            ..filled_form()
        };
        assert_eq!(form.validate().unwrap_err().error, "Host name is required.");
    }

    #[test]
    fn field_slots_write_the_matching_value() {
        let mut form = ContractorForm::default();
        *ContractorField::HostName.slot(&mut form) = "Dana Park".into();
        assert_eq!(form.host_name, "Dana Park");
        assert_eq!(ContractorField::HostName.value(&form), "Dana Park");
        let required: Vec<_> = ContractorField::ALL
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.id())
            .collect();
        assert_eq!(
            required,
            ["first-name", "last-name", "company", "host-name", "visit-date"]
        );
    }

    #[test]
    fn visit_date_must_parse() {
        let form = ContractorForm {
            visit_date: "05/03/2026".into(),
            ..filled_form()
        };
        assert!(form.validate().unwrap_err().error.contains("valid date"));
    }

    #[test]
    fn email_is_optional_but_checked_when_present() {
        let blank = ContractorForm {
            email: String::new(),
            ..filled_form()
        };
        assert!(blank.validate().is_ok());

        let bad = ContractorForm {
            email: "sam.acme.test".into(),
            ..filled_form()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn success_message_names_host_and_date() {
        let validated = filled_form().validate().unwrap();
        let message = success_message(&validated.submission, validated.visit_date);
        assert!(message.contains("Dana Park"));
        assert!(message.contains("Thursday, March 5, 2026"));
    }
}
