use thiserror::Error;

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const MESSAGE_FIELD: &str = "message";

/// Field names the form relay receives, in form order.
pub const FIELDS: [&str; 3] = [NAME_FIELD, EMAIL_FIELD, MESSAGE_FIELD];

/// Hidden relay field naming the mail subject.
pub const SUBJECT_FIELD: &str = "_subject";
pub const CONTACT_SUBJECT: &str = "New portfolio enquiry";
pub const NEWSLETTER_SUBJECT: &str = "Newsletter subscription";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Please fill in the {0} field")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Same checks the browser applies to the `required` and `type="email"` inputs.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in self.pairs() {
            if value.trim().is_empty() {
                return Err(ContactError::Required(field));
            }
        }
        validate_email(&self.email)
    }

    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (NAME_FIELD, self.name.as_str()),
            (EMAIL_FIELD, self.email.as_str()),
            (MESSAGE_FIELD, self.message.as_str()),
        ]
    }
}

pub fn validate_email(email: &str) -> Result<(), ContactError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ContactError::Required(EMAIL_FIELD));
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(ContactError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Client".to_string(),
            email: "jane@example.com".to_string(),
            message: "Need help ranking my channel".to_string(),
        }
    }

    #[test]
    fn test_posts_three_fields() {
        let s = submission();
        let names = s.pairs().map(|(k, _)| k);
        assert_eq!(names, FIELDS);
        assert_eq!(FIELDS, ["name", "email", "message"]);
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(submission().validate(), Ok(()));
    }

    #[test]
    fn test_each_field_required() {
        let mut s = submission();
        s.name = "   ".to_string();
        assert_eq!(s.validate(), Err(ContactError::Required("name")));

        let mut s = submission();
        s.email.clear();
        assert_eq!(s.validate(), Err(ContactError::Required("email")));

        let mut s = submission();
        s.message.clear();
        assert_eq!(s.validate(), Err(ContactError::Required("message")));
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(validate_email("a@b"), Ok(()));
        assert_eq!(validate_email("nobody"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_email("@b.com"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_email("a@"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_email("a@b@c"), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Required("message").to_string(),
            "Please fill in the message field"
        );
    }
}
