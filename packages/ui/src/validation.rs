//! Field rules shared by the sign-in and sign-up forms.
//!
//! Each check returns `Err(message)` with the text shown under the field.
//! Lengths are counted in characters, on the trimmed value for name and email
//! and on the raw value for password and bio.

use std::sync::LazyLock;

use regex::Regex;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 6;
pub const BIO_MAX: usize = 500;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub type FieldResult = Result<(), &'static str>;

pub fn validate_name(name: &str) -> FieldResult {
    let len = name.trim().chars().count();
    if len < NAME_MIN {
        return Err("Name must be at least 2 characters long");
    }
    if len > NAME_MAX {
        return Err("Name cannot exceed 50 characters");
    }
    Ok(())
}

/// Only the `local@domain.tld` shape is checked.
pub fn validate_email(email: &str) -> FieldResult {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err("Please enter a valid email address")
    }
}

pub fn validate_password(password: &str) -> FieldResult {
    if password.chars().count() < PASSWORD_MIN {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

pub fn validate_bio(bio: &str) -> FieldResult {
    if bio.chars().count() > BIO_MAX {
        return Err("Bio cannot exceed 500 characters");
    }
    Ok(())
}

/// Live counter under the bio field.
#[derive(Clone, Debug, PartialEq)]
pub struct BioCounter {
    pub text: String,
    pub over_limit: bool,
}

impl BioCounter {
    pub fn for_bio(bio: &str) -> Self {
        let len = bio.chars().count();
        Self {
            text: format!("{len}/{BIO_MAX} characters"),
            over_limit: len > BIO_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_boundaries() {
        assert!(validate_name("A").is_err());
        assert!(validate_name("Al").is_ok());
        assert!(validate_name(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_name(&"x".repeat(51)),
            Err("Name cannot exceed 50 characters")
        );
    }

    #[test]
    fn test_name_is_trimmed_before_counting() {
        assert!(validate_name("  A  ").is_err());
        assert!(validate_name("  Bo ").is_ok());
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        assert!(validate_name("Zoë").is_ok());
        assert!(validate_name(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "john.doe@example.com", " jane@uni.edu "] {
            assert!(validate_email(ok).is_ok(), "{ok} should pass");
        }
        for bad in [
            "",
            "plainaddress",
            "no-at.example.com",
            "a@b",
            "a b@c.com",
            "a@@b.com",
            "@b.com",
            "a@.",
        ] {
            assert!(validate_email(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn test_password_boundary() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_bio_counter_and_limit() {
        let at_limit = "b".repeat(500);
        assert!(validate_bio(&at_limit).is_ok());
        assert_eq!(
            BioCounter::for_bio(&at_limit),
            BioCounter {
                text: "500/500 characters".to_string(),
                over_limit: false
            }
        );

        let over = "b".repeat(501);
        assert!(validate_bio(&over).is_err());
        assert!(BioCounter::for_bio(&over).over_limit);
        assert_eq!(BioCounter::for_bio("").text, "0/500 characters");
    }
}
