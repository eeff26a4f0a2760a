//! # Form validation rules
//!
//! The field checks the auth and transaction forms run before anything is sent
//! to the API. Each rule returns `Ok(())` or the exact message the form shows
//! under the field. Cross-field checks (confirm password) stay in the views.

const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// At least 3 characters, letters and digits only.
pub fn username(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Username is required");
    }
    if value.len() >= 3 && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err("Username must be at least 3 characters and alphanumeric")
    }
}

/// At least 8 characters drawn from letters, digits and `@$!%*?&`, with at
/// least one uppercase letter, one digit and one special character.
pub fn password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Password is required");
    }
    let allowed =
        |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);
    let strong = value.len() >= 8
        && value.chars().all(allowed)
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    if strong {
        Ok(())
    } else {
        Err("Password must be at least 8 characters, include one uppercase letter, one number, and one special character")
    }
}

pub fn first_name(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("First name is required");
    }
    if letters_only(value) {
        Ok(())
    } else {
        Err("First name must only contain letters")
    }
}

pub fn last_name(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Last name is required");
    }
    if letters_only(value) {
        Ok(())
    } else {
        Err("Last name must only contain letters")
    }
}

/// Exactly 10 digits.
pub fn phone_number(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Phone number is required");
    }
    if value.len() == 10 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Phone number must be 10 digits")
    }
}

/// A money amount entered as text: must parse and not be negative.
pub fn amount(value: &str) -> Result<f64, &'static str> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => Ok(parsed),
        _ => Err("Amount must be a non-negative number"),
    }
}

/// The owner's sharing percent; the slider keeps it in range but the check
/// guards hand-entered values too.
pub fn sharing_percent(value: u8) -> Result<(), &'static str> {
    if value <= 100 {
        Ok(())
    } else {
        Err("Sharing percent must be between 0 and 100")
    }
}

fn letters_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(username("abc").is_ok());
        assert!(username("abcd2").is_ok());
        assert!(username("JohnDoe99").is_ok());

        assert_eq!(username(""), Err("Username is required"));
        assert!(username("ab").is_err());
        assert!(username("john doe").is_err());
        assert!(username("john_doe").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(password("Passw0rd!").is_ok());
        assert!(password("A1@aaaaa").is_ok());

        assert_eq!(password(""), Err("Password is required"));
        // Too short
        assert!(password("A1@a").is_err());
        // Missing uppercase / digit / special
        assert!(password("passw0rd!").is_err());
        assert!(password("Password!").is_err());
        assert!(password("Passw0rd").is_err());
        // Characters outside the allowed set
        assert!(password("Passw0rd! ").is_err());
        assert!(password("Passw0rd#").is_err());
    }

    #[test]
    fn test_name_rules() {
        assert!(first_name("John").is_ok());
        assert!(last_name("Doe").is_ok());

        assert_eq!(first_name(""), Err("First name is required"));
        assert_eq!(last_name(""), Err("Last name is required"));
        assert!(first_name("John2").is_err());
        assert!(last_name("O'Brien").is_err());
        assert!(last_name("Doe ").is_err());
    }

    #[test]
    fn test_phone_number_rules() {
        assert!(phone_number("0412345678").is_ok());

        assert_eq!(phone_number(""), Err("Phone number is required"));
        assert!(phone_number("123456789").is_err());
        assert!(phone_number("12345678901").is_err());
        assert!(phone_number("04123456a8").is_err());
    }

    #[test]
    fn test_amount_parses_and_bounds() {
        assert_eq!(amount("1500"), Ok(1500.0));
        assert_eq!(amount("0"), Ok(0.0));
        assert_eq!(amount(" 12.50 "), Ok(12.5));

        assert!(amount("").is_err());
        assert!(amount("-5").is_err());
        assert!(amount("twelve").is_err());
        assert!(amount("inf").is_err());
    }

    #[test]
    fn test_sharing_percent_range() {
        assert!(sharing_percent(0).is_ok());
        assert!(sharing_percent(50).is_ok());
        assert!(sharing_percent(100).is_ok());
        assert!(sharing_percent(101).is_err());
    }
}
