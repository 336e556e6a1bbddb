//! Form input validation shared by every page.
//!
//! Passwords follow a single rule set: at least eight characters with an
//! uppercase letter, a lowercase letter, a digit and a symbol.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El campo {0} es obligatorio.")]
    Required(&'static str),
    #[error("Introduce un correo electrónico válido.")]
    Email,
    #[error("La contraseña debe tener al menos {} caracteres.", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("La contraseña debe incluir mayúsculas, minúsculas, números y un símbolo.")]
    PasswordComposition,
    #[error("Las contraseñas no coinciden.")]
    PasswordMismatch,
    #[error("El nombre solo puede contener letras y espacios (mínimo {}).", MIN_NAME_LEN)]
    Name,
    #[error("Introduce un importe válido mayor que cero.")]
    Amount,
    #[error("Introduce una fecha válida.")]
    Date,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn name_regex() -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| {
        Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s]+$").expect("name pattern is valid")
    })
}

/// Trimmed, non-empty value of a required field.
pub fn validate_required<'a>(
    value: &'a str,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed)
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::Length,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Symbol,
    ];

    pub fn hint(&self) -> &'static str {
        match self {
            PasswordRule::Length => "Al menos 8 caracteres",
            PasswordRule::Uppercase => "Una letra mayúscula",
            PasswordRule::Lowercase => "Una letra minúscula",
            PasswordRule::Digit => "Un número",
            PasswordRule::Symbol => "Un símbolo (!@#$...)",
        }
    }

    pub fn is_met(&self, password: &str) -> bool {
        match self {
            PasswordRule::Length => password.chars().count() >= MIN_PASSWORD_LEN,
            PasswordRule::Uppercase => password.chars().any(char::is_uppercase),
            PasswordRule::Lowercase => password.chars().any(char::is_lowercase),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Symbol => password
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
        }
    }
}

/// Every rule paired with whether `password` satisfies it.
pub fn password_checks(password: &str) -> Vec<(PasswordRule, bool)> {
    PasswordRule::ALL
        .iter()
        .map(|rule| (*rule, rule.is_met(password)))
        .collect()
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !PasswordRule::Length.is_met(password) {
        return Err(ValidationError::PasswordTooShort);
    }
    if PasswordRule::ALL.iter().all(|rule| rule.is_met(password)) {
        Ok(())
    } else {
        Err(ValidationError::PasswordComposition)
    }
}

pub fn is_valid_password(password: &str) -> bool {
    validate_password(password).is_ok()
}

pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if password == confirmation {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.chars().count() >= MIN_NAME_LEN && name_regex().is_match(trimmed) {
        Ok(())
    } else {
        Err(ValidationError::Name)
    }
}

pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

/// Parse a positive amount typed with either `.` or `,` as decimal mark.
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let normalized = input.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok((value * 100.0).round() / 100.0),
        _ => Err(ValidationError::Amount),
    }
}

/// Like [`parse_amount`] but zero is allowed (opening balances).
pub fn parse_balance(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok((value * 100.0).round() / 100.0),
        _ => Err(ValidationError::Amount),
    }
}

pub fn validate_date(input: &str) -> Result<chrono::NaiveDate, ValidationError> {
    crate::models::parse_date(input).ok_or(ValidationError::Date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_examples() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("  ana.pérez@correo.es "));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user example@mail.com"));
        assert!(!is_valid_email("user@mail"));
    }

    #[test]
    fn password_requires_full_composition() {
        assert!(is_valid_password("Segura#2024"));
        assert_eq!(validate_password("Ab1!"), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            validate_password("sinmayusculas1!"),
            Err(ValidationError::PasswordComposition)
        );
        assert_eq!(
            validate_password("SINMINUSCULAS1!"),
            Err(ValidationError::PasswordComposition)
        );
        assert_eq!(
            validate_password("SinNumeros!!"),
            Err(ValidationError::PasswordComposition)
        );
        assert_eq!(
            validate_password("SinSimbolo123"),
            Err(ValidationError::PasswordComposition)
        );
    }

    #[test]
    fn six_character_password_rejected() {
        assert!(!is_valid_password("Ab1!cd"));
    }

    #[test]
    fn checklist_reports_each_rule() {
        let checks = password_checks("abc");
        assert_eq!(checks.len(), 5);
        assert_eq!(checks[0], (PasswordRule::Length, false));
        assert_eq!(checks[2], (PasswordRule::Lowercase, true));
    }

    #[test]
    fn names_allow_spanish_letters() {
        assert!(is_valid_name("José Núñez"));
        assert!(is_valid_name("Ana"));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("  "));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("ana_maria"));
    }

    #[test]
    fn required_trims_whitespace() {
        assert_eq!(validate_required("  hola ", "nombre"), Ok("hola"));
        assert_eq!(
            validate_required("   ", "nombre"),
            Err(ValidationError::Required("nombre"))
        );
        assert_eq!(
            ValidationError::Required("nombre").to_string(),
            "El campo nombre es obligatorio."
        );
    }

    #[test]
    fn confirmation_must_match() {
        assert!(validate_password_confirmation("a", "a").is_ok());
        assert_eq!(
            validate_password_confirmation("a", "b"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn amounts_accept_comma_decimal() {
        assert_eq!(parse_amount("12,5"), Ok(12.5));
        assert_eq!(parse_amount(" 3.333 "), Ok(3.33));
        assert_eq!(parse_amount("0"), Err(ValidationError::Amount));
        assert_eq!(parse_amount("-4"), Err(ValidationError::Amount));
        assert_eq!(parse_amount("abc"), Err(ValidationError::Amount));
        assert_eq!(parse_amount("inf"), Err(ValidationError::Amount));
    }

    #[test]
    fn balances_allow_zero_and_negative() {
        assert_eq!(parse_balance(""), Ok(0.0));
        assert_eq!(parse_balance("-20,10"), Ok(-20.1));
        assert_eq!(parse_balance("x"), Err(ValidationError::Amount));
    }

    #[test]
    fn dates_parse_iso() {
        assert!(validate_date("2024-02-29").is_ok());
        assert_eq!(validate_date("29/02/2024"), Err(ValidationError::Date));
    }
}
