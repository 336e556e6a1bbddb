//! Uniform error shape for every call to the backend.

use serde::Deserialize;
use thiserror::Error;

pub const NETWORK_MESSAGE: &str =
    "No se pudo conectar con el servidor. Revisa tu conexión a internet.";
pub const SERVER_MESSAGE: &str = "Error del servidor. Inténtalo de nuevo más tarde.";
pub const GENERIC_MESSAGE: &str = "Ha ocurrido un error inesperado.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("{}", NETWORK_MESSAGE)]
    Network,

    /// Non-2xx response with a JSON body.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_MESSAGE))]
    Http { status: u16, message: Option<String> },

    /// A body that could not be decoded.
    #[error("{}", SERVER_MESSAGE)]
    Malformed { status: u16 },

    /// The request body could not be built.
    #[error("No se pudo preparar la solicitud: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MessageField {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    message: Option<MessageField>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body text.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => {
                let message = match parsed.message {
                    Some(MessageField::One(m)) => Some(m),
                    Some(MessageField::Many(list)) if !list.is_empty() => Some(list.join(", ")),
                    _ => parsed.error,
                }
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty());
                ApiError::Http { status, message }
            }
            Err(_) => ApiError::Malformed { status },
        }
    }

    /// `0` when no response was received.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Network | ApiError::Encode(_) => 0,
            ApiError::Http { status, .. } | ApiError::Malformed { status } => *status,
        }
    }

    /// User-facing text: the backend message when present, else a fallback.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == 401
    }
}

/// Screens that carry their own copy for well-known statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    AdminLogin,
    Register,
    Recover,
    Reset,
    ChangePassword,
    DeleteAccount,
    Logout,
}

impl AuthFlow {
    /// Message for a failed call made from this screen.
    pub fn message_for(&self, err: &ApiError) -> String {
        if let Some(copy) = self.status_copy(err) {
            return copy.to_string();
        }
        err.message()
    }

    fn status_copy(&self, err: &ApiError) -> Option<&'static str> {
        let ApiError::Http { status, .. } = err else {
            return None;
        };
        let copy = match (self, status) {
            (AuthFlow::Login | AuthFlow::AdminLogin, 401) => "Credenciales inválidas.",
            (AuthFlow::AdminLogin, 403) => "No tienes permisos de administrador.",
            (AuthFlow::Login, 403) => "Tu cuenta no tiene acceso. Contacta con soporte.",
            (AuthFlow::Login | AuthFlow::AdminLogin, 423) => {
                "Cuenta bloqueada temporalmente por demasiados intentos."
            }
            (AuthFlow::Register, 409) => "Este correo ya está registrado.",
            (AuthFlow::Recover, 404) => "No existe ninguna cuenta con ese correo.",
            (AuthFlow::Reset, 400 | 401 | 404) => {
                "El enlace de recuperación no es válido o ha caducado."
            }
            (AuthFlow::ChangePassword, 401) => "La contraseña actual no es correcta.",
            (AuthFlow::DeleteAccount, 401) => "Tu sesión ha caducado. Inicia sesión de nuevo.",
            (AuthFlow::Logout, 500..=599) => "No se pudo cerrar la sesión. Inténtalo de nuevo.",
            (_, 429) => "Demasiados intentos. Espera unos minutos antes de volver a intentarlo.",
            _ => return None,
        };
        Some(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn json_body_message_surfaces_verbatim() {
        let err =
            ApiError::from_error_body(400, r#"{"message":"Saldo insuficiente","statusCode":400}"#);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Saldo insuficiente");
    }

    #[test]
    fn array_message_joined() {
        let err = ApiError::from_error_body(
            422,
            r#"{"message":["email must be an email","password too short"]}"#,
        );
        assert_eq!(err.message(), "email must be an email, password too short");
    }

    #[test]
    fn json_without_message_uses_fallback() {
        let err = ApiError::from_error_body(500, r#"{"statusCode":500}"#);
        assert_matches!(err, ApiError::Http { status: 500, message: None });
        assert_eq!(err.message(), GENERIC_MESSAGE);
    }

    #[test]
    fn html_body_is_malformed() {
        let err = ApiError::from_error_body(502, "<html>Bad Gateway</html>");
        assert_matches!(err, ApiError::Malformed { status: 502 });
        assert_eq!(err.message(), SERVER_MESSAGE);
    }

    #[test]
    fn network_failure_has_status_zero() {
        assert_eq!(ApiError::Network.status_code(), 0);
        assert_eq!(ApiError::Network.message(), NETWORK_MESSAGE);
    }

    #[test]
    fn login_401_gets_credentials_copy() {
        let err = ApiError::from_error_body(401, r#"{"message":"Unauthorized"}"#);
        assert_eq!(AuthFlow::Login.message_for(&err), "Credenciales inválidas.");
    }

    #[test]
    fn register_409_gets_duplicate_copy() {
        let err = ApiError::from_error_body(409, r#"{"message":"conflict"}"#);
        assert_eq!(
            AuthFlow::Register.message_for(&err),
            "Este correo ya está registrado."
        );
    }

    #[test]
    fn unmapped_status_keeps_backend_message() {
        let err = ApiError::from_error_body(400, r#"{"message":"Nickname requerido"}"#);
        assert_eq!(AuthFlow::Register.message_for(&err), "Nickname requerido");
    }

    #[test]
    fn rate_limit_copy_applies_everywhere() {
        let err = ApiError::Http { status: 429, message: None };
        assert!(AuthFlow::Recover.message_for(&err).starts_with("Demasiados intentos"));
    }

    #[test]
    fn network_error_not_remapped() {
        assert_eq!(AuthFlow::Login.message_for(&ApiError::Network), NETWORK_MESSAGE);
    }

    #[test]
    fn failed_logout_gets_its_own_copy() {
        let err = ApiError::Http { status: 503, message: None };
        assert_eq!(
            AuthFlow::Logout.message_for(&err),
            "No se pudo cerrar la sesión. Inténtalo de nuevo."
        );
        assert_eq!(AuthFlow::Logout.message_for(&ApiError::Network), NETWORK_MESSAGE);
    }
}
