mod bearer_auth;

pub use bearer_auth::{AuthError, AuthErrorResponse, bearer_auth_middleware, check_bearer};
