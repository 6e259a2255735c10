use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::user::User,
    repositories::user::{UserRepository, UserRepositoryTrait},
    services::auth::BLOCKED_USER_MESSAGE,
    state::AppState,
    utils::jwt::{verify_access_token, Claims},
};

/// Which signed-in roles a route group admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTier {
    AnyUser,
    Volunteer,
    Admin,
}

impl AccessTier {
    pub fn admits(self, user: &User) -> bool {
        match self {
            AccessTier::AnyUser => true,
            AccessTier::Volunteer => user.can_act_as_volunteer(),
            AccessTier::Admin => user.is_admin(),
        }
    }
}

pub async fn auth(state: State<AppState>, request: Request, next: Next) -> Result<Response, AppError> {
    guard(AccessTier::AnyUser, state, request, next).await
}

// Volunteer routes also admit administrators.
pub async fn auth_volunteer(
    state: State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    guard(AccessTier::Volunteer, state, request, next).await
}

pub async fn auth_admin(
    state: State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    guard(AccessTier::Admin, state, request, next).await
}

async fn guard(
    tier: AccessTier,
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let (claims, user) =
        authenticate_request(auth_header, &state.pool, &state.config.jwt_secret).await?;

    if !tier.admits(&user) {
        tracing::debug!(user_id = user.user_id, role = %user.role, ?tier, "Access tier denied");
        return Err(AppError::Forbidden("Forbidden".into()));
    }

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        let token = rest.trim();
        (!token.is_empty()).then_some(token)
    } else {
        None
    }
}

async fn authenticate_request(
    auth_header: Option<&str>,
    pool: &PgPool,
    secret: &str,
) -> Result<(Claims, User), AppError> {
    let unauthorized = || AppError::Unauthorized("Unauthorized".into());

    let token = auth_header.and_then(parse_bearer_token).ok_or_else(unauthorized)?;
    let claims = verify_access_token(token, secret).map_err(|_| unauthorized())?;
    let user_id = claims.user_id().map_err(|_| unauthorized())?;

    let user = UserRepository::new()
        .find_by_id(pool, user_id)
        .await?
        .ok_or_else(unauthorized)?;

    if !user.is_active() {
        return Err(AppError::Forbidden(BLOCKED_USER_MESSAGE.into()));
    }

    Ok((claims, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{sample_user, UserRole};

    #[test]
    fn parse_bearer_token_accepts_any_scheme_casing() {
        assert_eq!(parse_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("BEARER   abc "), Some("abc"));
        assert_eq!(parse_bearer_token("Basic abc"), None);
        assert_eq!(parse_bearer_token("Bearer "), None);
        assert_eq!(parse_bearer_token("abc"), None);
    }

    #[test]
    fn access_tiers_match_roles() {
        let user = sample_user(1, UserRole::User);
        let volunteer = sample_user(2, UserRole::Volunteer);
        let admin = sample_user(3, UserRole::Admin);

        assert!(AccessTier::AnyUser.admits(&user));
        assert!(!AccessTier::Volunteer.admits(&user));
        assert!(AccessTier::Volunteer.admits(&volunteer));
        assert!(AccessTier::Volunteer.admits(&admin));
        assert!(!AccessTier::Admin.admits(&volunteer));
        assert!(AccessTier::Admin.admits(&admin));
    }

    #[tokio::test]
    async fn missing_or_invalid_token_is_unauthorized() {
        let pool = crate::services::test_support::lazy_pool();
        let err = authenticate_request(None, &pool, "secret").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        let err = authenticate_request(Some("Bearer not-a-jwt"), &pool, "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
