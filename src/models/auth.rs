//! Identity claims carried by the session cookie.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, web};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// User claims decoded from the identity JWT issued by the auth service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Subject, the user's email address.
    pub sub: String,
    pub name: String,
    pub email: String,
    /// Role identifiers granted to this session.
    pub roles: Vec<String>,
    pub exp: usize,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = Identity::from_request(req, payload)
            .into_inner()
            .map_err(|_| ErrorUnauthorized("No identity"))
            .and_then(|identity| {
                identity
                    .id()
                    .map_err(|_| ErrorUnauthorized("No identity token"))
            })
            .and_then(|token| {
                let server_config = req
                    .app_data::<web::Data<ServerConfig>>()
                    .ok_or_else(|| ErrorUnauthorized("Server configuration missing"))?;

                decode::<AuthenticatedUser>(
                    &token,
                    &DecodingKey::from_secret(server_config.secret.as_bytes()),
                    &Validation::new(Algorithm::HS256),
                )
                .map(|data| data.claims)
                .map_err(|_| ErrorUnauthorized("Invalid identity token"))
            });

        ready(result)
    }
}
