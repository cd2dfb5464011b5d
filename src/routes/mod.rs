use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;

pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_token);

    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/user")
            .service(
                web::scope("/create")
                    .service(user::create::create)
            )
            .service(
                web::scope("/token")
                    .service(user::token::token)
            )
            .service(
                web::scope("/me")
                    .service(user::me::me)
                    .service(user::me::update_me)
                    .wrap(user_auth.clone())
            )
            .service(
                web::scope("/logout")
                    .service(user::logout::logout)
                    .wrap(user_auth)
            )
    );
}
