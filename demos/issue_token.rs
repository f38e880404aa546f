use dotenv::dotenv;
use drone_shop_backend::config::JwtConfig;
use drone_shop_backend::util::jwt::{JwtTokenVerifier, TokenVerifier};
use drone_shop_backend::util::logger::Logger;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Mint a bearer token for local testing of `PUT /users/{email}`.
///
/// Usage: `cargo run --example issue_token -- admin@example.com`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_result = dotenv();
    let logger = Logger::new()?;
    let _guards = logger.guards;

    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let jwt_config = match JwtConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!("JWT config incomplete ({}), falling back to defaults", e);
            JwtConfig::default()
        }
    };
    let verifier = JwtTokenVerifier::new(jwt_config);

    let email = std::env::args().nth(1).unwrap_or_else(|| "admin@example.com".to_string());
    let user_id = Uuid::new_v4();
    debug!(user_id = %user_id, email = %email, "Issuing identity token");

    let token = match verifier.issue_token(&user_id.to_string(), &email) {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to issue token: {}", e);
            return Err(Box::<dyn std::error::Error>::from(e));
        }
    };

    // Round-trip through the same path the server uses
    match verifier.verify(&token).await {
        Ok(subject) => info!("Token verified for subject: {}", subject),
        Err(e) => {
            error!("Freshly issued token failed verification: {}", e);
            return Err(Box::<dyn std::error::Error>::from(e));
        }
    }

    println!("Authorization: Bearer {}", token);
    Ok(())
}
