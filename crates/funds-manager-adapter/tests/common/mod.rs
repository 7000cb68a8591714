/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for funds-manager-adapter tests

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use funds_manager_adapter::TokenClaims;
use wiremock::MockServer;

/// RSA private key used to mint test tokens
pub const TEST_PRIVATE_KEY: &[u8] = include_bytes!("../fixtures/fireblocks_test_key.pem");

/// Public half of [`TEST_PRIVATE_KEY`]
pub const TEST_PUBLIC_KEY: &[u8] = include_bytes!("../fixtures/fireblocks_test_key.pub.pem");

pub const TEST_API_KEY: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Path of the private key fixture on disk
#[allow(dead_code)]
pub fn test_private_key_path() -> String {
    format!(
        "{}/tests/fixtures/fireblocks_test_key.pem",
        env!("CARGO_MANIFEST_DIR")
    )
}

/// Verify the RS256 signature and decode claims without checking expiry
#[allow(dead_code)]
pub fn decode_claims(token: &str) -> TokenClaims {
    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY).expect("public key fixture");
    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    decode::<TokenClaims>(token, &key, &validation)
        .expect("token should verify")
        .claims
}

/// Verify the RS256 signature and expiry against the wall clock
#[allow(dead_code)]
pub fn verify_live(token: &str) -> bool {
    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY).expect("public key fixture");
    let mut validation = Validation::new(Algorithm::RS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "iat", "sub"]);
    decode::<TokenClaims>(token, &key, &validation).is_ok()
}
