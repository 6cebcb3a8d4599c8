//! Unit tests for token issuing and verification.

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::Algorithm;
    use rstest::rstest;

    use crate::auth::{Claims, Role};
    use crate::config::JwtSettings;
    use crate::jwt::{JwtConfig, JwtError, MAX_ACCESS_TOKEN_EXPIRY_SECS, TokenService};
    use crate::types::UserId;

    fn test_service() -> TokenService {
        TokenService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expires_secs: 900,
        })
    }

    /// Flips the lowest bit of the first signature character.
    fn flip_signature_bit(token: &str) -> String {
        const ALPHABET: &[u8] =
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
        let sig_start = token.rfind('.').unwrap() + 1;
        let mut bytes = token.as_bytes().to_vec();
        let pos = ALPHABET.iter().position(|&c| c == bytes[sig_start]).unwrap();
        bytes[sig_start] = ALPHABET[pos ^ 1];
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_verify_returns_issued_claims() {
        let service = test_service();
        let user_id = UserId::new();

        let token = service.issue(user_id, "teller@riocaja.ec", Role::Operator).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "teller@riocaja.ec");
        assert_eq!(claims.role, Role::Operator);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_verify_round_trips_exact_claims() {
        let service = test_service();
        let expires_at = Utc::now() + Duration::minutes(5);
        let expected = Claims::new(UserId::new(), "admin@riocaja.ec", Role::Admin, expires_at);

        let token = service
            .issue_until(expected.sub, &expected.email, expected.role, expires_at)
            .unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, expected.sub);
        assert_eq!(claims.email, expected.email);
        assert_eq!(claims.role, expected.role);
        assert_eq!(claims.exp, expected.exp);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = test_service();
        let token = service
            .issue_until(
                UserId::new(),
                "late@riocaja.ec",
                Role::Reader,
                Utc::now() - Duration::seconds(5),
            )
            .unwrap();

        assert!(matches!(service.verify(&token), Err(JwtError::Expired)));
    }

    #[test]
    fn test_flipped_signature_bit_is_rejected() {
        let service = test_service();
        let token = service.issue(UserId::new(), "a@b.ec", Role::Admin).unwrap();
        let tampered = flip_signature_bit(&token);

        assert_ne!(token, tampered);
        assert!(matches!(service.verify(&tampered), Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = test_service()
            .issue(UserId::new(), "a@b.ec", Role::Reader)
            .unwrap();
        let other = TokenService::new(JwtConfig {
            secret: "different-secret".into(),
            ..JwtConfig::default()
        });

        assert!(matches!(other.verify(&token), Err(JwtError::Invalid(_))));
    }

    #[rstest]
    #[case("")]
    #[case("invalid.token.here")]
    #[case("only-one-segment")]
    fn test_malformed_token_is_rejected(#[case] token: &str) {
        assert!(matches!(
            test_service().verify(token),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_role_claim_is_serialized_as_rol() {
        let claims = Claims::new(
            UserId::new(),
            "x@y.ec",
            Role::Reader,
            Utc::now() + Duration::hours(1),
        );
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["rol"], "lector");
        assert!(json.get("role").is_none());
    }

    #[test]
    fn test_claims_iat_is_current_time() {
        let before = Utc::now().timestamp();
        let claims = Claims::new(
            UserId::new(),
            "x@y.ec",
            Role::Admin,
            Utc::now() + Duration::hours(1),
        );
        let after = Utc::now().timestamp();

        assert!(claims.iat >= before);
        assert!(claims.iat <= after);
    }

    #[rstest]
    #[case("HS256", Algorithm::HS256)]
    #[case("HS384", Algorithm::HS384)]
    #[case("HS512", Algorithm::HS512)]
    fn test_config_accepts_hmac_algorithms(#[case] name: &str, #[case] expected: Algorithm) {
        let settings = JwtSettings {
            secret: "s".into(),
            algorithm: name.into(),
            access_token_expiry_secs: 60,
        };
        let config = JwtConfig::try_from(&settings).unwrap();

        assert_eq!(config.algorithm, expected);
        assert_eq!(config.access_token_expires_secs, 60);
    }

    #[rstest]
    #[case("RS256")]
    #[case("none")]
    fn test_config_rejects_non_hmac_algorithms(#[case] name: &str) {
        let settings = JwtSettings {
            secret: "s".into(),
            algorithm: name.into(),
            access_token_expiry_secs: 60,
        };

        assert!(matches!(
            JwtConfig::try_from(&settings),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(u64::try_from(MAX_ACCESS_TOKEN_EXPIRY_SECS).unwrap() + 1)]
    #[case(u64::MAX)]
    fn test_config_rejects_out_of_range_expiry(#[case] secs: u64) {
        let settings = JwtSettings {
            secret: "s".into(),
            algorithm: "HS256".into(),
            access_token_expiry_secs: secs,
        };

        assert!(matches!(
            JwtConfig::try_from(&settings),
            Err(JwtError::InvalidExpiry(got)) if got == secs
        ));
    }

    #[test]
    fn test_unrepresentable_expiry_fails_instead_of_panicking() {
        let service = TokenService::new(JwtConfig {
            access_token_expires_secs: i64::MAX,
            ..JwtConfig::default()
        });

        assert!(matches!(
            service.issue(UserId::new(), "ana@example.com", Role::Reader),
            Err(JwtError::Encoding(_))
        ));
    }

    #[test]
    fn test_token_signed_with_other_algorithm_is_rejected() {
        let hs512 = TokenService::new(JwtConfig {
            algorithm: Algorithm::HS512,
            ..JwtConfig::default()
        });
        let token = hs512.issue(UserId::new(), "a@b.ec", Role::Admin).unwrap();
        let hs256 = TokenService::new(JwtConfig::default());

        assert!(hs256.verify(&token).is_err());
    }
}
