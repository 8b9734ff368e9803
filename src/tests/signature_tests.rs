//! tests/signature_tests.rs
//! Pruebas del servicio de firma HMAC.

#[cfg(test)]
mod tests {
    use crate::services::signature_service::sign;

    const SECRET: &str = "clave-super-secreta";

    #[test]
    fn test_signature_is_deterministic() {
        let a = sign(SECRET, "GEThttps://portal.example.com/calls?start_id=100");
        let b = sign(SECRET, "GEThttps://portal.example.com/calls?start_id=100");
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_is_lowercase_hex_64() {
        let sig = sign(SECRET, "GEThttps://portal.example.com/calls/42");
        assert_eq!(sig.len(), 64, "HMAC-SHA256 hex debe tener 64 caracteres");
        assert!(
            sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "La firma debe ser hex en minúsculas"
        );
    }

    #[test]
    fn test_signature_changes_with_secret() {
        let data = "GEThttps://portal.example.com/calls?start_id=100";
        assert_ne!(sign("secreto-a", data), sign("secreto-b", data));
    }

    #[test]
    fn test_signature_changes_with_request_data() {
        // Inputs vecinos (start_id 100 vs 101) producen firmas distintas
        let a = sign(SECRET, "GEThttps://portal.example.com/calls?start_id=100");
        let b = sign(SECRET, "GEThttps://portal.example.com/calls?start_id=101");
        assert_ne!(a, b);
    }

    #[test]
    fn test_signature_changes_with_method_and_path() {
        let base = sign(SECRET, "GEThttps://portal.example.com/calls/42");
        let other_method = sign(SECRET, "POSThttps://portal.example.com/calls/42");
        let other_path = sign(SECRET, "GEThttps://portal.example.com/calls/43");
        assert_ne!(base, other_method);
        assert_ne!(base, other_path);
    }
}
