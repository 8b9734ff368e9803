//! services/signature_service.rs
//! Firma HMAC-SHA256 de las peticiones entrantes.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Calcula la firma HMAC-SHA256 (hex en minúsculas) de la cadena canónica
/// de la petición, usando el secreto compartido con el portal.
///
/// La cadena canónica es `"{METHOD}{PORTAL}{PATH}?{QUERY}"`, o sin el
/// sufijo `?{QUERY}` cuando la ruta no lleva parámetros.
pub fn sign(secret_key: &str, request_data: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC acepta claves de cualquier tamaño");
    mac.update(request_data.as_bytes());
    hex_encode(mac.finalize().into_bytes())
}

fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
}
