use sha2::{Digest, Sha256};

/// Normaliza un e-mail antes de guardarlo: recorta espacios y pasa a
/// minúsculas la parte del dominio (después de la última `@`). La parte
/// local se respeta tal cual.
pub fn normalize_email(email: &str) -> String {
  let email = email.trim();

  match email.rsplit_once('@') {
    Some((local, dominio)) => format!("{local}@{}", dominio.to_lowercase()),
    None => email.to_string(),
  }
}

/// Hashea una contraseña con SHA-256 salada.
///
/// El formato almacenado es `sha256$<salt>$<hex>`, autocontenido para poder
/// verificar después sin estado externo.
pub fn hash_password(password: &str, salt: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(salt.as_bytes());
  hasher.update(password.as_bytes());
  let digest = hasher.finalize();

  format!("sha256${salt}${:x}", digest)
}

/// Verifica una contraseña contra un hash almacenado.
pub fn verify_password(password: &str, almacenado: &str) -> bool {
  let mut partes = almacenado.splitn(3, '$');

  match (partes.next(), partes.next(), partes.next()) {
    (Some("sha256"), Some(salt), Some(_)) => hash_password(password, salt) == almacenado,
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normaliza_el_dominio_en_minusculas() {
    assert_eq!(normalize_email("Ana.Silva@EXAMPLE.Com"), "Ana.Silva@example.com");
    assert_eq!(normalize_email("  ana@Example.com  "), "ana@example.com");
  }

  #[test]
  fn normaliza_solo_despues_de_la_ultima_arroba() {
    assert_eq!(normalize_email("a@b@DOMINIO.COM"), "a@b@dominio.com");
    assert_eq!(normalize_email("sin-arroba"), "sin-arroba");
  }

  #[test]
  fn hash_y_verificacion_coinciden() {
    let hash = hash_password("segredo1", "abcd");

    assert!(hash.starts_with("sha256$abcd$"));
    assert!(verify_password("segredo1", &hash));
    assert!(!verify_password("segredo2", &hash));
  }

  #[test]
  fn verificar_formato_desconocido_devuelve_false() {
    assert!(!verify_password("x", "md5$a$b"));
    assert!(!verify_password("x", "basura"));
  }

  #[test]
  fn salts_distintos_producen_hashes_distintos() {
    assert_ne!(hash_password("segredo1", "a"), hash_password("segredo1", "b"));
  }
}
