//! config/app_config.rs
//! Configuración global de la aplicación, leída del entorno una sola vez
//! al arrancar. Los componentes la reciben ya construida; nadie vuelve a
//! consultar variables de entorno durante una petición.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host de PostgreSQL
    pub db_host: String,
    /// Nombre de la base de datos
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    /// Secreto compartido para firmar peticiones
    pub secret_key: String,
    /// URL base del portal contra la que se calcula la firma
    pub portal: String,
    /// Clave estática del header Authorization (Bearer)
    pub api_key: String,
    /// Carpeta donde viven las grabaciones
    pub file_directory: PathBuf,
}

impl AppConfig {
    /// Lee la configuración del entorno. Cualquier variable ausente es un
    /// error de arranque, nunca un error por petición.
    pub fn from_env() -> Result<Self> {
        Ok(AppConfig {
            db_host: required("HOST")?,
            db_name: required("DATABASE")?,
            db_user: required("USER")?,
            db_password: required("PASSWORD")?,
            secret_key: required("SECRET_KEY")?,
            portal: required("PORTAL")?,
            api_key: required("API_KEY")?,
            file_directory: PathBuf::from(required("FILE_DIRECTORY")?),
        })
    }

    /// URL de conexión a PostgreSQL. La contraseña va percent-encoded por
    /// si trae caracteres reservados.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            self.db_user,
            urlencoding::encode(&self.db_password),
            self.db_host,
            self.db_name
        )
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| anyhow!("No se definió {}", name))
}
