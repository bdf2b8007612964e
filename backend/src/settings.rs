//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `QA_*` environment variables or a config
//! file. The database target is never compiled in: it is read from
//! `database_url` or, preferably, from the file named by `database_url_file`
//! (for example a mounted secret).

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration values for the HTTP server and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QA")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 4000)]
    pub port: u16,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// File containing the PostgreSQL connection URL. Wins over
    /// `database_url` when both are set.
    pub database_url_file: Option<PathBuf>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the host is not an IP address.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let ip = self.host().parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid host `{}`: {err}", self.host()),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Resolve the database URL.
    ///
    /// # Errors
    ///
    /// Fails when neither key is set, when the file cannot be read, or when
    /// the resolved URL is empty.
    pub fn database_url(&self) -> io::Result<String> {
        let url = match (&self.database_url_file, &self.database_url) {
            (Some(path), _) => read_secret(path)?,
            (None, Some(url)) => url.trim().to_owned(),
            (None, None) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "set QA_DATABASE_URL_FILE or QA_DATABASE_URL",
                ));
            }
        };
        if url.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "database URL is empty",
            ));
        }
        Ok(url)
    }
}

fn read_secret(path: &Path) -> io::Result<String> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    let contents = dir.read_to_string(file_name).map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("failed to read database URL from {}: {err}", path.display()),
        )
    })?;
    Ok(contents.trim().to_owned())
}
