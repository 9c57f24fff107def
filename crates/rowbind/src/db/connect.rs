use crate::Result;

use rowbind_core::{
    driver::{Connection, Driver},
    Error,
};

use std::borrow::Cow;
use url::Url;

/// A driver chosen by the scheme of a connection URL.
#[derive(Debug)]
pub struct Connect {
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url}"))
        })?;

        let driver = match parsed.scheme() {
            "sqlite" => connect_sqlite(url)?,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database; scheme={scheme}; url={url}"
                )))
            }
        };

        Ok(Self { driver })
    }
}

impl Driver for Connect {
    fn url(&self) -> Cow<'_, str> {
        self.driver.url()
    }

    fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect()
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(rowbind_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
