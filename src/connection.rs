//! Lazily created, self-healing device handle.

use log::{info, warn};

use crate::device::{Connector, NanoleafApi};
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Owns at most one device handle and recreates it when it stops answering.
///
/// No handle exists until the first call to [`Connection::ensure_connected`].
/// After that every call probes the existing handle once; a failed probe
/// drops it and a single new connection attempt is made. There is no retry:
/// if the new attempt fails its error is returned and the next call starts
/// over.
pub struct Connection<C: Connector> {
    connector: C,
    device: Option<C::Device>,
}

impl<C: Connector> Connection<C> {
    pub fn new(connector: C) -> Self {
        Connection {
            connector,
            device: None,
        }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn is_connected(&self) -> bool {
        self.device.is_some()
    }

    /// Return a live handle, creating or recreating it as needed.
    pub async fn ensure_connected(&mut self) -> Result<&C::Device> {
        let probe = match &self.device {
            Some(device) => device.check_connection().await,
            None => Ok(()),
        };
        if let Err(err) = probe {
            warn!("device stopped answering, reconnecting: {}", err);
            self.device = None;
        }

        let device = match self.device.take() {
            Some(device) => device,
            None => {
                let device = self.connector.connect().await?;
                info!("device handle created");
                device
            }
        };

        Ok(self.device.insert(device))
    }
}
