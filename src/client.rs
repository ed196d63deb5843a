//! HTTP client for the Nanoleaf OpenAPI.

use std::time::Duration;

use log::debug;
use reqwest::{Response, StatusCode};
use serde_json::{Map, Value, json};

use crate::device::{Connector, DeviceInfo, NanoleafApi};
use crate::errors::Error;
use crate::types::DeviceColorMode;

type Result<T> = std::result::Result<T, Error>;

/// A handle to one panel controller on the local network.
///
/// Every request goes to `http://{addr}:{port}/api/v1/{token}`. The client
/// keeps no device state of its own; each getter is a live request.
///
/// # Example
///
/// ```ignore
/// use nanoleaf_lights_rs::{NanoleafApi, NanoleafClient};
///
/// let client = NanoleafClient::connect("192.168.1.50", NanoleafClient::PORT, "token").await?;
/// client.power_on().await?;
/// client.set_brightness(40).await?;
/// ```
#[derive(Debug, Clone)]
pub struct NanoleafClient {
    http: reqwest::Client,
    addr: String,
    base_url: String,
}

impl NanoleafClient {
    /// Default OpenAPI port of a Nanoleaf controller.
    pub const PORT: u16 = 16021;
    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Build a client without contacting the controller.
    pub fn new(addr: &str, port: u16, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| Error::http("build", e))?;

        Ok(NanoleafClient {
            http,
            addr: addr.to_string(),
            base_url: format!("http://{addr}:{port}/api/v1/{token}"),
        })
    }

    /// Build a client and make sure the controller answers.
    pub async fn connect(addr: &str, port: u16, token: &str) -> Result<Self> {
        let client = Self::new(addr, port, token)?;
        client.check_connection().await?;
        debug!("connected to nanoleaf controller at {}", addr);
        Ok(client)
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    async fn get(&self, path: &str) -> Result<Value> {
        debug!("GET {} {}", self.addr, path);
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| Error::http("get", e))?;
        let resp = self.check_status(path, resp)?;

        let body = resp.bytes().await.map_err(|e| Error::http("read", e))?;
        let value: Value = serde_json::from_slice(&body).map_err(Error::JsonLoad)?;
        debug!("response from {}: {}", self.addr, value);
        Ok(value)
    }

    async fn put(&self, path: &str, body: &Value) -> Result<()> {
        debug!("PUT {} {} {}", self.addr, path, body);
        let resp = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::http("put", e))?;
        self.check_status(path, resp)?;
        Ok(())
    }

    /// `GET /state/{key}` answers `{"value": ...}`; unwrap it.
    async fn get_state_value(&self, key: &str) -> Result<Value> {
        let path = format!("/state/{key}");
        let mut body = self.get(&path).await?;
        match body.get_mut("value").map(Value::take) {
            Some(value) => Ok(value),
            None => Err(Error::unexpected_response(&path, &body)),
        }
    }

    async fn get_state_int(&self, key: &str) -> Result<u64> {
        let value = self.get_state_value(key).await?;
        value
            .as_u64()
            .ok_or_else(|| Error::unexpected_response(key, &value))
    }

    async fn put_state_value(&self, key: &str, value: Value) -> Result<()> {
        let mut state = Map::new();
        state.insert(key.to_string(), json!({ "value": value }));
        self.put("/state", &Value::Object(state)).await
    }

    fn check_status(&self, action: &str, resp: Response) -> Result<Response> {
        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized {
                addr: self.addr.clone(),
            }),
            status if !status.is_success() => Err(Error::status(action, status.as_u16())),
            _ => Ok(resp),
        }
    }
}

fn narrow<T: TryFrom<u64>>(key: &str, value: u64) -> Result<T> {
    T::try_from(value).map_err(|_| Error::unexpected_response(key, &json!(value)))
}

impl NanoleafApi for NanoleafClient {
    async fn check_connection(&self) -> Result<()> {
        self.get("/").await.map(|_| ())
    }

    async fn power_on(&self) -> Result<()> {
        self.put_state_value("on", json!(true)).await
    }

    async fn power_off(&self) -> Result<()> {
        self.put_state_value("on", json!(false)).await
    }

    async fn get_power(&self) -> Result<bool> {
        let value = self.get_state_value("on").await?;
        value
            .as_bool()
            .ok_or_else(|| Error::unexpected_response("on", &value))
    }

    async fn get_name(&self) -> Result<String> {
        Ok(self.get_info().await?.name)
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        let body = self.get("/").await?;
        serde_json::from_value(body).map_err(Error::JsonLoad)
    }

    async fn get_brightness(&self) -> Result<u8> {
        narrow("brightness", self.get_state_int("brightness").await?)
    }

    async fn set_brightness(&self, brightness: u8) -> Result<()> {
        self.put_state_value("brightness", json!(brightness)).await
    }

    async fn get_hue(&self) -> Result<u16> {
        narrow("hue", self.get_state_int("hue").await?)
    }

    async fn set_hue(&self, hue: u16) -> Result<()> {
        self.put_state_value("hue", json!(hue)).await
    }

    async fn get_saturation(&self) -> Result<u8> {
        narrow("sat", self.get_state_int("sat").await?)
    }

    async fn set_saturation(&self, saturation: u8) -> Result<()> {
        self.put_state_value("sat", json!(saturation)).await
    }

    async fn get_color_temp(&self) -> Result<u16> {
        narrow("ct", self.get_state_int("ct").await?)
    }

    async fn set_color_temp(&self, kelvin: u16) -> Result<()> {
        self.put_state_value("ct", json!(kelvin)).await
    }

    async fn get_color_mode(&self) -> Result<DeviceColorMode> {
        let body = self.get("/state/colorMode").await?;
        body.as_str()
            .map(DeviceColorMode::from)
            .ok_or_else(|| Error::unexpected_response("/state/colorMode", &body))
    }

    async fn identify(&self) -> Result<()> {
        self.put("/identify", &json!({})).await
    }
}

/// Connects to a controller over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConnector {
    addr: String,
    port: u16,
    token: String,
}

impl HttpConnector {
    pub fn new(addr: &str, port: u16, token: &str) -> Self {
        HttpConnector {
            addr: addr.to_string(),
            port,
            token: token.to_string(),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Connector for HttpConnector {
    type Device = NanoleafClient;

    async fn connect(&self) -> Result<NanoleafClient> {
        NanoleafClient::connect(&self.addr, self.port, &self.token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer one request per canned response, one connection each, and hand
    /// back the raw requests that came in.
    async fn serve(responses: Vec<(u16, &'static str)>) -> (u16, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                requests.push(read_request(&mut stream).await);

                let reply = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(reply.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
            requests
        });

        (port, handle)
    }

    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&data);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if data.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(data).unwrap()
    }

    fn body_of(request: &str) -> Value {
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn test_get_brightness() {
        let (port, server) = serve(vec![(200, r#"{"value":42,"max":100,"min":0}"#)]).await;
        let client = NanoleafClient::new("127.0.0.1", port, "tok").unwrap();

        assert_eq!(client.get_brightness().await.unwrap(), 42);

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("GET /api/v1/tok/state/brightness HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_set_hue_body() {
        let (port, server) = serve(vec![(200, "")]).await;
        let client = NanoleafClient::new("127.0.0.1", port, "tok").unwrap();

        client.set_hue(120).await.unwrap();

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("PUT /api/v1/tok/state HTTP/1.1"));
        assert_eq!(body_of(&requests[0]), json!({"hue": {"value": 120}}));
    }

    #[tokio::test]
    async fn test_power_on_body() {
        let (port, server) = serve(vec![(200, "")]).await;
        let client = NanoleafClient::new("127.0.0.1", port, "tok").unwrap();

        client.power_on().await.unwrap();

        let requests = server.await.unwrap();
        assert_eq!(body_of(&requests[0]), json!({"on": {"value": true}}));
    }

    #[tokio::test]
    async fn test_color_mode() {
        let (port, _server) = serve(vec![(200, r#""ct""#)]).await;
        let client = NanoleafClient::new("127.0.0.1", port, "tok").unwrap();

        assert_eq!(
            client.get_color_mode().await.unwrap(),
            DeviceColorMode::ColorTemp
        );
    }

    #[tokio::test]
    async fn test_connect_reads_info() {
        let info = r#"{"name":"Canvas 1A2B","serialNo":"S123","manufacturer":"Nanoleaf","firmwareVersion":"9.2.4","model":"NL29"}"#;
        let (port, server) = serve(vec![(200, info), (200, info)]).await;

        let client = HttpConnector::new("127.0.0.1", port, "tok")
            .connect()
            .await
            .unwrap();
        let info = client.get_info().await.unwrap();
        assert_eq!(info.name, "Canvas 1A2B");
        assert_eq!(info.firmware_version.as_deref(), Some("9.2.4"));

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("GET /api/v1/tok/ HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let (port, _server) = serve(vec![(401, "")]).await;
        let client = NanoleafClient::new("127.0.0.1", port, "bad").unwrap();

        let err = client.get_power().await.unwrap_err();
        assert_eq!(
            err,
            Error::Unauthorized {
                addr: "127.0.0.1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unexpected_shape() {
        let (port, _server) = serve(vec![(200, r#"{"max":100}"#)]).await;
        let client = NanoleafClient::new("127.0.0.1", port, "tok").unwrap();

        let err = client.get_hue().await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse { .. }));
    }

    #[tokio::test]
    async fn test_connect_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = NanoleafClient::connect("127.0.0.1", port, "tok")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
    }
}
