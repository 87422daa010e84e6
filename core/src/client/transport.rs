use anyhow::{anyhow, Result};
use http::header::CONTENT_TYPE;
use http::Method;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::client::api_url::ApiUrl;

/// One outbound call to the registration API.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryRequest {
    pub method: Method,
    /// Path segments below the base url, not yet percent-encoded.
    pub segments: Vec<String>,
    /// Serialized json body, sent verbatim.
    pub body: Option<String>,
}

impl RegistryRequest {
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::GET,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    pub fn post<I, S, B>(segments: I, body: &B) -> serde_json::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        B: Serialize,
    {
        Ok(Self {
            method: Method::POST,
            segments: segments.into_iter().map(Into::into).collect(),
            body: Some(serde_json::to_string(body)?),
        })
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Raw response: status code and the body as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait RegistryTransport {
    async fn send(&self, request: RegistryRequest) -> Result<TransportResponse>;
}

pub struct HttpTransport {
    pub api_url: ApiUrl,
    client: Client,
}

impl HttpTransport {
    pub fn new(api_url: ApiUrl) -> Self {
        Self {
            api_url,
            client: Client::new(),
        }
    }

    fn endpoint(&self, segments: &[String]) -> Result<Url> {
        let mut url = Url::parse(self.api_url.get_url())?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| anyhow!("Invalid api url: {}", self.api_url.get_url()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

impl RegistryTransport for HttpTransport {
    async fn send(&self, request: RegistryRequest) -> Result<TransportResponse> {
        let url = self.endpoint(&request.segments)?;

        let mut builder = self.client.request(request.method, url);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
pub mod fixture {
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};

    use super::{RegistryRequest, RegistryTransport, TransportResponse};

    pub enum StubReply {
        Response(TransportResponse),
        Failure(String),
    }

    /// Records every request and answers with a fixed reply.
    pub struct StubTransport {
        pub reply: StubReply,
        pub requests: Mutex<Vec<RegistryRequest>>,
    }

    impl StubTransport {
        pub fn respond(status: u16, body: &str) -> Self {
            Self::with_reply(StubReply::Response(TransportResponse::new(status, body)))
        }

        pub fn fail(msg: &str) -> Self {
            Self::with_reply(StubReply::Failure(String::from(msg)))
        }

        fn with_reply(reply: StubReply) -> Self {
            Self {
                reply,
                requests: Mutex::new(vec![]),
            }
        }

        pub fn recorded(&self) -> Vec<RegistryRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl RegistryTransport for StubTransport {
        async fn send(&self, request: RegistryRequest) -> Result<TransportResponse> {
            self.requests.lock().unwrap().push(request);

            match &self.reply {
                StubReply::Response(response) => Ok(response.clone()),
                StubReply::Failure(msg) => Err(anyhow!("{}", msg)),
            }
        }
    }
}
