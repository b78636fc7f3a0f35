use reqwest::{
    multipart::{Form, Part},
    Client,
};

use super::{
    config::PushoverCredentials,
    consts::{IMAGE_CONTENT_TYPE, PUSHOVER_ENDPOINT},
    error::ChargableResult,
    position_query::{check_status, endpoint_url},
};

/// Push notification service
pub struct Pushover {
    base_url: String,
    credentials: PushoverCredentials,
}

impl Pushover {
    pub fn new(base_url: impl Into<String>, credentials: PushoverCredentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    pub fn name(&self) -> &'static str {
        "Pushover"
    }

    /// Sends a message, optionally with the image attached as `image.png`.
    /// Any status other than 200 fails with a `Networking` error.
    pub async fn notify(
        &self,
        client: &Client,
        message: &str,
        image: Option<Vec<u8>>,
    ) -> ChargableResult<()> {
        let mut form = Form::new()
            .text("token", self.credentials.token.clone())
            .text("user", self.credentials.user.clone())
            .text("message", message.to_string());

        if let Some(img) = image {
            let attachment = Part::bytes(img)
                .file_name("image.png")
                .mime_str(IMAGE_CONTENT_TYPE)?;
            form = form.part("attachment", attachment);
        }

        let url = endpoint_url(&self.base_url, PUSHOVER_ENDPOINT);
        log::info!("Execute HTTP request against: {}.", url);

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| {
                log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
            })?;

        check_status(self.name(), response.status())
    }

    /// Best effort notification about a failure, errors are only logged
    pub async fn alert(&self, client: &Client, message: &str) {
        if let Err(e) = self.notify(client, message, None).await {
            log::warn!("Could not send alert \"{}\": {}", message, e);
        }
    }
}
