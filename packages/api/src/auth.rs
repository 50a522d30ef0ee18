//! Login, registration and the current-user lookup.
//!
//! Both surfaces return an `access_token` on success; it is persisted through
//! the client's [`Session`](crate::Session) before the decoded body is handed
//! back. Logging out is purely local: the token is dropped and nothing is
//! sent to the server.

use serde_json::json;
use store::KeyValueStore;

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::models::{CurrentUser, LoginResponse, RegisterResponse, Registration};
use crate::transport::{FormField, HttpTransport};

impl<T: HttpTransport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /auth/login` with a JSON body.
    pub async fn login(&self, gov_id_number: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let options = RequestOptions::post_json(&json!({
            "gov_id_number": gov_id_number,
            "password": password,
        }))?;
        let response: LoginResponse = self.request_as("/auth/login", options).await?;
        self.remember_token(response.access_token.as_deref());
        Ok(response)
    }

    /// `POST /api/auth/login` as multipart form fields.
    pub async fn login_form(
        &self,
        gov_id_number: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let options = RequestOptions::post_form(vec![
            FormField::text("gov_id_number", gov_id_number),
            FormField::text("password", password),
        ]);
        let response: LoginResponse = self.request_as("/api/auth/login", options).await?;
        self.remember_token(response.access_token.as_deref());
        Ok(response)
    }

    /// `POST /auth/register` with a JSON body. The photo is not uploaded on
    /// this surface.
    pub async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        let options = RequestOptions::post_json(&json!({
            "first_name": registration.first_name,
            "middle_name": registration.middle_name,
            "last_name": registration.last_name,
            "city": registration.city,
            "phone_number": registration.phone_number,
            "gov_id_type": registration.gov_id_type,
            "gov_id_number": registration.gov_id_number,
            "password": registration.password,
            "photo_url": null,
        }))?;
        let response: RegisterResponse = self.request_as("/auth/register", options).await?;
        self.remember_token(response.access_token.as_deref());
        Ok(response)
    }

    /// `POST /api/auth/register` as multipart, including the optional photo.
    pub async fn register_form(
        &self,
        registration: &Registration,
    ) -> Result<RegisterResponse, ApiError> {
        let mut fields = vec![
            FormField::text("first_name", &registration.first_name),
            FormField::text(
                "middle_name",
                registration.middle_name.as_deref().unwrap_or_default(),
            ),
            FormField::text("last_name", &registration.last_name),
            FormField::text("city", &registration.city),
            FormField::text("phone_number", &registration.phone_number),
            FormField::text("gov_id_type", &registration.gov_id_type),
            FormField::text("gov_id_number", &registration.gov_id_number),
            FormField::text("password", &registration.password),
        ];
        if let Some(photo) = &registration.photo {
            fields.push(FormField::file("photo", photo.clone()));
        }
        let response: RegisterResponse = self
            .request_as("/api/auth/register", RequestOptions::post_form(fields))
            .await?;
        self.remember_token(response.access_token.as_deref());
        Ok(response)
    }

    /// `GET /auth/me`.
    pub async fn get_current_user(&self) -> Result<CurrentUser, ApiError> {
        self.request_as("/auth/me", RequestOptions::get()).await
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_logged_in()
    }

    pub fn logout(&self) {
        self.session().clear();
    }

    fn remember_token(&self, token: Option<&str>) {
        match token {
            Some(token) if !token.is_empty() => self.session().set_token(token),
            _ => tracing::warn!("Authentication succeeded without an access token"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;
    use crate::transport::ScriptedTransport;
    use store::{MemoryStore, TOKEN_KEY};

    fn client() -> (ApiClient<ScriptedTransport, MemoryStore>, ScriptedTransport, MemoryStore) {
        let transport = ScriptedTransport::new();
        let store = MemoryStore::new();
        (
            ApiClient::new(transport.clone(), store.clone(), ""),
            transport,
            store,
        )
    }

    fn registration() -> Registration {
        Registration {
            first_name: "Asha".into(),
            middle_name: None,
            last_name: "Rao".into(),
            city: "Pune".into(),
            phone_number: "9800000000".into(),
            gov_id_type: "aadhaar".into(),
            gov_id_number: "1234-5678".into(),
            password: "secret".into(),
            photo: None,
        }
    }

    #[tokio::test]
    async fn test_login_persists_token() {
        let (client, transport, store) = client();
        transport.push_json(200, json!({"access_token": "jwt-1", "token_type": "bearer"}));

        let response = client.login("1234-5678", "secret").await.unwrap();
        assert_eq!(response.access_token.as_deref(), Some("jwt-1"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-1"));
        assert!(client.is_logged_in());

        let request = &transport.requests()[0];
        assert_eq!(request.url, "/auth/login");
        assert_eq!(
            request.json_body(),
            Some(&json!({"gov_id_number": "1234-5678", "password": "secret"}))
        );
    }

    #[tokio::test]
    async fn test_login_form_returns_user() {
        let (client, transport, store) = client();
        transport.push_json(
            200,
            json!({
                "access_token": "jwt-2",
                "token_type": "bearer",
                "message": "Login successful",
                "user": {"id": "u-1", "first_name": "Asha", "last_name": "Rao", "city": "Pune"}
            }),
        );

        let response = client.login_form("1234-5678", "secret").await.unwrap();
        assert_eq!(response.user.unwrap().first_name, "Asha");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-2"));

        let request = &transport.requests()[0];
        assert_eq!(request.url, "/api/auth/login");
        assert_eq!(request.form_text("gov_id_number"), Some("1234-5678"));
        assert_eq!(request.form_text("password"), Some("secret"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_logged_out() {
        let (client, transport, store) = client();
        transport.push_json(401, json!({"detail": "Invalid credentials"}));

        let err = client.login_form("1234-5678", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_register_form_sends_photo() {
        let (client, transport, store) = client();
        transport.push_json(200, json!({"access_token": "jwt-3", "user_id": "u-9"}));

        let mut reg = registration();
        reg.photo = Some(Attachment::new("me.jpg", vec![1, 2, 3]).with_content_type("image/jpeg"));
        let response = client.register_form(&reg).await.unwrap();
        assert_eq!(response.user_id.as_deref(), Some("u-9"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-3"));

        let request = &transport.requests()[0];
        assert_eq!(request.form_text("middle_name"), Some(""));
        assert_eq!(request.form_text("city"), Some("Pune"));
        assert!(request.has_form_file("photo"));
    }

    #[tokio::test]
    async fn test_register_json_and_current_user() {
        let (client, transport, _) = client();
        transport.push_json(200, json!({"access_token": "jwt-4", "token_type": "bearer"}));
        transport.push_json(200, json!({"id": "u-4", "first_name": "Asha", "last_name": "Rao"}));

        client.register(&registration()).await.unwrap();
        let me = client.get_current_user().await.unwrap();
        assert_eq!(me.id, "u-4");

        let requests = transport.requests();
        assert_eq!(requests[0].json_body().unwrap()["photo_url"], serde_json::Value::Null);
        assert_eq!(requests[1].header("Authorization"), Some("Bearer jwt-4"));
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let (client, _, store) = client();
        store.set(TOKEN_KEY, "jwt");
        assert!(client.is_logged_in());
        client.logout();
        assert!(!client.is_logged_in());
    }
}
