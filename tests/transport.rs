#![allow(clippy::unwrap_used, reason = "tests can panic on unwrap")]

mod common;

mod envelope {
    use asset_platform_client::envelope::{BACKEND_FAILURE_FALLBACK, MISSING_DATA_MESSAGE};
    use asset_platform_client::error::Kind;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{account_json, client};

    #[tokio::test]
    async fn error_status_with_envelope_body_should_pass_through() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/accounts/missing");
            then.status(StatusCode::NOT_FOUND).json_body(json!({
                "success": false,
                "error": "account not found"
            }));
        });

        let response = client.account("missing").await;

        assert!(!response.success());
        assert_eq!(response.error(), Some("account not found"));

        let error = response.into_result().unwrap_err();
        assert_eq!(error.kind(), Kind::Backend);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn server_error_envelope_should_pass_through() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/pools");
            then.status(StatusCode::INTERNAL_SERVER_ERROR).json_body(json!({
                "success": false,
                "data": null,
                "error": "database unavailable"
            }));
        });

        let response = client.pools().await;

        assert!(!response.success());
        assert!(response.data().is_none());
        assert_eq!(response.error(), Some("database unavailable"));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn failure_data_should_be_hidden() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/accounts/acc-1");
            then.status(StatusCode::OK).json_body(json!({
                "success": false,
                "data": account_json("acc-1"),
                "error": ""
            }));
        });

        let response = client.account("acc-1").await;

        assert!(!response.success());
        assert!(response.data().is_none());
        assert_eq!(response.error(), Some(BACKEND_FAILURE_FALLBACK));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn failure_with_mismatched_data_should_keep_backend_error() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/accounts/acc-1");
            then.status(StatusCode::NOT_FOUND).json_body(json!({
                "success": false,
                "data": {},
                "error": "account not found"
            }));
        });

        let response = client.account("acc-1").await;

        assert!(!response.success());
        assert!(response.data().is_none());
        assert_eq!(response.error(), Some("account not found"));

        let error = response.into_result().unwrap_err();
        assert_eq!(error.kind(), Kind::Backend);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn success_without_data_should_become_failure() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/accounts/acc-1");
            then.status(StatusCode::OK)
                .json_body(json!({ "success": true, "data": null }));
        });

        let response = client.account("acc-1").await;

        assert!(!response.success());
        assert_eq!(response.error(), Some(MISSING_DATA_MESSAGE));
        mock.assert();

        Ok(())
    }
}

mod failures {
    use std::time::Duration;

    use asset_platform_client::{Client, Config};
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{API_KEY, account_json, client, client_with_timeout, ok};

    #[tokio::test]
    async fn connection_refused_should_produce_failure_envelope() -> anyhow::Result<()> {
        let config = Config::builder()
            .base_url("http://127.0.0.1:1")
            .api_key(API_KEY.to_owned())
            .timeout(Duration::from_secs(2))
            .build();
        let client = Client::new(config)?;

        let response = client.pools().await;

        assert!(!response.success());
        assert!(response.data().is_none());
        assert!(response.error().is_some_and(|e| !e.is_empty()));

        Ok(())
    }

    #[tokio::test]
    async fn timeout_should_produce_failure_envelope() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client_with_timeout(&server, Duration::from_millis(100));

        let _mock = server.mock(|when, then| {
            when.method(GET).path("/accounts/acc-1");
            then.status(StatusCode::OK)
                .json_body(ok(account_json("acc-1")))
                .delay(Duration::from_secs(2));
        });

        let response = client.account("acc-1").await;

        assert!(!response.success());
        assert!(response.error().is_some_and(|e| !e.is_empty()));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_should_produce_failure_envelope() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/markets/btc-usdc");
            then.status(StatusCode::OK)
                .header("Content-Type", "application/json")
                .body("{\"success\": tru");
        });

        let response = client.market("btc-usdc").await;

        assert!(!response.success());
        assert!(response.data().is_none());
        assert!(response.error().is_some_and(|e| !e.is_empty()));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn mistyped_data_should_produce_failure_envelope() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/markets");
            then.status(StatusCode::OK)
                .json_body(ok(json!({ "not": "a list" })));
        });

        let response = client.markets(&Default::default()).await;

        assert!(!response.success());
        assert!(response.error().is_some_and(|e| !e.is_empty()));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn non_json_error_page_should_include_status() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/loans");
            then.status(StatusCode::BAD_GATEWAY)
                .header("Content-Type", "text/html")
                .body("<html>bad gateway</html>");
        });

        let response = client.loans().await;

        assert!(!response.success());
        let error = response.error().unwrap();
        assert!(error.contains("502"), "unexpected error: {error}");
        assert!(error.contains("/loans"), "unexpected error: {error}");
        mock.assert();

        Ok(())
    }
}

mod health {
    use std::time::Duration;

    use asset_platform_client::error::Kind;
    use asset_platform_client::{Client, Config};
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{API_KEY, client};

    #[tokio::test]
    async fn health_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(StatusCode::OK)
                .json_body(json!({ "status": "ok", "timestamp": "2026-03-01T09:30:00Z" }));
        });

        let response = client.health().await?;

        assert_eq!(response.status, "ok");
        assert_eq!(response.timestamp, "2026-03-01T09:30:00Z");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn health_should_accept_numeric_timestamp() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(StatusCode::OK)
                .json_body(json!({ "status": "ok", "timestamp": 1_772_357_400_000_u64 }));
        });

        let response = client.health().await?;

        assert_eq!(response.timestamp, "1772357400000");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn health_should_not_send_credentials() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let authenticated = server.mock(|when, then| {
            when.method(GET).path("/health").header_exists("authorization");
            then.status(StatusCode::UNAUTHORIZED);
        });
        let anonymous = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(StatusCode::OK)
                .json_body(json!({ "status": "ok", "timestamp": "now" }));
        });

        client.health().await?;

        assert_eq!(authenticated.hits(), 0);
        anonymous.assert();

        Ok(())
    }

    #[tokio::test]
    async fn health_error_status_should_be_error() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(StatusCode::SERVICE_UNAVAILABLE).body("maintenance");
        });

        let error = client.health().await.unwrap_err();

        assert_eq!(error.kind(), Kind::Status);
        assert!(error.to_string().contains("maintenance"));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn health_unreachable_host_should_be_error() -> anyhow::Result<()> {
        let config = Config::builder()
            .base_url("http://127.0.0.1:1")
            .api_key(API_KEY.to_owned())
            .timeout(Duration::from_secs(2))
            .build();
        let client = Client::new(config)?;

        let error = client.health().await.unwrap_err();

        assert_eq!(error.kind(), Kind::Transport);

        Ok(())
    }
}
