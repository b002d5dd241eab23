use async_trait::async_trait;

use crate::http::AssetClient;
use crate::models::AssetId;

use super::{AssetResolver, ResolveError, ResolvedAssets};

/// Resolves assets through the batched HTTP lookup endpoint.
///
/// One resolver call maps to exactly one request, whatever the batch size.
/// Retry policy lives in the underlying [`AssetClient`].
pub struct HttpAssetResolver {
    client: AssetClient,
}

impl HttpAssetResolver {
    pub fn new(client: AssetClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AssetClient {
        &self.client
    }
}

#[async_trait]
impl AssetResolver for HttpAssetResolver {
    async fn resolve(&self, ids: &[AssetId]) -> Result<ResolvedAssets, ResolveError> {
        let assets = self.client.fetch_assets(ids).await?;
        Ok(ResolvedAssets::from_assets(assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resolves_descriptors_from_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assets"))
            .and(body_json(json!({"ids": ["", "abc"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "", "name": "Native", "ticker": "NAT", "decimals": 8},
                {"id": "abc", "name": "Token", "ticker": null, "decimals": 2}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let base_url: Url = server.uri().parse().unwrap();
        let resolver = HttpAssetResolver::new(AssetClient::new(base_url).unwrap());

        let resolved = resolver
            .resolve(&[AssetId::Native, AssetId::Issued("abc".to_string())])
            .await
            .unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get(&AssetId::Native).unwrap().decimals, 8);
        assert_eq!(
            resolved
                .get(&AssetId::Issued("abc".to_string()))
                .unwrap()
                .name,
            "Token"
        );
        // The round trip is observable on the shared client.
        assert!(resolver.client().latency().await.is_some());
    }

    #[tokio::test]
    async fn test_partial_response_is_not_an_error_here() {
        // Completeness is the parser's concern; the resolver reports
        // whatever the endpoint returned.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "", "name": "Native", "ticker": "NAT", "decimals": 8}
            ])))
            .mount(&server)
            .await;

        let base_url: Url = server.uri().parse().unwrap();
        let resolver = HttpAssetResolver::new(AssetClient::new(base_url).unwrap());

        let resolved = resolver
            .resolve(&[AssetId::Native, AssetId::Issued("missing".to_string())])
            .await
            .unwrap();

        assert_eq!(resolved.len(), 1);
        assert!(!resolved.contains(&AssetId::Issued("missing".to_string())));
    }

    #[tokio::test]
    async fn test_server_error_surfaces_as_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let base_url: Url = server.uri().parse().unwrap();
        let client = AssetClient::with_config(base_url, 0, std::time::Duration::from_secs(5)).unwrap();
        let resolver = HttpAssetResolver::new(client);

        let err = resolver.resolve(&[AssetId::Native]).await.unwrap_err();
        assert!(matches!(err, ResolveError::Http(_)));
    }
}
