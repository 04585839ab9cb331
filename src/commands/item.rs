//! Item Commands
//!
//! Bindings for the `/api/items` endpoints.

use crate::config::ClientConfig;
use crate::models::{CreateItemRequest, Item, ItemId};
use super::{check_status, http_client, ApiError};

/// GET /api/items
pub async fn list_items(config: &ClientConfig) -> Result<Vec<Item>, ApiError> {
    let response = http_client().get(config.items_url()).send().await?;
    let items = check_status(response)?.json::<Vec<Item>>().await?;
    Ok(items)
}

/// POST /api/items, returning the server-assigned item
pub async fn create_item(config: &ClientConfig, args: &CreateItemRequest) -> Result<Item, ApiError> {
    let response = http_client()
        .post(config.items_url())
        .json(args)
        .send()
        .await?;
    let item = check_status(response)?.json::<Item>().await?;
    Ok(item)
}

/// DELETE /api/items/{id}
pub async fn delete_item(config: &ClientConfig, id: ItemId) -> Result<(), ApiError> {
    let response = http_client().delete(config.item_url(id)).send().await?;
    check_status(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned response and hand back the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (ClientConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ClientConfig::new(&format!("http://{}", listener.local_addr().unwrap()));

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let content_length = text[..end]
                        .lines()
                        .filter_map(|line| line.split_once(':'))
                        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (config, handle)
    }

    fn card_b() -> CreateItemRequest {
        CreateItemRequest {
            name: "Card B".to_string(),
            price: 10.0,
            description: String::new(),
            group: None,
            image: None,
            image_filename: None,
        }
    }

    #[tokio::test]
    async fn test_create_item_decodes_created_item() {
        let (config, server) = serve_once("201 Created", r#"{"id":3,"name":"Card C","price":1.5}"#).await;

        let item = create_item(&config, &card_b()).await.unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.name, "Card C");
        assert_eq!(item.price, 1.5);
        assert_eq!(item.effective_group(), "General");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/items "));
        assert!(request.contains(r#""name":"Card B""#));
    }

    #[tokio::test]
    async fn test_list_items_decodes_array() {
        let (config, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"name":"Card A","price":5,"group":"Sports"},{"id":2,"name":"Card B","price":10}]"#,
        )
        .await;

        let items = list_items(&config).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].group.as_deref(), Some("Sports"));
        assert_eq!(items[1].effective_group(), "General");

        assert!(server.await.unwrap().starts_with("GET /api/items "));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let (config, _server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        let err = create_item(&config, &card_b()).await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
        assert!(err.is_rejection());
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode() {
        let (config, _server) = serve_once("200 OK", "not json").await;

        let err = list_items(&config).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
        assert!(!err.is_rejection());
    }

    #[tokio::test]
    async fn test_delete_item_accepts_no_content() {
        let (config, server) = serve_once("204 No Content", "").await;

        assert_eq!(delete_item(&config, 2).await, Ok(()));
        assert!(server.await.unwrap().starts_with("DELETE /api/items/2 "));
    }

    #[tokio::test]
    async fn test_delete_item_not_found_maps_to_status() {
        let (config, _server) = serve_once("404 Not Found", "").await;

        assert_eq!(delete_item(&config, 9).await, Err(ApiError::Status(404)));
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_transport() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ClientConfig::new(&format!("http://{}", listener.local_addr().unwrap()));
        drop(listener);

        let err = list_items(&config).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
        assert!(!err.is_rejection());
    }
}
