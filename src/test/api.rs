#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rust_decimal_macros::dec;
    use serde_json::json;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use crate::{
        api::{QuoteSource, StocksApi},
        test::fixtures::quote_value,
    };

    /// Serves one canned HTTP response and returns the server's base URL.
    async fn serve_once(status: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn get_quotes_works() {
        let mut second = quote_value();
        second["serial_number"] = json!("02");
        second["symbol"] = json!("XYZ");
        let body = json!([quote_value(), second]).to_string();

        let url = serve_once("200 OK", body).await;
        let api = StocksApi::new(&url, Some(Duration::from_secs(5))).unwrap();
        let quotes = api.fetch_quotes().await.unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol(), "ABC");
        assert_eq!(*quotes[0].previous_close(), dec!(9.5));
        assert_eq!(quotes[1].serial_number(), "02");
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url() {
        let url = serve_once("200 OK", String::from("[]")).await;
        let api = StocksApi::new(&format!("{}/", url), None).unwrap();

        assert!(api.get_quotes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn server_error_fails() {
        let url = serve_once("500 Internal Server Error", String::from("[]")).await;
        let api = StocksApi::new(&url, None).unwrap();

        let err = api.get_quotes().await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn malformed_json_fails() {
        let url = serve_once("200 OK", String::from("[{\"symbol\":")).await;
        let api = StocksApi::new(&url, None).unwrap();

        assert!(api.get_quotes().await.is_err());
    }

    #[tokio::test]
    async fn non_array_body_fails() {
        let url = serve_once("200 OK", json!({ "error": "busy" }).to_string()).await;
        let api = StocksApi::new(&url, None).unwrap();

        let err = api.get_quotes().await.unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[tokio::test]
    async fn one_bad_item_fails_whole_response() {
        let mut broken = quote_value();
        broken["last_price"] = json!(null);
        let body = json!([quote_value(), broken]).to_string();

        let url = serve_once("200 OK", body).await;
        let api = StocksApi::new(&url, None).unwrap();

        assert!(api.get_quotes().await.is_err());
    }

    #[tokio::test]
    async fn out_of_range_number_names_the_quote() {
        let mut broken = quote_value();
        broken["symbol"] = json!("XYZ");
        broken["last_price"] = json!(1e30);
        let body = json!([quote_value(), broken]).to_string();

        let url = serve_once("200 OK", body).await;
        let api = StocksApi::new(&url, None).unwrap();

        let err = api.get_quotes().await.unwrap_err();
        assert!(err.to_string().contains("item 1, symbol XYZ"));
    }

    #[tokio::test]
    async fn unreachable_server_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = StocksApi::new(&format!("http://{}", addr), Some(Duration::from_secs(2))).unwrap();

        assert!(api.get_quotes().await.is_err());
    }
}
