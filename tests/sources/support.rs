// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Local HTTP site used by the source retrieval tests

use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use std::{collections::HashMap, net::SocketAddr, time::Duration};

/// Seconds the `/slow` route waits before answering
pub const SLOW_DELAY_SECS: u64 = 3;

async fn search(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Html<String> {
    let q = params.get("q").cloned().unwrap_or_default();
    let agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none")
        .to_string();

    Html(format!(
        r#"<html>
<head><title>Search</title><style>body {{ color: red; }}</style></head>
<body>
  <header>Site Header</header>
  <nav>Home | About</nav>
  <main>
    <h1>Results for {q}</h1>
    <p>Agent {agent}</p>
    <script>trackVisitor();</script>
  </main>
  <footer>Copyright</footer>
</body>
</html>"#
    ))
}

async fn long_page() -> Html<String> {
    Html(format!("<main>{}</main>", "word ".repeat(2000)))
}

async fn empty_page() -> Html<&'static str> {
    Html("<html><body><script>only();</script></body></html>")
}

async fn missing() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not here")
}

async fn slow() -> Html<&'static str> {
    tokio::time::sleep(Duration::from_secs(SLOW_DELAY_SECS)).await;
    Html("<main>too late</main>")
}

/// Start the site on an ephemeral port and return its address
pub async fn spawn_site() -> SocketAddr {
    let app = Router::new()
        .route("/search", get(search))
        .route("/long", get(long_page))
        .route("/empty", get(empty_page))
        .route("/missing", get(missing))
        .route("/slow", get(slow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test site");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    addr
}
