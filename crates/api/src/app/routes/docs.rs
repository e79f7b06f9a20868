use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::app::docs::ApiDoc;

pub const OPENAPI_PATH: &str = "/swagger/openapi.json";

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Product catalog API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}
