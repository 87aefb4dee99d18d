use axum::response::{Html, Json};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

// GET /doc - Machine-readable API description
pub async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// GET /swagger-ui - Interactive explorer backed by /doc
pub async fn swagger_ui() -> Html<String> {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nexus Analytics API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        html {
            box-sizing: border-box;
            overflow: -moz-scrollbars-vertical;
            overflow-y: scroll;
        }
        *, *:before, *:after {
            box-sizing: inherit;
        }
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            const ui = SwaggerUIBundle({
                url: '/doc',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                plugins: [
                    SwaggerUIBundle.plugins.DownloadUrl
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#;
    Html(html.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_util::{app, get_json, get_text, test_pool};

    #[tokio::test]
    async fn openapi_document_names_every_route_group() {
        let pool = test_pool().await;

        let (status, body) = get_json(app(pool), "/doc").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["openapi"].as_str().unwrap().starts_with('3'));
        assert_eq!(body["info"]["title"], "Nexus Analytics API");
        assert_eq!(body["info"]["version"], "1.0.0");

        let paths = body["paths"].as_object().unwrap();
        for path in [
            "/health",
            "/matches",
            "/matches/{gameid}",
            "/teams/{teamid}",
            "/players/{playerid}/stats",
            "/players/compare",
            "/team-match-stats/{gameid}",
            "/player-match-stats",
            "/dashboard/summary",
            "/champions/meta-tier-list",
            "/champions/{champion_name}/stats",
            "/news/recent-activity",
            "/draft/analysis",
            "/team-compositions/winning",
            "/leagues/meta-comparison",
            "/patches/{patch}/evolution",
            "/predictions/match",
            "/recommendations/champion",
            "/alerts/meta-shifts",
            "/alerts/player-performance",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[tokio::test]
    async fn swagger_ui_serves_the_explorer_page() {
        let pool = test_pool().await;

        let (status, page) = get_text(app(pool), "/swagger-ui").await;

        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("swagger-ui"));
        assert!(page.contains("url: '/doc'"));
    }
}
