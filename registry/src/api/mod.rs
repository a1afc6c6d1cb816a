//! REST APIハンドラー
//!
//! エンドポイント定義の取得・登録・一覧API

pub mod endpoints;
pub mod error;
pub mod request_log;

use crate::AppState;
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
///
/// ルートに一致して未対応のメソッドは405を返す。
/// `/endpoints/`（識別子が空）も詳細ルートとして扱い、識別子検証で400にする。
pub fn create_app(state: AppState) -> Router {
    let detail = get(endpoints::get_endpoint).post(endpoints::post_endpoint);

    Router::new()
        .route("/endpoints", get(endpoints::list_endpoints))
        .route("/endpoints/", detail.clone())
        .route("/endpoints/*identifier", detail)
        .layer(middleware::from_fn(request_log::log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
