//! API request handlers
//!
//! Each handler's doc comment doubles as the tutorial text shown in the
//! generated OpenAPI document.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{ApiError, ValidPath};
use crate::types::ModelName;

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Greeting text
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    /// Item identifier parsed from the path
    pub item_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// User identifier, or the fixed label for the current user
    pub user_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelResponse {
    /// Requested model
    pub model_name: ModelName,
    /// Message chosen for the model
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FileResponse {
    /// Captured file path, separators included
    pub file_path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Label returned by `/users/me`
pub const CURRENT_USER: &str = "the current user";

/// Hello World
///
/// `GET /` にアクセスすると、このハンドラが呼ばれる。
///
/// ルーティングは `Router::new().route("/", get(root))` のように、パスと HTTP メソッドの
/// 組み合わせにハンドラ関数を結びつけて宣言する。
///
/// データ操作と HTTP メソッドの対応はおおむね次の通り。
///
/// - CREATE → POST
/// - READ → GET
/// - UPDATE → PUT
/// - DELETE → DELETE
///
/// その他に OPTIONS, HEAD, PATCH, TRACE がある。OpenAPI ではこれらを operation と呼ぶ。
///
/// ハンドラは `async fn` で、戻り値は `IntoResponse` を実装していればよい。
/// ここでは `Json<T>` を返しているので、`Serialize` を derive した構造体がそのまま
/// JSON に変換される。
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "tutorial"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, world!".into(),
    })
}

/// path parameter
///
/// パスの中に `{item_id}` と書くと、その部分が path parameter として宣言される。
///
/// ハンドラ側では `Path<i64>` のように型を指定して受け取る。型に合わない値
/// (例えば `/items/abc`) はハンドラが呼ばれる前に弾かれ、422 が返る。
/// パースとバリデーションは抽出器が自動的に行う。
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Integer item identifier")
    ),
    responses(
        (status = 200, description = "Item identifier echoed back", body = ItemResponse),
        (status = 422, description = "item_id is not an integer", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn read_item(ValidPath(item_id): ValidPath<i64>) -> Json<ItemResponse> {
    tracing::debug!("read_item item_id={}", item_id);
    Json(ItemResponse { item_id })
}

/// path operations の順序
///
/// `/users/me` と `/users/{user_id}` は別の API であり、`/users/me` を先に登録する。
///
/// 登録順で照合するルータの場合、`/users/{user_id}` が先にあると次のようになる。
///
/// 1. `/users/me` で GET リクエストを受信
/// 1. 先に登録された `/users/{user_id}` にヒット
/// 1. `/users/{user_id}` が `me` を受け取る
///
/// axum のルータは固定セグメントを優先するので実際には奪われないが、
/// ルートテーブルは固定パスを先に並べておく。
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "The current user", body = UserResponse)
    ),
    tag = "users"
)]
pub async fn read_user_me() -> Json<UserResponse> {
    Json(UserResponse {
        user_id: CURRENT_USER.into(),
    })
}

/// path operations の順序
///
/// `/users/me` の後に登録する。`user_id` は任意の文字列として受け取る。
///
/// もしこちらが `/users/me` より先に照合されると、`/users/me` へのリクエストで
/// `user_id` に `me` が入ってしまう。
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User identifier echoed back", body = UserResponse)
    ),
    tag = "users"
)]
pub async fn read_user(ValidPath(user_id): ValidPath<String>) -> Json<UserResponse> {
    tracing::debug!("read_user user_id={}", user_id);
    Json(UserResponse { user_id })
}

/// Enum 型の path parameter
///
/// 取りうる値が決まっている場合は enum で受け取る。
///
/// `#[serde(rename_all = "lowercase")]` を付けた enum を `Path<ModelName>` に指定すると、
/// `alexnet`, `resnet`, `lenet` 以外の値は 422 で弾かれる。
/// `ToSchema` を derive しておけば、API ドキュメントには文字列の enum として表示される。
#[utoipa::path(
    get,
    path = "/models/{model_name}",
    params(
        ("model_name" = ModelName, Path, description = "One of alexnet, resnet, lenet")
    ),
    responses(
        (status = 200, description = "Model with its message", body = ModelResponse),
        (status = 422, description = "Unknown model name", body = ErrorResponse)
    ),
    tag = "models"
)]
pub async fn get_model(ValidPath(model_name): ValidPath<ModelName>) -> Json<ModelResponse> {
    tracing::debug!("get_model model_name={}", model_name);
    Json(ModelResponse {
        model_name,
        message: model_name.message().into(),
    })
}

/// ファイルパスを含む path parameter
///
/// `{*file_path}` と書くと、`/` を含む残りのパス全体にマッチする catch-all になる。
///
/// OpenAPI 自体はこの書き方をサポートしていないので、ドキュメント上は
/// 通常の `{file_path}` として表示される。
///
/// `/files/home/user/file.txt` なら `home/user/file.txt` が入る。
/// 絶対パスを渡したい場合は `/files//home/user/file.txt` のように `/` を重ねる。
///
/// catch-all は空文字列にはマッチしないので、`/files/` は別のルートとして登録し、
/// 空の `file_path` を返す。
#[utoipa::path(
    get,
    path = "/files/{file_path}",
    params(
        ("file_path" = String, Path, description = "Arbitrary path, may contain '/'")
    ),
    responses(
        (status = 200, description = "Captured path echoed back", body = FileResponse)
    ),
    tag = "files"
)]
pub async fn read_file(ValidPath(file_path): ValidPath<String>) -> Json<FileResponse> {
    tracing::debug!("read_file file_path={}", file_path);
    Json(FileResponse { file_path })
}

/// `/files/` with nothing after the prefix
pub async fn read_file_root() -> Json<FileResponse> {
    read_file(ValidPath(String::new())).await
}

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
