//! Client for the external group, identity, and list-catalog services.
//!
//! Every operation here is a plain request/response call against endpoints
//! this crate does not implement. Fetches run in the browser; SSR builds
//! compile inert stubs so pages render before hydration.

use uuid::Uuid;

use crate::core::model::{Group, GroupDetail, Identity, ListRef};
#[cfg(not(feature = "ssr"))]
use crate::core::model::{
    GroupDetailResponse, GroupsResponse, ListCatalogResponse, WhoamiResponse,
};

/// Path prefix under which the group service is reachable from the browser.
pub const SERVICE_ROOT: &str = "/service";

/// Error type for service calls that can detect authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// User is not authenticated (401 error)
    #[error("not authorized")]
    Unauthorized,
    /// Other error with message
    #[error("{0}")]
    Service(String),
}

// ============================================================================
// Reads
// ============================================================================

/// Resolve the current user's identity.
#[cfg(not(feature = "ssr"))]
pub async fn whoami() -> Result<Identity, ApiError> {
    let resp: WhoamiResponse = get_json(&format!("{}/user/whoami", SERVICE_ROOT)).await?;
    Ok(resp.user)
}

#[cfg(feature = "ssr")]
pub async fn whoami() -> Result<Identity, ApiError> {
    Err(ApiError::Service("Identity not available on server".to_string()))
}

/// Fetch the viewer's group collection.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_groups() -> Result<Vec<Group>, ApiError> {
    let resp: GroupsResponse = get_json(&format!("{}/groups", SERVICE_ROOT)).await?;
    Ok(resp.groups)
}

#[cfg(feature = "ssr")]
pub async fn fetch_groups() -> Result<Vec<Group>, ApiError> {
    Ok(vec![])
}

/// Fetch extended detail (members and lists) for one group.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_group_detail(uuid: Uuid) -> Result<GroupDetail, ApiError> {
    let resp: GroupDetailResponse =
        get_json(&format!("{}/groups/{}", SERVICE_ROOT, uuid)).await?;
    Ok(resp.group.detail)
}

#[cfg(feature = "ssr")]
pub async fn fetch_group_detail(_uuid: Uuid) -> Result<GroupDetail, ApiError> {
    Ok(GroupDetail::default())
}

/// Fetch the viewer's list catalog, used to populate the share-list selector.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_list_catalog() -> Result<Vec<ListRef>, ApiError> {
    let resp: ListCatalogResponse = get_json(&format!("{}/lists", SERVICE_ROOT)).await?;
    Ok(resp.lists)
}

#[cfg(feature = "ssr")]
pub async fn fetch_list_catalog() -> Result<Vec<ListRef>, ApiError> {
    Ok(vec![])
}

// ============================================================================
// Writes
// ============================================================================

/// Create a new group.
#[cfg(not(feature = "ssr"))]
pub async fn create_group(name: &str, description: &str) -> Result<(), ApiError> {
    post_json(
        &format!("{}/groups", SERVICE_ROOT),
        &serde_json::json!({ "name": name, "description": description }),
    )
    .await
}

#[cfg(feature = "ssr")]
pub async fn create_group(_name: &str, _description: &str) -> Result<(), ApiError> {
    Err(not_on_server())
}

/// Delete a group. Owner only; removes all membership and list associations.
#[cfg(not(feature = "ssr"))]
pub async fn delete_group(uuid: Uuid) -> Result<(), ApiError> {
    delete(&format!("{}/groups/{}", SERVICE_ROOT, uuid)).await
}

#[cfg(feature = "ssr")]
pub async fn delete_group(_uuid: Uuid) -> Result<(), ApiError> {
    Err(not_on_server())
}

/// Add a named user to a group. Owner only.
#[cfg(not(feature = "ssr"))]
pub async fn add_member(uuid: Uuid, username: &str) -> Result<(), ApiError> {
    post_json(
        &format!("{}/groups/{}/members", SERVICE_ROOT, uuid),
        &serde_json::json!({ "name": username }),
    )
    .await
}

#[cfg(feature = "ssr")]
pub async fn add_member(_uuid: Uuid, _username: &str) -> Result<(), ApiError> {
    Err(not_on_server())
}

/// Remove a member from a group. Owners can remove anyone but themselves;
/// a self-targeted removal is how a plain member leaves the group.
#[cfg(not(feature = "ssr"))]
pub async fn remove_member(uuid: Uuid, username: &str) -> Result<(), ApiError> {
    delete(&format!(
        "{}/groups/{}/members?name={}",
        SERVICE_ROOT,
        uuid,
        js_sys::encode_uri_component(username)
    ))
    .await
}

#[cfg(feature = "ssr")]
pub async fn remove_member(_uuid: Uuid, _username: &str) -> Result<(), ApiError> {
    Err(not_on_server())
}

/// Share a list with a group. Owner only, list must be authorized.
#[cfg(not(feature = "ssr"))]
pub async fn share_list(uuid: Uuid, name: &str) -> Result<(), ApiError> {
    post_json(
        &format!("{}/groups/{}/lists", SERVICE_ROOT, uuid),
        &serde_json::json!({ "name": name }),
    )
    .await
}

#[cfg(feature = "ssr")]
pub async fn share_list(_uuid: Uuid, _name: &str) -> Result<(), ApiError> {
    Err(not_on_server())
}

/// Unshare a list from a group.
#[cfg(not(feature = "ssr"))]
pub async fn unshare_list(uuid: Uuid, name: &str) -> Result<(), ApiError> {
    delete(&format!(
        "{}/groups/{}/lists?name={}",
        SERVICE_ROOT,
        uuid,
        js_sys::encode_uri_component(name)
    ))
    .await
}

#[cfg(feature = "ssr")]
pub async fn unshare_list(_uuid: Uuid, _name: &str) -> Result<(), ApiError> {
    Err(not_on_server())
}

#[cfg(feature = "ssr")]
fn not_on_server() -> ApiError {
    ApiError::Service("Mutations not available on server".to_string())
}

// ============================================================================
// Transport helpers
// ============================================================================

#[cfg(not(feature = "ssr"))]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| ApiError::Service("No window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");

    let req = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Service(format!("{:?}", e)))?;

    req.headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Service(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| ApiError::Service(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Service(format!("{:?}", e)))?;

    if !resp.ok() {
        return Err(status_error(resp.status()));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| ApiError::Service(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| ApiError::Service(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Service(e.to_string()))
}

#[cfg(not(feature = "ssr"))]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    use gloo_net::http::Request;

    let req = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Service(e.to_string()))?;

    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Service(e.to_string()))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(status_error(resp.status()))
    }
}

#[cfg(not(feature = "ssr"))]
async fn delete(url: &str) -> Result<(), ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| ApiError::Service("No window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("DELETE");

    let req = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Service(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| ApiError::Service(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Service(format!("{:?}", e)))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(status_error(resp.status()))
    }
}

#[cfg(not(feature = "ssr"))]
fn status_error(status: u16) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Service(format!("request failed with status {}", status))
    }
}
