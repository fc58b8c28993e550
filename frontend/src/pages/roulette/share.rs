use gloo::net::http::Request;
use js_sys::{Function, Object, Promise, Reflect};
use log::{info, warn};
use shared::share::ShareRequest;
use shared::RouletteError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShareOutcome {
    /// Handed to the native share sheet.
    Shared,
    Copied,
    /// The user closed the share sheet.
    Cancelled,
}

fn delivery_error(context: &str, err: JsValue) -> RouletteError {
    RouletteError::ShareDelivery(format!("{}: {:?}", context, err))
}

async fn fetch_short_url_body(endpoint: &str, request: &ShareRequest) -> Result<String, String> {
    let response = Request::post(endpoint)
        .json(&request.shorten_request())
        .map_err(|e| format!("Failed to build request: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("Error status: {}", response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Error reading response: {:?}", e))
}

/// Ask the shortener for a short link. Any failure keeps the full link.
pub async fn shorten(request: ShareRequest, endpoint: Option<&str>) -> ShareRequest {
    let Some(endpoint) = endpoint else {
        return request;
    };

    match fetch_short_url_body(endpoint, &request).await {
        Ok(body) => request.with_shortened(Some(&body)),
        Err(e) => {
            warn!("url shortener unavailable, sharing full link: {}", e);
            request.with_shortened(None)
        }
    }
}

fn navigator_method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

fn is_abort(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|e| e.name() == "AbortError")
        .unwrap_or(false)
}

async fn call_promise(target: &JsValue, method: &Function, arg: &JsValue) -> Result<JsValue, JsValue> {
    let promise = method.call1(target, arg)?.dyn_into::<Promise>()?;
    JsFuture::from(promise).await
}

async fn copy_to_clipboard(navigator: &JsValue, url: &str) -> Result<ShareOutcome, RouletteError> {
    let clipboard = Reflect::get(navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null())
        .ok_or_else(|| RouletteError::ShareDelivery("clipboard unavailable".to_string()))?;
    let write_text = navigator_method(&clipboard, "writeText")
        .ok_or_else(|| RouletteError::ShareDelivery("clipboard.writeText unavailable".to_string()))?;

    call_promise(&clipboard, &write_text, &JsValue::from_str(url))
        .await
        .map(|_| ShareOutcome::Copied)
        .map_err(|e| delivery_error("clipboard write failed", e))
}

/// Hand the link to the platform: the share sheet if there is one, the
/// clipboard otherwise.
pub async fn deliver(request: &ShareRequest) -> Result<ShareOutcome, RouletteError> {
    let navigator: JsValue = window()
        .ok_or_else(|| RouletteError::ShareDelivery("no window".to_string()))?
        .navigator()
        .into();

    if let Some(share) = navigator_method(&navigator, "share") {
        let data = Object::new();
        let _ = Reflect::set(&data, &"title".into(), &JsValue::from_str(&request.title));
        let _ = Reflect::set(&data, &"text".into(), &JsValue::from_str(&request.text));
        let _ = Reflect::set(&data, &"url".into(), &JsValue::from_str(&request.url));

        match call_promise(&navigator, &share, &data).await {
            Ok(_) => return Ok(ShareOutcome::Shared),
            Err(e) if is_abort(&e) => {
                info!("share sheet dismissed");
                return Ok(ShareOutcome::Cancelled);
            }
            Err(e) => warn!("share sheet failed, trying clipboard: {:?}", e),
        }
    }

    copy_to_clipboard(&navigator, &request.url).await
}
