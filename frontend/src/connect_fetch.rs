use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, Response};

use shared::error::ApiError;
use shared::types::ErrorBody;
use shared::utils::api_url;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match *self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

pub enum Body {
    Json(String),
    Form(FormData),
}

pub async fn connect_json<R>(method: Method, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned
{
    decode(send(method, path, None).await?)
}

pub async fn connect_json_data<T, R>(method: Method, path: &str, data: &T) -> Result<R, ApiError>
    where
        T: serde::Serialize,
        R: DeserializeOwned
{
    decode(send(method, path, Some(json_body(data)?)).await?)
}

/// For calls whose response body is irrelevant.
pub async fn connect_send<T: serde::Serialize>(method: Method, path: &str, data: Option<&T>) -> Result<(), ApiError> {
    let body = match data {
        Some(data) => Some(json_body(data)?),
        None => None,
    };
    send(method, path, body).await.map(|_| ())
}

pub async fn connect_form<R>(method: Method, path: &str, form: FormData) -> Result<R, ApiError>
    where
        R: DeserializeOwned
{
    decode(send(method, path, Some(Body::Form(form))).await?)
}

pub async fn connect_form_send(method: Method, path: &str, form: FormData) -> Result<(), ApiError> {
    send(method, path, Some(Body::Form(form))).await.map(|_| ())
}

fn json_body<T: serde::Serialize>(data: &T) -> Result<Body, ApiError> {
    let value = serde_wasm_bindgen::to_value(data).map_err(|err| ApiError::Decode(err.to_string()))?;
    let text = js_sys::JSON::stringify(&value).map_err(js_error)?;
    Ok(Body::Json(text.into()))
}

fn decode<R: DeserializeOwned>(data: JsValue) -> Result<R, ApiError> {
    serde_wasm_bindgen::from_value::<R>(data).map_err(|err| ApiError::Decode(err.to_string()))
}

pub fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

async fn send(method: Method, path: &str, body: Option<Body>) -> Result<JsValue, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_credentials(RequestCredentials::Include);
    let is_json = matches!(body, Some(Body::Json(_)));
    match &body {
        Some(Body::Json(text)) => opts.set_body(&JsValue::from_str(text)),
        // the browser sets the multipart boundary itself
        Some(Body::Form(form)) => opts.set_body(form),
        None => {}
    }

    let url = api_url(path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    if is_json {
        request.headers().set("Content-Type", "application/json").map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let json = read_json(&resp).await;
    if resp.ok() {
        Ok(json.unwrap_or(JsValue::NULL))
    } else {
        let message = json.ok()
            .and_then(|data| serde_wasm_bindgen::from_value::<ErrorBody>(data).ok())
            .and_then(|body| body.error);
        log::error!("{} {url}: {} {:?}", method.as_str(), resp.status(), message);
        Err(ApiError::Server { status: resp.status(), message })
    }
}

async fn read_json(resp: &Response) -> Result<JsValue, JsValue> {
    JsFuture::from(resp.json()?).await
}
