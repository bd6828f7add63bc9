//! `gloo-net` implementation of the core `Transport`.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to obtain a response become errors here; status
//! classification happens in the core gateway.

#![allow(clippy::unused_async)]

use finansrisk::{ApiError, HttpRequest, HttpResponse, Transport};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use finansrisk::{Method, RequestBody};
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            let builder = match &request.bearer {
                Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
                None => builder,
            };
            // Multipart leaves Content-Type unset so the browser adds the boundary.
            let prepared = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(upload) => builder.body(multipart_form(&upload)?),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn multipart_form(upload: &finansrisk::Upload) -> Result<web_sys::FormData, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(js_error)?;
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    form.append_with_blob_and_filename(&upload.field, &blob, &upload.file_name)
        .map_err(js_error)?;
    Ok(form)
}
