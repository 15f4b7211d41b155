//! Browser-side encoder
//!
//! `FileReader` is callback based; these helpers turn it into a future that
//! resolves once the read finishes or fails.

use futures::channel::oneshot;
use profile_verify_common::{from_data_url, Error, PendingImage, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

type ReadSender = Rc<RefCell<Option<oneshot::Sender<std::result::Result<String, String>>>>>;

/// Read a file as a `data:<mime>;base64,...` URL (used for the preview)
pub async fn read_data_url(file: &File) -> Result<String> {
    let reader = FileReader::new().map_err(js_encode_error)?;
    let (tx, rx) = oneshot::channel();
    let tx: ReadSender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| "reader returned no data".to_string());
            send_once(&tx, result);
        }) as Box<dyn FnMut(_)>)
    };
    let onerror = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            send_once(&tx, Err("file could not be read".to_string()));
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(file).map_err(js_encode_error)?;

    let outcome = rx
        .await
        .map_err(|_| Error::Encode("file reader was dropped".into()))?;

    reader.set_onload(None);
    reader.set_onerror(None);
    drop(onload);
    drop(onerror);

    outcome.map_err(Error::Encode)
}

/// Read a file and strip the data URL header
pub async fn read_file_as_base64(file: &File) -> Result<PendingImage> {
    let data_url = read_data_url(file).await?;
    from_data_url(&data_url)
}

fn send_once(tx: &ReadSender, result: std::result::Result<String, String>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

fn js_encode_error(e: JsValue) -> Error {
    Error::Encode(format!("{:?}", e))
}
