//! `FileReader` bridged into a future.
//!
//! Requires a browser environment; the module only exists in hydrate builds.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::UiError;

type Settle = Rc<RefCell<Option<oneshot::Sender<bool>>>>;

fn settle_with(tx: Settle, loaded: bool) -> impl FnOnce(web_sys::Event) {
    move |_| {
        if let Some(tx) = tx.borrow_mut().take() {
            if tx.send(loaded).is_err() {
                log::debug!("file read settled after its caller went away");
            }
        }
    }
}

/// Read `file` into a `data:` URL suitable for an `<img src>`.
///
/// # Errors
///
/// Returns [`UiError::Browser`] if the reader cannot start, fails mid-read,
/// or yields a non-string result.
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, UiError> {
    let reader = web_sys::FileReader::new()?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx: Settle = Rc::new(RefCell::new(Some(tx)));

    let onload = Closure::once(settle_with(Rc::clone(&tx), true));
    let onerror = Closure::once(settle_with(tx, false));
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(file)?;

    let outcome = rx.await;
    reader.set_onload(None);
    reader.set_onerror(None);
    drop((onload, onerror));

    match outcome {
        Ok(true) => reader
            .result()?
            .as_string()
            .ok_or_else(|| UiError::Browser("file read produced no text".to_owned())),
        Ok(false) | Err(_) => Err(UiError::Browser("file read failed".to_owned())),
    }
}
