use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

// Format bytes using binary units
pub fn fmt_bytes(n: u64) -> String {
    let mut v = n as f64;
    let units = ["B", "KB", "MB", "GB", "TB", "PB"];
    let mut i = 0usize;
    while v >= 1024.0 && i < units.len() - 1 {
        v /= 1024.0;
        i += 1;
    }
    if v >= 10.0 || i == 0 {
        format!("{:.0} {}", v, units[i])
    } else {
        format!("{:.1} {}", v, units[i])
    }
}

/// How long a toast stays in the `#toasts` container.
const TOAST_MILLIS: i32 = 2400;

// Show a transient toast; silently skipped when the page has no #toasts
pub fn show_toast(message: &str) {
    let _ = mount_toast(message);
}

fn mount_toast(message: &str) -> Option<()> {
    let win = web_sys::window()?;
    let doc = win.document()?;
    let container = doc.get_element_by_id("toasts")?;
    let toast = doc.create_element("div").ok()?;
    toast.set_class_name("toast fade-in");
    toast.set_text_content(Some(message));
    container.append_child(&toast).ok()?;

    let expire = Closure::once(move || {
        let _ = container.remove_child(&toast);
    });
    win.set_timeout_with_callback_and_timeout_and_arguments_0(expire.as_ref().unchecked_ref(), TOAST_MILLIS)
        .ok()?;
    // the timer owns the callback from here on
    expire.forget();
    Some(())
}
