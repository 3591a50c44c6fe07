use crate::constants::{GREETING_BUTTON_ID, GREETING_MESSAGE_ID};
use crate::core::greeting;
use crate::dom;

/// Standalone page fragment: the greeting button fills in a random greeting.
pub fn wire_greeting() {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(message) = document.get_element_by_id(GREETING_MESSAGE_ID) else {
        log::debug!("[greeting] no #{}, skipping", GREETING_MESSAGE_ID);
        return;
    };
    let wired = dom::add_click_listener(&document, GREETING_BUTTON_ID, move || {
        let text = greeting::pick(&mut rand::thread_rng());
        message.set_text_content(Some(text));
    });
    if !wired {
        log::debug!("[greeting] no #{}, skipping", GREETING_BUTTON_ID);
    }
}
