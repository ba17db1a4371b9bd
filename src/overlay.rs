use crate::constants::*;
use crate::dom;
use web_sys as web;

/// Starts the opacity fade of the start screen.
pub fn fade_out(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ID_START_SCREEN) {
        dom::set_style(&el, "transition", START_FADE_TRANSITION);
        dom::set_style(&el, "opacity", "0");
    }
}

/// Removes the faded start screen and unhides the main content.
pub fn reveal_main(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ID_START_SCREEN) {
        dom::set_style(&el, "display", "none");
    }
    if let Some(main) = document.get_element_by_id(ID_MAIN_CONTENT) {
        _ = main.class_list().remove_1(CLASS_HIDDEN);
    }
}
