#![cfg(target_arch = "wasm32")]
#![allow(non_snake_case)]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use leptos::web_sys::{Element, Event, HtmlElement};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

use hover_tooltip::{Animation, Position, Theme, Tooltip};

wasm_bindgen_test_configure!(run_in_browser);

const SETTLE_MILLIS: u32 = 200;

fn container() -> HtmlElement {
    let container = document().create_element("div").unwrap()
        .unchecked_into::<HtmlElement>();
    document().body().unwrap().append_child(&container).unwrap();
    container
}

fn trigger(container: &HtmlElement) -> HtmlElement {
    container.query_selector(".cursor-pointer").unwrap()
        .expect("trigger should be rendered")
        .unchecked_into::<HtmlElement>()
}

fn overlay(container: &HtmlElement) -> Option<Element> {
    container.query_selector(".absolute.z-50").unwrap()
}

fn dispatch(element: &HtmlElement, event_type: &str) {
    element.dispatch_event(&Event::new(event_type).unwrap()).unwrap();
}

async fn settle() {
    TimeoutFuture::new(SETTLE_MILLIS).await;
}

#[wasm_bindgen_test]
async fn A_hover_Tooltip_should_appear_on_enter_and_disappear_on_leave() {
    let container = container();
    let _handle = mount_to(container.clone(), || view! {
        <Tooltip text="Hello" duration=0.05 delay=0.0>
            <button>"Hover me"</button>
        </Tooltip>
    });

    assert!(overlay(&container).is_none());

    dispatch(&trigger(&container), "mouseenter");
    settle().await;
    let shown = overlay(&container).expect("overlay should be mounted");
    assert_eq!(shown.text_content().unwrap(), "Hello");
    assert!(shown.get_attribute("style").unwrap().contains("opacity: 1;"));

    dispatch(&trigger(&container), "mouseleave");
    settle().await;
    assert!(overlay(&container).is_none());
}

#[wasm_bindgen_test]
async fn A_persistent_Tooltip_should_only_close_on_a_click_outside() {
    let container = container();
    let _handle = mount_to(container.clone(), || view! {
        <Tooltip text="Stays" persistent=true duration=0.05>
            <button>"Hover me"</button>
        </Tooltip>
    });

    dispatch(&trigger(&container), "mouseenter");
    dispatch(&trigger(&container), "mouseleave");
    settle().await;
    assert!(overlay(&container).is_some());

    trigger(&container).click();
    settle().await;
    assert!(overlay(&container).is_some());

    document().body().unwrap().click();
    settle().await;
    assert!(overlay(&container).is_none());
}

#[wasm_bindgen_test]
async fn A_click_Tooltip_should_toggle_and_ignore_hovering() {
    let container = container();
    let _handle = mount_to(container.clone(), || view! {
        <Tooltip text="Toggled" show_on_click=true duration=0.05>
            <button>"Click me"</button>
        </Tooltip>
    });

    dispatch(&trigger(&container), "mouseenter");
    settle().await;
    assert!(overlay(&container).is_none());

    trigger(&container).click();
    settle().await;
    assert!(overlay(&container).is_some());

    trigger(&container).click();
    settle().await;
    assert!(overlay(&container).is_none());
}

#[wasm_bindgen_test]
async fn A_Tooltip_should_only_interpret_its_text_as_markup_when_rich() {
    let plain = container();
    let _plain_handle = mount_to(plain.clone(), || view! {
        <Tooltip text="<b>bold</b>">
            <span>"Plain"</span>
        </Tooltip>
    });
    let rich = container();
    let _rich_handle = mount_to(rich.clone(), || view! {
        <Tooltip text="<b>bold</b>" rich=true>
            <span>"Rich"</span>
        </Tooltip>
    });

    dispatch(&trigger(&plain), "mouseenter");
    dispatch(&trigger(&rich), "mouseenter");
    settle().await;

    let plain_overlay = overlay(&plain).unwrap();
    assert!(plain_overlay.query_selector("b").unwrap().is_none());
    assert_eq!(plain_overlay.text_content().unwrap(), "<b>bold</b>");

    let rich_overlay = overlay(&rich).unwrap();
    assert!(rich_overlay.query_selector("b").unwrap().is_some());
    assert_eq!(rich_overlay.text_content().unwrap(), "bold");
}

#[wasm_bindgen_test]
async fn A_Tooltip_should_carry_the_classes_of_its_options() {
    let container = container();
    let _handle = mount_to(container.clone(), || view! {
        <Tooltip text="Neon" theme=Theme::Neon position=Position::Right animation=Animation::Fade class_name="extra">
            <span>"Styled"</span>
        </Tooltip>
    });

    dispatch(&trigger(&container), "mouseenter");
    settle().await;

    let class = overlay(&container).unwrap().get_attribute("class").unwrap();
    assert!(class.contains("bg-black/90"));
    assert!(class.contains("left-full top-1/2"));
    assert!(class.contains("after:border-t-black/90"));
    assert!(class.ends_with("extra"));
}
