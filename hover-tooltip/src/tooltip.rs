use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::on_click_outside;
use tracing::trace;

use crate::config::{DEFAULT_DELAY, DEFAULT_DISTANCE, DEFAULT_DURATION, DEFAULT_MAX_WIDTH, TooltipConfig};
use crate::outside_click::{bind_outside_click, ListenerGuard};
use crate::presentation::{resolve, Animation, FontSize, Position, Theme};
use crate::visibility::{Interaction, PointerEvent, Region, VisibilityController};

/// Shows `text` next to its children while they are hovered, or after they were clicked.
///
/// With `rich`, `text` is injected as markup without any sanitization.
#[component]
pub fn Tooltip(
    #[prop(into)] text: Signal<String>,
    #[prop(default = Position::Top)] position: Position,
    #[prop(default = Theme::Modern)] theme: Theme,
    #[prop(default = Animation::Smooth)] animation: Animation,
    #[prop(default = FontSize::Sm)] font_size: FontSize,
    #[prop(default = DEFAULT_DELAY)] delay: f64,
    #[prop(default = DEFAULT_DURATION)] duration: f64,
    #[prop(default = DEFAULT_DISTANCE)] distance: f64,
    #[prop(into, default = String::from(DEFAULT_MAX_WIDTH))] max_width: String,
    #[prop(default = true)] arrow: bool,
    #[prop(optional)] show_on_click: bool,
    #[prop(optional, into)] persistent: MaybeProp<bool>,
    #[prop(optional)] rich: bool,
    #[prop(optional, into)] class_name: String,
    children: Children,
) -> impl IntoView {

    let config = TooltipConfig {
        text: String::new(),
        position: Some(position),
        theme: Some(theme),
        animation: Some(animation),
        font_size: Some(font_size),
        delay,
        duration,
        distance,
        max_width,
        arrow,
        show_on_click,
        persistent: persistent.get_untracked().unwrap_or(false),
        rich,
        class_name,
    };

    let persistent = Signal::derive(move || persistent.get().unwrap_or(false));

    tooltip_view(config, text, persistent, children)
}

/// A [`Tooltip`] whose options were assembled beforehand, e.g. loaded via [`TooltipConfig::from_json`].
#[component]
pub fn ConfiguredTooltip(
    config: TooltipConfig,
    children: Children,
) -> impl IntoView {

    let text = Signal::stored(Clone::clone(&config.text));
    let persistent = Signal::stored(config.persistent);

    tooltip_view(config, text, persistent, children)
}

fn tooltip_view(
    config: TooltipConfig,
    text: Signal<String>,
    persistent: Signal<bool>,
    children: Children,
) -> impl IntoView {

    let presentation = resolve(&config);
    let overlay_class = StoredValue::new(presentation.overlay_class(&config));
    let overlay_styles = StoredValue::new((
        presentation.overlay_style(&config, false),
        presentation.overlay_style(&config, true),
    ));

    let show_on_click = config.show_on_click;
    let rich = config.rich;
    let exit_duration = exit_delay(config.duration);

    let controller = RwSignal::new(VisibilityController::new(Interaction {
        show_on_click,
        persistent: persistent.get_untracked(),
    }));

    // Keeps the overlay in the DOM while it animates out.
    let mounted = RwSignal::new(false);
    // Whether the overlay shows its visible or its hidden motion state.
    let shown = RwSignal::new(false);

    let is_visible = move || controller.try_with_untracked(VisibilityController::is_visible).unwrap_or(false);

    // Deferred steps only apply if no other visibility change happened since they were scheduled.
    let is_current = move |generation: u64| {
        controller.try_with_untracked(|controller| controller.is_current(generation)).unwrap_or(false)
    };

    let dispatch = move |event: PointerEvent| {
        let changed = controller.try_update_untracked(|controller| controller.handle(event)).unwrap_or(false);
        if !changed {
            return;
        }
        let Some(generation) = controller.try_with_untracked(VisibilityController::generation) else {
            return;
        };

        if is_visible() {
            mounted.set(true);
            // The hidden state has to be rendered for one frame, before the transition can start.
            request_animation_frame(move || {
                request_animation_frame(move || {
                    if is_current(generation) {
                        shown.try_set(true);
                    }
                });
            });
        } else {
            shown.set(false);
            set_timeout(move || {
                if is_current(generation) {
                    mounted.try_set(false);
                }
            }, exit_duration);
        }
    };

    Effect::new(move |_| {
        let persistent = persistent.get();
        controller.update_untracked(|controller| {
            controller.set_interaction(Interaction { show_on_click, persistent });
        });
    });

    let wrapper = NodeRef::<Div>::new();
    let owner = Owner::current().unwrap_or_else(Owner::new);

    bind_outside_click(persistent, move || {
        // Registered on the component's owner, so that re-running the binding's effect does not tear it down.
        let stop = owner.with(|| {
            on_click_outside(wrapper, move |_| dispatch(PointerEvent::PointerDown(Region::Outside)))
        });
        ListenerGuard::new(stop)
    });

    on_cleanup(|| trace!("Unmounting tooltip."));

    view! {
        <div node_ref=wrapper class="relative inline-block">
            <div
                class="cursor-pointer"
                on:mouseenter=move |_| dispatch(PointerEvent::TriggerEnter)
                on:mouseleave=move |_| dispatch(PointerEvent::TriggerLeave)
                on:click=move |_| dispatch(PointerEvent::TriggerClick)
            >
                { children() }
            </div>
            <Show when=move || mounted.get()>
                <div
                    class=move || overlay_class.get_value()
                    style=move || overlay_styles.with_value(|(hidden, visible)| {
                        if shown.get() { Clone::clone(visible) } else { Clone::clone(hidden) }
                    })
                >
                    {
                        move || if rich {
                            view! { <div inner_html=move || text.get()></div> }.into_any()
                        } else {
                            view! { <span>{ move || text.get() }</span> }.into_any()
                        }
                    }
                </div>
            </Show>
        </div>
    }
}

/// Browsers schedule timeouts in milliseconds as a signed 32-bit integer.
const MAX_TIMEOUT: Duration = Duration::from_millis(i32::MAX as u64);

/// How long the overlay stays mounted after it started hiding.
fn exit_delay(duration: f64) -> Duration {
    Duration::try_from_secs_f64(duration.max(0.0))
        .unwrap_or(MAX_TIMEOUT)
        .min(MAX_TIMEOUT)
}
