use hover_tooltip::{Animation, ConfiguredTooltip, Position, Theme, Tooltip};
use leptos::prelude::*;
use strum::IntoEnumIterator;
use tracing::{error, info};

use crate::catalogue::{Catalogue, Entry, Section};

#[component]
pub fn App() -> impl IntoView {

    let catalogue = match Catalogue::load() {
        Ok(catalogue) => {
            info!("Loaded showcase catalogue with {} sections.", catalogue.sections.len());
            Some(catalogue)
        }
        Err(cause) => {
            error!("{cause}");
            None
        }
    };

    view! {
        <div class="container mx-auto p-8 space-y-12">
            <h1 class="text-3xl font-bold">"hover-tooltip"</h1>
            {
                match catalogue {
                    Some(catalogue) => catalogue.sections.into_iter()
                        .map(|section| view! { <CatalogueSection section /> })
                        .collect_view()
                        .into_any(),
                    None => view! {
                        <p class="text-red-700">"The showcase catalogue could not be loaded. See the console for details."</p>
                    }.into_any(),
                }
            }
            <ThemeGallery />
        </div>
    }
}

#[component]
fn CatalogueSection(section: Section) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-xl font-semibold mb-6">{ section.title }</h2>
            <div class="flex flex-wrap gap-16">
                {
                    section.entries.into_iter()
                        .map(|Entry { label, tooltip }| view! {
                            <ConfiguredTooltip config=tooltip>
                                <span class="px-3 py-1 rounded bg-white shadow">{ label }</span>
                            </ConfiguredTooltip>
                        })
                        .collect_view()
                }
            </div>
        </section>
    }
}

/// One tooltip per theme and position, cycling through the animations.
#[component]
fn ThemeGallery() -> impl IntoView {

    let animations = Animation::iter().collect::<Vec<_>>();

    view! {
        <section>
            <h2 class="text-xl font-semibold mb-6">"Themes"</h2>
            <div class="grid grid-cols-4 gap-16 bg-gradient-to-br from-indigo-500 to-pink-500 p-16 rounded-xl">
                {
                    Theme::iter()
                        .flat_map(|theme| Position::iter().map(move |position| (theme, position)))
                        .enumerate()
                        .map(|(index, (theme, position))| {
                            let animation = animations[index % animations.len()];
                            view! {
                                <Tooltip
                                    text=format!("{theme}, {animation}")
                                    theme
                                    position
                                    animation
                                >
                                    <span class="px-3 py-1 rounded bg-white/80">{ format!("{theme} {position}") }</span>
                                </Tooltip>
                            }
                        })
                        .collect_view()
                }
            </div>
        </section>
    }
}
