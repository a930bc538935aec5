use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, HtmlVideoElement,
    KeyboardEvent, MouseEvent, SubmitEvent,
};
use yew::prelude::*;

use crate::behavior::{self, Category, Filter};
use crate::clipboard::{CopyButton, CONTACT_EMAIL, DEMO_SHARE_TEXT};
use crate::dom;
use crate::effects;
use crate::toast::{Notify, Toast, ToastHost, ToastKind};

const SITE_NAME: &str = "Yun Chen";
const HERO_TITLE: &str = "Technical Art, in Motion";
const HERO_SUBTITLE: &str = "Realtime VFX, stylized shading, and the tools that ship them.";
const ORB_COUNT: usize = 3;

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("works", "Works"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

#[derive(Clone, Copy, PartialEq)]
struct WorkItem {
    title: &'static str,
    summary: &'static str,
    category: Category,
    video_src: Option<&'static str>,
}

const WORK_ITEMS: &[WorkItem] = &[
    WorkItem {
        title: "Stylized Waterfall",
        summary: "Flipbook-free waterfall built from scrolling masks and depth fade.",
        category: Category::Vfx,
        video_src: Some("/media/stylized-waterfall.mp4"),
    },
    WorkItem {
        title: "Sword Trail Pass",
        summary: "Anime-style weapon trails with per-strike color grading.",
        category: Category::Vfx,
        video_src: Some("/media/sword-trail.mp4"),
    },
    WorkItem {
        title: "Toon Shading Pipeline",
        summary: "Cel shader family with ramp control and outline passes.",
        category: Category::Shader,
        video_src: Some("/media/toon-shading.mp4"),
    },
    WorkItem {
        title: "Procedural Skybox",
        summary: "Day-night skybox driven by a single time-of-day scalar.",
        category: Category::Shader,
        video_src: None,
    },
    WorkItem {
        title: "Rig Batch Exporter",
        summary: "One-click DCC export with naming and LOD validation.",
        category: Category::Tool,
        video_src: None,
    },
    WorkItem {
        title: "FX Graph Linter",
        summary: "Static checks for particle graphs before they reach the build.",
        category: Category::Tool,
        video_src: Some("/media/fx-linter.mp4"),
    },
    WorkItem {
        title: "Fate Awaits",
        summary: "Playable demo with combat VFX, UI shaders, and cutscene timing.",
        category: Category::Game,
        video_src: None,
    },
];

const SKILL_GROUPS: &[(&str, &[&str])] = &[
    ("Realtime VFX", &["Niagara", "Shuriken", "Houdini sims", "Flipbooks"]),
    ("Shading", &["HLSL", "Shader Graph", "Substance", "Ramp lighting"]),
    ("Pipeline", &["Python", "Rust", "USD", "Build automation"]),
];

fn anchor_callback(target_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        dom::scroll_to_anchor(target_id);
    })
}

fn nav_anchor_callback(
    target_id: &'static str,
    menu_open: UseStateHandle<bool>,
) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        menu_open.set(false);
        dom::scroll_to_anchor(target_id);
    })
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let condensed = use_state(|| false);
    let active_id = use_state(|| None::<String>);
    let menu_open = use_state(|| false);

    {
        let condensed = condensed.clone();
        let active_id = active_id.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                EventListener::new(&win, "scroll", move |_event| {
                    let scroll_y = dom::scroll_y();
                    condensed.set(behavior::navbar_condensed(scroll_y));
                    let spans = dom::section_spans();
                    active_id.set(behavior::active_section(scroll_y, &spans).map(str::to_string));
                })
            });
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        let open = *menu_open;
        Callback::from(move |_: MouseEvent| menu_open.set(!open))
    };

    html! {
        <nav class={classes!("navbar", (*condensed).then_some("scrolled"))}>
            <a class="nav-brand" href="#home" onclick={nav_anchor_callback("home", menu_open.clone())}>
                { SITE_NAME }
            </a>
            <ul class={classes!("nav-links", (*menu_open).then_some("active"))}>
                { for NAV_LINKS.iter().map(|&(id, label)| {
                    let is_active = (*active_id).as_deref() == Some(id);
                    html! {
                        <li key={id}>
                            <a
                                href={format!("#{id}")}
                                class={classes!(is_active.then_some("active"))}
                                onclick={nav_anchor_callback(id, menu_open.clone())}
                            >
                                { label }
                            </a>
                        </li>
                    }
                }) }
            </ul>
            <button
                type="button"
                class={classes!("mobile-menu-btn", (*menu_open).then_some("active"))}
                aria-label="Toggle navigation"
                onclick={toggle_menu}
            >
                { for (0..3).map(|bar| html! {
                    <span style={behavior::hamburger_bar_style(bar, *menu_open)} />
                }) }
            </button>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let subtitle_ref = use_node_ref();
    let orb_refs = use_memo((), |_| {
        (0..ORB_COUNT).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    {
        let subtitle_ref = subtitle_ref.clone();
        use_effect_with((), move |_| {
            if let Some(subtitle) = subtitle_ref.cast::<HtmlElement>() {
                effects::type_into(subtitle, effects::HERO_TYPE_INTERVAL_MS);
            }
            || ()
        });
    }

    {
        let orb_refs = orb_refs.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                EventListener::new(&win, "scroll", move |_event| {
                    let scroll_y = dom::scroll_y();
                    for (index, orb) in orb_refs.iter().enumerate() {
                        if let Some(orb) = orb.cast::<HtmlElement>() {
                            let shift = behavior::parallax_translate_y(scroll_y, index);
                            let _ = orb
                                .style()
                                .set_property("transform", &format!("translateY({shift:.2}px)"));
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let onmousemove = {
        let orb_refs = orb_refs.clone();
        Callback::from(move |event: MouseEvent| {
            let (width, height) = dom::viewport_size();
            if width <= 0.0 || height <= 0.0 {
                return;
            }
            let x_ratio = f64::from(event.client_x()) / width;
            let y_ratio = f64::from(event.client_y()) / height;

            for (index, orb) in orb_refs.iter().enumerate() {
                if let Some(orb) = orb.cast::<HtmlElement>() {
                    let (dx, dy) = behavior::orb_follow_offset(x_ratio, y_ratio, index);
                    let _ = orb
                        .style()
                        .set_property("transform", &format!("translate({dx:.2}px, {dy:.2}px)"));
                }
            }
        })
    };

    html! {
        <section id="home" class="hero" onmousemove={onmousemove}>
            <div class="hero-backdrop" aria-hidden="true">
                { for orb_refs.iter().enumerate().map(|(index, orb)| html! {
                    <div class={format!("gradient-orb orb-{index}")} ref={orb.clone()} />
                }) }
            </div>
            <div class="hero-copy">
                <h1 class="hero-title">{ HERO_TITLE }</h1>
                <p class="hero-subtitle" ref={subtitle_ref}>{ HERO_SUBTITLE }</p>
                <a class="hero-cta" href="#works" onclick={anchor_callback("works")}>
                    { "See the work" }
                </a>
            </div>
        </section>
    }
}

#[derive(Clone, PartialEq, Default)]
struct ModalContent {
    title: AttrValue,
    description: AttrValue,
    video_src: AttrValue,
}

#[derive(Properties, PartialEq)]
struct WorksSectionProps {
    notify: Notify,
    on_open: Callback<ModalContent>,
}

#[function_component(WorksSection)]
fn works_section(props: &WorksSectionProps) -> Html {
    let filter = use_state(|| Filter::All);
    // Bumped on every filter click so the grid remounts and replays the
    // staggered entrance, including reselection of the current filter.
    let generation = use_state(|| 0u32);

    let filters = {
        let mut filters = vec![Filter::All];
        filters.extend(
            behavior::distinct_categories(WORK_ITEMS.iter().map(|item| item.category))
                .into_iter()
                .map(Filter::Only),
        );
        filters
    };

    html! {
        <section id="works" class="works">
            <h2 class="section-title">{ "Selected Works" }</h2>
            <div class="filter-row">
                { for filters.into_iter().map(|entry| {
                    let onclick = {
                        let filter = filter.clone();
                        let generation = generation.clone();
                        Callback::from(move |_: MouseEvent| {
                            filter.set(entry);
                            generation.set((*generation).wrapping_add(1));
                        })
                    };
                    html! {
                        <button
                            type="button"
                            key={entry.label()}
                            class={classes!("filter-btn", (*filter == entry).then_some("active"))}
                            onclick={onclick}
                        >
                            { entry.label() }
                        </button>
                    }
                }) }
            </div>
            <div class="portfolio-grid">
                { for WORK_ITEMS.iter().enumerate().map(|(index, item)| {
                    let item = *item;
                    let visible = filter.allows(item.category);
                    let entrance = visible.then(|| behavior::item_entrance_style(index));

                    let on_item_click = {
                        let notify = props.notify.clone();
                        Callback::from(move |_: MouseEvent| {
                            notify.emit((
                                AttrValue::from(format!("Viewing: {}", item.title)),
                                ToastKind::Info,
                            ));
                        })
                    };

                    let on_view_click = {
                        let notify = props.notify.clone();
                        let on_open = props.on_open.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.stop_propagation();
                            match item.video_src {
                                Some(src) => on_open.emit(ModalContent {
                                    title: AttrValue::from(item.title),
                                    description: AttrValue::from(item.summary),
                                    video_src: AttrValue::from(src),
                                }),
                                None => notify.emit((
                                    AttrValue::from(format!("Viewing: {}", item.title)),
                                    ToastKind::Info,
                                )),
                            }
                        })
                    };

                    html! {
                        <article
                            key={format!("{}-{index}", *generation)}
                            class={classes!("portfolio-item", (!visible).then_some("hidden"))}
                            style={entrance}
                            data-category={item.category.as_str()}
                            onclick={on_item_click}
                        >
                            <div class="item-media">
                                <span class="item-badge">{ item.category.label() }</span>
                            </div>
                            <div class="item-body">
                                <h3 class="item-title">{ item.title }</h3>
                                <p class="item-desc">{ item.summary }</p>
                                <button type="button" class="view-btn" onclick={on_view_click}>
                                    { if item.video_src.is_some() { "Play preview" } else { "View details" } }
                                </button>
                            </div>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
fn skills_section() -> Html {
    let lift = Callback::from(|event: MouseEvent| {
        if let Some(card) = event
            .current_target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        {
            let _ = card
                .style()
                .set_property("transform", "translateY(-8px) scale(1.02)");
        }
    });
    let settle = Callback::from(|event: MouseEvent| {
        if let Some(card) = event
            .current_target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        {
            let _ = card
                .style()
                .set_property("transform", "translateY(0) scale(1)");
        }
    });

    html! {
        <section id="skills" class="skills">
            <h2 class="section-title">{ "Toolbelt" }</h2>
            <div class="skills-grid">
                { for SKILL_GROUPS.iter().map(|&(group, entries)| html! {
                    <div
                        key={group}
                        class="skill-category"
                        onmouseenter={lift.clone()}
                        onmouseleave={settle.clone()}
                    >
                        <h3>{ group }</h3>
                        <ul>
                            { for entries.iter().map(|entry| html! { <li key={*entry}>{ *entry }</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    notify: Notify,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let notify = props.notify.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|field| field.value())
                .unwrap_or_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|field| field.value())
                .unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|field| field.value())
                .unwrap_or_default();

            match behavior::validate_contact(&name, &email, &message) {
                Ok(()) => {
                    notify.emit((
                        AttrValue::from("Message sent! I will get back to you soon."),
                        ToastKind::Success,
                    ));
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                Err(error) => {
                    notify.emit((AttrValue::from(error.to_string()), ToastKind::Error));
                }
            }
        })
    };

    html! {
        <section id="contact" class="contact">
            <h2 class="section-title">{ "Contact" }</h2>
            <div class="contact-layout">
                <div class="contact-info reveal">
                    <h3>{ "Let's build something" }</h3>
                    <p>{ "Open to VFX contracts, shader work, and pipeline consulting." }</p>
                    <div class="email-copy-wrapper">
                        <span class="contact-email">{ CONTACT_EMAIL }</span>
                        <CopyButton
                            text={CONTACT_EMAIL}
                            idle_label="Copy"
                            success_message="Email address copied to clipboard!"
                            notify={props.notify.clone()}
                        />
                    </div>
                    <div class="game-download">
                        <h4>{ "Fate Awaits, playable demo" }</h4>
                        <p>{ "Grab the build from the shared drive." }</p>
                        <CopyButton
                            text={DEMO_SHARE_TEXT}
                            idle_label="Copy link"
                            success_message="Download link copied to clipboard!"
                            notify={props.notify.clone()}
                        />
                    </div>
                </div>
                <form class="contact-form" ref={form_ref} onsubmit={onsubmit}>
                    <label for="name">{ "Name" }</label>
                    <input ref={name_ref} id="name" name="name" type="text" />
                    <label for="email">{ "Email" }</label>
                    <input ref={email_ref} id="email" name="email" type="text" />
                    <label for="message">{ "Message" }</label>
                    <textarea ref={message_ref} id="message" name="message" rows="6" />
                    <button type="submit" class="submit-btn">{ "Send message" }</button>
                </form>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct VideoModalProps {
    open: bool,
    content: ModalContent,
    on_close: Callback<()>,
}

#[function_component(VideoModal)]
fn video_modal(props: &VideoModalProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with((props.open, props.content.clone()), move |(open, _)| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                if *open {
                    dom::set_body_overflow("hidden");
                    video.load();
                    match video.play() {
                        Ok(promise) => spawn_local(async move {
                            if let Err(error) = JsFuture::from(promise).await {
                                web_sys::console::log_2(
                                    &JsValue::from_str("autoplay blocked:"),
                                    &error,
                                );
                            }
                        }),
                        Err(error) => {
                            web_sys::console::log_2(&JsValue::from_str("autoplay blocked:"), &error);
                        }
                    }
                } else {
                    let _ = video.pause();
                    video.set_current_time(0.0);
                    dom::set_body_overflow("");
                }
            }
            || ()
        });
    }

    {
        // Registered only while open, so Escape is a no-op on a closed modal.
        let on_close = props.on_close.clone();
        use_effect_with(props.open, move |open| {
            let listener = open
                .then(|| {
                    dom::document().map(|doc| {
                        EventListener::new(&doc, "keydown", move |event| {
                            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                return;
                            };
                            if event.key() == "Escape" {
                                on_close.emit(());
                            }
                        })
                    })
                })
                .flatten();
            move || drop(listener)
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!("video-modal", props.open.then_some("active"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!props.open).to_string()}
        >
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-body">
                <button type="button" class="modal-close" aria-label="Close" onclick={close}>
                    { "\u{00d7}" }
                </button>
                <video ref={video_ref} class="modal-video" controls="controls" preload="metadata">
                    <source src={props.content.video_src.clone()} type="video/mp4" />
                </video>
                <h3 class="modal-title">{ props.content.title.clone() }</h3>
                <p class="modal-desc">{ props.content.description.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let next_toast_id = use_mut_ref(|| 0u64);
    let modal_open = use_state(|| false);
    let modal_content = use_state(ModalContent::default);

    let notify: Notify = {
        let toasts = toasts.clone();
        let next_toast_id = next_toast_id.clone();
        Callback::from(move |(message, kind): (AttrValue, ToastKind)| {
            let mut id = next_toast_id.borrow_mut();
            *id += 1;

            let mut next = (*toasts).clone();
            next.push(Toast {
                id: *id,
                message,
                kind,
            });
            toasts.set(next);
        })
    };

    let on_toast_expired = {
        let toasts = toasts.clone();
        Callback::from(move |expired: u64| {
            let mut next = (*toasts).clone();
            next.retain(|toast| toast.id != expired);
            toasts.set(next);
        })
    };

    let on_open = {
        let modal_open = modal_open.clone();
        let modal_content = modal_content.clone();
        Callback::from(move |content: ModalContent| {
            modal_content.set(content);
            modal_open.set(true);
        })
    };

    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    use_effect_with((), move |_| {
        effects::reveal_on_scroll(".reveal");
        || ()
    });

    html! {
        <>
            <Navbar />
            <main>
                <Hero />
                <WorksSection notify={notify.clone()} on_open={on_open} />
                <SkillsSection />
                <ContactSection notify={notify} />
            </main>
            <footer class="site-footer">
                <p>{ format!("\u{00a9} 2025 {SITE_NAME}. Built with Rust and WebAssembly.") }</p>
            </footer>
            <VideoModal
                open={*modal_open}
                content={(*modal_content).clone()}
                on_close={on_close}
            />
            <ToastHost toasts={(*toasts).clone()} on_expired={on_toast_expired} />
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(
        dom::document()
            .and_then(|doc| doc.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
