use crate::{
    config::{SiteConfig, SITE_CONFIG_PATH},
    contact::{ContactField, ContactSubmission, SubmitGate},
    content::{Section, AVAILABILITY, HERO_INTRO, OWNER_NAME, PROJECTS, QUICK_FACTS, SKILLS},
    grid::{project_cards, skill_tiles, Disclosure, ProjectCard, SkillGridMode, SkillTile},
    motion::{self, EntranceAnimation, RevealTracker, BACKGROUND_BLOBS, REVEAL_KEY_ATTR, REVEAL_ROOT_MARGIN},
    selection::SelectionState,
};
use gloo_net::http::Request;
use js_sys::{Array, Date};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, FormData, HtmlFormElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

impl Reducible for SelectionState {
    type Action = &'static str;

    fn reduce(self: Rc<Self>, name: Self::Action) -> Rc<Self> {
        Rc::new((*self).select(name))
    }
}

pub enum RevealAction {
    Reveal(String),
    RevealAll(Vec<String>),
}

impl Reducible for RevealTracker {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RevealAction::Reveal(key) => next.mark_visible(&key),
            RevealAction::RevealAll(keys) => keys
                .iter()
                .fold(false, |changed, key| next.mark_visible(key) || changed),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
enum ConfigStatus {
    Loading,
    Ready(Rc<SiteConfig>),
    Unavailable,
}

impl ConfigStatus {
    fn site(&self) -> Option<&SiteConfig> {
        match self {
            Self::Ready(site) => Some(site.as_ref()),
            Self::Loading | Self::Unavailable => None,
        }
    }
}

async fn fetch_site_config() -> Option<SiteConfig> {
    let response = Request::get(SITE_CONFIG_PATH).send().await.ok()?;

    if !response.ok() {
        log::warn!("site configuration request failed with status {}", response.status());
        return None;
    }

    response.json::<SiteConfig>().await.ok()
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn entrance_classes(animation: &EntranceAnimation, revealed: bool) -> Classes {
    classes!(
        "entrance",
        animation.class(),
        animation.is_playing(revealed).then_some("is-playing")
    )
}

fn section_links() -> Html {
    Section::ALL
        .iter()
        .map(|section| {
            html! {
                <a key={section.anchor()} href={section.href()}>{section.label()}</a>
            }
        })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
struct ContainerProps {
    #[prop_or_default]
    children: Html,
}

#[function_component(Container)]
fn container(props: &ContainerProps) -> Html {
    html! { <div class="container">{props.children.clone()}</div> }
}

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <h2>{props.title.clone()}</h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BadgeProps {
    #[prop_or_default]
    children: Html,
}

#[function_component(Badge)]
fn badge(props: &BadgeProps) -> Html {
    html! { <span class="badge">{props.children.clone()}</span> }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    /// Accessible name for icon-only links.
    #[prop_or_default]
    label: Option<AttrValue>,
    #[prop_or_default]
    children: Html,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={props.label.clone()}
        >
            {props.children.clone()}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[function_component(AnimatedBackground)]
fn animated_background() -> Html {
    html! {
        <div class="backdrop" aria-hidden="true">
            <div class="aurora aurora1"></div>
            <div class="aurora aurora2"></div>
            <div class="aurora aurora3"></div>
            <div class="radial-glow"></div>
            {
                for BACKGROUND_BLOBS.iter().map(|blob| html! {
                    <div key={blob.class} class={classes!("blob", blob.class)} style={blob.style()}></div>
                })
            }
            <div class="grid-overlay"></div>
        </div>
    }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    html! {
        <header class="site-header">
            <Container>
                <div class="nav-row">
                    <a href="#" class="brand">{OWNER_NAME}</a>
                    <nav class="nav-links" aria-label="Sections">{section_links()}</nav>
                    <a class="pill-link" href={Section::Projects.href()}>{"View Work"}</a>
                </div>
            </Container>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SkillGridProps {
    mode: SkillGridMode,
    selection: SelectionState,
    on_select: Callback<&'static str>,
}

fn disclosure_view(disclosure: Disclosure) -> Html {
    let Some(text) = disclosure.text() else {
        return html! {};
    };
    let expanded = disclosure.is_visible();

    html! {
        <span
            class={classes!("skill-disclosure", expanded.then_some("is-expanded"))}
            style={motion::disclosure_style()}
            aria-hidden={(!expanded).to_string()}
        >
            <span class="skill-disclosure-body">{text}</span>
        </span>
    }
}

fn skill_tile_view(tile: SkillTile, on_select: &Callback<&'static str>) -> Html {
    let name = tile.name;
    let onclick = on_select.reform(move |_: MouseEvent| name);
    let aria_expanded = tile
        .disclosure
        .text()
        .map(|_| AttrValue::from(tile.disclosure.is_visible().to_string()));

    html! {
        <button
            key={tile.key}
            type="button"
            class={classes!("skill-tile", tile.selected.then_some("is-selected"))}
            aria-pressed={tile.selected.to_string()}
            aria-expanded={aria_expanded}
            onclick={onclick}
        >
            <span class="skill-name">{name}</span>
            <span class="skill-underline" aria-hidden="true"></span>
            {disclosure_view(tile.disclosure)}
        </button>
    }
}

/// One grid for both the hero preview and the skills section; `mode` decides
/// whether the selected tile expands its description.
#[function_component(SkillGrid)]
fn skill_grid(props: &SkillGridProps) -> Html {
    let tiles = skill_tiles(SKILLS, props.selection, props.mode);
    let mode_class = if props.mode.show_description_on_select {
        "skill-grid-full"
    } else {
        "skill-grid-preview"
    };

    html! {
        <div class={classes!("skill-grid", mode_class)}>
            { for tiles.into_iter().map(|tile| skill_tile_view(tile, &props.on_select)) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    config: ConfigStatus,
    selection: SelectionState,
    on_select: Callback<&'static str>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let contact_actions = match props.config.site() {
        Some(site) => html! {
            <>
                <a class="action" href={site.mailto_href()}>
                    <span aria-hidden="true">{"✉"}</span>{" Contact Me"}
                </a>
                <ExternalLink
                    class={classes!("action", "icon-only")}
                    href={site.repositories_href()}
                    label="GitHub repositories"
                >
                    <span aria-hidden="true">{"GH"}</span>
                </ExternalLink>
                <ExternalLink
                    class={classes!("action", "icon-only")}
                    href={site.linkedin_url.clone()}
                    label="LinkedIn profile"
                >
                    <span aria-hidden="true">{"in"}</span>
                </ExternalLink>
            </>
        },
        None => html! {},
    };

    html! {
        <section class="hero">
            <Container>
                <div class="hero-grid">
                    <div>
                        <h1
                            class={classes!(entrance_classes(&motion::HERO_HEADING, false), "hero-heading")}
                            style={motion::HERO_HEADING.style()}
                        >
                            {"Hi, I'm "}
                            <span class="gradient-text">{OWNER_NAME}</span>
                        </h1>
                        <p
                            class={classes!(entrance_classes(&motion::HERO_INTRO, false), "hero-intro")}
                            style={motion::HERO_INTRO.style()}
                        >
                            {HERO_INTRO}
                        </p>
                        <div
                            class={classes!(entrance_classes(&motion::HERO_ACTIONS, false), "hero-actions")}
                            style={motion::HERO_ACTIONS.style()}
                        >
                            <a class="action primary" href={Section::Projects.href()}>
                                <span aria-hidden="true">{"▣"}</span>{" See Projects"}
                            </a>
                            {contact_actions}
                        </div>
                    </div>

                    <div
                        class={classes!(entrance_classes(&motion::HERO_VISUAL, false), "card", "hero-visual")}
                        style={motion::HERO_VISUAL.style()}
                    >
                        <div class="hero-visual-header">
                            <span class="muted">{"</> Featured Stack"}</span>
                            <span class="availability">{AVAILABILITY}</span>
                        </div>
                        <SkillGrid
                            mode={SkillGridMode::PREVIEW}
                            selection={props.selection}
                            on_select={props.on_select.clone()}
                        />
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id={Section::About.anchor()} class="section">
            <Container>
                <SectionTitle title="About Me" subtitle="Who I am and what I do" />
                <div class="about-grid">
                    <div class="about-copy">
                        <p>
                            {"I'm "}{OWNER_NAME}{", a web developer with "}<strong>{"1 year"}</strong>
                            {" of hands\u{2011}on experience building responsive, accessible, and performant web apps. \
                              I enjoy crafting clean UI, scalable architecture, and smooth UX with modern tools like "}
                            <em>{"Next.js"}</em>{" and "}<em>{"Tailwind CSS"}</em>{"."}
                        </p>
                        <p>
                            {"I’ve worked on projects ranging from an end\u{2011}to\u{2011}end "}
                            <strong>{"Bank Management System"}</strong>
                            {" to consumer apps like an "}<strong>{"E\u{2011}commerce Store"}</strong>
                            {", a "}<strong>{"WhatsApp Clone"}</strong>
                            {", and a "}<strong>{"YouTube Clone"}</strong>{"."}
                        </p>
                    </div>
                    <div class="card quick-facts">
                        <p class="muted small">{"Quick facts"}</p>
                        <ul>
                            {
                                for QUICK_FACTS.iter().map(|(label, value)| html! {
                                    <li key={*label}>
                                        {format!("{label}: ")}
                                        <span class="fact-value">{*value}</span>
                                    </li>
                                })
                            }
                        </ul>
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillsSectionProps {
    selection: SelectionState,
    on_select: Callback<&'static str>,
}

#[function_component(SkillsSection)]
fn skills_section(props: &SkillsSectionProps) -> Html {
    html! {
        <section id={Section::Skills.anchor()} class="section">
            <Container>
                <SectionTitle title="Skills" />
                <SkillGrid
                    mode={SkillGridMode::FULL}
                    selection={props.selection}
                    on_select={props.on_select.clone()}
                />
            </Container>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    card: ProjectCard,
    revealed: bool,
}

#[function_component(ProjectCardView)]
fn project_card_view(props: &ProjectCardProps) -> Html {
    let card = &props.card;

    html! {
        <article
            class={classes!("card", "project-card", entrance_classes(&card.entrance, props.revealed))}
            style={card.entrance.style()}
            data-reveal-key={card.key.clone()}
        >
            <div class="project-card-header">
                <h3>{card.title}</h3>
                <div class="project-links">
                    {
                        for card.links.iter().map(|link| html! {
                            <ExternalLink
                                key={link.kind.label()}
                                class={classes!("icon-button")}
                                href={link.href}
                                label={format!("{} for {}", link.kind.label(), card.title)}
                            >
                                <span aria-hidden="true">{link.kind.glyph()}</span>
                            </ExternalLink>
                        })
                    }
                </div>
            </div>
            <p class="project-desc">{card.desc}</p>
            <div class="badge-row">
                {
                    for card.badges.iter().map(|badge| html! {
                        <Badge key={badge.key.clone()}>{badge.label}</Badge>
                    })
                }
            </div>
        </article>
    }
}

type RevealObserver = (IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>);

fn reveal_targets(grid: &Element) -> Vec<Element> {
    let Ok(nodes) = grid.query_selector_all(&format!("[{REVEAL_KEY_ATTR}]")) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn observe_reveals(
    grid: &Element,
    dispatcher: UseReducerDispatcher<RevealTracker>,
) -> Option<RevealObserver> {
    let targets = reveal_targets(grid);
    let keys = targets
        .iter()
        .filter_map(|target| target.get_attribute(REVEAL_KEY_ATTR))
        .collect::<Vec<_>>();

    if prefers_reduced_motion() {
        dispatcher.dispatch(RevealAction::RevealAll(keys));
        return None;
    }

    let on_intersect = {
        let dispatcher = dispatcher.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    observer.unobserve(&target);
                    if let Some(key) = target.get_attribute(REVEAL_KEY_ATTR) {
                        dispatcher.dispatch(RevealAction::Reveal(key));
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => {
                log::warn!("IntersectionObserver unavailable, showing project cards without entrance");
                dispatcher.dispatch(RevealAction::RevealAll(keys));
                return None;
            }
        };

    for target in &targets {
        observer.observe(target);
    }

    Some((observer, on_intersect))
}

#[function_component(ProjectGrid)]
fn project_grid() -> Html {
    let cards = use_memo((), |_| project_cards(PROJECTS));
    let reveals = use_reducer(RevealTracker::default);
    let grid_ref = use_node_ref();

    {
        let grid_ref = grid_ref.clone();
        let dispatcher = reveals.dispatcher();
        use_effect_with((), move |_| {
            let observer = grid_ref
                .cast::<Element>()
                .and_then(|grid| observe_reveals(&grid, dispatcher));

            move || {
                if let Some((observer, _on_intersect)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    html! {
        <div class="project-grid" ref={grid_ref}>
            {
                for cards.iter().map(|card| html! {
                    <ProjectCardView
                        key={card.key.clone()}
                        card={card.clone()}
                        revealed={reveals.is_revealed(&card.key)}
                    />
                })
            }
        </div>
    }
}

#[function_component(ProjectsSection)]
fn projects_section() -> Html {
    html! {
        <section id={Section::Projects.anchor()} class="section">
            <Container>
                <SectionTitle title="Projects" subtitle="Things I’ve built" />
                <ProjectGrid />
            </Container>
        </section>
    }
}

fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    let data = FormData::new_with_form(form).ok();
    let field = |field: ContactField| {
        data.as_ref()
            .and_then(|data| data.get(field.name()).as_string())
            .unwrap_or_default()
    };

    ContactSubmission {
        name: field(ContactField::Name),
        email: field(ContactField::Email),
        message: field(ContactField::Message),
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    endpoint: Option<AttrValue>,
    unavailable: bool,
}

/// Native POST form. The submit handler only cancels submissions the gate
/// rejects; an admitted one leaves the page through the browser.
#[function_component(ContactForm)]
fn contact_form(props: &ContactFormProps) -> Html {
    let gate = use_mut_ref(SubmitGate::default);
    let submitted = use_state(|| false);
    let rejection = use_state(|| None::<String>);
    let has_endpoint = props.endpoint.is_some();

    let onsubmit = {
        let gate = gate.clone();
        let submitted = submitted.clone();
        let rejection = rejection.clone();
        Callback::from(move |event: SubmitEvent| {
            if !has_endpoint {
                event.prevent_default();
                return;
            }

            let form: HtmlFormElement = event.target_unchecked_into();
            let submission = read_submission(&form);
            let outcome = gate.borrow_mut().admit(&submission);

            match outcome {
                Ok(()) => {
                    log::info!("contact form handed to the relay");
                    rejection.set(None);
                    submitted.set(true);
                }
                Err(error) => {
                    event.prevent_default();
                    log::warn!("contact form rejected: {error}");
                    rejection.set(Some(error.to_string()));
                }
            }
        })
    };

    let status = if props.unavailable {
        Some("The contact form is not configured right now. Reach out directly instead.".to_string())
    } else if *submitted {
        Some("Sending…".to_string())
    } else {
        (*rejection).clone()
    };

    html! {
        <form
            class="card contact-form"
            action={props.endpoint.clone()}
            method="POST"
            onsubmit={onsubmit}
        >
            <input
                class="field"
                name={ContactField::Name.name()}
                placeholder={ContactField::Name.placeholder()}
                aria-label="Name"
                required=true
            />
            <input
                class="field"
                type="email"
                name={ContactField::Email.name()}
                placeholder={ContactField::Email.placeholder()}
                aria-label="Email"
                required=true
            />
            <textarea
                class="field message"
                name={ContactField::Message.name()}
                placeholder={ContactField::Message.placeholder()}
                aria-label="Message"
                required=true
            />
            <button class="action primary submit" type="submit" disabled={!has_endpoint || *submitted}>
                {"Send Message"}
                <span class="submit-arrow" aria-hidden="true">{"→"}</span>
            </button>
            <p class="form-status" role="status" aria-live="polite">
                {status.unwrap_or_default()}
            </p>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct DirectContactProps {
    config: ConfigStatus,
}

#[function_component(DirectContact)]
fn direct_contact(props: &DirectContactProps) -> Html {
    let links = match props.config.site() {
        Some(site) => html! {
            <div class="direct-links">
                <a class="chip-link" href={site.mailto_href()}>
                    <span aria-hidden="true">{"✉ "}</span>{site.email.clone()}
                </a>
                <ExternalLink class={classes!("chip-link")} href={site.github_url.clone()}>
                    <span aria-hidden="true">{"GH "}</span>{"GitHub"}
                </ExternalLink>
                <ExternalLink class={classes!("chip-link")} href={site.linkedin_url.clone()}>
                    <span aria-hidden="true">{"in "}</span>{"LinkedIn"}
                </ExternalLink>
            </div>
        },
        None if props.config == ConfigStatus::Loading => {
            html! { <p class="muted small">{"Loading contact details…"}</p> }
        }
        None => html! { <p class="muted small">{"Contact details are unavailable."}</p> },
    };

    html! {
        <div class="card direct-contact">
            <p class="muted small">{"Or reach me directly"}</p>
            {links}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    config: ConfigStatus,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    let endpoint = props
        .config
        .site()
        .map(|site| AttrValue::from(site.form_endpoint.clone()));

    html! {
        <section id={Section::Contact.anchor()} class="section">
            <Container>
                <SectionTitle title="Contact" subtitle="Let's build something together" />
                <div class="contact-grid">
                    <ContactForm
                        endpoint={endpoint}
                        unavailable={props.config == ConfigStatus::Unavailable}
                    />
                    <DirectContact config={props.config.clone()} />
                </div>
            </Container>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <Container>
                <div class="footer-row">
                    <p>{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
                    <nav class="footer-links" aria-label="Footer">{section_links()}</nav>
                </div>
            </Container>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let selection = use_reducer(SelectionState::default);
    let config = use_state(|| ConfigStatus::Loading);

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let next = match fetch_site_config().await {
                    Some(site) => ConfigStatus::Ready(Rc::new(site)),
                    None => {
                        log::warn!("site configuration unavailable, contact form disabled");
                        ConfigStatus::Unavailable
                    }
                };
                config.set(next);
            });
            || ()
        });
    }

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |name: &'static str| {
            log::debug!("skill tile clicked: {name}");
            selection.dispatch(name);
        })
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <main id="content" class="page">
                <AnimatedBackground />
                <NavBar />
                <Hero config={(*config).clone()} selection={*selection} on_select={on_select.clone()} />
                <AboutSection />
                <SkillsSection selection={*selection} on_select={on_select} />
                <ProjectsSection />
                <ContactSection config={(*config).clone()} />
                <Footer />
            </main>
        </>
    }
}

pub fn run() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
