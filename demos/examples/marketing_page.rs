// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted visit to a marketing page, driving every controller.
//!
//! The page has a URL cleaner that runs first, a hero slider, three card
//! strips (faculty, testimonials, videos), a FAQ accordion, a collapsible
//! menu, scroll reveals, and a sticky navbar. Nothing is rendered; each step
//! prints what a host would write to the document.
//!
//! The video strip's configuration can be overridden from a TOML file:
//!
//! - `cargo run -p understory_demos --example marketing_page`
//! - `cargo run -p understory_demos --example marketing_page -- videos.toml`
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the controllers' own events.

use anyhow::Context as _;
use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_carousel::{
    Carousel, CarouselConfig, CarouselGroup, Changes, HeroSlider, Key, KeyInput, Measurements,
};
use understory_disclosure::{Accordion, Menu, on_anchor_click};
use understory_event_state::timer::RESIZE_DEBOUNCE_MS;
use understory_reveal::{Elevation, Entrance, RevealTracker, Role, VISIBLE_CLASS};
use understory_url_clean::{CleanOptions, clean_href};

/// Video strip override used when no file is given: a breakpoint at 900px and
/// wrapping navigation.
const VIDEOS_OVERRIDE: &str = r#"
gap = 20.0
wrap_around = true

[breakpoints]
widest = 3
tiers = [
  { max_width = 480.0, per_view = 1 },
  { max_width = 900.0, per_view = 2 },
]
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Strip {
    Faculty,
    Testimonials,
    Videos,
}

fn measure(strip: Strip, viewport_width: f64) -> Measurements {
    let container_width = (viewport_width - 64.0).min(1200.0);
    let columns = match strip {
        Strip::Videos if viewport_width <= 900.0 => 2.0,
        Strip::Videos => 3.0,
        _ if viewport_width <= 480.0 => 1.0,
        _ if viewport_width <= 768.0 => 2.0,
        _ if viewport_width <= 1024.0 => 3.0,
        _ => 4.0,
    };
    let card_width = if viewport_width <= 480.0 {
        container_width * 0.85
    } else {
        (container_width - 24.0 * (columns - 1.0)) / columns
    };
    Measurements {
        viewport_width,
        container_width,
        card_width,
    }
}

fn report(label: &str, strip: Strip, carousel: &Carousel, changes: Changes) {
    if changes.is_empty() {
        println!("  {label}: {strip:?} unchanged");
        return;
    }
    let nav = carousel.nav();
    println!(
        "  {label}: {strip:?} index={} translateX({:.1}px) prev_disabled={} next_disabled={} dots={}{} active_dot={} [{changes:?}]",
        carousel.index(),
        carousel.offset(),
        nav.prev_disabled,
        nav.next_disabled,
        nav.dot_count,
        if changes.contains(Changes::DOTS_REBUILT) {
            " (rebuilt)"
        } else {
            ""
        },
        nav.active_dot,
    );
}

fn load_videos_config() -> anyhow::Result<CarouselConfig> {
    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading video strip config from {path}"))?,
        None => VIDEOS_OVERRIDE.to_owned(),
    };
    let config = toml::from_str(&source).context("parsing video strip config")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("== Location ==");
    let options = CleanOptions::default();
    for href in [
        "https://acad.example/",
        "https://acad.example/live/zstream?liveClassId=88&mode=student",
        "https://acad.example/watch#eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9",
        "https://acad.example/bad%",
    ] {
        match clean_href(href, &options) {
            Some(to) => println!("  {href} -> location.replace({to})"),
            None => println!("  {href} kept"),
        }
    }

    let videos_config = load_videos_config()?;
    tracing::info!(?videos_config, "loaded video strip config");

    let mut now = 0_u64;
    let mut viewport_width = 1280.0;

    println!("\n== Hero ==");
    let mut hero = HeroSlider::new(3, now);
    for t in [4_000, 5_000, 10_000, 15_000] {
        if hero.tick(t) {
            println!("  t={t}ms autoplay -> slide {:?}", hero.current());
        }
    }
    now = 15_500;
    hero.on_pointer_enter();
    hero.on_pointer_down(Point::new(900.0, 300.0));
    hero.on_pointer_move(Point::new(700.0, 310.0));
    if hero.on_pointer_up(Point::new(600.0, 310.0), now) {
        println!("  swipe -> slide {:?}", hero.current());
    }
    hero.on_pointer_leave(now);
    println!(
        "  dots: {:?}",
        (0..hero.len()).map(|i| hero.is_active(i)).collect::<Vec<_>>()
    );

    println!("\n== Strips @ {viewport_width}px ==");
    let mut strips = CarouselGroup::new();
    strips.insert(
        Strip::Faculty,
        Carousel::new(
            9,
            CarouselConfig::faculty(),
            measure(Strip::Faculty, viewport_width),
        ),
    );
    strips.insert(
        Strip::Testimonials,
        Carousel::new(
            6,
            CarouselConfig::testimonials(),
            measure(Strip::Testimonials, viewport_width),
        ),
    );
    strips.insert(
        Strip::Videos,
        Carousel::new(5, videos_config, measure(Strip::Videos, viewport_width)),
    );
    for (strip, carousel) in strips.iter() {
        report("initial", *strip, carousel, Changes::all());
    }

    for (key, tag) in [
        ("ArrowRight", "BODY"),
        ("ArrowRight", "BODY"),
        ("ArrowRight", "INPUT"),
    ] {
        let input = KeyInput::from_dom(key, tag);
        for (strip, changes) in strips.on_key(input) {
            if let Some(carousel) = strips.get(&strip) {
                report(&format!("{key} in {tag}"), strip, carousel, changes);
            }
        }
    }

    if let Some(faculty) = strips.get_mut(&Strip::Faculty) {
        let changes = faculty.select_dot(2);
        report("dot 2", Strip::Faculty, faculty, changes);
        faculty.on_pointer_down(Point::new(200.0, 40.0));
        faculty.on_pointer_move(Point::new(230.0, 40.0));
        let changes = faculty.on_pointer_up(Point::new(320.0, 42.0));
        report("drag right", Strip::Faculty, faculty, changes);
    }

    if let Some(videos) = strips.get_mut(&Strip::Videos) {
        let changes = videos.next();
        report("next", Strip::Videos, videos, changes);
        let changes = videos.next();
        report("next (wraps)", Strip::Videos, videos, changes);
    }

    println!("\n== Resize to phone ==");
    for step in 0..5 {
        now += 40;
        viewport_width = 1280.0 - f64::from(step) * 225.0;
        strips.on_resize(now);
    }
    let settle = now + RESIZE_DEBOUNCE_MS;
    let width = viewport_width;
    for (strip, changes) in strips.poll_resize(settle, |strip| measure(*strip, width)) {
        if let Some(carousel) = strips.get(&strip) {
            report(&format!("{width}px"), strip, carousel, changes);
        }
    }

    println!("\n== Menu and FAQ ==");
    let mut menu = Menu::new(2);
    menu.toggle();
    println!(
        "  menu open={} lines={:?}",
        menu.is_open(),
        menu.hamburger_lines().map(|l| l.opacity)
    );
    if menu.on_dropdown_click(1, viewport_width) {
        println!("  dropdown 1 open={} (navigation suppressed)", menu.is_dropdown_open(1));
    }
    if menu.on_document_click(false, false) {
        println!("  outside click closed the menu");
    }

    for href in ["#faq", "#", "#pricing"] {
        match on_anchor_click(href, |id| matches!(id, "courses" | "faq")) {
            Some(id) => println!("  {href}: preventDefault, scroll #{id} to top"),
            None => println!("  {href}: default navigation"),
        }
    }

    let mut faq = Accordion::new(8);
    faq.toggle(0);
    faq.toggle(5);
    faq.toggle_show_more();
    println!(
        "  faq open={:?} button=\"{}\"",
        faq.open_item(),
        faq.show_more_label()
    );

    println!("\n== Scroll ==");
    let roles: Vec<Role> = [Role::Section, Role::SectionTitle]
        .into_iter()
        .chain((0..6).map(Role::OfferCard))
        .chain([Role::TrustText, Role::TrustIllustration])
        .collect();
    let mut reveals = RevealTracker::default();
    for (i, role) in roles.iter().enumerate() {
        let classes: Vec<_> = Entrance::for_role(*role).class_names().collect();
        println!("  #{i} {role:?}: {}", classes.join(" "));
        reveals.observe(i);
    }
    let top_of = |i: usize| -> f64 {
        match roles[i] {
            Role::Section => 900.0,
            Role::SectionTitle => 940.0,
            Role::OfferCard(n) => 1_020.0 + (n / 3) as f64 * 360.0,
            _ => 2_200.0,
        }
    };

    for scroll_y in [0.0, 40.0, 400.0, 900.0, 1_800.0] {
        let viewport = Rect::new(0.0, scroll_y, viewport_width, scroll_y + 740.0);
        let shown = reveals.update(viewport, |i| {
            let top = top_of(*i);
            Some(Rect::new(0.0, top, viewport_width, top + 320.0))
        });
        let elevation = Elevation::for_scroll(scroll_y);
        println!(
            "  scrollY={scroll_y}: +{VISIBLE_CLASS} {shown:?}, navbar box-shadow: {}",
            elevation.shadow()
        );
    }
    println!("  still hidden: {}", reveals.pending());

    Ok(())
}
