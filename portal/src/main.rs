//! Drives the settings engine the way the portal frontend would: builds the
//! hub, renders the preferences form, replays a short editing session and
//! prints the resulting store snapshot.

mod registry;

use std::error::Error;

use log::info;
use prefhub::form::{FormEvent, FormModel, WidgetKind};
use prefhub::prelude::init_logger;
use prefhub::runtime::{JsonFileStore, default_store_path};
use prefhub::settings::{RawInput, SettingsHub};

fn main() {
    init_logger();

    if let Err(err) = run() {
        eprintln!("portal settings demo failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let path = default_store_path()
        .ok_or("could not determine a config directory for the store")?;
    let store = JsonFileStore::open(&path)?;
    info!("store: {:?}", path);

    let mut hub = SettingsHub::new(
        registry::PREFIX,
        registry::portal_settings(),
        store,
        registry::translator(),
    )?;

    hub.observe(
        "darkMode.enabled",
        Box::new(|old, new| {
            info!("store change darkMode.enabled: {:?} -> {}", old, new);
        }),
    );

    // the course-grouping options normally arrive from a page scrape
    let generation = hub.registry_mut().begin_select_load("courses.grouping");
    hub.registry_mut().supply_select_options(
        "courses.grouping",
        generation,
        vec!["semester".to_string(), "faculty".to_string()],
    );

    println!("--- preferences form ---");
    print_form(&hub.render_form());

    // a short editing session: enable dark mode (watch the live preview
    // fire), dim images, then save
    hub.apply(FormEvent::Input {
        id: "darkMode.enabled".to_string(),
        value: RawInput::Toggle(true),
    })?;
    hub.apply(FormEvent::Input {
        id: "darkMode.brightness".to_string(),
        value: RawInput::Text("7".to_string()),
    })?;

    let outcome = hub.apply(FormEvent::Save)?;
    info!("saved: {:?}", outcome);

    println!("--- after saving ---");
    print_form(&hub.render_form());

    println!("--- exported snapshot ---");
    println!("{}", hub.export()?);

    Ok(())
}

fn print_form(model: &FormModel) {
    for section in &model.sections {
        let marker = if section.collapsed { ">" } else { "v" };
        let title = if section.title.is_empty() {
            "(general)"
        } else {
            &section.title
        };
        println!("{} {}", marker, title);

        for line in &section.description {
            println!("    {}", line);
        }
        if section.collapsed {
            continue;
        }

        for row in &section.rows {
            let state = if row.widget.disabled { " (disabled)" } else { "" };
            let value = match row.widget.kind {
                WidgetKind::Checkbox => {
                    let checked = row.widget.value == "true";
                    format!("[{}]", if checked { "x" } else { " " })
                }
                WidgetKind::Slider => format!(
                    "{} ({}%)",
                    row.widget.bubble_text, row.widget.bubble_percent
                ),
                WidgetKind::Select => row
                    .widget
                    .options
                    .iter()
                    .find(|o| o.selected)
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| "<unresolved>".to_string()),
                _ => row.widget.value.clone(),
            };
            println!("    {}: {}{}", row.label, value, state);
        }
    }
}
