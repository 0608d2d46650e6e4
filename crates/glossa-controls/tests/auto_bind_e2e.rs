//! End-to-end auto-binding of a whole view through locale switches.

use std::sync::{Arc, Mutex};

use glossa_catalog::MemoryCatalogSource;
use glossa_controls::widgets::{
    Button, ChoiceBox, ComboBox, ContextMenu, Label, Menu, MenuItem, Tab, TextField, TreeItem,
    TreeView,
};
use glossa_controls::{
    AutoBinder, BinderRegistry, Control, ControlBinder, SkipReason, TooltipHolder, bindable_fields,
};
use glossa_runtime::{TranslationStore, TranslationTable};
use tracing::{Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// Greeting and search
// ═════════════════════════════════════════════════════════════════════════

struct GreetingView {
    greeting: Label,
    search: TextField,
}

bindable_fields! {
    impl Bindable for GreetingView {
        #[ui] greeting,
        #[ui] search,
    }
}

#[test]
fn locale_without_entries_falls_back_to_original_text() {
    let source = MemoryCatalogSource::new()
        .with_table(
            "language",
            TranslationTable::builder("en")
                .entry("greeting", "Hello")
                .entry("search.prompt", "Type here")
                .build(),
        )
        .with_table("language", TranslationTable::builder("eo").entry("other", "x").build());
    let store = TranslationStore::builder(source).default_locale("en").build();
    let view = GreetingView {
        greeting: Label::new("Hi!"),
        search: TextField::new().with_prompt("Search..."),
    };

    let report = AutoBinder::new(store.clone()).auto_bind(&view);
    assert!(report.is_bound("greeting"));
    assert!(report.is_bound("search"));

    store.switch_locale("en").unwrap();
    assert_eq!(view.greeting.text(), "Hello");
    assert_eq!(view.search.prompt(), "Type here");

    store.switch_locale("eo").unwrap();
    assert_eq!(view.greeting.text(), "Hi!");
    assert_eq!(view.search.prompt(), "Search...");
}

// ═════════════════════════════════════════════════════════════════════════
// A full settings view
// ═════════════════════════════════════════════════════════════════════════

struct SettingsView {
    general: Tab,
    file_menu: Menu,
    edit_menu: ContextMenu,
    gender: ChoiceBox<String>,
    color: ComboBox<String>,
    sizes: ChoiceBox<u32>,
    nav: TreeView<String>,
    save: Button,
    cancel: Option<Button>,
    build_info: Label,
}

bindable_fields! {
    impl Bindable for SettingsView {
        #[bind("tab.general")] general,
        #[bind("menu.file")] file_menu,
        #[bind("menu.edit")] edit_menu,
        #[ui] gender,
        #[ui] color,
        #[ui] sizes,
        #[ui] nav,
        #[bind("action.save")] save,
        #[ui] cancel,
        #[ui] #[ignore] build_info,
    }
}

fn settings_view() -> SettingsView {
    SettingsView {
        general: Tab::new("General"),
        file_menu: Menu::new("File")
            .item(MenuItem::new("Open").with_id("open"))
            .item(MenuItem::new("Recent")),
        edit_menu: ContextMenu::new().item(MenuItem::new("Copy").with_id("copy")),
        gender: ChoiceBox::new(strings(&["Male", "Female", "Other"])),
        color: ComboBox::new(strings(&["Red", "Green"])).with_prompt("Color"),
        sizes: ChoiceBox::new(vec![10, 12, 14]),
        nav: TreeView::new(
            TreeItem::new("Settings".to_string())
                .child(TreeItem::new("Display".into()))
                .child(TreeItem::new("Sound".into())),
        ),
        save: Button::new("Save"),
        cancel: None,
        build_info: Label::new("build 42"),
    }
}

fn spanish_store() -> TranslationStore {
    let source = MemoryCatalogSource::new()
        .with_table("language", TranslationTable::builder("en").build())
        .with_table(
            "language",
            TranslationTable::builder("es")
                .entry("tab.general", "General")
                .entry("tab.general.tooltip", "Ajustes generales")
                .entry("menu.file", "Archivo")
                .entry("menu.file.open", "Abrir")
                .entry("menu.edit.copy", "Copiar")
                .entry("gender.0", "Masculino")
                .entry("gender.1", "Femenino")
                .entry("color", "Color favorito")
                .entry("color.0", "Rojo")
                .entry("color.1", "Verde")
                .entry("nav.0", "Ajustes")
                .entry("nav.0.0", "Pantalla")
                .entry("nav.0.1", "Sonido")
                .entry("action.save", "Guardar")
                .entry("build_info", "compilación")
                .build(),
        );
    TranslationStore::builder(source).default_locale("en").build()
}

#[test]
fn every_shape_follows_the_switch() {
    let store = spanish_store();
    let view = settings_view();
    let report = AutoBinder::new(store.clone()).auto_bind(&view);

    let binders: Vec<(&str, &str)> = report.bound.iter().map(|b| (b.field, b.binder)).collect();
    assert_eq!(
        binders,
        vec![
            ("general", "tab"),
            ("file_menu", "menu"),
            ("edit_menu", "menu"),
            ("gender", "indexed-list"),
            ("color", "indexed-list"),
            ("sizes", "indexed-list"),
            ("nav", "tree"),
            ("save", "labeled"),
        ]
    );
    assert_eq!(report.skip_reason("cancel"), Some(SkipReason::Absent));
    assert_eq!(report.skip_reason("build_info"), Some(SkipReason::Ignored));

    store.switch_locale("es").unwrap();

    assert_eq!(
        view.general.tooltip().map(|t| t.text()),
        Some("Ajustes generales".into())
    );
    assert_eq!(view.file_menu.text(), "Archivo");
    let file_items: Vec<String> = view.file_menu.items().iter().map(MenuItem::text).collect();
    assert_eq!(file_items, vec!["Abrir", "Recent"]);
    assert_eq!(view.edit_menu.items()[0].text(), "Copiar");
    assert_eq!(view.gender.items().to_vec(), vec!["Masculino", "Femenino", "Other"]);
    assert_eq!(view.color.prompt(), "Color favorito");
    assert_eq!(view.color.items().to_vec(), vec!["Rojo", "Verde"]);
    assert_eq!(view.sizes.items().to_vec(), vec![10, 12, 14]);
    let root = view.nav.root().unwrap();
    assert_eq!(root.value(), "Ajustes");
    let children: Vec<String> = root.children().iter().map(TreeItem::value).collect();
    assert_eq!(children, vec!["Pantalla", "Sonido"]);
    assert_eq!(view.save.text(), "Guardar");
    assert_eq!(view.build_info.text(), "build 42");
}

#[test]
fn gender_third_element_keeps_stale_text_across_switches() {
    let store = spanish_store();
    let view = settings_view();
    AutoBinder::new(store.clone()).auto_bind(&view);

    for _ in 0..3 {
        store.switch_locale("es").unwrap();
        assert_eq!(view.gender.items().get(2).as_deref(), Some("Other"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Custom binders and runtime controls
// ═════════════════════════════════════════════════════════════════════════

struct UpperCaseButtons;

impl ControlBinder for UpperCaseButtons {
    fn name(&self) -> &'static str {
        "upper-case-buttons"
    }

    fn supports(&self, control: &dyn Control) -> bool {
        control.kind() == "Button"
    }

    fn bind(&self, control: &dyn Control, key: &str, store: &TranslationStore) {
        if let Some(text) = control.as_text() {
            text.text_property().set(store.translate(key, key).to_uppercase());
        }
    }
}

#[test]
fn custom_binder_registered_first_wins() {
    let store = spanish_store();
    store.switch_locale("es").unwrap();
    let mut binder = AutoBinder::new(store);
    binder.registry_mut().register_first(UpperCaseButtons);

    let save = Button::new("Save");
    let label = Label::new("Save");
    assert_eq!(
        binder.auto_bind_field(Some(&save as &dyn Control), "action.save"),
        Ok(Some("upper-case-buttons"))
    );
    assert_eq!(
        binder.auto_bind_field(Some(&label as &dyn Control), "action.save"),
        Ok(Some("labeled"))
    );
    assert_eq!(save.text(), "GUARDAR");
    assert_eq!(label.text(), "Guardar");
}

#[test]
fn custom_binder_registered_last_is_shadowed() {
    let mut registry = BinderRegistry::standard();
    registry.register(UpperCaseButtons);
    let binder = AutoBinder::with_registry(spanish_store(), registry);
    let save = Button::new("Save");
    assert_eq!(
        binder.auto_bind_field(Some(&save as &dyn Control), "action.save"),
        Ok(Some("labeled"))
    );
}

// ═════════════════════════════════════════════════════════════════════════
// Logging
// ═════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    message: String,
}

struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for LogCapture
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        struct MessageVisitor {
            message: Option<String>,
        }
        impl tracing::field::Visit for MessageVisitor {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                if field.name() == "message" {
                    self.message = Some(value.to_owned());
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = Some(format!("{value:?}").trim_matches('"').to_owned());
                }
            }
        }
        let mut visitor = MessageVisitor { message: None };
        event.record(&mut visitor);
        self.events.lock().expect("log capture lock").push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
        });
    }
}

#[test]
fn absent_fields_and_anonymous_menu_items_warn() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(LogCapture {
        events: Arc::clone(&events),
    });
    let _guard = tracing::subscriber::set_default(subscriber);
    tracing::callsite::rebuild_interest_cache();

    let view = settings_view();
    AutoBinder::new(spanish_store()).auto_bind(&view);

    let events = events.lock().expect("log capture lock");
    let warnings: Vec<&str> = events
        .iter()
        .filter(|e| e.level == Level::WARN)
        .map(|e| e.message.as_str())
        .collect();
    assert!(warnings.contains(&"bindable field holds no control, skipping"));
    assert!(warnings.contains(&"menu item without id, skipping"));
}
