use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, Window };
use crate::configs::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::storage::{ FallbackStore, LocalStore };
use super::{ BootStep, ColorSchemeSignal, Icon, PageBoot, ThemeSurface };

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

type PageController = ThemeController<FallbackStore<LocalStore>, DocumentSurface, MediaQuerySignal>;

thread_local! {
    static BOOT: PageBoot = PageBoot::new();
}

/// `document.documentElement` plus the two icons, looked up once.
pub struct DocumentSurface {
    root: Element,
    dark_icon: Element,
    light_icon: Element,
    dark_class: String,
    hidden_class: String,
}

impl DocumentSurface {
    pub fn bind(document: &Document, config: &ThemeConfig) -> Result<Self, ThemeError> {
        let root = document.document_element().ok_or(ThemeError::NoRootElement)?;
        Ok(Self {
            root,
            dark_icon: element_by_id(document, &config.dark_icon_id)?,
            light_icon: element_by_id(document, &config.light_icon_id)?,
            dark_class: config.dark_class.clone(),
            hidden_class: config.hidden_class.clone(),
        })
    }
}

impl ThemeSurface for DocumentSurface {
    fn mark_root_dark(&mut self, dark: bool) -> Result<(), ThemeError> {
        let list = self.root.class_list();
        if dark {
            list.add_1(&self.dark_class)?;
        } else {
            list.remove_1(&self.dark_class)?;
        }
        Ok(())
    }

    fn set_icon_visible(&mut self, icon: Icon, visible: bool) -> Result<(), ThemeError> {
        let element = match icon {
            Icon::DarkMode => &self.dark_icon,
            Icon::LightMode => &self.light_icon,
        };
        let list = element.class_list();
        if visible {
            list.remove_1(&self.hidden_class)?;
        } else {
            list.add_1(&self.hidden_class)?;
        }
        Ok(())
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaQuerySignal {
    window: Window,
}

impl MediaQuerySignal {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> Option<bool> {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(list)) => Some(list.matches()),
            Ok(None) => None,
            Err(e) => {
                log::warn!("matchMedia failed: {:?}", e);
                None
            }
        }
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, ThemeError> {
    document.get_element_by_id(id).ok_or_else(|| ThemeError::MissingElement(id.to_string()))
}

/// Initializes the page's theme now, or once `DOMContentLoaded` fires if the
/// document is still loading.
pub fn start(config: ThemeConfig) -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;
    let ready_state = document.ready_state();

    let on_ready = |pending: super::PendingInit| -> Result<(), ThemeError> {
        let handler = Closure::once_into_js(move || pending());
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            handler.unchecked_ref::<js_sys::Function>()
        )?;
        Ok(())
    };
    let step = BOOT.with(|boot| boot.start(&ready_state, on_ready, move || bind_page(config)))?;
    if step == BootStep::Initialized {
        log::debug!("Theme bound during document state {:?}", ready_state);
    }
    Ok(())
}

fn bind_page(config: ThemeConfig) -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;

    // Everything the controller touches must exist before anything is applied
    let toggle = element_by_id(&document, &config.toggle_id)?;
    let surface = DocumentSurface::bind(&document, &config)?;
    let store = FallbackStore::from_result(LocalStore::open());
    if !store.is_durable() {
        log::info!("Theme choice will last only for this page");
    }
    let signal = MediaQuerySignal::new(window);

    let mut controller: PageController = ThemeController::new(store, surface, signal, &config);
    let theme = controller.initialize()?;
    log::info!("Theme initialized to {}", theme);

    let controller = Rc::new(RefCell::new(controller));
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        match controller.borrow_mut().toggle_theme() {
            Ok(theme) => log::debug!("Theme toggled to {}", theme),
            Err(e) => log::error!("Theme toggle failed: {}", e),
        }
    });
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref::<js_sys::Function>())?;
    // The listener lives as long as the page
    on_click.forget();

    Ok(())
}
