//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::fmt;
use std::rc::Rc;

use catalog_core::catalog::{ComparisonRoute, FetchOrchestrator, MutationCoordinator};
use catalog_core::domain::ModelId;
use catalog_core::{ClientConfig, ClientError, ClientResult, HttpBackend, SessionContext, SharedBackend};
use leptos::prelude::*;
use log::debug;

use crate::storage;

/// Which screen is showing
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Models,
    Detail(ModelId),
    Compare(ComparisonRoute),
    Workspaces,
    Login,
}

impl View {
    /// Read the comparison route from the URL fragment (`#compare?models=3,5`)
    pub fn from_location() -> Option<View> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let query = hash.trim_start_matches('#').strip_prefix("compare")?;
        ComparisonRoute::parse(query).ok().map(View::Compare)
    }

    fn fragment(&self) -> String {
        match self {
            View::Compare(route) => format!("compare?{}", route.to_query()),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Flash {
    Info(String),
    Error(String),
}

/// Non-reactive handles to the catalog core, shared by every action.
#[derive(Clone)]
pub struct Services {
    pub session: Rc<SessionContext>,
    pub backend: SharedBackend,
    pub fetch: Rc<FetchOrchestrator>,
    pub mutations: Rc<MutationCoordinator>,
}

impl Services {
    /// Wire the HTTP backend, restoring a persisted token into the session.
    pub fn connect(config: ClientConfig) -> ClientResult<Self> {
        let session = Rc::new(SessionContext::new());
        if let Some(token) = storage::load_token() {
            debug!("Restored token from storage");
            session.set(token);
        }
        let backend: SharedBackend = Rc::new(HttpBackend::new(config, session.clone())?);
        let fetch = Rc::new(FetchOrchestrator::new(backend.clone()));
        let mutations = Rc::new(MutationCoordinator::new(backend.clone(), fetch.clone()));
        Ok(Self {
            session,
            backend,
            fetch,
            mutations,
        })
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub view: ReadSignal<View>,
    /// Current screen - write
    set_view: WriteSignal<View>,
    /// Banner message - read
    pub flash: ReadSignal<Option<Flash>>,
    /// Banner message - write
    set_flash: WriteSignal<Option<Flash>>,
    /// Trigger to reload models, workspaces and tags - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload models, workspaces and tags - write
    set_reload_trigger: WriteSignal<u32>,
    /// List-level spinner
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
    services: StoredValue<Services, LocalStorage>,
}

impl AppContext {
    pub fn new(services: Services, initial: View) -> Self {
        let (view, set_view) = signal(initial);
        let (flash, set_flash) = signal(None);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (loading, set_loading) = signal(false);
        Self {
            view,
            set_view,
            flash,
            set_flash,
            reload_trigger,
            set_reload_trigger,
            loading,
            set_loading,
            services: StoredValue::new_local(services),
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }

    /// Switch screens, keeping the URL fragment in step
    pub fn navigate(&self, view: View) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&view.fragment());
        }
        self.set_view.set(view);
    }

    /// Trigger a reload of models, workspaces and tags
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn set_loading(&self, loading: bool) {
        self.set_loading.set(loading);
    }

    pub fn flash_info(&self, message: impl Into<String>) {
        self.set_flash.set(Some(Flash::Info(message.into())));
    }

    pub fn flash_error(&self, message: impl fmt::Display) {
        self.set_flash.set(Some(Flash::Error(message.to_string())));
    }

    /// Show a failed operation. A rejected token is left to the session
    /// subscriber, which already sent the user to the login screen.
    pub fn report(&self, error: &ClientError) {
        if !error.is_unauthorized() {
            self.flash_error(error);
        }
    }

    pub fn dismiss_flash(&self) {
        self.set_flash.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
