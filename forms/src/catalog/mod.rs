//! Every ERP module and the forms behind its tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is the single source for navigation order, page titles, tab
//! strips and form schemas. `server` serves it over JSON, `client` renders it,
//! and `cli` validates against it offline.
//!
//! DESIGN
//! ======
//! One submodule per ERP area returns its [`Module`]. The assembled catalog is
//! built once per process and handed out as `&'static`.

mod assets;
mod contractors;
mod finance;
mod hr;
mod inventory;
mod logistics;
mod maintenance;
mod production;
mod purchase;
mod quality;
mod reports;
mod sales;
mod settings;
mod statutory;

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::schema::FormSchema;


/// Error returned by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown module: {0}")]
    UnknownModule(String),
    #[error("unknown form: {0}")]
    UnknownForm(String),
    #[error("duplicate form id: {0}")]
    DuplicateForm(String),
}

/// Where a module's link sits in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPlacement {
    Main,
    Footer,
}

/// Static card shown instead of forms (the Reports page).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub title: String,
    pub description: String,
    pub body: String,
}

/// One ERP area: a sidebar entry, a page header and its tabs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub slug: String,
    pub nav_label: String,
    /// Page header, e.g. "Sales Management".
    pub title: String,
    pub placement: NavPlacement,
    pub forms: Vec<FormSchema>,
    /// Render every form as its own card instead of a tab strip.
    #[serde(default)]
    pub stacked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Placeholder>,
}

impl Module {
    pub(crate) fn new(slug: &str, nav_label: &str, title: &str) -> Self {
        Self {
            slug: slug.to_owned(),
            nav_label: nav_label.to_owned(),
            title: title.to_owned(),
            placement: NavPlacement::Main,
            forms: Vec::new(),
            stacked: false,
            placeholder: None,
        }
    }

    pub(crate) fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    pub(crate) fn footer(mut self) -> Self {
        self.placement = NavPlacement::Footer;
        self
    }

    pub(crate) fn form(mut self, form: FormSchema) -> Self {
        self.forms.push(form);
        self
    }

    pub(crate) fn placeholder(mut self, title: &str, description: &str, body: &str) -> Self {
        self.placeholder = Some(Placeholder {
            title: title.to_owned(),
            description: description.to_owned(),
            body: body.to_owned(),
        });
        self
    }

    /// Whether the page shows a tab strip.
    #[must_use]
    pub fn is_tabbed(&self) -> bool {
        !self.stacked && self.forms.len() > 1
    }

    /// Form behind `tab`.
    #[must_use]
    pub fn tab(&self, tab: &str) -> Option<&FormSchema> {
        self.forms.iter().find(|form| form.tab == tab)
    }

    /// First tab, selected when a page opens.
    #[must_use]
    pub fn default_tab(&self) -> Option<&str> {
        self.forms.first().map(|form| form.tab.as_str())
    }
}

/// All modules in navigation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    #[must_use]
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// The full application catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            sales::module(),
            purchase::module(),
            production::module(),
            logistics::module(),
            inventory::module(),
            finance::module(),
            hr::module(),
            contractors::module(),
            quality::module(),
            maintenance::module(),
            assets::module(),
            reports::module(),
            statutory::module(),
            settings::module(),
        ])
    }

    /// Check that every form id is unique.
    ///
    /// # Errors
    ///
    /// Returns the first repeated id.
    pub fn verify(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for form in self.forms() {
            if !seen.insert(form.id.as_str()) {
                return Err(CatalogError::DuplicateForm(form.id.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Modules linked from the given sidebar section, in order.
    pub fn nav(&self, placement: NavPlacement) -> impl Iterator<Item = &Module> {
        self.modules.iter().filter(move |module| module.placement == placement)
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownModule`] when no module has `slug`.
    pub fn module(&self, slug: &str) -> Result<&Module, CatalogError> {
        self.modules
            .iter()
            .find(|module| module.slug == slug)
            .ok_or_else(|| CatalogError::UnknownModule(slug.to_owned()))
    }

    /// Look up a form by `module.tab` id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownForm`] when no form has `id`.
    pub fn form(&self, id: &str) -> Result<&FormSchema, CatalogError> {
        self.forms()
            .find(|form| form.id == id)
            .ok_or_else(|| CatalogError::UnknownForm(id.to_owned()))
    }

    /// Every form, in navigation then tab order.
    pub fn forms(&self) -> impl Iterator<Item = &FormSchema> {
        self.modules.iter().flat_map(|module| module.forms.iter())
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Shared, lazily built [`Catalog::standard`].
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::standard)
}
