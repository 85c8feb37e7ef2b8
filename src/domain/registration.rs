//! Startup registration of page template filters.
//!
//! Crates that provide filters describe them in a [`FilterModule`]: one
//! export per filter type, each with a parameterless constructor. At startup
//! the composition root hands its modules to [`register_filters`], which
//! builds one instance per export and appends them to the [`FilterRegistry`].
//!
//! ```
//! use page_template_filters::{FilterModule, FilterRegistry, PageTypeTemplateFilter};
//!
//! #[derive(Default)]
//! struct HomePageTemplateFilter;
//!
//! impl PageTypeTemplateFilter for HomePageTemplateFilter {
//!     fn page_type_class_name(&self) -> &str {
//!         "Sandbox.HomePage"
//!     }
//! }
//!
//! let module = FilterModule::new("sandbox").export::<HomePageTemplateFilter>();
//! let mut registry = FilterRegistry::new();
//! registry.add_page_template_filters(&[module]).unwrap();
//! assert_eq!(registry.len(), 1);
//! ```

use std::fmt::Display;
use std::sync::Arc;

use tracing::{debug, error};

use super::filters::{FilterRegistry, PageTemplateFilter};
use super::FilterError;

type Constructor = Box<dyn Fn() -> Result<Arc<dyn PageTemplateFilter>, String> + Send + Sync>;

/// A filter type exported by a module.
struct FilterExport {
    type_name: String,
    construct: Constructor,
}

/// Named set of filter types to register at startup.
pub struct FilterModule {
    name: String,
    exports: Vec<FilterExport>,
}

impl FilterModule {
    /// Create a module with no exports.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exports: Vec::new(),
        }
    }

    /// Export a filter type built through its `Default` implementation.
    pub fn export<T>(self) -> Self
    where
        T: PageTemplateFilter + Default + 'static,
    {
        self.export_with(std::any::type_name::<T>(), || {
            Ok::<_, std::convert::Infallible>(T::default())
        })
    }

    /// Export a filter type with a fallible constructor.
    ///
    /// A constructor error aborts [`register_filters`].
    pub fn export_with<T, E, F>(mut self, type_name: impl Into<String>, constructor: F) -> Self
    where
        T: PageTemplateFilter + 'static,
        E: Display,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        self.exports.push(FilterExport {
            type_name: type_name.into(),
            construct: Box::new(move || {
                constructor()
                    .map(|filter| Arc::new(filter) as Arc<dyn PageTemplateFilter>)
                    .map_err(|e| e.to_string())
            }),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the exported filter types, in export order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.exports.iter().map(|export| export.type_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

impl std::fmt::Debug for FilterModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterModule")
            .field("name", &self.name)
            .field("exports", &self.type_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Build one instance of every filter exported by `modules` and append them
/// to `registry`, in module order then export order.
///
/// Instances are not deduplicated: registering the same module twice adds
/// its filters twice.
///
/// # Errors
///
/// Returns [`FilterError::Construction`] for the first export whose
/// constructor fails. Nothing from this call is registered in that case.
pub fn register_filters<'a>(
    registry: &'a mut FilterRegistry,
    modules: &[FilterModule],
) -> Result<&'a mut FilterRegistry, FilterError> {
    let mut constructed = Vec::new();

    for module in modules {
        for export in &module.exports {
            let filter = (export.construct)().map_err(|message| {
                error!(
                    "Failed to construct filter {} from module {}: {}",
                    export.type_name, module.name, message
                );
                FilterError::Construction {
                    module: module.name.clone(),
                    type_name: export.type_name.clone(),
                    message,
                }
            })?;
            debug!(
                "Constructed filter {} from module {}",
                export.type_name, module.name
            );
            constructed.push(filter);
        }
    }

    for filter in constructed {
        registry.register(filter);
    }

    Ok(registry)
}

impl FilterRegistry {
    /// Register every filter exported by `modules`.
    ///
    /// See [`register_filters`].
    pub fn add_page_template_filters(
        &mut self,
        modules: &[FilterModule],
    ) -> Result<&mut Self, FilterError> {
        register_filters(self, modules)
    }
}
