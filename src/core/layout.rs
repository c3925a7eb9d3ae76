//! Dashboard widget registry and layout engine.
//!
//! Holds the ordered widget collection in memory and writes the whole
//! collection back to the store after every change. Positions always form
//! the dense sequence `0..N-1`. Write failures are reported but never
//! returned: the in-memory layout stays authoritative for the session.

use crate::errors::{AppError, AppResult};
use crate::models::widget::{WidgetDescriptor, WidgetPatch, default_widgets};
use crate::storage::keys;
use crate::storage::kv::{KvStore, read_json, save_json};
use crate::ui::messages::warning;
use std::collections::HashSet;

pub struct WidgetLayout<'a> {
    store: &'a mut dyn KvStore,
    widgets: Vec<WidgetDescriptor>,
}

/// Check the invariants of a stored collection.
pub fn validate_widgets(widgets: &[WidgetDescriptor]) -> Result<(), String> {
    if widgets.is_empty() {
        return Err("empty widget collection".into());
    }

    let mut ids = HashSet::new();
    for w in widgets {
        if !ids.insert(w.id.as_str()) {
            return Err(format!("duplicate widget id '{}'", w.id));
        }
        if let Some(cfg) = &w.config
            && cfg.widget_type() != w.kind
        {
            return Err(format!(
                "widget '{}' of type {} has a {} config",
                w.id,
                w.kind,
                cfg.widget_type()
            ));
        }
    }

    let mut positions: Vec<u32> = widgets.iter().map(|w| w.position).collect();
    positions.sort_unstable();
    if positions.iter().enumerate().any(|(i, p)| *p != i as u32) {
        return Err("widget positions are not a dense 0..N-1 sequence".into());
    }

    Ok(())
}

impl<'a> WidgetLayout<'a> {
    /// Load the persisted layout, or seed and persist the defaults when the
    /// stored collection is missing or invalid.
    pub fn initialize(store: &'a mut dyn KvStore) -> Self {
        let loaded = match read_json::<_, Vec<WidgetDescriptor>>(&*store, keys::WIDGETS) {
            Ok(Some(widgets)) => match validate_widgets(&widgets) {
                Ok(()) => Some(widgets),
                Err(reason) => {
                    warning(format!("Stored widget layout is invalid ({reason}), using defaults"));
                    store.audit("widget", "reset", &format!("invalid stored layout: {reason}"));
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warning(format!("Stored widget layout is unreadable ({e}), using defaults"));
                store.audit("widget", "reset", &format!("unreadable stored layout: {e}"));
                None
            }
        };

        match loaded {
            Some(mut widgets) => {
                widgets.sort_by_key(|w| w.position);
                Self { store, widgets }
            }
            None => {
                let mut layout = Self {
                    store,
                    widgets: default_widgets(),
                };
                layout.persist();
                layout
            }
        }
    }

    /// All widgets by ascending position.
    pub fn list_all(&self) -> Vec<WidgetDescriptor> {
        self.widgets.clone()
    }

    /// Enabled widgets by ascending position.
    pub fn list_enabled(&self) -> Vec<WidgetDescriptor> {
        self.widgets.iter().filter(|w| w.enabled).cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&WidgetDescriptor> {
        self.widgets.iter().find(|w| w.id == id)
    }

    fn index_of(&self, id: &str) -> AppResult<usize> {
        self.widgets
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| AppError::WidgetNotFound(id.to_string()))
    }

    pub fn update_widget(&mut self, id: &str, patch: WidgetPatch) -> AppResult<()> {
        let idx = self.index_of(id)?;

        if let Some(cfg) = &patch.config
            && cfg.widget_type() != self.widgets[idx].kind
        {
            return Err(AppError::InvalidWidgetConfig(format!(
                "{} config cannot be applied to {} widget '{}'",
                cfg.widget_type(),
                self.widgets[idx].kind,
                id
            )));
        }

        let w = &mut self.widgets[idx];
        if let Some(title) = patch.title {
            w.title = title;
        }
        if let Some(enabled) = patch.enabled {
            w.enabled = enabled;
        }
        if let Some(size) = patch.size {
            w.size = size;
        }
        if let Some(cfg) = patch.config {
            w.config = Some(cfg);
        }

        self.persist();
        self.store.audit("widget", id, "updated");
        Ok(())
    }

    /// Flip `enabled`. Returns the new state.
    pub fn toggle_widget(&mut self, id: &str) -> AppResult<bool> {
        let idx = self.index_of(id)?;
        let enabled = !self.widgets[idx].enabled;
        self.widgets[idx].enabled = enabled;

        self.persist();
        self.store.audit(
            "widget",
            id,
            if enabled { "enabled" } else { "disabled" },
        );
        Ok(enabled)
    }

    /// Move `id` to `new_position`, shifting the widgets in between by one
    /// slot. Out-of-range positions are rejected and leave the layout as is.
    pub fn reorder_widget(&mut self, id: &str, new_position: u32) -> AppResult<()> {
        let idx = self.index_of(id)?;
        let max = (self.widgets.len() - 1) as u32;
        if new_position > max {
            return Err(AppError::InvalidPosition {
                position: new_position,
                max,
            });
        }

        let old_position = self.widgets[idx].position;
        if old_position == new_position {
            return Ok(());
        }

        for w in self.widgets.iter_mut() {
            if w.id == id {
                w.position = new_position;
            } else if new_position < old_position
                && w.position >= new_position
                && w.position < old_position
            {
                w.position += 1;
            } else if new_position > old_position
                && w.position > old_position
                && w.position <= new_position
            {
                w.position -= 1;
            }
        }
        self.widgets.sort_by_key(|w| w.position);

        self.persist();
        self.store.audit(
            "widget",
            id,
            &format!("moved {} → {}", old_position, new_position),
        );
        Ok(())
    }

    /// Discard every customization.
    pub fn reset_to_defaults(&mut self) {
        self.widgets = default_widgets();
        self.persist();
        self.store.audit("widget", "reset", "restored default layout");
    }

    fn persist(&mut self) -> bool {
        save_json(&mut *self.store, keys::WIDGETS, &self.widgets)
    }
}
